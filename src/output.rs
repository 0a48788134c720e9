use colored::Colorize;

use crate::database::{Match, Player, RankedPlayer, Standing};
use crate::pairing::{compute_swiss_pairings, unpaired_player, Pairing};

pub fn standings_table(standings: &[Standing]) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:>5}  {:<24} {:>5} {:>7}",
        "Rank", "Id", "Name", "Wins", "Matches"
    )
    .bold()
    .to_string()];

    for (idx, standing) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>5}  {:<24} {:>5} {:>7}",
            idx + 1,
            standing.id,
            standing.name,
            standing.wins,
            standing.matches
        );
        lines.push(if idx == 0 && standing.wins > 0 {
            line.green().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

pub fn pairings_table(pairings: &[Pairing], unpaired: Option<&str>) -> String {
    let mut lines: Vec<String> = pairings
        .iter()
        .enumerate()
        .map(|(idx, pairing)| {
            format!(
                "{:>3}. {} ({}) {} {} ({})",
                idx + 1,
                pairing.name1,
                pairing.id1,
                "vs".dimmed(),
                pairing.name2,
                pairing.id2
            )
        })
        .collect();

    if let Some(name) = unpaired {
        lines.push(format!("{} {} sits out this round", "note:".yellow(), name));
    }

    lines.join("\n")
}

/// Next-round pairings and the player left out, both from one ranking.
pub fn round_table(ranking: &[RankedPlayer]) -> String {
    let pairings = compute_swiss_pairings(ranking);
    let sitting_out = unpaired_player(ranking).map(|player| player.name.as_str());
    pairings_table(&pairings, sitting_out)
}

pub fn players_table(players: &[Player]) -> String {
    players
        .iter()
        .map(|player| format!("{:>5}  {}", player.id, player.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn matches_table(matches: &[Match]) -> String {
    matches
        .iter()
        .map(|m| {
            let played = m
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            format!("{:>5}  {} beat {}  {}", m.id, m.winner_id, m.loser_id, played.dimmed())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
