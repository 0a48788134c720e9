use log::warn;

use super::types::Pairing;
use crate::database::models::RankedPlayer;

/// Pair each player with the next one in the ranking.
///
/// `ranking` is expected in standings order (most wins first), so adjacent
/// entries have equal or nearly equal records. Element `2k` meets element
/// `2k + 1`. An odd-length ranking leaves its last player out of the round:
/// no bye is assigned and nothing is recorded for them.
pub fn compute_swiss_pairings(ranking: &[RankedPlayer]) -> Vec<Pairing> {
    if let Some(left_out) = unpaired_player(ranking) {
        warn!(
            "Odd number of ranked players ({}); player {} ({}) is not paired this round",
            ranking.len(),
            left_out.id,
            left_out.name
        );
    }

    ranking
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect()
}

/// The player dropped from the round when the ranking has odd length.
pub fn unpaired_player(ranking: &[RankedPlayer]) -> Option<&RankedPlayer> {
    ranking.chunks_exact(2).remainder().first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(names: &[&str]) -> Vec<RankedPlayer> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| RankedPlayer::new(idx as i32 + 1, *name))
            .collect()
    }

    fn pairing(id1: i32, name1: &str, id2: i32, name2: &str) -> Pairing {
        Pairing {
            id1,
            name1: name1.to_string(),
            id2,
            name2: name2.to_string(),
        }
    }

    #[test]
    fn test_empty_ranking() {
        assert!(compute_swiss_pairings(&[]).is_empty());
        assert!(unpaired_player(&[]).is_none());
    }

    #[test]
    fn test_single_pair() {
        let pairs = compute_swiss_pairings(&ranking(&["A", "B"]));

        assert_eq!(pairs, vec![pairing(1, "A", 2, "B")]);
    }

    #[test]
    fn test_adjacent_players_meet() {
        let pairs = compute_swiss_pairings(&ranking(&["A", "B", "C", "D"]));

        assert_eq!(
            pairs,
            vec![pairing(1, "A", 2, "B"), pairing(3, "C", 4, "D")]
        );
    }

    #[test]
    fn test_pairs_flatten_back_to_ranking() {
        for size in (0..=16).step_by(2) {
            let names: Vec<String> = (0..size).map(|i| format!("Player {i}")).collect();
            let input = ranking(&names.iter().map(String::as_str).collect::<Vec<_>>());

            let pairs = compute_swiss_pairings(&input);
            let flattened: Vec<RankedPlayer> = pairs.iter().flat_map(Pairing::players).collect();

            assert_eq!(pairs.len(), size / 2);
            assert_eq!(flattened, input);
        }
    }

    #[test]
    fn test_pairing_follows_given_order() {
        let input = vec![
            RankedPlayer::new(7, "Seven"),
            RankedPlayer::new(3, "Three"),
            RankedPlayer::new(9, "Nine"),
            RankedPlayer::new(1, "One"),
        ];

        let pairs = compute_swiss_pairings(&input);

        assert_eq!(
            pairs,
            vec![pairing(7, "Seven", 3, "Three"), pairing(9, "Nine", 1, "One")]
        );
    }

    #[test]
    fn test_odd_ranking_drops_last_player() {
        let input = ranking(&["A", "B", "C"]);

        let pairs = compute_swiss_pairings(&input);

        assert_eq!(pairs, vec![pairing(1, "A", 2, "B")]);
        assert_eq!(unpaired_player(&input), Some(&RankedPlayer::new(3, "C")));
    }

    #[test]
    fn test_input_untouched() {
        let input = ranking(&["A", "B", "C", "D"]);
        let before = input.clone();

        let _ = compute_swiss_pairings(&input);

        assert_eq!(input, before);
    }
}
