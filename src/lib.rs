pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod services;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::{ServerService, TournamentService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn open_tournament(config: &AppConfig) -> Result<TournamentService> {
    TournamentService::open(&config.database)
}

pub fn handle_init(tournament: &TournamentService) -> Result<()> {
    tournament.reset()?;
    println!("Tournament database initialised");
    Ok(())
}

pub fn handle_register(tournament: &TournamentService, name: &str) -> Result<()> {
    let player = tournament.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(tournament: &TournamentService, winner: i32, loser: i32) -> Result<()> {
    let recorded = tournament.report_match(winner, loser)?;
    println!("Recorded match {}: {} beat {}", recorded.id, winner, loser);
    Ok(())
}

pub fn handle_standings(tournament: &TournamentService) -> Result<()> {
    let standings = tournament.player_standings()?;
    println!("{}", output::standings_table(&standings));
    Ok(())
}

pub fn handle_pairings(tournament: &TournamentService) -> Result<()> {
    let ranking = tournament.ranked_players()?;
    println!("{}", output::round_table(&ranking));
    Ok(())
}

pub fn handle_count(tournament: &TournamentService) -> Result<()> {
    println!("{}", tournament.count_players()?);
    Ok(())
}

pub fn handle_players(tournament: &TournamentService) -> Result<()> {
    let players = tournament.list_players()?;
    println!("{}", output::players_table(&players));
    Ok(())
}

pub fn handle_matches(tournament: &TournamentService) -> Result<()> {
    let matches = tournament.list_matches()?;
    println!("{}", output::matches_table(&matches));
    Ok(())
}

pub fn handle_clear_matches(tournament: &TournamentService) -> Result<()> {
    tournament.delete_matches()
}

pub fn handle_clear_players(tournament: &TournamentService) -> Result<()> {
    tournament.delete_players()
}

pub fn handle_serve(tournament: TournamentService, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, tournament);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
