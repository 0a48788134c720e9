use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::config::AppConfig;
use swiss_tournament::{
    handle_clear_matches, handle_clear_players, handle_completions, handle_count, handle_init,
    handle_matches, handle_pairings, handle_players, handle_register, handle_report, handle_serve,
    handle_standings, interpret, open_tournament,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    match cli.command {
        Command::Completions { shell } => handle_completions(shell),
        command => {
            let config = AppConfig::new().with_database_path(cli.database);
            execute_command(command, &config)
        }
    }
}

fn execute_command(command: Command, config: &AppConfig) -> Result<()> {
    let tournament = open_tournament(config)?;

    match command {
        Command::Init => handle_init(&tournament),
        Command::Register { name } => handle_register(&tournament, &name),
        Command::Report { winner, loser } => handle_report(&tournament, winner, loser),
        Command::Standings => handle_standings(&tournament),
        Command::Pairings => handle_pairings(&tournament),
        Command::Count => handle_count(&tournament),
        Command::Players => handle_players(&tournament),
        Command::Matches => handle_matches(&tournament),
        Command::ClearMatches => handle_clear_matches(&tournament),
        Command::ClearPlayers => handle_clear_players(&tournament),
        Command::Serve { port } => handle_serve(tournament, port.unwrap_or(config.server.port)),
        Command::Completions { shell } => handle_completions(shell),
    }
}
