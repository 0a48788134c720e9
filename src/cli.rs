use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then swiss_tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Recreate the tournament schema, dropping all players and matches
    Init,
    /// Register a player
    Register {
        /// Player name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Show players ranked by wins
    Standings,
    /// Show pairings for the next round
    Pairings,
    /// Show the number of registered players
    Count,
    /// List registered players
    Players,
    /// List recorded matches
    Matches,
    /// Remove all match records
    ClearMatches,
    /// Remove all player records
    ClearPlayers,
    /// Start the HTTP API server
    Serve {
        /// Port number (defaults to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
