use anyhow::Result;
use log::info;

use crate::config::settings::DatabaseSettings;
use crate::database::{
    self, matches, players, setup, standings, with_transaction, DbPool, Match, Player,
    RankedPlayer, Standing,
};
use crate::errors::TournamentError;
use crate::pairing::{compute_swiss_pairings, Pairing};

/// Tournament operations, each run as its own transaction.
#[derive(Clone)]
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database file, creating missing tables and views.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = database::create_pool(&settings.path, settings.pool_size)?;
        let service = Self::new(pool);
        service.ensure_schema()?;
        Ok(service)
    }

    /// A fresh tournament in a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let service = Self::new(database::create_memory_pool()?);
        service.ensure_schema()?;
        Ok(service)
    }

    pub fn ensure_schema(&self) -> Result<()> {
        with_transaction(&self.pool, setup::ensure_schema)
    }

    /// Drop all players and matches by recreating the schema.
    pub fn reset(&self) -> Result<()> {
        with_transaction(&self.pool, setup::reset_database)
    }

    pub fn delete_matches(&self) -> Result<()> {
        let removed = with_transaction(&self.pool, matches::delete_all)?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Fails while matches still reference players; clear matches first.
    pub fn delete_players(&self) -> Result<()> {
        let removed = with_transaction(&self.pool, players::delete_all)?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> Result<i64> {
        with_transaction(&self.pool, players::count_all)
    }

    pub fn count_matches(&self) -> Result<i64> {
        with_transaction(&self.pool, matches::count_all)
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let player = with_transaction(&self.pool, |conn| players::insert_player(conn, name))?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        with_transaction(&self.pool, players::list_all)
    }

    /// Standings with the best record first.
    pub fn player_standings(&self) -> Result<Vec<Standing>> {
        with_transaction(&self.pool, standings::list_standings)
    }

    /// Players in the order the next round is paired.
    pub fn ranked_players(&self) -> Result<Vec<RankedPlayer>> {
        with_transaction(&self.pool, standings::list_ranked_players)
    }

    pub fn report_match(&self, winner_id: i32, loser_id: i32) -> Result<Match> {
        if winner_id == loser_id {
            return Err(TournamentError::SelfMatch(winner_id).into());
        }

        let recorded = with_transaction(&self.pool, |conn| {
            matches::insert_match(conn, winner_id, loser_id)
        })?;
        info!("Recorded match {}: {} beat {}", recorded.id, winner_id, loser_id);
        Ok(recorded)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        with_transaction(&self.pool, matches::list_all)
    }

    /// Next-round pairings from the current standings.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        with_transaction(&self.pool, |conn| {
            let ranking = standings::list_ranked_players(conn)?;
            Ok(compute_swiss_pairings(&ranking))
        })
    }
}
