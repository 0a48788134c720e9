use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::create_router;
use crate::api::handlers::AppState;
use crate::services::TournamentService;

pub struct ServerService {
    port: u16,
    tournament: TournamentService,
}

impl ServerService {
    pub fn new(port: u16, tournament: TournamentService) -> Self {
        Self { port, tournament }
    }

    pub async fn run(self) -> Result<()> {
        let state = Arc::new(AppState {
            tournament: self.tournament,
        });

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
