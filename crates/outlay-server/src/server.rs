use tokio::net::TcpListener;

use outlay_store::LedgerStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Outlay HTTP server.
pub struct OutlayServer {
    config: ServerConfig,
}

impl OutlayServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router, creating the ledger file if this is the first run.
    pub fn router(&self) -> ServerResult<axum::Router> {
        let store = LedgerStore::new(self.config.ledger_path.clone());
        store.initialize()?;
        Ok(build_router(store))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("outlay server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = OutlayServer::new(ServerConfig::default());
        assert_eq!(
            server.config().bind_addr,
            "127.0.0.1:8080".parse().unwrap()
        );
    }

    #[test]
    fn router_initializes_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            ledger_path: dir.path().join("expenses.csv"),
            ..ServerConfig::default()
        };
        let server = OutlayServer::new(config);
        let _router = server.router().unwrap();
        assert!(dir.path().join("expenses.csv").exists());
    }
}
