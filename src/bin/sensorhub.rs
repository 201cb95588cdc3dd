//! Sensor reading socket server.
//!
//! Loads configuration from the environment (and an optional `.env` file),
//! connects the selected store, and serves the socket gateway until Ctrl+C.
//!
//! ```text
//! DATABASE_URL=postgres://localhost/sensors sensorhub
//! SENSORHUB_STORE=memory SENSORHUB_PORT=9000 sensorhub
//! ```

use mockable::DefaultClock;
use sensorhub::config::{AppConfig, ConfigError, DATABASE_URL_VAR, StoreBackend};
use sensorhub::gateway::{self, GatewayState, SensorGateway};
use sensorhub::reading::{
    adapters::{memory::InMemoryReadingRepository, postgres::PostgresReadingRepository},
    ports::ReadingRepository,
    services::ReadingStore,
    validation::DefaultReadingValidator,
};
use sensorhub::telemetry;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let dotenv = dotenvy::dotenv();
    telemetry::init_tracing();
    match dotenv {
        Err(err) if !err.not_found() => warn!(error = %err, "failed to load .env file"),
        _ => {}
    }

    let config = AppConfig::from_env()?;
    info!(
        addr = %config.server.socket_addr(),
        store = %config.store,
        announce_connections = config.server.announce_connections,
        "configuration loaded"
    );

    let repository = connect_repository(&config).await?;
    let sensor_gateway = SensorGateway::new(
        Arc::new(DefaultReadingValidator::new()),
        ReadingStore::new(repository, Arc::new(DefaultClock)),
    );
    let state = GatewayState::new(Arc::new(sensor_gateway), config.server.announce_connections);
    info!("sensor gateway initialised");

    let listener = gateway::bind(config.server.socket_addr()).await?;
    gateway::serve(listener, state, shutdown_signal()).await?;

    info!("sensor gateway stopped");
    Ok(())
}

async fn connect_repository(
    config: &AppConfig,
) -> Result<Arc<dyn ReadingRepository>, Box<dyn Error + Send + Sync>> {
    match (config.store, config.database.clone()) {
        (StoreBackend::Memory, _) => {
            warn!("using in-memory store; readings are lost on exit");
            Ok(Arc::new(InMemoryReadingRepository::new()))
        }
        (StoreBackend::Postgres, Some(database)) => {
            let repository = tokio::task::spawn_blocking(move || {
                PostgresReadingRepository::connect(&database.url, database.max_connections)
            })
            .await??;
            repository.ensure_schema().await?;
            info!("connected to PostgreSQL reading store");
            Ok(Arc::new(repository))
        }
        (StoreBackend::Postgres, None) => Err(ConfigError::Missing {
            name: DATABASE_URL_VAR,
            backend: StoreBackend::Postgres,
        }
        .into()),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl+C; shutting down");
        return;
    }
    info!("shutdown requested");
}
