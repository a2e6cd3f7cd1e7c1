//! Process-level serve loop: optional migrations, pool, router, listener.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::Environment;
use crate::config::settings::Settings;
use crate::db::{establish_async_connection_pool, run_pending_migrations};
use crate::state::AppState;

/// Owns the settings for one `serve` run.
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Serves until Ctrl+C or SIGTERM.
    ///
    /// Fails before accepting traffic if migrations, the pool or the bind
    /// fail; the caller turns that into a non-zero exit.
    pub async fn run(self) -> anyhow::Result<()> {
        self.log_startup();

        let database = &self.settings.database;
        if database.auto_migrate {
            let applied = run_pending_migrations(&database.url).await?;
            tracing::info!(applied = applied.len(), "Migrations applied");
        }

        let pool = establish_async_connection_pool(database).await?;
        tracing::info!(
            max_connections = database.max_connections,
            "Connection pool ready"
        );
        let router = create_router(AppState::new(pool));

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Cannot bind listener");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;
        tracing::info!(address = %address, "Listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Stopped");
        Ok(())
    }

    fn log_startup(&self) {
        let Settings {
            application,
            server,
            database,
            ..
        } = &self.settings;

        tracing::info!(
            name = %application.name,
            version = %application.version,
            environment = %self.environment,
            host = %server.host,
            port = server.port,
            "Starting bookshelf"
        );
        // The URL is left out since it may carry credentials
        tracing::info!(
            min_connections = database.min_connections,
            max_connections = database.max_connections,
            connection_timeout = database.connection_timeout,
            auto_migrate = database.auto_migrate,
            "Database settings"
        );
    }
}

/// Resolves on the first of Ctrl+C or, on unix, SIGTERM. A handler that
/// cannot be installed never resolves, leaving the other one in charge.
async fn shutdown_signal() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                tracing::error!(error = %e, "Ctrl+C handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "Shutting down gracefully");
}
