//! Serve command handler
//!
//! Either validates the configuration and exits, or runs the HTTP server
//! until shutdown.

use crate::config::{Environment, Settings};
use crate::error::AppResult;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Run the server, or only validate when `dry_run` is set.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Migration, pool, bind or server errors when not a dry run
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            self.validate_only()?;
            return Ok(());
        }

        Server::new(self.config, self.environment).run().await
    }

    /// Validate configuration without touching the database or the network
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid ({})", self.environment);
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Database pool: {}..{} connections, auto_migrate = {}",
            self.config.database.min_connections,
            self.config.database.max_connections,
            self.config.database.auto_migrate
        );
        println!("✓ Log level: {}", self.config.logger.level);
        println!("Dry run completed successfully");

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
