//! Migrate command handler
//!
//! Applies, previews or reverts the embedded schema migrations.

use crate::config::Settings;
use crate::db::{count_pending_migrations, revert_migrations, run_pending_migrations};
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command
    ///
    /// # Arguments
    /// * `dry_run` - Only report how many migrations are pending
    /// * `rollback` - Revert this many of the most recent migrations
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Database connection or migration errors
    /// - `Validation` on `rollback_steps` when fewer migrations are applied
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let url = &self.config.database.url;

        if dry_run {
            println!("Checking for pending migrations...");
            match count_pending_migrations(url).await? {
                0 => println!("✓ No pending migrations found - database is up to date"),
                pending => {
                    println!("Found {} pending migration(s)", pending);
                    println!("Run without --dry-run to apply them");
                }
            }
            return Ok(());
        }

        if let Some(steps) = rollback {
            println!("Rolling back {} migration(s)...", steps);
            let reverted = revert_migrations(url, steps).await?;
            tracing::info!(reverted, "Migrations reverted");
            println!("✓ Rolled back {} migration(s)", reverted);
            return Ok(());
        }

        println!("Running database migrations...");
        let applied = run_pending_migrations(url).await?;
        tracing::info!(applied = applied.len(), "Migrations applied");
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for migration in &applied {
                println!("  - {}", migration);
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/books".to_string();
        config
    }

    #[test]
    fn test_migrate_handler_new() {
        let config = create_valid_config();
        let handler = MigrateCommandHandler::new(config.clone());
        assert_eq!(handler.config(), &config);
    }

    #[tokio::test]
    async fn test_migrate_handler_zero_rollback_steps() {
        let handler = MigrateCommandHandler::new(create_valid_config());

        match handler.execute(false, Some(0)).await {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "rollback_steps");
                assert!(reason.contains("must be greater than 0"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_migrate_handler_rejects_invalid_database_url() {
        let mut config = create_valid_config();
        config.database.url = "mysql://localhost/books".to_string();
        let handler = MigrateCommandHandler::new(config);

        assert!(matches!(
            handler.execute(true, None).await,
            Err(AppError::Configuration { ref key, .. }) if key == "database.url"
        ));
    }
}
