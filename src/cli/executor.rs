//! Command executor for dispatching CLI commands

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;

/// Execute the parsed command with merged settings.
///
/// `serve` (or no subcommand) runs the HTTP server until shutdown.
///
/// # Errors
/// Returns errors from command handlers
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    warn_on_risky_args(cli);

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings, cli.environment())
                .execute(*dry_run)
                .await
        }
        None => {
            ServeCommandHandler::new(settings, cli.environment())
                .execute(false)
                .await
        }
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await?;
            Ok(())
        }
    }
}

/// Warns about valid but likely unintended argument combinations.
fn warn_on_risky_args(cli: &Cli) {
    match &cli.command {
        Some(Commands::Serve {
            host: Some(host),
            port: Some(port),
            ..
        }) if *port < 1024 && host == "0.0.0.0" => {
            tracing::warn!(
                port,
                "Binding to 0.0.0.0 on a privileged port usually requires root privileges"
            );
        }
        Some(Commands::Migrate {
            rollback: Some(steps),
            ..
        }) if *steps > 50 => {
            tracing::warn!(steps, "Rolling back a large number of migrations");
        }
        _ => {}
    }
}
