//! Register command implementation
//!
//! Runs the startup registration: authenticate with OpenHIM, register every
//! catalog mediator and install its default channel.

use crate::config::load_config_or_env;
use crate::core::registration::register_catalog;
use clap::Args;

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {}

impl RegisterArgs {
    /// Execute the register command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_env(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("🔗 Registering mediators with {}", config.openhim.api_url);
        println!();

        let report = register_catalog(&config.openhim).await?;

        match &report.auth_error {
            None => println!("✅ OpenHIM authenticated successfully"),
            Some(e) => println!("❌ OpenHIM authentication failed: {e}"),
        }

        for outcome in &report.outcomes {
            let mark = if outcome.is_success() { "✅" } else { "❌" };
            println!("{mark} {} ({})", outcome.name, outcome.urn);
            if let Err(e) = &outcome.registration {
                println!("   Registration: {e}");
            }
            if let Err(e) = &outcome.channel {
                println!("   Channel: {e}");
            }
        }

        println!();
        println!(
            "{} of {} mediators registered cleanly",
            report.outcomes.len() - report.failures(),
            report.outcomes.len()
        );

        Ok(if report.is_complete() { 0 } else { 1 })
    }
}
