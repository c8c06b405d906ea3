//! Validate config command implementation

use crate::catalog;
use crate::config::load_config_or_env;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        let config = match load_config_or_env(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  OpenHIM API: {}", config.openhim.api_url);
        println!("  OpenHIM User: {}", config.openhim.username);
        println!("  Trust Self-Signed: {}", config.openhim.trust_self_signed);
        println!("  FHIR Base URL: {}", config.fhir.base_url);
        println!("  File Logging: {}", config.logging.local_enabled);

        match catalog::mediators() {
            Ok(mediators) => {
                println!("  Mediators:");
                for mediator in mediators {
                    println!("    - {} ({})", mediator.name, mediator.urn);
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Mediator catalog is invalid");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}
