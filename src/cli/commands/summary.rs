//! Summary command implementation
//!
//! Prints the patient summary document for a cross-border ID.

use crate::adapters::fhir::FhirClient;
use crate::config::load_config_or_env;
use clap::Args;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Cross-border ID of the patient
    #[arg(long)]
    pub cross_border_id: String,
}

impl SummaryArgs {
    /// Execute the summary command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_env(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let client = FhirClient::new(&config.fhir)?;

        match client
            .get_summary_for_cross_border_id(&self.cross_border_id)
            .await
        {
            Some(summary) => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                Ok(0)
            }
            None => {
                println!("No summary available for {}", self.cross_border_id);
                Ok(1)
            }
        }
    }
}
