//! Create-client command implementation

use crate::adapters::openhim::OpenHimClient;
use crate::config::load_config_or_env;
use clap::Args;

/// Arguments for the create-client command
#[derive(Args, Debug)]
pub struct CreateClientArgs {
    /// Client name, also used as the client ID
    #[arg(long)]
    pub name: String,

    /// Client password (hashed with a random salt before it is sent)
    #[arg(long, env = "MEDIATORS_CLIENT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl CreateClientArgs {
    /// Execute the create-client command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_env(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let client = OpenHimClient::new(&config.openhim)?;

        match client.create_client(&self.name, &self.password).await {
            Ok(response) => {
                println!("{response}");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to create client '{}'", self.name);
                println!("   Error: {e}");
                Ok(4)
            }
        }
    }
}
