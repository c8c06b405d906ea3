//! Cross-border-id command implementation

use crate::core::identifiers::make_cross_border_id;
use clap::Args;

/// Arguments for the cross-border-id command
#[derive(Args, Debug)]
pub struct CrossBorderIdArgs {
    /// Jurisdiction name or code; its first two letters become the prefix
    #[arg(long)]
    pub jurisdiction: String,
}

impl CrossBorderIdArgs {
    /// Execute the cross-border-id command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        match make_cross_border_id(&self.jurisdiction) {
            Ok(id) => {
                println!("{id}");
                Ok(0)
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(2)
            }
        }
    }
}
