//! Clear-all command
//!
//! Destructive: outcome is always reported, never silent.

use crate::app::AppState;
use crate::error::Result;

pub async fn clear_all(state: &AppState, confirmed: bool) -> Result<()> {
    if !confirmed {
        println!(
            "This will clear all medication data and cannot be undone.\n\
             Re-run with --yes to confirm."
        );
        return Ok(());
    }

    match state.repository.clear_all_data().await {
        Ok(()) => {
            println!("All data has been cleared successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error clearing data: {}", e);
            println!("Failed to clear data. Please try again.");
            Err(e)
        }
    }
}
