//! Skip-dose commands

use crate::app::AppState;
use crate::error::Result;
use chrono::Local;

pub async fn skip_dose(state: &AppState, med_id: &str, name: &str, time: &str) -> Result<()> {
    match state.skips.skip_dose(med_id, name, time).await {
        Ok(skipped) => {
            println!("Skipped {} at {}", skipped.name, skipped.time);
            Ok(())
        }
        Err(e) => {
            // Surface the failure; the skip state is unchanged and the user
            // can re-trigger the action.
            tracing::error!("Error saving skipped dose: {}", e);
            Err(e)
        }
    }
}

pub async fn list_skipped(state: &AppState) -> Result<()> {
    let skips = state.skips.list_skipped().await?;

    if skips.is_empty() {
        println!("No skipped doses recorded.");
        return Ok(());
    }

    for skip in &skips {
        println!(
            "{}  {} at {} (recorded {})",
            skip.med_id,
            skip.name,
            skip.time,
            skip.date.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
