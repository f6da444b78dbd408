//! History log command
//!
//! Renders the grouped history projection: one header per day, most recent
//! day first, each entry showing medication, dosage, local time, and
//! taken/missed status.

use crate::app::AppState;
use crate::error::Result;
use crate::services::history::DayGroup;
use crate::services::DoseFilter;
use chrono::Local;

pub async fn show_history(state: &AppState, filter: DoseFilter) -> Result<()> {
    let groups = state.history.grouped_history(filter).await?;

    if groups.is_empty() {
        println!("No dose history to show.");
        return Ok(());
    }

    for group in &groups {
        render_group(group);
    }

    Ok(())
}

fn render_group(group: &DayGroup) {
    println!("{}", group.date.format("%A, %B %d, %Y"));

    for entry in &group.entries {
        let time = entry
            .dose
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M");
        let status = if entry.dose.taken { "Taken" } else { "Missed" };

        let dosage = entry.display_dosage();
        if dosage.is_empty() {
            println!("  {}  {}  [{}]", time, entry.display_name(), status);
        } else {
            println!(
                "  {}  {} ({})  [{}]",
                time,
                entry.display_name(),
                dosage,
                status
            );
        }
    }

    println!();
}
