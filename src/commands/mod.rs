//! CLI command handlers
//!
//! This module organizes handlers into logical submodules:
//! - `history`: history log rendering with status filters
//! - `medications`: medication management
//! - `doses`: dose logging
//! - `skip`: skip-dose recording
//! - `data`: clear-all
//! - `pin`: access PIN management

pub mod data;
pub mod doses;
pub mod history;
pub mod medications;
pub mod pin;
pub mod skip;

use crate::app::AppState;
use crate::cli::Commands;
use crate::error::Result;

/// Route a parsed CLI command to its handler
pub async fn dispatch(state: &AppState, command: Commands) -> Result<()> {
    match command {
        Commands::History { filter } => history::show_history(state, filter).await,
        Commands::Meds { command } => medications::handle(state, command).await,
        Commands::Dose { command } => doses::handle(state, command).await,
        Commands::Skip { med_id, name, time } => {
            skip::skip_dose(state, &med_id, &name, &time).await
        }
        Commands::Skipped => skip::list_skipped(state).await,
        Commands::Clear { yes } => data::clear_all(state, yes).await,
        Commands::Pin { command } => pin::handle(state, command).await,
    }
}
