//! Command-line interface definition
//!
//! The CLI is the app's UI boundary: filter selection for the history
//! view, dose and medication management, skip recording, the clear-all
//! confirmation, and the PIN gate.

use crate::services::DoseFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "medremind",
    version = env!("CARGO_PKG_VERSION"),
    about = "Offline medication reminder: track doses, review history, record skips",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or portable setups)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dose history log, grouped by day (most recent first)
    History {
        /// Which doses to show
        #[arg(long, value_enum, default_value = "all")]
        filter: DoseFilter,
    },

    /// Manage medications
    Meds {
        #[command(subcommand)]
        command: MedsCommand,
    },

    /// Log a dose against a medication
    Dose {
        #[command(subcommand)]
        command: DoseCommand,
    },

    /// Record a skipped dose
    Skip {
        /// Medication id
        med_id: String,
        /// Medication name (kept with the skip record)
        name: String,
        /// Scheduled dose time, e.g. "09:00"
        time: String,
    },

    /// List recorded skip events
    Skipped,

    /// Clear all medication data (medications, history, skipped doses)
    Clear {
        /// Confirm the destructive operation
        #[arg(long)]
        yes: bool,
    },

    /// Manage the access PIN
    Pin {
        #[command(subcommand)]
        command: PinCommand,
    },
}

#[derive(Subcommand)]
pub enum MedsCommand {
    /// Add or update a medication
    Add {
        /// Medication name
        name: String,

        /// Dose description, e.g. "2 tablets"
        #[arg(long, default_value = "")]
        dosage: String,

        /// Display color tag
        #[arg(long, default_value = "#1a8e2d")]
        color: String,

        /// Update an existing medication instead of creating one
        #[arg(long)]
        id: Option<String>,
    },

    /// List stored medications
    List,

    /// Remove a medication (dose history is kept)
    Remove {
        /// Medication id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum DoseCommand {
    /// Record a dose as taken (or missed with --missed)
    Log {
        /// Medication id
        medication_id: String,

        /// Dose time as RFC 3339 (defaults to now)
        #[arg(long = "at")]
        at: Option<String>,

        /// Record the dose as missed instead of taken
        #[arg(long)]
        missed: bool,
    },
}

#[derive(Subcommand)]
pub enum PinCommand {
    /// Set or replace the access PIN
    Set {
        /// The new PIN
        pin: String,
    },

    /// Check a PIN against the stored one
    Verify {
        /// The PIN to check
        pin: String,
    },

    /// Remove the stored PIN
    Clear,
}
