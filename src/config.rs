//! Application configuration constants
//!
//! Central location for storage key names, display defaults, and
//! validation boundaries used throughout the application.

// ===== Storage Keys =====

/// Storage key for the medications collection
pub const MEDICATIONS_KEY: &str = "medications";

/// Storage key for the dose history collection
pub const DOSE_HISTORY_KEY: &str = "dose_history";

/// Storage key for the skipped doses collection
pub const SKIPPED_DOSES_KEY: &str = "skipped_doses";

/// Storage key for the PIN credential.
/// Deliberately excluded from clear-all so wiping medication data
/// never locks the user out.
pub const PIN_KEY: &str = "pin";

// ===== Display Defaults =====

/// Shown when a dose references a medication that no longer exists
pub const UNKNOWN_MEDICATION_LABEL: &str = "Unknown Medication";

/// Fallback color swatch for doses with no matching medication
pub const DEFAULT_MEDICATION_COLOR: &str = "#ccc";

// ===== PIN Limits =====

/// Minimum PIN length in characters
pub const MIN_PIN_LENGTH: usize = 4;

/// Maximum PIN length in characters
pub const MAX_PIN_LENGTH: usize = 32;
