//! # CCM Core
//!
//! Data model shared by the CCM API client.
//!
//! This crate provides:
//! - [`UserPreference`] - Typed scheduling preference
//! - [`Schedule`] - Scheduler output and its tasks
//! - [`OpResponse`] - Success/failure record for write operations
//! - [`CcmError`] - Client error types

pub mod error;
pub mod preference;
pub mod schedule;
pub mod types;

// Re-exports for convenience
pub use error::{CcmError, Result};
pub use preference::{ConstraintType, Objective, PreferenceParams, UserPreference};
pub use schedule::{GroundSite, Schedule, ScheduledTask};
pub use types::*;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{CcmError, Result};
    pub use crate::preference::{ConstraintType, Objective, PreferenceParams, UserPreference};
    pub use crate::schedule::{GroundSite, Schedule, ScheduledTask};
    pub use crate::types::{OpResponse, DEFAULT_PROFILE};
}
