//! # CCM SDK
//!
//! Client SDK for the CCM satellite contact scheduling service.
//!
//! ```no_run
//! use ccm_sdk::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut client = CcmClient::new(ClientConfig::new("test"))?;
//!
//! client.create_preference_profile("night-passes");
//! let up = client.generate_user_preference(
//!     ConstraintType::TruncatedGaussian,
//!     Objective::ContactCountPerDay,
//!     PreferenceParams::gaussian(5.0, 2.0).min(0.0).max(20.0),
//! )?;
//! client.add_preference_to_profile("night-passes", up);
//! client.set_profile("night-passes");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod mock;

pub use client::CcmClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use mock::MockGateway;

/// Prelude module for common imports.
pub mod prelude {
    pub use crate::client::CcmClient;
    pub use crate::config::ClientConfig;
    pub use ccm_core::prelude::*;
}
