//! # CCM State
//!
//! In-memory preference profile store for the CCM client.

pub mod store;

pub use store::{InMemoryProfileStore, Profile, ProfileStore};
