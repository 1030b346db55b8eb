//! Preference profile store implementations.

use std::collections::HashMap;

use ccm_core::{CcmError, Result, UserPreference, DEFAULT_PROFILE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile name.
    pub name: String,

    /// Preferences in the order they were added.
    pub preferences: Vec<UserPreference>,
}

impl Profile {
    /// Create an empty profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: Vec::new(),
        }
    }
}

/// Trait for profile stores.
///
/// A store always holds [`DEFAULT_PROFILE`] and tracks which profile is active.
pub trait ProfileStore: Send {
    /// Add an empty profile.
    fn create(&mut self, name: &str) -> Result<()>;

    /// Remove a profile. The active pointer falls back to the default profile
    /// if it pointed at the removed one.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Make a profile active and issue a request token for the switch.
    fn select(&mut self, name: &str) -> Result<Uuid>;

    /// Name of the active profile.
    fn current(&self) -> &str;

    /// All profile names, sorted.
    fn list(&self) -> Vec<String>;

    /// Preferences of a profile, or an empty list if there is none.
    fn get(&self, name: &str) -> Vec<UserPreference>;

    /// Append a preference to an existing profile.
    fn add_preference(&mut self, name: &str, preference: UserPreference) -> Result<()>;

    /// Returns true if a profile with this name exists.
    fn contains(&self, name: &str) -> bool;
}

/// In-memory implementation of ProfileStore.
#[derive(Debug, Clone)]
pub struct InMemoryProfileStore {
    /// Profiles keyed by name.
    profiles: HashMap<String, Profile>,

    /// Name of the active profile.
    active: String,
}

impl InMemoryProfileStore {
    /// Create a store holding only the default profile, which is active.
    pub fn new() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(DEFAULT_PROFILE.to_string(), Profile::new(DEFAULT_PROFILE));

        Self {
            profiles,
            active: DEFAULT_PROFILE.to_string(),
        }
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn create(&mut self, name: &str) -> Result<()> {
        if self.profiles.contains_key(name) {
            tracing::warn!("Profile '{}' already exists", name);
            return Err(CcmError::AlreadyExists {
                resource_type: "Profile".to_string(),
                id: name.to_string(),
            });
        }

        self.profiles.insert(name.to_string(), Profile::new(name));
        tracing::info!("Created profile '{}'", name);

        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            tracing::warn!("Cannot delete unknown profile '{}'", name);
            return Err(CcmError::profile_not_found(name));
        }

        if name == DEFAULT_PROFILE {
            tracing::warn!("Refusing to delete the default profile");
            return Err(CcmError::ProtectedProfile(name.to_string()));
        }

        self.profiles.remove(name);

        if self.active == name {
            self.active = DEFAULT_PROFILE.to_string();
            tracing::info!("Deleted active profile '{}', reverted to default", name);
        } else {
            tracing::info!("Deleted profile '{}'", name);
        }

        Ok(())
    }

    fn select(&mut self, name: &str) -> Result<Uuid> {
        if !self.profiles.contains_key(name) {
            tracing::warn!("Cannot select unknown profile '{}'", name);
            return Err(CcmError::profile_not_found(name));
        }

        self.active = name.to_string();
        let request_id = Uuid::new_v4();
        tracing::info!("Selected profile '{}' (request {})", name, request_id);

        Ok(request_id)
    }

    fn current(&self) -> &str {
        &self.active
    }

    fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }

    fn get(&self, name: &str) -> Vec<UserPreference> {
        tracing::debug!("Looking up preferences for profile '{}'", name);
        self.profiles
            .get(name)
            .map(|p| p.preferences.clone())
            .unwrap_or_default()
    }

    fn add_preference(&mut self, name: &str, preference: UserPreference) -> Result<()> {
        let profile = self
            .profiles
            .get_mut(name)
            .ok_or_else(|| CcmError::profile_not_found(name))?;

        profile.preferences.push(preference);
        tracing::debug!(
            "Profile '{}' now holds {} preferences",
            name,
            profile.preferences.len()
        );

        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }
}
