//! CCM client implementation.

use ccm_core::{
    CcmError, ConstraintType, GroundSite, Objective, OpResponse, PreferenceParams, Result,
    Schedule, ServerVersion, UserPreference, VerifyReport, CLIENT_VERSION,
};
use ccm_state::{InMemoryProfileStore, ProfileStore};
use chrono::Utc;
use url::Url;

use crate::config::ClientConfig;
use crate::mock::MockGateway;

/// Client for the CCM scheduling service.
///
/// Each client owns its own profile store, so several clients can coexist
/// in one process without sharing state.
pub struct CcmClient<S: ProfileStore = InMemoryProfileStore> {
    /// Connection and identity settings.
    config: ClientConfig,

    /// HTTP client.
    http_client: reqwest::Client,

    /// Named preference profiles and the active pointer.
    profiles: S,

    /// Stand-in for the scheduling endpoints.
    gateway: MockGateway,
}

impl CcmClient {
    /// Create a client with an in-memory profile store.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_store(config, InMemoryProfileStore::new())
    }

    /// Create a client configured from the environment.
    pub fn from_env(user_id: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::from_env(user_id)?)
    }
}

impl<S: ProfileStore> CcmClient<S> {
    /// Create a client backed by the given profile store.
    pub fn with_store(config: ClientConfig, profiles: S) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| CcmError::Http(e.to_string()))?;

        let gateway = match config.rng_seed {
            Some(seed) => MockGateway::seeded(seed),
            None => MockGateway::new(),
        };

        Ok(Self {
            config,
            http_client,
            profiles,
            gateway,
        })
    }

    /// The user id this client acts for.
    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }

    /// Borrow the profile store.
    pub fn profiles(&self) -> &S {
        &self.profiles
    }

    /// Version of this client.
    pub fn get_version(&self) -> &'static str {
        CLIENT_VERSION
    }

    /// Base endpoint the client talks to. Useful for telling test and
    /// production servers apart.
    pub fn get_api_host(&self) -> Option<&Url> {
        self.config.api_host.as_ref()
    }

    /// Contact the server and report its version.
    ///
    /// The response body is not inspected yet; any answer from the host
    /// counts as reachable.
    pub async fn get_server_version(&self) -> Result<ServerVersion> {
        let host = self
            .config
            .api_host
            .as_ref()
            .ok_or_else(|| CcmError::Config("API host is not configured".to_string()))?;

        let response = self
            .http_client
            .get(host.clone())
            .send()
            .await
            .map_err(|e| CcmError::Http(e.to_string()))?;

        tracing::debug!("Server at {} answered {}", host, response.status());

        Ok(ServerVersion {
            version: CLIENT_VERSION.to_string(),
        })
    }

    /// Client version, server version and active profile in one record.
    pub async fn verify(&self) -> Result<VerifyReport> {
        let server_version = self.get_server_version().await?;

        Ok(VerifyReport {
            client_version: self.get_version().to_string(),
            server_version,
            preference_profile: self.get_current_profile().to_string(),
        })
    }

    /// Name of the active preference profile. New clients start on `default`.
    pub fn get_current_profile(&self) -> &str {
        self.profiles.current()
    }

    /// Names of every profile, sorted.
    pub fn get_all_profiles(&self) -> Vec<String> {
        self.profiles.list()
    }

    /// Preferences held by a profile.
    pub fn get_user_preferences(&self, profile_name: &str) -> Vec<UserPreference> {
        self.profiles.get(profile_name)
    }

    /// Fetch a schedule by the id the server issued.
    pub fn get_schedule_by_id(&mut self, schedule_id: &str) -> Result<Schedule> {
        tracing::debug!("Fetching schedule '{}'", schedule_id);
        self.gateway
            .schedule(schedule_id, &self.config.user_id, Utc::now())
    }

    /// Ground sites the client can request time on.
    pub fn get_ground_sites(&self) -> Vec<GroundSite> {
        Vec::new()
    }

    /// Ask for a specific satellite, site and window to be scheduled.
    ///
    /// On success `next_schedule_id` names the schedule to poll.
    pub fn create_exact_request(
        &self,
        norad_id: &str,
        ground_site_id: &str,
        start_timestamp: i64,
        end_timestamp: i64,
    ) -> OpResponse {
        self.gateway
            .exact_request(norad_id, ground_site_id, start_timestamp, end_timestamp)
    }

    /// Build a validated preference owned by this client's user.
    pub fn generate_user_preference(
        &self,
        constraint_type: ConstraintType,
        objective: Objective,
        params: PreferenceParams,
    ) -> Result<UserPreference> {
        UserPreference::generate(self.user_id(), constraint_type, objective, params)
    }

    /// Append a preference to a profile.
    pub fn add_preference_to_profile(&mut self, profile_name: &str, preference: UserPreference) -> OpResponse {
        self.profiles.add_preference(profile_name, preference).into()
    }

    /// Create an empty preference profile.
    pub fn create_preference_profile(&mut self, profile_name: &str) -> OpResponse {
        self.profiles.create(profile_name).into()
    }

    /// Switch the active profile.
    pub fn set_profile(&mut self, profile_name: &str) -> OpResponse {
        self.profiles.select(profile_name).into()
    }

    /// Delete a profile.
    pub fn delete_profile(&mut self, profile_name: &str) -> OpResponse {
        self.profiles.delete(profile_name).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccm_core::DEFAULT_PROFILE;

    fn client() -> CcmClient {
        CcmClient::new(ClientConfig::builder("test").rng_seed(3).build().unwrap()).unwrap()
    }

    #[test]
    fn test_version() {
        assert!(client().get_version().starts_with('v'));
    }

    #[test]
    fn test_set_profile() {
        let mut ca = client();
        assert_eq!(ca.get_current_profile(), DEFAULT_PROFILE);

        assert!(!ca.set_profile("does-not-exist").success);
        assert!(ca.create_preference_profile("temp").success);
        assert!(ca.profiles().contains("temp"));

        let resp = ca.set_profile("temp");
        assert!(resp.success);
        assert!(resp.request_id.is_some());
        assert_eq!(ca.get_current_profile(), "temp");

        assert!(ca.delete_profile("temp").success);
        assert_eq!(ca.get_current_profile(), DEFAULT_PROFILE);
        assert!(!ca.profiles().contains("temp"));
    }

    #[test]
    fn test_generate_user_preference_uses_client_user() {
        let ca = client();
        let up = ca
            .generate_user_preference(
                ConstraintType::TruncatedGaussian,
                Objective::ContactMinutesPerDay,
                PreferenceParams::gaussian(10.0, 5.0),
            )
            .unwrap();

        assert_eq!(ca.user_id(), "test");
        assert_eq!(up.user_id, ca.user_id());
    }

    #[test]
    fn test_add_preference_to_missing_profile() {
        let mut ca = client();
        let up = ca
            .generate_user_preference(
                ConstraintType::TruncatedGaussian,
                Objective::ContactMinutesPerDay,
                PreferenceParams::gaussian(10.0, 5.0),
            )
            .unwrap();

        let resp = ca.add_preference_to_profile("missing", up);
        assert!(!resp.success);
        assert!(resp.msg.is_some());
    }

    #[test]
    fn test_ground_sites_stub() {
        assert!(client().get_ground_sites().is_empty());
    }

    #[tokio::test]
    async fn test_server_version_without_host() {
        let err = client().get_server_version().await.unwrap_err();
        assert!(matches!(err, CcmError::Config(_)));
    }
}
