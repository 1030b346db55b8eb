//! End-to-end scenarios against the CCM client.

use ccm_core::CcmError;
use ccm_sdk::mock::{EXAMPLE_SCHEDULE_ID, MOCK_NORAD_ID};
use ccm_sdk::prelude::*;

fn client() -> CcmClient {
    let config = ClientConfig::builder("test").rng_seed(11).build().unwrap();
    CcmClient::new(config).unwrap()
}

fn gaussian(client: &CcmClient) -> UserPreference {
    client
        .generate_user_preference(
            ConstraintType::TruncatedGaussian,
            Objective::ContactMinutesPerDay,
            PreferenceParams::gaussian(10.0, 5.0),
        )
        .unwrap()
}

#[test]
fn test_schedule_lookup() {
    let mut ca = client();

    let empty = ca.get_schedule_by_id("empty").unwrap();
    assert!(empty.tasks.is_empty());

    let example = ca.get_schedule_by_id("example").unwrap();
    assert_eq!(example.tasks.len(), 5);
    assert!(example.tasks.iter().all(|t| t.end > t.start));
    assert!(example.tasks.iter().all(|t| t.user_id == "test"));

    let missing = ca.get_schedule_by_id("does-not-exist");
    assert!(matches!(missing, Err(CcmError::NotFound { .. })));
}

#[test]
fn test_create_exact_request() {
    let ca = client();

    let resp = ca.create_exact_request(MOCK_NORAD_ID, "12345", 0, 60 * 5);
    assert!(resp.success);
    assert_eq!(resp.next_schedule_id.as_deref(), Some(EXAMPLE_SCHEDULE_ID));

    let resp = ca.create_exact_request("other", "12345", 0, 60 * 5);
    assert!(!resp.success);
    assert!(resp.next_schedule_id.is_none());
}

#[test]
fn test_request_follow_up_resolves() {
    let mut ca = client();

    let resp = ca.create_exact_request(MOCK_NORAD_ID, "12345", 0, 300);
    let next = resp.next_schedule_id.unwrap();
    assert!(!ca.get_schedule_by_id(&next).unwrap().is_empty());
}

#[test]
fn test_profile_lifecycle() {
    let mut ca = client();

    assert!(!ca.set_profile("does-not-exist").success);
    assert!(ca.create_preference_profile("temp").success);
    assert!(!ca.create_preference_profile("temp").success);
    assert!(ca.set_profile("temp").success);

    let up = gaussian(&ca);
    assert!(ca.add_preference_to_profile("temp", up.clone()).success);
    assert_eq!(ca.get_user_preferences("temp"), vec![up]);

    assert!(ca.delete_profile("temp").success);
    assert!(!ca.get_all_profiles().contains(&"temp".to_string()));
    assert_eq!(ca.get_current_profile(), DEFAULT_PROFILE);
}

#[test]
fn test_delete_default_refused() {
    let mut ca = client();

    let resp = ca.delete_profile(DEFAULT_PROFILE);
    assert!(!resp.success);
    assert_eq!(ca.get_all_profiles(), vec![DEFAULT_PROFILE.to_string()]);
}

#[test]
fn test_failure_messages() {
    let mut ca = client();

    assert_eq!(
        ca.set_profile("temp").msg.as_deref(),
        Some("Resource not found: Profile with id temp")
    );

    assert!(ca.create_preference_profile("temp").success);
    assert_eq!(
        ca.create_preference_profile("temp").msg.as_deref(),
        Some("Resource already exists: Profile with id temp")
    );

    assert_eq!(
        ca.delete_profile(DEFAULT_PROFILE).msg.as_deref(),
        Some("Profile default is protected")
    );
}

#[test]
fn test_missing_gaussian_parameter() {
    let ca = client();

    let result = ca.generate_user_preference(
        ConstraintType::TruncatedGaussian,
        Objective::ContactMinutesPerDay,
        PreferenceParams::new().sigma(5.0),
    );
    assert!(matches!(
        result,
        Err(CcmError::MissingParameter { parameter: "mu", .. })
    ));
}

#[test]
fn test_clients_are_isolated() {
    let mut a = client();
    let b = client();

    assert!(a.create_preference_profile("temp").success);
    assert!(!b.get_all_profiles().contains(&"temp".to_string()));
}

#[tokio::test]
async fn test_server_version_and_verify() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("{\"message\": \"ok\"}")
        .expect(2)
        .create_async()
        .await;

    let config = ClientConfig::builder("test")
        .api_host(server.url())
        .build()
        .unwrap();
    let ca = CcmClient::new(config).unwrap();

    let version = ca.get_server_version().await.unwrap();
    assert_eq!(version.version, "v1.0.0");

    let report = ca.verify().await.unwrap();
    assert_eq!(report.client_version, "v1.0.0");
    assert_eq!(report.server_version, version);
    assert_eq!(report.preference_profile, DEFAULT_PROFILE);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_version_ignores_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(500)
        .create_async()
        .await;

    let config = ClientConfig::builder("test")
        .api_host(server.url())
        .build()
        .unwrap();
    let ca = CcmClient::new(config).unwrap();

    assert!(ca.get_server_version().await.is_ok());
}

#[tokio::test]
async fn test_server_version_unreachable() {
    let config = ClientConfig::builder("test")
        .api_host("http://127.0.0.1:1/")
        .build()
        .unwrap();
    let ca = CcmClient::new(config).unwrap();

    let err = ca.get_server_version().await.unwrap_err();
    assert!(matches!(err, CcmError::Http(_)));
}
