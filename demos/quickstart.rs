//! Quick Start Example
//!
//! This example walks through the CCM client: profiles, preferences,
//! an exact request and the schedule it points to.

use ccm_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let mut client = CcmClient::from_env("test")?;

    println!("client {} on profile '{}'", client.get_version(), client.get_current_profile());

    // 1. Describe what a good schedule looks like
    let profile = "my new profile";
    client.create_preference_profile(profile);

    let per_day = client.generate_user_preference(
        ConstraintType::TruncatedGaussian,
        Objective::ContactCountPerDay,
        PreferenceParams::gaussian(5.0, 2.0).min(0.0).max(20.0),
    )?;
    client.add_preference_to_profile(profile, per_day);

    let resp = client.set_profile(profile);
    println!("set_profile: {}", serde_json::to_string(&resp)?);

    // 2. Ask for a specific contact
    let resp = client.create_exact_request("test", "12345", 0, 60 * 5);
    println!("create_exact_request: {}", serde_json::to_string(&resp)?);

    // 3. Look at the schedule the request produced
    if let Some(schedule_id) = resp.next_schedule_id {
        let schedule = client.get_schedule_by_id(&schedule_id)?;
        for task in &schedule.tasks {
            if let (Some(start), Some(end)) = (task.start_time(), task.end_time()) {
                println!("{} {} @ {}: {} -> {}", task.task_id, task.norad_id, task.site_id, start, end);
            }
        }
    }

    // 4. Check the server, if one is configured
    if client.get_api_host().is_some() {
        let report = client.verify().await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
