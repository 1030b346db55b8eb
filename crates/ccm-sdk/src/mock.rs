//! Canned responses standing in for the CCM scheduling service.

use ccm_core::{CcmError, OpResponse, Result, Schedule, ScheduledTask};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Schedule id that resolves to a schedule with no tasks.
pub const EMPTY_SCHEDULE_ID: &str = "empty";

/// Schedule id that resolves to a generated example schedule.
pub const EXAMPLE_SCHEDULE_ID: &str = "example";

/// The only satellite id the request mock accepts.
pub const MOCK_NORAD_ID: &str = "test";

const EXAMPLE_TASK_COUNT: usize = 5;
const EXAMPLE_TASK_DURATION_SECS: i64 = 5 * 60;
const EXAMPLE_NORAD_ID: &str = "55555";
const EXAMPLE_SITE_ID: &str = "site-a";

/// Mock gateway with an injectable randomness source.
#[derive(Debug, Clone)]
pub struct MockGateway {
    rng: StdRng,
}

impl MockGateway {
    /// Create a gateway seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a gateway whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Resolve a schedule id against the known fixtures.
    pub fn schedule(&mut self, schedule_id: &str, user_id: &str, now: DateTime<Utc>) -> Result<Schedule> {
        match schedule_id {
            EMPTY_SCHEDULE_ID => Ok(Schedule::empty()),
            EXAMPLE_SCHEDULE_ID => Ok(self.example_schedule(user_id, now)),
            _ => Err(CcmError::schedule_not_found(schedule_id)),
        }
    }

    /// Generate the example schedule: consecutive task and visibility ids
    /// from random bases, each task starting within a minute of `now`.
    pub fn example_schedule(&mut self, user_id: &str, now: DateTime<Utc>) -> Schedule {
        let mut visibility_id: i64 = self.rng.gen_range(1000..2000);
        let mut task_id: i64 = self.rng.gen_range(100..200);

        let tasks = (0..EXAMPLE_TASK_COUNT)
            .map(|_| {
                visibility_id += 1;
                task_id += 1;
                let offset: i64 = self.rng.gen_range(0..60);
                let start = now.timestamp() + offset;

                ScheduledTask {
                    task_id: format!("t{}", task_id),
                    user_id: user_id.to_string(),
                    start,
                    end: start + EXAMPLE_TASK_DURATION_SECS,
                    visibility_id,
                    norad_id: EXAMPLE_NORAD_ID.to_string(),
                    site_id: EXAMPLE_SITE_ID.to_string(),
                }
            })
            .collect();

        Schedule {
            schedule_run_id: 1,
            tasks,
            score: 1.0,
        }
    }

    /// Answer an exact request. Only [`MOCK_NORAD_ID`] is schedulable.
    pub fn exact_request(&self, norad_id: &str, ground_site_id: &str, start: i64, end: i64) -> OpResponse {
        tracing::debug!(
            "Exact request for {} at {} [{}, {}]",
            norad_id,
            ground_site_id,
            start,
            end
        );

        if norad_id == MOCK_NORAD_ID {
            OpResponse::ok().with_next_schedule(EXAMPLE_SCHEDULE_ID)
        } else {
            OpResponse::failure("Not available")
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}
