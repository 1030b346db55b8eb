//! Schedule types returned by the CCM service.
//!
//! A [`Schedule`] is one run of the server-side scheduler: the contact
//! windows it assigned, plus the score it reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single satellite-contact window assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub task_id: String,

    /// User that owns the task.
    pub user_id: String,

    /// Start of the contact, epoch seconds.
    pub start: i64,

    /// End of the contact, epoch seconds.
    pub end: i64,

    /// Visibility window this task was carved from.
    pub visibility_id: i64,

    /// Satellite catalog number.
    pub norad_id: String,

    /// Ground site the contact runs on.
    pub site_id: String,
}

impl ScheduledTask {
    /// Contact length in seconds.
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end, 0)
    }
}

/// Output of one scheduler run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_run_id: i64,

    #[serde(default)]
    pub tasks: Vec<ScheduledTask>,

    pub score: f64,
}

impl Schedule {
    /// A schedule with no tasks.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks that run on the given ground site.
    pub fn tasks_for_site<'a>(&'a self, site_id: &'a str) -> impl Iterator<Item = &'a ScheduledTask> {
        self.tasks.iter().filter(move |t| t.site_id == site_id)
    }
}

/// A ground station the client may request time on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundSite {
    pub site_id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(site: &str, start: i64) -> ScheduledTask {
        ScheduledTask {
            task_id: "t101".to_string(),
            user_id: "test".to_string(),
            start,
            end: start + 300,
            visibility_id: 1001,
            norad_id: "55555".to_string(),
            site_id: site.to_string(),
        }
    }

    #[test]
    fn test_task_times() {
        let t = task("site-a", 1_700_000_000);
        assert_eq!(t.duration_secs(), 300);
        assert_eq!(t.start_time().unwrap().timestamp(), 1_700_000_000);
        assert_eq!(t.end_time().unwrap().timestamp(), 1_700_000_300);
    }

    #[test]
    fn test_tasks_for_site() {
        let schedule = Schedule {
            schedule_run_id: 1,
            tasks: vec![task("site-a", 0), task("site-b", 10), task("site-a", 20)],
            score: 1.0,
        };

        assert_eq!(schedule.tasks_for_site("site-a").count(), 2);
        assert!(Schedule::empty().is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(task("site-a", 0)).unwrap();
        assert_eq!(value["taskId"], "t101");
        assert_eq!(value["visibilityId"], 1001);
        assert_eq!(value["noradId"], "55555");
        assert_eq!(value["siteId"], "site-a");
    }
}
