use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
///
/// Field names in the serialized form are fixed by the on-disk format
/// (`UUID`, `Description`, `CreateTime`) and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Globally unique identifier, never reused after deletion
    #[serde(rename = "UUID")]
    pub uuid: String,

    /// Free-text description
    #[serde(rename = "Description")]
    pub description: String,

    /// When the task was created
    #[serde(rename = "CreateTime")]
    pub create_time: DateTime<Utc>,
}

impl Task {
    /// Create a new task stamped with a fresh UUID and the current time
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            description: description.into(),
            create_time: Utc::now(),
        }
    }

    /// Age of the task in hours, relative to `now`
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        (now - self.create_time).num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Sort tasks descending by creation time (newest first)
///
/// This is the display order; the persisted order stays insertion order.
pub fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.create_time.cmp(&a.create_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task_at(description: &str, create_time: DateTime<Utc>) -> Task {
        Task {
            uuid: Uuid::new_v4().to_string(),
            description: description.to_string(),
            create_time,
        }
    }

    #[test]
    fn test_new_task_has_unique_uuid() {
        let a = Task::new("first");
        let b = Task::new("second");
        assert_ne!(a.uuid, b.uuid);
        assert_eq!(a.description, "first");
    }

    #[test]
    fn test_age_hours() {
        let now = Utc::now();
        let task = task_at("old", now - Duration::hours(3));
        let age = task.age_hours(now);
        assert!((age - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_sort_newest_first() {
        let now = Utc::now();
        let mut tasks = vec![
            task_at("oldest", now - Duration::hours(2)),
            task_at("newest", now),
            task_at("middle", now - Duration::hours(1)),
        ];

        sort_newest_first(&mut tasks);

        assert_eq!(tasks[0].description, "newest");
        assert_eq!(tasks[1].description, "middle");
        assert_eq!(tasks[2].description, "oldest");
    }

    #[test]
    fn test_serialization_field_names() {
        let task = Task::new("buy milk");
        let json = serde_json::to_string(&task).unwrap();

        assert!(json.contains("\"UUID\""));
        assert!(json.contains("\"Description\":\"buy milk\""));
        assert!(json.contains("\"CreateTime\""));

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.uuid, task.uuid);
        assert_eq!(parsed.description, task.description);
        assert_eq!(parsed.create_time, task.create_time);
    }
}
