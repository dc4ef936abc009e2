//! Frontend Models
//!
//! Data structures matching the basched backend wire format.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub priority: u32,
    pub current: bool,
}

/// Priority code to label table, indexed by `Task::priority`.
pub const PRIORITY_LABELS: [&str; 3] = ["Immediate", "High", "Regular"];

/// Resolve a priority code against a label table.
///
/// Valid codes are 0..table length; anything else has no label (the backend
/// is expected to only emit valid codes).
pub fn priority_label(labels: &'static [&'static str], code: u32) -> Option<&'static str> {
    labels.get(code as usize).copied()
}

/// Response of `GET /basched/unfinishedtasks`.
///
/// The backend keys the collection by an opaque string; only the values are
/// used, kept in response order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnfinishedTasks {
    #[serde(deserialize_with = "task_values")]
    pub tasks: Vec<Task>,
}

/// Response of `GET /basched/getRemainingPomodoroTime`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RemainingTime {
    pub duration: u64,
}

fn task_values<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TaskValues;

    impl<'de> Visitor<'de> for TaskValues {
        type Value = Vec<Task>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of tasks keyed by opaque strings")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut tasks = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_, task)) = map.next_entry::<String, Task>()? {
                tasks.push(task);
            }
            Ok(tasks)
        }
    }

    deserializer.deserialize_map(TaskValues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_codes_resolve_to_labels() {
        assert_eq!(priority_label(&PRIORITY_LABELS, 0), Some("Immediate"));
        assert_eq!(priority_label(&PRIORITY_LABELS, 1), Some("High"));
        assert_eq!(priority_label(&PRIORITY_LABELS, 2), Some("Regular"));
    }

    #[test]
    fn out_of_range_priority_has_no_label() {
        assert_eq!(priority_label(&PRIORITY_LABELS, 3), None);
    }

    #[test]
    fn unfinished_tasks_discards_map_keys() {
        let body = r#"{
            "tasks": {
                "a": {"id": 1, "name": "X", "priority": 0, "current": true},
                "b": {"id": 2, "name": "Y", "priority": 1, "current": false}
            }
        }"#;

        let response: UnfinishedTasks = serde_json::from_str(body).expect("decode failed");
        assert_eq!(response.tasks.len(), 2);
        assert_eq!(response.tasks[0].id, 1);
        assert_eq!(response.tasks[0].name, "X");
        assert!(response.tasks[0].current);
        assert_eq!(response.tasks[1].id, 2);
        assert!(!response.tasks[1].current);
    }

    #[test]
    fn unfinished_tasks_decodes_empty_map() {
        let response: UnfinishedTasks =
            serde_json::from_str(r#"{"tasks": {}}"#).expect("decode failed");
        assert!(response.tasks.is_empty());
    }

    #[test]
    fn remaining_time_decodes_duration() {
        let response: RemainingTime =
            serde_json::from_str(r#"{"duration": 1500}"#).expect("decode failed");
        assert_eq!(response.duration, 1500);
    }
}
