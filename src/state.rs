//! Task List View State
//!
//! The fetch cycle's state transitions, kept free of network and DOM access
//! so they run on the native target.

use crate::models::Task;

/// Parameters of the follow-up remaining-time request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationQuery {
    pub task_id: u32,
    pub priority: u32,
}

/// State owned by a single Task List View instance.
///
/// Created empty at component creation, replaced wholesale by each fetch
/// response, discarded on unmount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub tasks: Vec<Task>,
    pub current_task: Option<Task>,
    pub current_task_duration: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the task set and re-derive the current task.
    ///
    /// Returns the query for the follow-up duration request when a current
    /// task exists. The backend contract is at most one task flagged current;
    /// the first match in response order wins. A response with no current
    /// task leaves the previously derived current task in place.
    pub fn apply_tasks(&mut self, tasks: Vec<Task>) -> Option<DurationQuery> {
        self.tasks = tasks;
        let current = self.tasks.iter().find(|task| task.current).cloned()?;
        let query = DurationQuery {
            task_id: current.id,
            priority: current.priority,
        };
        self.current_task = Some(current);
        Some(query)
    }

    /// Record the current task's remaining duration.
    pub fn apply_duration(&mut self, duration: u64) {
        self.current_task_duration = duration;
    }
}
