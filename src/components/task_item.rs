//! Task Item Component
//!
//! One task row: name plus resolved priority label. Pure projection of its
//! props, no network access.

use leptos::prelude::*;

use crate::models::{priority_label, Task};

#[component]
pub fn TaskItem(task: Task, labels: &'static [&'static str]) -> impl IntoView {
    let label = priority_label(labels, task.priority).unwrap_or_default();

    view! {
        <div class="task-item">
            {task.name.clone()}
            <span class="task-priority">" " {label} " "</span>
        </div>
    }
}
