//! Task List Component
//!
//! Owns the view state and the fetch cycle; renders the current task region
//! and the full unfinished-task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TaskItem;
use crate::models::PRIORITY_LABELS;
use crate::state::ViewState;

#[component]
pub fn TaskList() -> impl IntoView {
    let (state, set_state) = signal(ViewState::new());

    // One fetch cycle per component creation; no polling.
    Effect::new(move |_| {
        spawn_local(async move {
            refresh_tasks(set_state).await;
        });
    });

    view! {
        <section class="task-list">
            <h2>"Current task"</h2>
            {move || {
                state.with(|s| s.current_task.clone()).map(|task| {
                    view! {
                        <div class="current-task">
                            <TaskItem task=task labels=&PRIORITY_LABELS/>
                            <span class="task-duration">
                                {move || state.with(|s| s.current_task_duration)}
                            </span>
                        </div>
                    }
                })
            }}

            <h2>"All tasks"</h2>
            // The current task is not filtered out here; it may appear twice.
            <For
                each=move || state.with(|s| s.tasks.clone())
                key=|task| task.id
                children=move |task| {
                    view! { <TaskItem task=task labels=&PRIORITY_LABELS/> }
                }
            />

            <p class="task-count">
                {move || format!("{} unfinished tasks", state.with(|s| s.tasks.len()))}
            </p>
        </section>
    }
}

/// Run one fetch cycle: load the unfinished tasks, then the remaining time
/// for the derived current task.
///
/// Failures are logged and dropped; the view keeps whatever state it had.
/// Writes go through `try_update` so a response landing after the component
/// is disposed is discarded.
async fn refresh_tasks(set_state: WriteSignal<ViewState>) {
    let tasks = match api::unfinished_tasks().await {
        Ok(tasks) => tasks,
        Err(err) => {
            leptos::logging::error!("could not reach the task API: {err}");
            return;
        }
    };
    leptos::logging::log!("loaded {} unfinished tasks", tasks.len());

    let Some(query) = set_state
        .try_update(|state| state.apply_tasks(tasks))
        .flatten()
    else {
        return;
    };

    match api::remaining_pomodoro_time(query.task_id, query.priority).await {
        Ok(duration) => {
            set_state.try_update(|state| state.apply_duration(duration));
        }
        Err(err) => {
            leptos::logging::error!("could not reach the task API: {err}");
        }
    }
}
