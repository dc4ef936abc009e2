//! Backend API Wrappers
//!
//! Frontend bindings to the basched scheduling service's read endpoints.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::{RemainingTime, Task, UnfinishedTasks};

/// Route prefix the scheduler serves its HTTP API under.
const API_BASE: &str = "/basched";

/// Fetch all unfinished tasks, in response order.
pub async fn unfinished_tasks() -> Result<Vec<Task>, String> {
    let response: UnfinishedTasks = fetch_json(&format!("{API_BASE}/unfinishedtasks")).await?;
    Ok(response.tasks)
}

/// Fetch the remaining pomodoro time for the current task.
pub async fn remaining_pomodoro_time(task_id: u32, priority: u32) -> Result<u64, String> {
    let url = format!("{API_BASE}/getRemainingPomodoroTime?taskid={task_id}&priority={priority}");
    let response: RemainingTime = fetch_json(&url).await?;
    Ok(response.duration)
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| format!("fetch failed: {err:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch yielded a non-Response value".to_string())?;
    if !response.ok() {
        return Err(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }
    let body = JsFuture::from(response.json().map_err(|err| format!("{err:?}"))?)
        .await
        .map_err(|err| format!("failed to read response body: {err:?}"))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}
