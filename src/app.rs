//! Basched Frontend App
//!
//! Page shell mounting the task list; owns no business state.

use leptos::prelude::*;

use crate::components::TaskList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-layout">
            <h1>"Basched"</h1>
            <TaskList/>
        </main>
    }
}
