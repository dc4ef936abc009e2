//! UI Components
//!
//! Leptos view components.

mod task_item;
mod task_list;

pub use task_item::TaskItem;
pub use task_list::TaskList;
