//! Task model and snapshot I/O.

mod snapshot;
mod types;

pub use snapshot::{load_tasks, save_tasks};
pub use types::{Priority, Status, Task};
