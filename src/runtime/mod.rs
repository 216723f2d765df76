pub mod command;
pub mod effect;
pub mod event;
pub mod fetch;
pub mod key_bindings;
pub mod runner;
pub mod scheduler;

pub use command::{Command, ViewId};
pub use effect::Effect;
pub use event::AppEvent;
pub use fetch::{FetchExecutor, FetchRequest, FetchResult, LocationQuery};
pub use runner::Runtime;
pub use scheduler::{Scheduler, SchedulerCommand};
