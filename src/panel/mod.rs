//! Panel state synchronization and background polling.

mod poll;
mod sync;

pub use poll::{spawn_status_poll, stop_status_poll, PollHandle};
pub use sync::{PanelSink, PanelSync};
