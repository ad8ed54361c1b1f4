mod channel;
mod status;

pub use channel::{Channel, NewChannel};
pub use status::{RunAction, RunState, RunStatus};
