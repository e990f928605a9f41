//! External command execution.

pub mod command;
pub mod recording;

pub use command::{
    run_checked, CommandResult, CommandRunner, DryRunner, Invocation, SystemRunner,
};
pub use recording::RecordingRunner;
