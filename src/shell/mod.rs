//! External command execution and host environment probes.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandRunner, CommandStatus, Invocation, SystemRunner};
pub use mock::RecordingRunner;
pub use platform::{is_ci, is_elevated};
