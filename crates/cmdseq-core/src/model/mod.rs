pub mod command;
pub mod descriptor;

pub use command::{ActionResult, Command, CommandInfo, CommandRef, Priority};
pub use descriptor::CommandDescriptor;
