//! CLI Commands

pub mod mind;
pub mod serve;
pub mod validate;

pub use mind::MindCommand;
pub use serve::ServeCommand;
pub use validate::ValidateCommand;
