pub mod logout;
pub mod setup;
pub mod status;

pub use logout::logout_command;
pub use setup::{SetupOptions, setup_command};
pub use status::status_command;
