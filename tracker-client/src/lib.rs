pub mod api;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod transport;

pub use api::ApiClient;
pub use commands::{Command, handle_command};
pub use config::Config;
pub use controller::SessionController;
pub use error::{ClientError, ConfigError};
pub use render::{Renderer, TerminalRenderer};
pub use transport::{HttpTransport, Transport};
