pub mod config;
pub mod orchestrator;
pub mod providers;
pub mod wire;

pub use config::{AuthRequirement, Backend, BackendConfig};
pub use orchestrator::{AiProvider, CloudProvider, HttpProvider, LocalProvider};
