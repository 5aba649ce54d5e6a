//! Core library that turns a plain-text selection into math-block markup by
//! delegating to a cloud or local language model.
//!
//! - [`agents`] holds the provider contract, backend configs and wire schemas.
//! - [`errors`] keeps the failure catalogue with codes and host-facing notices.
//! - [`logging`] writes structured diagnostics through the `log` facade.
//! - [`model_manager`] is the entry point the editor host calls.
//! - [`prompt_builder`] renders the instruction text for each backend.
//! - [`settings`] describes the host-owned settings and the borrowed credential.

pub mod agents;
pub mod errors;
pub mod logging;
pub mod model_manager;
pub mod prompt_builder;
pub mod settings;

pub use agents::{AiProvider, Backend, BackendConfig, CloudProvider, LocalProvider};
pub use errors::{ConversionResult, ErrorKind, ErrorNotice, LangMathError};
pub use model_manager::{is_insertable, ConversionRequest, ModelManager};
pub use settings::{Credential, LangMathSettings};
