//! # nativ-tools
//!
//! Agent tools for the Nativ AI localization platform.
//!
//! ## Features
//!
//! - **Eight tools:** translation, batch translation, translation memory search
//!   and updates, and read access to languages, style guides, brand voice and
//!   translation memory statistics
//! - **LLM-ready output:** every tool answers with a compact plain-text summary
//! - **Scoped sessions:** each call opens its own client session and closes it
//!   afterwards, whatever the outcome
//! - **rig integration:** register the tools in a rig `ToolSet`
//!
//! ```no_run
//! use std::sync::Arc;
//! use nativ_tools::tools::{NativToolkit, ToolRegistry};
//!
//! # async fn run() -> nativ_tools::Result<()> {
//! // Reads NATIV_API_KEY from the environment
//! let toolkit = Arc::new(NativToolkit::new(None, None));
//! println!("{}", toolkit.get_languages().await?);
//!
//! let mut registry = ToolRegistry::new();
//! registry.register_all(toolkit.to_tool_list());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod tools;

pub use config::NativConfig;
pub use error::{Error, Result};
pub use tools::NativToolkit;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
