//! Tools module - Nativ localization tools for LLM agents
//!
//! `NativToolkit` holds the client configuration and performs the eight
//! operations, returning text ready for the model's context window. Each
//! operation is also wrapped as a `Tool` so it can be registered in a
//! `ToolRegistry` or handed to a rig agent with `NativToolkit::to_rig_toolset`.
//!
//! ## Tools
//!
//! - **translate**: translate one text
//! - **translate_batch**: translate several texts into one language
//! - **search_translation_memory**: fuzzy-search approved translations
//! - **add_translation_memory_entry**: store an approved translation
//! - **get_languages**, **get_style_guides**, **get_brand_voice**,
//!   **get_translation_memory_stats**: read workspace settings

pub mod format;
mod nativ;
mod registry;
mod rig_bridge;
mod toolkit;
mod traits;

// Core trait and types
pub use traits::{parse_arguments, FunctionDefinition, Tool, ToolCall, ToolDefinition, ToolResult};

// Registry
pub use registry::ToolRegistry;
pub use rig_bridge::{RigNativTool, ToolRegistryRigExt};

// Nativ tools
pub use nativ::{
    AddTranslationMemoryEntryTool, GetBrandVoiceTool, GetLanguagesTool, GetStyleGuidesTool,
    GetTranslationMemoryStatsTool, SearchTranslationMemoryTool, TranslateBatchTool, TranslateTool,
    TOOL_NAMES,
};
pub use toolkit::NativToolkit;
