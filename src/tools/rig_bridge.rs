//! rig-core integration
//!
//! rig hands a tool the JSON arguments the model produced. `RigNativTool`
//! passes them straight to one of our tools and answers with its text, so a
//! Nativ failure reaches the agent as the crate's own `Error`.

use std::sync::Arc;

use rig::completion::ToolDefinition as RigDefinition;
use rig::tool::{Tool as RigTool, ToolSet};
use serde_json::Value;

use super::{NativToolkit, Tool, ToolRegistry};
use crate::error::Error;

/// A Nativ tool seen through rig's `Tool` trait
#[derive(Clone)]
pub struct RigNativTool {
    inner: Arc<dyn Tool>,
}

impl RigNativTool {
    pub fn new(inner: Arc<dyn Tool>) -> Self {
        RigNativTool { inner }
    }
}

impl RigTool for RigNativTool {
    // Toolsets key on `name()`, so every instance reports its own tool name
    const NAME: &'static str = "nativ";

    type Error = Error;
    type Args = Value;
    type Output = String;

    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    async fn definition(&self, _prompt: String) -> RigDefinition {
        RigDefinition {
            name: self.inner.name().to_string(),
            description: self.inner.description().to_string(),
            parameters: self.inner.parameters_schema(),
        }
    }

    async fn call(&self, args: Value) -> Result<String, Error> {
        let result = self.inner.execute(args).await?;
        if result.success {
            return Ok(result.content.unwrap_or_default());
        }
        Err(Error::Internal(result.error.unwrap_or_else(|| {
            format!("{} failed", self.inner.name())
        })))
    }
}

impl NativToolkit {
    /// All eight tools, ready to hand to a rig agent
    pub fn to_rig_toolset(self: &Arc<Self>) -> ToolSet {
        let tools: Vec<RigNativTool> = self
            .to_tool_list()
            .into_iter()
            .map(RigNativTool::new)
            .collect();
        ToolSet::from_tools(tools)
    }
}

/// Builds a rig `ToolSet` from whatever a registry holds
pub trait ToolRegistryRigExt {
    fn to_rig_toolset(&self) -> ToolSet;
}

impl ToolRegistryRigExt for ToolRegistry {
    fn to_rig_toolset(&self) -> ToolSet {
        let tools: Vec<RigNativTool> = self
            .names()
            .into_iter()
            .filter_map(|name| self.get(name))
            .map(RigNativTool::new)
            .collect();
        ToolSet::from_tools(tools)
    }
}
