//! Tool trait definition.
//!
//! This module defines the core `Tool` trait that all tool implementations must implement.
//! The trait is agnostic of the specific registry that hosts it.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

/// Trait for tool implementations.
///
/// All tools must be Send + Sync because the registry hands out `Arc<dyn Tool>`
/// across await points.
///
/// ## Return Format Contract
///
/// Callers determine success from the returned JSON itself:
/// - Success: a result object describing the outcome (for Quill tools,
///   `{"success": true, ...}`)
/// - Failure: a result object carrying the failure message (for Quill tools,
///   `{"success": false, "message": ...}`)
///
/// Tool implementations should return `Ok` with a failure-shaped JSON value for
/// expected failures, not `Err`. Reserve `Err` for truly unexpected conditions;
/// the registry converts those into failure JSON before they reach the caller.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match exactly what the LLM requests)
    fn name(&self) -> &'static str;

    /// Tool description for LLM context
    fn description(&self) -> &'static str;

    /// JSON Schema for tool parameters
    fn parameters(&self) -> Value;

    /// Execute the tool with given arguments.
    ///
    /// ## Arguments
    /// - `args`: JSON value containing tool arguments
    /// - `workspace`: Path to the workspace root
    ///
    /// ## Returns
    /// - `Ok(Value)`: Tool result (success or failure JSON)
    /// - `Err(e)`: Unexpected error (will be converted to failure JSON)
    async fn execute(&self, args: Value, workspace: &Path) -> Result<Value>;
}
