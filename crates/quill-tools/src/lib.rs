//! Tool registry for the Quill editor tools.
//!
//! # Architecture
//!
//! This is a **Layer 3 (Application-facing)** crate:
//! - Depends on: quill-core (Tool trait), quill-editor (tool implementations)
//! - Used by: the host application embedding the tools
//!
//! # Success/Failure Contract
//!
//! All tools follow this return format:
//! - Success: `{"success": true, "message": ..., "content"?: ...}`
//! - Failure: `{"success": false, "message": ...}`
//!
//! # Usage
//!
//! ```rust,ignore
//! use quill_tools::{ToolRegistry, build_function_declarations};
//!
//! let mut registry = ToolRegistry::new(workspace_path);
//! let result = registry.execute_tool("text_editor", args).await?;
//! let tools = registry.available_tools();
//! ```

mod definitions;
mod error;
mod registry;

pub use definitions::{build_function_declarations, FunctionDeclaration};
pub use error::ToolError;
pub use registry::ToolRegistry;

// Re-export the trait so hosts can register their own tools.
pub use quill_core::Tool;
