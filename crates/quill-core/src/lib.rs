//! Foundation types for the Quill tool system.
//!
//! # Architecture
//!
//! This is a **Layer 1 (Foundation)** crate:
//! - Depends on: nothing internal
//! - Used by: quill-editor (tool implementations), quill-tools (registry)

mod tool;

pub use tool::Tool;
