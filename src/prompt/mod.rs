//! Prompt compilation.
//!
//! Turns a [`MetadataRecord`](crate::metadata::MetadataRecord) into the
//! natural-language prompt sent to the completion service:
//!
//! ```text
//! Generate an advanced SQL query using the following metadata:
//! - Columns: id,name
//! - Table: users
//! - Join Type: LEFT JOIN
//! ```
//!
//! Lines always appear in field order, whatever order the metadata was
//! supplied in.

mod compiler;


pub use compiler::{CompiledPrompt, PROMPT_HEADER, compile_prompt};
