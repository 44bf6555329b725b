//! Metadata-to-prompt compiler.

use crate::metadata::{MetadataField, MetadataRecord};
use std::fmt;

/// First line of every compiled prompt.
pub const PROMPT_HEADER: &str = "Generate an advanced SQL query using the following metadata:";

/// Optional fields emitted whenever their key is present, in order.
/// `Condition` is handled separately because an empty value is skipped.
const PRESENCE_FIELDS: [MetadataField; 9] = [
    MetadataField::CaseWhen,
    MetadataField::WindowFunction,
    MetadataField::Subquery,
    MetadataField::Aggregation,
    MetadataField::JoinType,
    MetadataField::Join,
    MetadataField::GroupBy,
    MetadataField::Having,
    MetadataField::OrderBy,
];

/// An immutable, fully formatted prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt(String);

impl CompiledPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompiledPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compile a metadata record into a prompt.
///
/// Never fails: absent `Columns`/`Table` fall back to `ALL`/`UNKNOWN`, an
/// empty `Condition` is dropped, and every other optional field is emitted
/// as soon as its key is present, even with an empty value.
pub fn compile_prompt(record: &MetadataRecord) -> CompiledPrompt {
    let mut prompt = String::with_capacity(256);
    prompt.push_str(PROMPT_HEADER);
    prompt.push('\n');

    push_line(&mut prompt, MetadataField::Columns, record.columns_or_default());
    push_line(&mut prompt, MetadataField::Table, record.table_or_default());

    if let Some(condition) = record.condition() {
        push_line(&mut prompt, MetadataField::Condition, condition);
    }

    for field in PRESENCE_FIELDS {
        if let Some(value) = record.get(field) {
            push_line(&mut prompt, field, value);
        }
    }

    CompiledPrompt(prompt)
}

fn push_line(prompt: &mut String, field: MetadataField, value: &str) {
    prompt.push_str("- ");
    prompt.push_str(field.label());
    prompt.push_str(": ");
    prompt.push_str(value);
    prompt.push('\n');
}
