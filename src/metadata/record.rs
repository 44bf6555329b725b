//! The metadata record describing one SQL query.

use serde::Deserialize;

/// Default emitted when `Columns` is absent.
pub const DEFAULT_COLUMNS: &str = "ALL";

/// Default emitted when `Table` is absent.
pub const DEFAULT_TABLE: &str = "UNKNOWN";

/// A recognized metadata field, in prompt emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Columns,
    Table,
    Condition,
    CaseWhen,
    WindowFunction,
    Subquery,
    Aggregation,
    JoinType,
    Join,
    GroupBy,
    Having,
    OrderBy,
}

impl MetadataField {
    /// Every field, in the order prompts emit and users are asked for them.
    pub const ALL: [MetadataField; 12] = [
        MetadataField::Columns,
        MetadataField::Table,
        MetadataField::Condition,
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

    /// Key used in batch files.
    pub fn key(self) -> &'static str {
        match self {
            MetadataField::Columns => "Columns",
            MetadataField::Table => "Table",
            MetadataField::Condition => "Condition",
            MetadataField::CaseWhen => "CaseWhen",
            MetadataField::WindowFunction => "WindowFunction",
            MetadataField::Subquery => "Subquery",
            MetadataField::Aggregation => "Aggregation",
            MetadataField::JoinType => "JoinType",
            MetadataField::Join => "Join",
            MetadataField::GroupBy => "GroupBy",
            MetadataField::Having => "Having",
            MetadataField::OrderBy => "OrderBy",
        }
    }

    /// Label used in compiled prompts and interactive questions.
    ///
    /// Only the first group of optional fields gets a spaced label; `Join`,
    /// `GroupBy`, `Having` and `OrderBy` keep their key verbatim.
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::CaseWhen => "Case When",
            MetadataField::WindowFunction => "Window Function",
            MetadataField::JoinType => "Join Type",
            other => other.key(),
        }
    }

    /// Whether interactive mode refuses to continue without a value.
    pub fn is_mandatory(self) -> bool {
        matches!(self, MetadataField::Columns | MetadataField::Table)
    }
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured description of a desired SQL query.
///
/// `None` means the key was never supplied; `Some("")` means it was supplied
/// empty. The two are rendered differently, see [`MetadataRecord::condition`]
/// and [`MetadataRecord::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataRecord {
    pub columns: Option<String>,
    pub table: Option<String>,
    pub condition: Option<String>,
    pub case_when: Option<String>,
    pub window_function: Option<String>,
    pub subquery: Option<String>,
    pub aggregation: Option<String>,
    pub join_type: Option<String>,
    pub join: Option<String>,
    pub group_by: Option<String>,
    pub having: Option<String>,
    pub order_by: Option<String>,
}

impl MetadataRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: MetadataField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Store a value for `field`, marking it present.
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Raw value for `field`: present (possibly empty) or absent.
    pub fn get(&self, field: MetadataField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Key-presence test; an explicitly empty value counts as present.
    pub fn is_present(&self, field: MetadataField) -> bool {
        self.slot(field).is_some()
    }

    /// Columns, or `ALL` when the key is absent.
    pub fn columns_or_default(&self) -> &str {
        self.columns.as_deref().unwrap_or(DEFAULT_COLUMNS)
    }

    /// Table, or `UNKNOWN` when the key is absent.
    pub fn table_or_default(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }

    /// Condition, treating an empty value the same as an absent one.
    ///
    /// Unlike every other optional field, which is emitted whenever its key
    /// is present, an empty condition is dropped from the prompt.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref().filter(|c| !c.is_empty())
    }

    /// Names of mandatory fields that are absent or empty.
    pub fn missing_mandatory(&self) -> Vec<MetadataField> {
        MetadataField::ALL
            .into_iter()
            .filter(|f| f.is_mandatory())
            .filter(|f| self.get(*f).is_none_or(str::is_empty))
            .collect()
    }

    fn slot(&self, field: MetadataField) -> &Option<String> {
        match field {
            MetadataField::Columns => &self.columns,
            MetadataField::Table => &self.table,
            MetadataField::Condition => &self.condition,
            MetadataField::CaseWhen => &self.case_when,
            MetadataField::WindowFunction => &self.window_function,
            MetadataField::Subquery => &self.subquery,
            MetadataField::Aggregation => &self.aggregation,
            MetadataField::JoinType => &self.join_type,
            MetadataField::Join => &self.join,
            MetadataField::GroupBy => &self.group_by,
            MetadataField::Having => &self.having,
            MetadataField::OrderBy => &self.order_by,
        }
    }

    fn slot_mut(&mut self, field: MetadataField) -> &mut Option<String> {
        match field {
            MetadataField::Columns => &mut self.columns,
            MetadataField::Table => &mut self.table,
            MetadataField::Condition => &mut self.condition,
            MetadataField::CaseWhen => &mut self.case_when,
            MetadataField::WindowFunction => &mut self.window_function,
            MetadataField::Subquery => &mut self.subquery,
            MetadataField::Aggregation => &mut self.aggregation,
            MetadataField::JoinType => &mut self.join_type,
            MetadataField::Join => &mut self.join,
            MetadataField::GroupBy => &mut self.group_by,
            MetadataField::Having => &mut self.having,
            MetadataField::OrderBy => &mut self.order_by,
        }
    }
}
