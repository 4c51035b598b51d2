use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::row::{render_row, split_row};

/// The fixed header row of every ledger file, naming the four record fields
/// in persisted order.
pub const LEDGER_HEADER: &str = "Date,Category,Amount,Description";

/// Number of fields in a data row.
const FIELD_COUNT: usize = 4;

/// One row of the expense ledger.
///
/// All fields are carried as the text stored in the file. The amount is only
/// interpreted numerically by consumers that compare or sum it, via
/// [`amount_value`](Self::amount_value) — so a ledger containing a
/// hand-edited, non-numeric amount still lists fine and only fails the
/// operations that actually need the number.
///
/// Serialized field names match the ledger header, so a JSON rendering of a
/// record mirrors the file column names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseRecord {
    /// Calendar date in `YYYY-MM-DD` form, stamped by the store at append.
    pub date: String,
    /// Free-form label, case-preserving; filtered case-insensitively.
    pub category: String,
    /// Amount text as stored in the file.
    pub amount: String,
    /// Free-form description.
    pub description: String,
}

impl ExpenseRecord {
    /// Build a record from its four field values.
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Parse one data row into a record.
    pub fn parse_row(line: &str) -> Result<Self, TypeError> {
        let fields = split_row(line)?;
        if fields.len() != FIELD_COUNT {
            return Err(TypeError::FieldCount {
                expected: FIELD_COUNT,
                actual: fields.len(),
            });
        }
        let mut it = fields.into_iter();
        Ok(Self {
            date: it.next().unwrap(),
            category: it.next().unwrap(),
            amount: it.next().unwrap(),
            description: it.next().unwrap(),
        })
    }

    /// Render the record as one ledger row (no trailing newline).
    pub fn render_row(&self) -> String {
        render_row(&[&self.date, &self.category, &self.amount, &self.description])
    }

    /// The stored amount as a decimal number.
    pub fn amount_value(&self) -> Result<f64, TypeError> {
        self.amount
            .trim()
            .parse()
            .map_err(|_| TypeError::MalformedAmount(self.amount.clone()))
    }

    /// Case-insensitive category comparison used by filtering.
    pub fn category_matches(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

impl std::fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {}  {}  {}",
            self.date, self.category, self.amount, self.description
        )
    }
}
