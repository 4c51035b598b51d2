use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use outlay_types::{ExpenseRecord, TypeError, LEDGER_HEADER};

use crate::error::{StoreError, StoreResult};

/// Month aggregation result: the matched rows and their amount sum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The `YYYY-MM` prefix that was matched against record dates.
    pub month: String,
    /// Sum of the matched amounts.
    pub total: f64,
    /// The matched records, in file order.
    pub expenses: Vec<ExpenseRecord>,
}

/// Extremes of the ledger by parsed amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub highest: ExpenseRecord,
    pub lowest: ExpenseRecord,
}

/// File-backed expense ledger.
///
/// Constructed with an injected path so callers (and tests) decide where the
/// ledger lives. Every operation re-reads the file from the start; nothing is
/// cached between calls.
#[derive(Clone, Debug)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store over the ledger file at `path`. Does not touch the
    /// file system; call [`initialize`](Self::initialize) to create the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger file with its header row if it does not exist yet.
    ///
    /// Idempotent: an existing file is never truncated or altered.
    pub fn initialize(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(&self.path)?;
        writeln!(file, "{LEDGER_HEADER}")?;
        debug!(path = %self.path.display(), "ledger file created");
        Ok(())
    }

    /// Append one record, stamped with today's local date.
    ///
    /// Returns the record as written. No atomicity beyond the underlying
    /// append call; validation of the inputs is the caller's concern.
    pub fn append(
        &self,
        category: &str,
        amount: f64,
        description: &str,
    ) -> StoreResult<ExpenseRecord> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let record = ExpenseRecord::new(date, category, amount.to_string(), description);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", record.render_row())?;
        writer.flush()?;

        debug!(category, amount, "expense appended");
        Ok(record)
    }

    /// Read every data row, in file order.
    ///
    /// The header row is skipped; a header-only file yields an empty list.
    /// A row with the wrong field count fails the whole read.
    pub fn read_all(&self) -> StoreResult<Vec<ExpenseRecord>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        // A quoted field may span lines; `pending` accumulates the partial
        // row (with its starting line number) until the quote closes.
        let mut pending: Option<(usize, String)> = None;

        for (idx, line) in reader.lines().enumerate() {
            let mut line = line?;
            if line.ends_with('\r') {
                line.pop();
            }
            if idx == 0 {
                // Header row.
                continue;
            }

            let (start, candidate) = match pending.take() {
                Some((start, mut prev)) => {
                    prev.push('\n');
                    prev.push_str(&line);
                    (start, prev)
                }
                None if line.is_empty() => continue,
                None => (idx + 1, line),
            };

            match ExpenseRecord::parse_row(&candidate) {
                Ok(record) => records.push(record),
                Err(TypeError::UnterminatedQuote) => pending = Some((start, candidate)),
                Err(err) => {
                    return Err(StoreError::MalformedRow {
                        line: start,
                        reason: err.to_string(),
                    })
                }
            }
        }

        if let Some((start, _)) = pending {
            return Err(StoreError::MalformedRow {
                line: start,
                reason: "unterminated quoted field".into(),
            });
        }

        debug!(rows = records.len(), "ledger read");
        Ok(records)
    }

    /// Records whose category matches `category` case-insensitively.
    ///
    /// An empty result is signaled as [`StoreError::NoMatches`], distinct
    /// from an I/O failure.
    pub fn filter_by_category(&self, category: &str) -> StoreResult<Vec<ExpenseRecord>> {
        let matches: Vec<ExpenseRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.category_matches(category))
            .collect();
        if matches.is_empty() {
            return Err(StoreError::NoMatches);
        }
        Ok(matches)
    }

    /// Records whose date starts with `month` (a `YYYY-MM` string), plus the
    /// sum of their amounts.
    ///
    /// Pure prefix match, not calendar-aware, and the shape of `month` is
    /// deliberately unvalidated: a value that prefixes no stored date yields
    /// an empty summary with total 0, which is success. An unparsable stored
    /// amount among the matched rows fails the whole operation.
    pub fn month_summary(&self, month: &str) -> StoreResult<MonthSummary> {
        let expenses: Vec<ExpenseRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.date.starts_with(month))
            .collect();

        let mut total = 0.0;
        for record in &expenses {
            total += Self::parsed_amount(record)?;
        }

        debug!(month, total, rows = expenses.len(), "month summary");
        Ok(MonthSummary {
            month: month.to_string(),
            total,
            expenses,
        })
    }

    /// The rows with the highest and lowest parsed amount.
    ///
    /// Ties go to the first-encountered row for both extremes. An empty
    /// ledger is signaled as [`StoreError::Empty`].
    pub fn stats(&self) -> StoreResult<LedgerStats> {
        let mut records = self.read_all()?.into_iter();
        let first = records.next().ok_or(StoreError::Empty)?;
        let value = Self::parsed_amount(&first)?;

        let mut highest = (value, first.clone());
        let mut lowest = (value, first);
        for record in records {
            let value = Self::parsed_amount(&record)?;
            if value > highest.0 {
                highest = (value, record.clone());
            }
            if value < lowest.0 {
                lowest = (value, record);
            }
        }

        Ok(LedgerStats {
            highest: highest.1,
            lowest: lowest.1,
        })
    }

    /// Remove every record matching the full tuple, rewriting the file.
    ///
    /// Matching is exact string equality on date, category, and description,
    /// and exact numeric equality on the parsed amount. All duplicates go at
    /// once; the removed count is returned. When nothing matches the file is
    /// left untouched (no rewrite) and [`StoreError::NoMatches`] is returned.
    pub fn delete_matching(
        &self,
        date: &str,
        category: &str,
        amount: f64,
        description: &str,
    ) -> StoreResult<usize> {
        let records = self.read_all()?;
        let original = records.len();

        let mut kept = Vec::with_capacity(original);
        for record in records {
            // The amount is only parsed once date and category already
            // match, so unrelated malformed rows do not fail a delete.
            let matched = record.date == date
                && record.category == category
                && Self::parsed_amount(&record)? == amount
                && record.description == description;
            if !matched {
                kept.push(record);
            }
        }

        if kept.len() == original {
            return Err(StoreError::NoMatches);
        }
        self.rewrite(&kept)?;

        let removed = original - kept.len();
        debug!(removed, remaining = kept.len(), "expenses deleted");
        Ok(removed)
    }

    fn parsed_amount(record: &ExpenseRecord) -> StoreResult<f64> {
        record
            .amount_value()
            .map_err(|_| StoreError::MalformedAmount {
                value: record.amount.clone(),
            })
    }

    /// Overwrite the file with the header and the given rows.
    fn rewrite(&self, records: &[ExpenseRecord]) -> StoreResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{LEDGER_HEADER}")?;
        for record in records {
            writeln!(writer, "{}", record.render_row())?;
        }
        writer.flush()?;
        Ok(())
    }
}
