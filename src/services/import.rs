//! CSV batch submission
//!
//! Feeds each row of a CSV file through the submission flow as if it had
//! been typed into the form. Expected columns, by header name:
//! `participant,title,amount,date`. Bytes that are not valid UTF-8 are
//! replaced with U+FFFD, so such a row is rejected by validation instead of
//! stopping the import.

use std::io::Read;

use csv::{ByteRecord, ReaderBuilder, Trim};
use tracing::{info, warn};

use crate::display::Renderer;
use crate::error::{SplitError, SplitResult};
use crate::services::submission::{submit, Submission};
use crate::services::Session;
use crate::validation::{ExpenseForm, ValidationErrors};

const COLUMNS: [&str; 4] = ["participant", "title", "amount", "date"];

/// A CSV row that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line number in the file, header included
    pub line: u64,
    pub errors: ValidationErrors,
}

/// Result of an import run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportResult {
    pub recorded: usize,
    pub rejected: Vec<RejectedRow>,
}

impl ImportResult {
    pub fn total_rows(&self) -> usize {
        self.recorded + self.rejected.len()
    }
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    participant: usize,
    title: usize,
    amount: usize,
    date: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &ByteRecord) -> SplitResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h).trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| SplitError::Import(format!("Missing column '{}'", name)))
        };

        Ok(Self {
            participant: find(COLUMNS[0])?,
            title: find(COLUMNS[1])?,
            amount: find(COLUMNS[2])?,
            date: find(COLUMNS[3])?,
        })
    }

    fn form(&self, record: &ByteRecord) -> ExpenseForm {
        let field = |i: usize| {
            record
                .get(i)
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .unwrap_or_default()
        };
        ExpenseForm::new(
            field(self.participant),
            field(self.title),
            field(self.amount),
            field(self.date),
        )
    }
}

/// Submit every row of `reader` into the session
///
/// Rejected rows are collected and skipped. With `strict`, the first rejected
/// row aborts the import with `SplitError::RejectedRow`; rows before it stay
/// recorded.
pub fn import_csv<R: Read, W: Renderer + ?Sized>(
    session: &mut Session,
    reader: R,
    renderer: &mut W,
    strict: bool,
) -> SplitResult<ImportResult> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader);

    let mapping = ColumnMapping::from_headers(csv_reader.byte_headers()?)?;
    let mut result = ImportResult::default();

    for record in csv_reader.byte_records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        match submit(session, &mapping.form(&record), renderer)? {
            Submission::Recorded { .. } => result.recorded += 1,
            Submission::Rejected(errors) => {
                warn!(line, "import row rejected");
                if strict {
                    return Err(SplitError::RejectedRow { line, errors });
                }
                result.rejected.push(RejectedRow { line, errors });
            }
        }
    }

    info!(
        recorded = result.recorded,
        rejected = result.rejected.len(),
        "import finished"
    );

    Ok(result)
}
