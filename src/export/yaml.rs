//! YAML summary output

use std::io::Write;

use super::SummaryExport;
use crate::error::{SplitError, SplitResult};
use crate::services::Session;

/// Write the session summary as YAML with a short header comment
pub fn export_summary_yaml<W: Write>(
    session: &Session,
    currency_symbol: &str,
    writer: &mut W,
) -> SplitResult<()> {
    let export = SummaryExport::from_session(session, currency_symbol);

    writeln!(writer, "# splitpot session summary")
        .map_err(|e| SplitError::Output(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| SplitError::Output(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SplitError::Output(e.to_string()))?;

    Ok(())
}
