//! JSON summary output

use std::io::Write;

use super::SummaryExport;
use crate::error::{SplitError, SplitResult};
use crate::services::Session;

/// Write the session summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(
    session: &Session,
    currency_symbol: &str,
    writer: &mut W,
) -> SplitResult<()> {
    let export = SummaryExport::from_session(session, currency_symbol);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SplitError::Output(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitError::Output(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money, Participant};

    #[test]
    fn test_json_summary() {
        let mut session = Session::new(vec![
            Participant::new("Ana", "ana.png"),
            Participant::new("Luis", ""),
        ])
        .unwrap();
        session
            .record_expense("Ana", Expense::new("Dinner", Money::from_cents(5000), "10/10/2024"))
            .unwrap();

        let mut buffer = Vec::new();
        export_summary_json(&session, "€", &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["total"], 5000);
        assert_eq!(value["equal_share"], 25.0);
        assert_eq!(value["currency_symbol"], "€");
        assert_eq!(value["participants"][0]["participant"], "Ana");
        assert_eq!(value["participants"][0]["debt"], -25.0);
        assert_eq!(value["participants"][1]["debt"], 25.0);
        assert!(value["participants"][0].get("avatar").is_none());
        assert_eq!(value["expenses"][0]["title"], "Dinner");
    }
}
