//! `split import`: submit every row of a CSV file

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_summary_table, MoneyFormat, TerminalRenderer};
use crate::error::{SplitError, SplitResult};
use crate::export::{export_summary_json, export_summary_yaml};
use crate::services::balance::account_summaries;
use crate::services::import::{import_csv, ImportResult};
use crate::services::Session;

/// Final summary format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    /// Table of balances (human-readable)
    #[default]
    Table,
    /// JSON snapshot of balances and expenses
    Json,
    /// YAML snapshot of balances and expenses
    Yaml,
}

/// Arguments for `split import`
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// CSV file with columns participant,title,amount,date
    pub file: PathBuf,

    /// Summary format printed at the end
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: SummaryFormat,

    /// Stop at the first rejected row
    #[arg(long)]
    pub strict: bool,

    /// Don't print a card for each recorded row
    #[arg(short, long)]
    pub quiet: bool,
}

/// Write the rejected-row report
fn report_rejections<W: Write>(result: &ImportResult, err: &mut W) -> io::Result<()> {
    for row in &result.rejected {
        writeln!(err, "Line {}:", row.line)?;
        for message in row.errors.messages() {
            writeln!(err, "  ✗ {}", message)?;
        }
    }
    writeln!(
        err,
        "Imported {} of {} row(s).",
        result.recorded,
        result.total_rows()
    )
}

/// Import `args.file` into a fresh session and print the summary
///
/// Per-row cards go to `out` only for the table format; JSON and YAML output
/// stays machine-readable. Rejected rows are reported once, with their line
/// numbers, on `err`.
pub fn run_import<W: Write, E: Write>(
    session: &mut Session,
    settings: &Settings,
    args: &ImportArgs,
    out: &mut W,
    err: &mut E,
) -> SplitResult<ImportResult> {
    let format = MoneyFormat::from(settings);
    let file = File::open(&args.file).map_err(|e| {
        SplitError::Io(format!("Failed to open {}: {}", args.file.display(), e))
    })?;

    let show_cards = args.format == SummaryFormat::Table && !args.quiet;
    let result = if show_cards {
        let mut renderer = TerminalRenderer::new(&mut *out, format.clone())
            .with_table(true)
            .with_errors(false);
        import_csv(session, BufReader::new(file), &mut renderer, args.strict)?
    } else {
        let mut renderer = TerminalRenderer::new(io::sink(), format.clone());
        import_csv(session, BufReader::new(file), &mut renderer, args.strict)?
    };

    report_rejections(&result, err).map_err(|e| SplitError::Output(e.to_string()))?;

    match args.format {
        SummaryFormat::Table => {
            let table = format_summary_table(&account_summaries(session), &format);
            writeln!(out, "{}", table).map_err(|e| SplitError::Output(e.to_string()))?;
        }
        SummaryFormat::Json => export_summary_json(session, &settings.currency_symbol, out)?,
        SummaryFormat::Yaml => export_summary_yaml(session, &settings.currency_symbol, out)?,
    }

    Ok(result)
}

/// Handle `split import` on stdout/stderr
pub fn handle_import_command(settings: &Settings, args: ImportArgs) -> SplitResult<()> {
    let mut session = Session::new(settings.participants())?;
    let stdout = io::stdout();
    let stderr = io::stderr();

    run_import(
        &mut session,
        settings,
        &args,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    Ok(())
}
