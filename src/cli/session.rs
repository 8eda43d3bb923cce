//! `split session`: interactive expense entry
//!
//! Each input line is one form submission, fields separated by `;`:
//!
//! ```text
//! Patricio; Lunch 2; 12.50; 05/03/2024
//! ```
//!
//! A few keywords inspect the session instead of submitting.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_expense_list, format_roster, format_summary_table, MoneyFormat, TerminalRenderer};
use crate::error::{SplitError, SplitResult};
use crate::services::balance::account_summaries;
use crate::services::submission::submit;
use crate::services::Session;
use crate::validation::ExpenseForm;

const HELP: &str = "\
Enter an expense as: participant; title; amount; date
  e.g. Patricio; Lunch 2; 12.50; 05/03/2024
Commands:
  summary   show everyone's balance
  list      show recorded expenses
  roster    show participants
  help      show this message
  quit      leave the session
";

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Blank,
    Summary,
    List,
    Roster,
    Help,
    Quit,
    Expense(ExpenseForm),
}

fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Input::Blank,
        "summary" => return Input::Summary,
        "list" => return Input::List,
        "roster" => return Input::Roster,
        "help" | "?" => return Input::Help,
        "quit" | "exit" | "q" => return Input::Quit,
        _ => {}
    }

    let mut fields = trimmed.splitn(4, ';').map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();
    let participant = next();
    let title = next();
    let amount = next();
    let date = next();

    Input::Expense(ExpenseForm::new(participant, title, amount, date))
}

fn write_out<W: Write>(out: &mut W, text: &str) -> SplitResult<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| SplitError::Output(e.to_string()))
}

/// Drive a session from `input` until end of input or `quit`
///
/// Returns the number of expenses recorded.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    format: &MoneyFormat,
    mut input: R,
    out: &mut W,
) -> SplitResult<usize> {
    let mut recorded = 0;
    let mut buf = Vec::new();
    write_out(out, "Type 'help' for usage.\n")?;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fail validation like any other typo
        let line = String::from_utf8_lossy(&buf);

        match parse_line(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Help => write_out(out, HELP)?,
            Input::Roster => write_out(out, &format!("{}\n", format_roster(session)))?,
            Input::List => write_out(out, &format_expense_list(session, format))?,
            Input::Summary => {
                let table = format_summary_table(&account_summaries(session), format);
                write_out(out, &format!("{}\n", table))?;
            }
            Input::Expense(form) => {
                let outcome = {
                    let mut renderer = TerminalRenderer::new(&mut *out, format.clone()).with_table(true);
                    submit(session, &form, &mut renderer)?
                };
                if outcome.is_recorded() {
                    recorded += 1;
                }
                out.flush().map_err(|e| SplitError::Output(e.to_string()))?;
            }
        }
    }

    Ok(recorded)
}

/// Run an interactive session on stdin/stdout
pub fn handle_session_command(settings: &Settings) -> SplitResult<()> {
    let mut session = Session::new(settings.participants())?;
    let format = MoneyFormat::from(settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let recorded = run_session(&mut session, &format, stdin.lock(), &mut out)?;
    write_out(&mut out, &format!("{} expense(s) recorded. Bye!\n", recorded))
}
