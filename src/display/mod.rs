//! Display formatting for terminal output
//!
//! The core never prints. Anything that shows expenses or balances goes
//! through a `Renderer`; `TerminalRenderer` is the implementation used by the
//! CLI.

pub mod expense;
pub mod renderer;
pub mod summary;

pub use expense::{format_expense_card, format_expense_list};
pub use renderer::{Renderer, TerminalRenderer};
pub use summary::{format_account_summary, format_debt, format_roster, format_summary_table};

use crate::config::Settings;
use crate::models::Money;

/// How amounts are shown: currency symbol and its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub symbol_after: bool,
}

impl MoneyFormat {
    pub fn new(symbol: impl Into<String>, symbol_after: bool) -> Self {
        Self {
            symbol: symbol.into(),
            symbol_after,
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.symbol, self.symbol_after)
    }

    /// Format an already-rounded decimal string with the symbol
    fn decorate(&self, value: &str) -> String {
        if self.symbol_after {
            format!("{}{}", value, self.symbol)
        } else if let Some(abs) = value.strip_prefix('-') {
            format!("-{}{}", self.symbol, abs)
        } else {
            format!("{}{}", self.symbol, value)
        }
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::new("€", true)
    }
}

impl From<&Settings> for MoneyFormat {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.clone(), settings.symbol_after_amount)
    }
}

/// Truncate a string to a maximum display width
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
