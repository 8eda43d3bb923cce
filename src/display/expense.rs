//! Expense display formatting

use super::{truncate, MoneyFormat};
use crate::models::{Expense, Participant};
use crate::services::Session;

/// Format the card shown when an expense is recorded
pub fn format_expense_card(participant: &Participant, expense: &Expense, fmt: &MoneyFormat) -> String {
    let mut output = String::new();

    if participant.avatar.is_empty() {
        output.push_str(&format!("┌ {}\n", participant.name));
    } else {
        output.push_str(&format!("┌ {} [{}]\n", participant.name, participant.avatar));
    }
    output.push_str(&format!("│ {}\n", expense.title));
    output.push_str(&format!(
        "└ Paid {} on {}\n",
        fmt.money(expense.amount),
        expense.date
    ));

    output
}

/// Format every recorded expense as a register
pub fn format_expense_list(session: &Session, fmt: &MoneyFormat) -> String {
    if session.expense_count() == 0 {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:20} {:>12}\n",
        "Date", "Paid by", "Title", "Amount"
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for (participant, expense) in session.expenses() {
        output.push_str(&format!(
            "{:10} {:20} {:20} {:>12}\n",
            expense.date,
            truncate(&participant.name, 20),
            expense.title,
            fmt.money(expense.amount)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_expense_card() {
        let participant = Participant::new("Patricio", "./img/usuarios/patricio.png");
        let expense = Expense::new("Lunch 2", Money::from_cents(1250), "05/03/2024");

        let card = format_expense_card(&participant, &expense, &MoneyFormat::default());
        assert_eq!(
            card,
            "┌ Patricio [./img/usuarios/patricio.png]\n│ Lunch 2\n└ Paid 12.50€ on 05/03/2024\n"
        );
    }

    #[test]
    fn test_expense_card_without_avatar() {
        let participant = Participant::new("Ana", "");
        let expense = Expense::new("Taxi", Money::from_cents(800), "01/02/2024");

        let card = format_expense_card(&participant, &expense, &MoneyFormat::new("$", false));
        assert!(card.starts_with("┌ Ana\n"));
        assert!(card.contains("Paid $8.00 on 01/02/2024"));
    }

    #[test]
    fn test_empty_expense_list() {
        let session = Session::new(vec![Participant::new("Ana", "")]).unwrap();
        assert_eq!(
            format_expense_list(&session, &MoneyFormat::default()),
            "No expenses recorded.\n"
        );
    }

    #[test]
    fn test_expense_list_rows() {
        let mut session = Session::new(vec![Participant::new("Ana", ""), Participant::new("Luis", "")]).unwrap();
        session
            .record_expense("Luis", Expense::new("Groceries", Money::from_cents(4520), "03/03/2024"))
            .unwrap();

        let list = format_expense_list(&session, &MoneyFormat::default());
        assert!(list.contains("Luis"));
        assert!(list.contains("Groceries"));
        assert!(list.contains("45.20€"));
    }
}
