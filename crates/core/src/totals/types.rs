//! Totals data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Person, TransactionKind};

/// A person with income, expense and balance over a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotals {
    /// The person.
    #[serde(flatten)]
    pub person: Person,
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expense: Decimal,
    /// Income minus expense.
    pub balance: Decimal,
}

impl PersonTotals {
    /// Creates totals for a person, deriving the balance.
    #[must_use]
    pub fn new(person: Person, income: Decimal, expense: Decimal) -> Self {
        Self {
            person,
            income,
            expense,
            balance: income.saturating_sub(expense),
        }
    }
}

/// Totals summed across people or transactions.
///
/// Sums saturate at the bounds of [`Decimal`] instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    /// Total income.
    pub income: Decimal,
    /// Total expense.
    pub expense: Decimal,
    /// Income minus expense.
    pub balance: Decimal,
}

impl AggregateTotals {
    /// Creates totals, deriving the balance.
    #[must_use]
    pub fn new(income: Decimal, expense: Decimal) -> Self {
        Self {
            income,
            expense,
            balance: income.saturating_sub(expense),
        }
    }

    /// Adds one amount of the given kind.
    pub fn add(&mut self, kind: TransactionKind, amount: Decimal) {
        match kind {
            TransactionKind::Income => self.income = self.income.saturating_add(amount),
            TransactionKind::Expense => self.expense = self.expense.saturating_add(amount),
        }
        self.balance = self.income.saturating_sub(self.expense);
    }
}

/// Expense total for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// Category label (categories sharing a label are merged).
    pub label: String,
    /// Summed expense amount.
    pub total: Decimal,
}

/// One bar of the income-versus-expense chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Bar label (`Receita` or `Despesa`).
    pub label: String,
    /// Which side this bar shows.
    pub kind: TransactionKind,
    /// Bar height.
    pub amount: Decimal,
}

/// Two-bar income-versus-expense chart data, income first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeExpenseChart {
    /// Income bar then expense bar.
    pub bars: Vec<ChartBar>,
}
