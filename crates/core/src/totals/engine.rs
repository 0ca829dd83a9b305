//! Aggregation engine.

use std::collections::HashMap;

use casa_shared::types::PersonId;
use rust_decimal::Decimal;

use super::types::{
    AggregateTotals, CategoryExpense, ChartBar, IncomeExpenseChart, PersonTotals,
};
use crate::filter::{DateRange, is_blank_query, matches_name_search};
use crate::model::{Person, Transaction, TransactionKind};

/// Pure, stateless aggregation over people and transactions.
///
/// Inputs are borrowed snapshots; every call returns fresh values, so the
/// caller re-invokes whenever the data or the filters change.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Normalized kind of a transaction.
    #[must_use]
    pub fn classify_kind(transaction: &Transaction) -> TransactionKind {
        transaction.kind()
    }

    /// Transactions inside the range, in input order.
    #[must_use]
    pub fn filter_transactions<'a>(
        transactions: &'a [Transaction],
        range: &DateRange,
    ) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| range.contains(t)).collect()
    }

    /// Transactions of one person inside the range, in input order.
    ///
    /// Rows without an owner never match.
    #[must_use]
    pub fn transactions_for_person<'a>(
        person_id: PersonId,
        transactions: &'a [Transaction],
        range: &DateRange,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| t.person_id() == Some(person_id) && range.contains(t))
            .collect()
    }

    /// Income, expense and balance of one person over the range.
    ///
    /// Transactions belonging to anyone else are ignored, so a person with no
    /// activity gets all zeros.
    #[must_use]
    pub fn compute_totals_for_person(
        person: &Person,
        transactions: &[Transaction],
        range: &DateRange,
    ) -> PersonTotals {
        let own = Self::transactions_for_person(person.id, transactions, range);
        let sums = Self::sum(own);
        PersonTotals::new(person.clone(), sums.income, sums.expense)
    }

    /// Totals for every person, preserving the input order.
    #[must_use]
    pub fn compute_all_person_totals(
        people: &[Person],
        transactions: &[Transaction],
        range: &DateRange,
    ) -> Vec<PersonTotals> {
        people
            .iter()
            .map(|person| Self::compute_totals_for_person(person, transactions, range))
            .collect()
    }

    /// Sums a list of per-person totals.
    ///
    /// The balance is derived from the summed income and expense.
    #[must_use]
    pub fn compute_aggregate_totals(person_totals: &[PersonTotals]) -> AggregateTotals {
        let mut totals = AggregateTotals::default();
        for row in person_totals {
            totals.add(TransactionKind::Income, row.income);
            totals.add(TransactionKind::Expense, row.expense);
        }
        totals
    }

    /// Totals over every transaction in the range, whoever it belongs to.
    #[must_use]
    pub fn summarize_transactions(
        transactions: &[Transaction],
        range: &DateRange,
    ) -> AggregateTotals {
        Self::sum(Self::filter_transactions(transactions, range))
    }

    /// Per-person totals narrowed by a name search.
    ///
    /// A blank query keeps every row.
    #[must_use]
    pub fn filter_person_totals(
        person_totals: Vec<PersonTotals>,
        query: &str,
    ) -> Vec<PersonTotals> {
        if is_blank_query(query) {
            return person_totals;
        }
        person_totals
            .into_iter()
            .filter(|p| matches_name_search(&p.person, query))
            .collect()
    }

    /// The single person matching the search, if exactly one does.
    ///
    /// A blank query never selects anyone.
    #[must_use]
    pub fn resolve_unique_match<'a>(people: &'a [Person], query: &str) -> Option<&'a Person> {
        if is_blank_query(query) {
            return None;
        }
        let mut matches = people.iter().filter(|p| matches_name_search(p, query));
        match (matches.next(), matches.next()) {
            (Some(person), None) => Some(person),
            _ => None,
        }
    }

    /// Expense totals grouped by category label.
    ///
    /// Groups appear in the order their label is first seen. Totals saturate
    /// like [`AggregateTotals`].
    #[must_use]
    pub fn group_expenses_by_category(
        transactions: &[Transaction],
        range: &DateRange,
    ) -> Vec<CategoryExpense> {
        let mut groups: Vec<CategoryExpense> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for transaction in Self::filter_transactions(transactions, range) {
            if transaction.kind() != TransactionKind::Expense {
                continue;
            }
            let label = transaction.category.label.as_str();
            if let Some(&slot) = index.get(label) {
                groups[slot].total = groups[slot].total.saturating_add(transaction.amount);
            } else {
                index.insert(label, groups.len());
                groups.push(CategoryExpense {
                    label: label.to_string(),
                    total: transaction.amount,
                });
            }
        }

        groups
    }

    /// Income-versus-expense chart data for a set of totals.
    #[must_use]
    pub fn income_expense_chart(totals: &AggregateTotals) -> IncomeExpenseChart {
        let bar = |kind: TransactionKind, amount: Decimal| ChartBar {
            label: kind.tag().to_string(),
            kind,
            amount,
        };
        IncomeExpenseChart {
            bars: vec![
                bar(TransactionKind::Income, totals.income),
                bar(TransactionKind::Expense, totals.expense),
            ],
        }
    }

    fn sum<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> AggregateTotals {
        let mut totals = AggregateTotals::default();
        for transaction in transactions {
            totals.add(transaction.kind(), transaction.amount);
        }
        totals
    }
}
