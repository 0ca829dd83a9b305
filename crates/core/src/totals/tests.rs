//! Property-based tests for totals module.

use casa_shared::types::{CategoryId, PersonId, TransactionId};
use chrono::{DateTime, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::AggregationEngine;
use super::types::PersonTotals;
use crate::filter::DateRange;
use crate::model::{
    CategoryRef, KindValue, Person, PersonRef, Transaction, TransactionKind, TransactionTimestamp,
};

const LABELS: [&str; 4] = ["Mercado", "Aluguel", "Lazer", "Salário"];

/// Strategy to generate an amount from 0.00 to 100,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a raw kind in either wire representation, or junk.
fn kind_value() -> impl Strategy<Value = KindValue> {
    prop_oneof![
        Just(KindValue::Tag("Receita".into())),
        Just(KindValue::Tag("Despesa".into())),
        Just(KindValue::Code(1)),
        Just(KindValue::Code(2)),
        Just(KindValue::Code(9)),
        Just(KindValue::default()),
    ]
}

/// Strategy to generate a timestamp during 2024, occasionally malformed.
fn timestamp() -> impl Strategy<Value = TransactionTimestamp> {
    prop_oneof![
        9 => (1_704_067_200i64..1_735_689_600i64).prop_map(|secs| {
            TransactionTimestamp::from(DateTime::from_timestamp(secs, 0).unwrap())
        }),
        1 => Just(TransactionTimestamp::from("??")),
    ]
}

/// Strategy to generate an owner: person 1..=5, unknown person 6, or nobody.
fn owner() -> impl Strategy<Value = Option<PersonRef>> {
    prop::option::weighted(
        0.9,
        (1i64..=6).prop_map(|id| PersonRef {
            id: PersonId::new(id),
            name: None,
            age: None,
        }),
    )
}

fn label() -> impl Strategy<Value = usize> {
    0usize..LABELS.len()
}

fn transaction() -> impl Strategy<Value = Transaction> {
    (owner(), amount(), kind_value(), label(), timestamp()).prop_map(
        |(person, amount, kind, label, timestamp)| Transaction {
            id: TransactionId::new(0),
            description: String::new(),
            amount,
            kind,
            person,
            category: CategoryRef {
                id: CategoryId::new(i64::try_from(label).unwrap_or_default()),
                label: LABELS[label].to_string(),
            },
            timestamp,
        },
    )
}

fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction(), 0..40).prop_map(|mut list| {
        for (i, t) in list.iter_mut().enumerate() {
            t.id = TransactionId::new(i64::try_from(i).unwrap_or_default());
        }
        list
    })
}

/// Strategy to generate an optional-bounded range within 2024.
fn date_range() -> impl Strategy<Value = DateRange> {
    let day = (1u32..=365).prop_map(|ordinal| NaiveDate::from_yo_opt(2024, ordinal).unwrap());
    (prop::option::of(day.clone()), prop::option::of(day))
        .prop_map(|(start, end)| DateRange { start, end })
}

fn household() -> Vec<Person> {
    ["Ana", "Bruno", "Carla", "Davi", "Eva"]
        .iter()
        .zip(1i64..)
        .map(|(name, id)| Person {
            id: PersonId::new(id),
            name: (*name).to_string(),
            age: 30,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every person row satisfies balance = income - expense, and so does the aggregate.
    #[test]
    fn prop_balance_identity(txs in transactions(), range in date_range()) {
        let totals = AggregationEngine::compute_all_person_totals(&household(), &txs, &range);
        for row in &totals {
            prop_assert_eq!(row.balance, row.income - row.expense);
        }

        let aggregate = AggregationEngine::compute_aggregate_totals(&totals);
        prop_assert_eq!(aggregate.balance, aggregate.income - aggregate.expense);
    }

    /// Summing per-person totals equals summing the in-range transactions of known people.
    #[test]
    fn prop_aggregate_consistency(txs in transactions(), range in date_range()) {
        let people = household();
        let totals = AggregationEngine::compute_all_person_totals(&people, &txs, &range);
        let aggregate = AggregationEngine::compute_aggregate_totals(&totals);

        let known: Vec<Transaction> = txs
            .iter()
            .filter(|t| people.iter().any(|p| Some(p.id) == t.person_id()))
            .cloned()
            .collect();
        let direct = AggregationEngine::summarize_transactions(&known, &range);

        prop_assert_eq!(aggregate, direct);
    }

    /// People without transactions appear with zero totals.
    #[test]
    fn prop_zero_activity_inclusion(txs in transactions(), range in date_range()) {
        let mut people = household();
        people.push(Person { id: PersonId::new(100), name: "Nova".into(), age: 19 });

        let totals = AggregationEngine::compute_all_person_totals(&people, &txs, &range);
        prop_assert_eq!(totals.len(), people.len());

        let last = totals.last().unwrap();
        prop_assert_eq!(last.income, Decimal::ZERO);
        prop_assert_eq!(last.expense, Decimal::ZERO);
        prop_assert_eq!(last.balance, Decimal::ZERO);
    }

    /// A blank search never narrows the totals table.
    #[test]
    fn prop_empty_query_is_noop(txs in transactions(), blank in "[ \t]{0,3}") {
        let range = DateRange::all();
        let totals = AggregationEngine::compute_all_person_totals(&household(), &txs, &range);
        let filtered: Vec<PersonTotals> =
            AggregationEngine::filter_person_totals(totals.clone(), &blank);
        prop_assert_eq!(filtered, totals);
    }

    /// Category groups add up to the expense total and each label appears once.
    #[test]
    fn prop_category_groups_cover_expenses(txs in transactions(), range in date_range()) {
        let groups = AggregationEngine::group_expenses_by_category(&txs, &range);
        let grouped: Decimal = groups.iter().map(|g| g.total).sum();
        let summary = AggregationEngine::summarize_transactions(&txs, &range);
        prop_assert_eq!(grouped, summary.expense);

        let mut labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        let before = labels.len();
        labels.sort_unstable();
        labels.dedup();
        prop_assert_eq!(labels.len(), before);
    }

    /// Same inputs, same outputs.
    #[test]
    fn prop_idempotent(txs in transactions(), range in date_range()) {
        let people = household();
        let first = AggregationEngine::compute_all_person_totals(&people, &txs, &range);
        let second = AggregationEngine::compute_all_person_totals(&people, &txs, &range);
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            AggregationEngine::group_expenses_by_category(&txs, &range),
            AggregationEngine::group_expenses_by_category(&txs, &range)
        );
    }

    /// Narrowing the range never adds activity.
    #[test]
    fn prop_bounded_range_is_subset(txs in transactions(), range in date_range()) {
        let bounded = AggregationEngine::filter_transactions(&txs, &range);
        let all = AggregationEngine::filter_transactions(&txs, &DateRange::all());
        prop_assert!(bounded.len() <= all.len());
        prop_assert_eq!(all.len(), txs.len());
    }

    /// Kind classification is total: every transaction lands on exactly one side.
    #[test]
    fn prop_every_transaction_is_classified(txs in transactions()) {
        let summary = AggregationEngine::summarize_transactions(&txs, &DateRange::all());
        let income: Decimal = txs
            .iter()
            .filter(|t| AggregationEngine::classify_kind(t) == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let everything: Decimal = txs.iter().map(|t| t.amount).sum();
        prop_assert_eq!(summary.income, income);
        prop_assert_eq!(summary.income + summary.expense, everything);
    }
}
