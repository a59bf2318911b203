//! Cardinality properties of the join engine.

use parla_model::{Column, Table};
use parla_transform::{JoinKind, join};
use proptest::prelude::*;

fn key_table(name: &str, keys: &[Option<u8>], payload: &str) -> Table {
    let height = keys.len();
    Table::from_columns(vec![
        Column::text(name, keys.iter().map(|k| k.map(|k| k.to_string())).collect()),
        Column::text(
            payload,
            (0..height).map(|row| Some(format!("{payload}{row}"))).collect(),
        ),
    ])
    .unwrap()
}

proptest! {
    #[test]
    fn left_join_preserves_left_rows_and_order(
        left_keys in prop::collection::vec(prop::option::of(0u8..8), 0..40),
        right_keys in prop::collection::vec(prop::option::of(0u8..8), 0..40),
    ) {
        let left = key_table("k", &left_keys, "l");
        let right = key_table("k", &right_keys, "r");
        let outcome = join(&left, &right, &["k"], &["k"], JoinKind::Left).unwrap();

        prop_assert_eq!(outcome.table.height(), left.height());
        for row in 0..left.height() {
            prop_assert_eq!(outcome.table.value(row, "l"), left.value(row, "l"));
        }
    }

    #[test]
    fn inner_join_keeps_exactly_the_matching_rows(
        left_keys in prop::collection::vec(prop::option::of(0u8..8), 0..40),
        right_keys in prop::collection::vec(prop::option::of(0u8..8), 0..40),
    ) {
        let left = key_table("k", &left_keys, "l");
        let right = key_table("k", &right_keys, "r");
        let outcome = join(&left, &right, &["k"], &["k"], JoinKind::Inner).unwrap();

        let expected = left_keys
            .iter()
            .filter(|key| key.is_some() && right_keys.contains(key))
            .count();
        prop_assert_eq!(outcome.table.height(), expected);
        prop_assert_eq!(outcome.matched, expected);
    }
}
