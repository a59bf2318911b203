//! Full merge over small in-memory source tables.

use indicatif::ProgressBar;
use parla_model::{Column, ColumnKind, Table};
use parla_segment::{Segmenter, SegmenterConfig};
use parla_transform::{MergeInputs, MergeOptions, TransformError, categorize_default, merge};

fn text(name: &str, values: &[Option<&str>]) -> Column {
    Column::text(name, values.iter().map(|v| v.map(str::to_string)).collect())
}

fn inputs() -> MergeInputs {
    MergeInputs {
        text: Table::from_columns(vec![
            text(
                "ID",
                &[
                    Some("ParlaMint-HR_T9.S1.u1"),
                    Some("ParlaMint-HR_T9.S1.u2"),
                    Some("ParlaMint-HR_T9.S1.u3"),
                    Some("orphan"),
                ],
            ),
            text(
                "Text",
                &[
                    Some("Otvaram sjednicu. Riječ ima dr. Horvat."),
                    Some(""),
                    Some("Hvala."),
                    Some("Nema metapodataka."),
                ],
            ),
        ])
        .unwrap(),
        session_meta: Table::from_columns(vec![
            text(
                "ID",
                &[
                    Some("ParlaMint-HR_T9.S1.u3"),
                    Some("ParlaMint-HR_T9.S1.u2"),
                    Some("ParlaMint-HR_T9.S1.u1"),
                ],
            ),
            text("Term", &[Some("9"), Some("9"), Some("9")]),
            text("Codemp", &[Some("102"), None, Some("101")]),
            text("party", &[Some("SDP"), None, Some("HDZ")]),
            text(
                "Speaker_role",
                &[Some("Regular"), Some("Regular"), Some("Chairperson")],
            ),
        ])
        .unwrap(),
        speakers: Table::from_columns(vec![
            text("term2", &[Some("9"), Some("9")]),
            text("codemp", &[Some("101"), Some("102")]),
            text("lastname", &[Some("Horvat"), Some("Kovač")]),
            text("firstname", &[Some("Ana"), Some("Ivo")]),
            text("term1", &[Some("9"), Some("9")]),
        ])
        .unwrap(),
        parties: Table::from_columns(vec![
            text("term2", &[Some("9")]),
            text("party", &[Some("HDZ")]),
            text("term1", &[Some("9")]),
            text("ruling", &[Some("True")]),
        ])
        .unwrap(),
    }
}

#[test]
fn merges_in_text_order_with_sentences() {
    let mut segmenter = Segmenter::new(SegmenterConfig::default());
    let outcome = merge(
        inputs(),
        &mut segmenter,
        &ProgressBar::hidden(),
        &MergeOptions::default(),
    )
    .unwrap();
    let table = &outcome.table;

    assert_eq!(table.height(), 3);
    assert_eq!(table.value(0, "ID"), Some("ParlaMint-HR_T9.S1.u1"));
    assert_eq!(table.value(2, "ID"), Some("ParlaMint-HR_T9.S1.u3"));
    assert_eq!(table.value(0, "term2"), Some("9"));
    assert_eq!(table.value(0, "lastname"), Some("Horvat"));
    assert_eq!(table.value(1, "lastname"), None);
    assert_eq!(table.value(2, "lastname"), Some("Kovač"));
    assert_eq!(table.value(0, "ruling"), Some("True"));
    assert_eq!(table.value(2, "ruling"), None);
    assert!(table.contains("term1_x"));
    assert!(table.contains("term1_y"));

    let first = table.row(0).unwrap();
    assert_eq!(
        first.sentences(),
        &["Otvaram sjednicu.".to_string(), "Riječ ima dr. Horvat.".to_string()]
    );
    assert!(table.row(1).unwrap().sentences().is_empty());

    assert_eq!(outcome.stats.text_rows, 4);
    assert_eq!(outcome.stats.utterances, 3);
    assert_eq!(outcome.stats.dropped_text_rows, 1);
    assert_eq!(outcome.stats.speaker_matches, 2);
    assert_eq!(outcome.stats.party_matches, 1);
    assert_eq!(outcome.stats.sentences, 3);
}

#[test]
fn normalizes_ids_when_requested() {
    let mut segmenter = Segmenter::new(SegmenterConfig::default());
    let options = MergeOptions::default().with_normalize_ids(true);
    let outcome = merge(inputs(), &mut segmenter, &ProgressBar::hidden(), &options).unwrap();

    assert_eq!(outcome.table.value(0, "ID"), Some("ParlaMint-HR_T09.S01.u1"));
    assert_eq!(outcome.stats.normalized_ids, 3);
    assert_eq!(outcome.stats.malformed_ids, 0);
}

#[test]
fn missing_term_column_is_an_error() {
    let mut sources = inputs();
    sources.session_meta = Table::from_columns(vec![text(
        "ID",
        &[Some("ParlaMint-HR_T9.S1.u1")],
    )])
    .unwrap();
    let mut segmenter = Segmenter::new(SegmenterConfig::default());
    let error = merge(
        sources,
        &mut segmenter,
        &ProgressBar::hidden(),
        &MergeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(error, TransformError::Model(_)));
}

#[test]
fn merged_metadata_columns_become_categorical() {
    let mut segmenter = Segmenter::new(SegmenterConfig::default());
    let mut outcome = merge(
        inputs(),
        &mut segmenter,
        &ProgressBar::hidden(),
        &MergeOptions::default(),
    )
    .unwrap();
    let report = categorize_default(&mut outcome.table);

    for name in ["ID", "Term", "Speaker_role", "lastname", "term1_x", "term1_y"] {
        assert!(report.converted.contains(&name.to_string()), "{name}");
        assert_eq!(
            outcome.table.column(name).unwrap().kind(),
            ColumnKind::Categorical
        );
    }
    assert!(report.failed.is_empty());
    assert_eq!(
        outcome.table.column("Text").unwrap().kind(),
        ColumnKind::Text
    );
    assert_eq!(outcome.table.value(0, "lastname"), Some("Horvat"));
}
