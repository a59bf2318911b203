//! Document assembly and statistics backfill.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use parla_model::{Table, columns};
use tracing::{debug, info, info_span};

use crate::TEI_NS;
use crate::attribution::{SpeakerRef, role_ana, speaker_ref};
use crate::error::{RenderError, Result};
use crate::header::{HeaderContext, HeaderProfile, build_header, profile_for};
use crate::numbers::group_thousands;
use crate::tree::Element;
use crate::writer::to_xml_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub term: u32,
    pub session: u32,
    /// Data language code; selects the header profile and sets `TEI/@xml:lang`.
    pub language: String,
    /// Date recorded in `revisionDesc`.
    pub compiled_on: NaiveDate,
}

impl RenderOptions {
    /// Options compiled today.
    pub fn new(term: u32, session: u32, language: impl Into<String>) -> Self {
        Self {
            term,
            session,
            language: language.into(),
            compiled_on: Local::now().date_naive(),
        }
    }

    pub fn with_compiled_on(mut self, compiled_on: NaiveDate) -> Self {
        self.compiled_on = compiled_on;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub utterances: usize,
    pub segments: usize,
    pub words: usize,
    /// Rows without sentences; they produce no utterance.
    pub skipped_rows: usize,
    pub unknown_speakers: usize,
}

/// A fully rendered session document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    root: Element,
    xml: String,
    stats: RenderStats,
}

impl RenderedDocument {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn xml(&self) -> &str {
        &self.xml
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }
}

/// Lexicographic minimum of `From` and maximum of `To` over non-null values.
pub fn session_date_range(table: &Table) -> Option<(String, String)> {
    let min = table
        .rows()
        .filter_map(|row| row.get(columns::FROM))
        .min()?;
    let max = table.rows().filter_map(|row| row.get(columns::TO)).max()?;
    Some((min.to_string(), max.to_string()))
}

/// Render the merged dataset of one session.
///
/// The whole document is built in memory; nothing is written here.
pub fn render(table: &Table, options: &RenderOptions) -> Result<RenderedDocument> {
    let span = info_span!("render", term = options.term, session = options.session);
    let _guard = span.enter();

    if !table.contains(columns::SENTENCES) {
        return Err(RenderError::MissingColumn {
            name: columns::SENTENCES.to_string(),
        });
    }

    let language = options.language.trim().to_lowercase();
    let profile = profile_for(&language);
    let context = HeaderContext {
        term: options.term,
        session: options.session,
        date_range: session_date_range(table),
        compiled_on: options.compiled_on,
    };

    let mut stats = RenderStats::default();
    let div = utterances(table, &mut stats)?;
    let mut root = Element::new("TEI")
        .attr("xmlns", TEI_NS)
        .attr("xml:lang", language.as_str())
        .attr(
            "xml:id",
            format!(
                "ParlaMint-{}_T{:02}S{}",
                profile.country_code, options.term, options.session
            ),
        )
        .attr("ana", "#parla.term #reference")
        .child(build_header(profile, &context))
        .child(
            Element::new("text")
                .attr("ana", "#reference")
                .child(Element::new("body").child(div)),
        );

    backfill_tag_usage(&mut root);
    backfill_extent(&mut root, profile, stats.words);

    let xml = to_xml_string(&root)?;
    info!(
        utterances = stats.utterances,
        segments = stats.segments,
        words = stats.words,
        skipped_rows = stats.skipped_rows,
        unknown_speakers = stats.unknown_speakers,
        "document rendered"
    );
    Ok(RenderedDocument { root, xml, stats })
}

/// The `debateSection` div with one `u` per row that has sentences.
fn utterances(table: &Table, stats: &mut RenderStats) -> Result<Element> {
    let mut div = Element::new("div").attr("type", "debateSection");
    for row in table.rows() {
        let sentences = row.sentences();
        if sentences.is_empty() {
            stats.skipped_rows += 1;
            continue;
        }
        let id = row
            .id()
            .ok_or(RenderError::MissingId { row: row.index() })?;

        let mut u = Element::new("u");
        match speaker_ref(&row) {
            SpeakerRef::Known(reference) => u.set_attr("who", reference),
            SpeakerRef::Unknown => stats.unknown_speakers += 1,
        }
        u.set_attr("ana", role_ana(row.get(columns::SPEAKER_ROLE), id)?);
        u.set_attr("xml:id", id);
        u.set_attr("n", stats.utterances.to_string());

        for (ordinal, sentence) in sentences.iter().enumerate() {
            u.append(
                Element::new("seg")
                    .attr("xml:id", format!("{id}.s{ordinal}"))
                    .text(sentence.as_str()),
            );
            stats.words += sentence.split_whitespace().count();
        }
        stats.segments += sentences.len();
        stats.utterances += 1;
        div.append(u);
    }
    debug!(
        utterances = stats.utterances,
        skipped = stats.skipped_rows,
        "utterances built"
    );
    Ok(div)
}

/// Set every declared `tagUsage/@occurs` to the element count in the tree.
fn backfill_tag_usage(root: &mut Element) {
    let mut declared = Vec::new();
    root.for_each_descendant(&mut |element| {
        if element.name() == "tagUsage"
            && let Some(gi) = element.get_attr("gi")
        {
            declared.push(gi.to_string());
        }
    });
    let counts: HashMap<String, usize> = declared
        .into_iter()
        .map(|gi| {
            let count = root.count_named(&gi);
            (gi, count)
        })
        .collect();
    root.for_each_descendant_mut(&mut |element| {
        if element.name() != "tagUsage" {
            return;
        }
        let count = element
            .get_attr("gi")
            .and_then(|gi| counts.get(gi))
            .copied()
            .unwrap_or(0);
        element.set_attr("occurs", count.to_string());
    });
}

/// Fill `extent/measure` quantities and texts.
///
/// Measures in the profile's local language use its separator and nouns;
/// all others are English.
fn backfill_extent(root: &mut Element, profile: &HeaderProfile, words: usize) {
    let speeches = root.count_named("u") as u64;
    let words = words as u64;
    root.for_each_descendant_mut(&mut |element| {
        if element.name() != "measure" {
            return;
        }
        let local = element.get_attr("xml:lang") == Some(profile.local_language);
        let (quantity, local_noun, english_noun) = match element.get_attr("unit") {
            Some("speeches") => (speeches, profile.speeches_noun, "speeches"),
            Some("words") => (words, profile.words_noun, "words"),
            _ => return,
        };
        let text = if local {
            format!(
                "{} {local_noun}",
                group_thousands(quantity, profile.thousands_separator)
            )
        } else {
            format!("{} {english_noun}", group_thousands(quantity, ','))
        };
        element.set_attr("quantity", quantity.to_string());
        element.set_text(text);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use parla_model::Column;

    fn sample_table() -> Table {
        let text = |values: &[Option<&str>]| -> Vec<Option<String>> {
            values.iter().map(|v| v.map(str::to_string)).collect()
        };
        Table::from_columns(vec![
            Column::text("ID", text(&[Some("A"), Some("B"), Some("C")])),
            Column::text("From", text(&[Some("2019-01-02"), None, Some("2019-01-01")])),
            Column::text("To", text(&[Some("2019-01-02"), Some("2019-01-05"), None])),
            Column::text("lastname", text(&[Some("Horvat"), None, None])),
            Column::text("firstname", text(&[Some("Ana"), None, None])),
            Column::text(
                "Speaker_role",
                text(&[Some("Chairperson"), Some("Unexpected"), Some("Regular")]),
            ),
            Column::sentences(
                "sentences",
                vec![
                    vec!["Dobar dan.".into(), "Otvaram sjednicu.".into()],
                    Vec::new(),
                    vec!["Hvala lijepa.".into()],
                ],
            ),
        ])
        .unwrap()
    }

    fn options() -> RenderOptions {
        RenderOptions::new(9, 3, "HR")
            .with_compiled_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn utterance_numbering_skips_rows_without_sentences() {
        let document = render(&sample_table(), &options()).unwrap();
        let div = document.root().find_path(&["text", "body", "div"]).unwrap();
        let us: Vec<&Element> = div.child_elements().collect();
        assert_eq!(us.len(), 2);
        assert_eq!(us[0].get_attr("xml:id"), Some("A"));
        assert_eq!(us[0].get_attr("n"), Some("0"));
        assert_eq!(us[0].get_attr("who"), Some("#HorvatAna"));
        assert_eq!(us[0].get_attr("ana"), Some("#chair"));
        assert_eq!(us[1].get_attr("xml:id"), Some("C"));
        assert_eq!(us[1].get_attr("n"), Some("1"));
        assert_eq!(us[1].get_attr("who"), None);
        assert_eq!(us[1].get_attr("ana"), Some("#regular"));

        let segs: Vec<&Element> = us[0].child_elements().collect();
        assert_eq!(segs[1].get_attr("xml:id"), Some("A.s1"));
        assert_eq!(segs[1].own_text(), "Otvaram sjednicu.");

        let stats = document.stats();
        assert_eq!(stats.utterances, 2);
        assert_eq!(stats.segments, 3);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.skipped_rows, 1);
        assert_eq!(stats.unknown_speakers, 1);
    }

    #[test]
    fn root_identifies_the_session() {
        let document = render(&sample_table(), &options()).unwrap();
        let root = document.root();
        assert_eq!(root.get_attr("xmlns"), Some(TEI_NS));
        assert_eq!(root.get_attr("xml:lang"), Some("hr"));
        assert_eq!(root.get_attr("xml:id"), Some("ParlaMint-HR_T09S3"));
        assert_eq!(root.get_attr("ana"), Some("#parla.term #reference"));
    }

    #[test]
    fn header_statistics_match_the_body() {
        let document = render(&sample_table(), &options()).unwrap();
        let root = document.root();
        let mut occurs = HashMap::new();
        root.for_each_descendant(&mut |element| {
            if element.name() == "tagUsage" {
                occurs.insert(
                    element.get_attr("gi").unwrap().to_string(),
                    element.get_attr("occurs").unwrap().to_string(),
                );
            }
        });
        assert_eq!(occurs["u"], "2");
        assert_eq!(occurs["seg"], "3");
        assert_eq!(occurs["text"], "1");
        assert_eq!(occurs["note"], "0");

        let extent = root.find_path(&["teiHeader", "fileDesc", "extent"]).unwrap();
        let measures: Vec<(String, String)> = extent
            .child_elements()
            .map(|m| (m.get_attr("quantity").unwrap().to_string(), m.own_text()))
            .collect();
        assert_eq!(
            measures,
            vec![
                ("2".to_string(), "2 govora".to_string()),
                ("2".to_string(), "2 speeches".to_string()),
                ("6".to_string(), "6 riječi".to_string()),
                ("6".to_string(), "6 words".to_string()),
            ]
        );
    }

    #[test]
    fn unmapped_role_aborts() {
        let mut table = sample_table();
        table
            .replace_column(
                "sentences",
                parla_model::ColumnData::Sentences(vec![
                    vec!["Jedan.".into()],
                    vec!["Dva.".into()],
                    Vec::new(),
                ]),
            )
            .unwrap();
        let error = render(&table, &options()).unwrap_err();
        assert!(matches!(error, RenderError::UnmappedRole { ref id, .. } if id == "B"));
    }

    #[test]
    fn date_range_is_lexicographic_over_non_null_values() {
        assert_eq!(
            session_date_range(&sample_table()),
            Some(("2019-01-01".to_string(), "2019-01-05".to_string()))
        );
    }

    #[test]
    fn missing_sentences_column_is_an_error() {
        let table = Table::from_columns(vec![Column::text("ID", vec![Some("A".into())])]).unwrap();
        assert!(matches!(
            render(&table, &options()),
            Err(RenderError::MissingColumn { .. })
        ));
    }
}
