//! Speaker (`who`) and role (`ana`) attribution of utterances.

use parla_model::{UtteranceRecord, columns};
use tracing::warn;

use crate::error::{RenderError, Result};

/// Reference to the speaker of an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerRef {
    /// `#{LastName}{FirstName}` pointer.
    Known(String),
    /// No usable name; the `who` attribute is omitted.
    Unknown,
}

/// Keep only alphanumeric characters.
pub fn drop_punctuation(value: &str) -> String {
    value.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn strip_whitespace(value: &str) -> String {
    value.split_whitespace().collect()
}

/// Derive the `who` reference of a row.
///
/// A row without a roster last name has an unknown speaker. Otherwise the
/// roster names are used, falling back to the `Speaker_name` column
/// (`Last, First`); when neither works the speaker is unknown and a warning
/// names the row.
pub fn speaker_ref(row: &UtteranceRecord<'_>) -> SpeakerRef {
    let Some(last) = row.get(columns::LAST_NAME) else {
        return SpeakerRef::Unknown;
    };
    if let Some(first) = row.get(columns::FIRST_NAME) {
        return SpeakerRef::Known(format!(
            "#{}{}",
            strip_whitespace(last),
            strip_whitespace(first)
        ));
    }
    let speaker_name = row.get(columns::SPEAKER_NAME);
    if let Some((last, first)) = speaker_name.and_then(split_speaker_name) {
        return SpeakerRef::Known(format!(
            "#{}{}",
            drop_punctuation(&strip_whitespace(last)),
            drop_punctuation(&strip_whitespace(first))
        ));
    }
    warn!(
        id = row.id().unwrap_or_default(),
        speaker_name = speaker_name.unwrap_or_default(),
        lastname = last,
        firstname = row.get(columns::FIRST_NAME).unwrap_or_default(),
        "cannot derive speaker reference"
    );
    SpeakerRef::Unknown
}

/// `"Last, First[, ...]"` into its first two comma-separated parts.
fn split_speaker_name(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.split(',');
    let last = parts.next()?;
    let first = parts.next()?;
    Some((last, first))
}

/// `ana` pointer for a speaker role.
pub fn role_ana(role: Option<&str>, id: &str) -> Result<&'static str> {
    match role {
        Some("Chairperson") => Ok("#chair"),
        Some("Regular") => Ok("#regular"),
        other => Err(RenderError::UnmappedRole {
            id: id.to_string(),
            role: other.map(str::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parla_model::{Column, Table};

    fn table(lastname: Option<&str>, firstname: Option<&str>, speaker: Option<&str>) -> Table {
        let cell = |value: Option<&str>| vec![value.map(str::to_string)];
        Table::from_columns(vec![
            Column::text("ID", cell(Some("u1"))),
            Column::text("lastname", cell(lastname)),
            Column::text("firstname", cell(firstname)),
            Column::text("Speaker_name", cell(speaker)),
        ])
        .unwrap()
    }

    fn who(lastname: Option<&str>, firstname: Option<&str>, speaker: Option<&str>) -> SpeakerRef {
        let table = table(lastname, firstname, speaker);
        speaker_ref(&table.row(0).unwrap())
    }

    #[test]
    fn roster_names_with_whitespace_removed() {
        assert_eq!(
            who(Some("Van Der Berg"), Some("Ana Marija"), None),
            SpeakerRef::Known("#VanDerBergAnaMarija".to_string())
        );
    }

    #[test]
    fn null_last_name_is_unknown() {
        assert_eq!(
            who(None, Some("Ana"), Some("Horvat, Ana")),
            SpeakerRef::Unknown
        );
    }

    #[test]
    fn falls_back_to_speaker_name() {
        assert_eq!(
            who(Some("Horvat"), None, Some("Horvat-Kos, Ana M.")),
            SpeakerRef::Known("#HorvatKosAnaM".to_string())
        );
    }

    #[test]
    fn unknown_when_both_strategies_fail() {
        assert_eq!(who(Some("Horvat"), None, Some("Horvat")), SpeakerRef::Unknown);
        assert_eq!(who(Some("Horvat"), None, None), SpeakerRef::Unknown);
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(drop_punctuation("O'Neil-Šimić."), "ONeilŠimić");
        assert_eq!(drop_punctuation(""), "");
    }

    #[test]
    fn roles_map_to_ana() {
        assert_eq!(role_ana(Some("Chairperson"), "u1").unwrap(), "#chair");
        assert_eq!(role_ana(Some("Regular"), "u1").unwrap(), "#regular");
        assert!(matches!(
            role_ana(Some("Guest"), "u1"),
            Err(RenderError::UnmappedRole { ref role, .. }) if role.as_deref() == Some("Guest")
        ));
        assert!(matches!(
            role_ana(None, "u9"),
            Err(RenderError::UnmappedRole { role: None, .. })
        ));
    }
}
