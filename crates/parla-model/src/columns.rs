//! Column names used by the merge and render stages.
//!
//! Names are case-sensitive and match the headers of the source files:
//! the session metadata uses `Codemp`, the speaker roster `codemp`.

/// Utterance identifier, shared by the text file and the session metadata.
pub const ID: &str = "ID";
/// Raw utterance text from the text file.
pub const TEXT: &str = "Text";
/// Parliamentary term in the session metadata.
pub const TERM: &str = "Term";
/// Join key present on both roster tables, derived from [`TERM`] on the left side.
pub const TERM_KEY: &str = "term2";
/// Speaker code in the session metadata.
pub const SPEAKER_CODE: &str = "Codemp";
/// Speaker code in the speaker roster.
pub const ROSTER_SPEAKER_CODE: &str = "codemp";
/// Party code shared by the speaker roster and the party roster.
pub const PARTY: &str = "party";
/// Session start date (ISO-8601).
pub const FROM: &str = "From";
/// Session end date (ISO-8601).
pub const TO: &str = "To";
pub const LAST_NAME: &str = "lastname";
pub const FIRST_NAME: &str = "firstname";
/// Combined `Last, First` speaker name from the session metadata.
pub const SPEAKER_NAME: &str = "Speaker_name";
pub const SPEAKER_ROLE: &str = "Speaker_role";
/// Segmenter output column.
pub const SENTENCES: &str = "sentences";

/// Columns recast to categorical storage after the merge.
///
/// Suffixed names (`term1_x`, `education_y`, ...) are the result of joining
/// rosters that share non-key column names.
pub const CATEGORICAL_COLUMNS: &[&str] = &[
    "ID",
    "Title",
    "From",
    "To",
    "House",
    "Term",
    "Session",
    "Meeting",
    "Sitting",
    "Agenda",
    "Subcorpus",
    "Speaker_role",
    "Speaker_type",
    "Speaker_party",
    "Speaker_party_name",
    "Party_status",
    "Speaker_name",
    "Speaker_gender",
    "Speaker_birth",
    "Codemp",
    "Codeparty",
    "term2",
    "codemp",
    "order_id",
    "term1_x",
    "term_id",
    "type_of_list",
    "fullname",
    "firstname",
    "lastname",
    "party",
    "date_of_birth",
    "year_of_birth",
    "gender",
    "place_of_birth",
    "field_of_study",
    "education_y",
    "constituency",
    "bp_lat",
    "bp_lon",
    "codeparty",
    "term1_y",
    "full_name",
    "established",
    "chairman",
    "ideology_LR",
    "party_family",
    "election_result",
    "no_seats",
    "coalition",
    "coalition_composition",
    "ruling",
];
