//! Utterance identifier parsing and normalization.
//!
//! Identifiers have the shape `ParlaMint-{lang}_T{term}.S{session}.{rest}`,
//! e.g. `ParlaMint-RS_T4.S2.u2565`. Normalized identifiers carry an uppercase
//! language code and two-digit term/session numbers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ModelError, Result};

static PARLAMINT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^ParlaMint-(?P<lang>[a-z]+)_T(?P<term>\d+)\.S(?P<session>.+?)\.(?P<rest>.+)$")
        .expect("Invalid ParlaMint identifier regex")
});

/// Session component: numeric sessions are zero-padded, anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPart {
    Number(i64),
    Label(String),
}

impl fmt::Display for SessionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value:02}"),
            Self::Label(value) => f.write_str(value),
        }
    }
}

/// Parsed utterance identifier. `Display` renders the normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParlaMintId {
    pub lang: String,
    pub term: u64,
    pub session: SessionPart,
    pub rest: String,
}

impl ParlaMintId {
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidIdentifier {
            value: value.to_string(),
        };
        let captures = PARLAMINT_ID_REGEX.captures(value).ok_or_else(invalid)?;
        let term = captures["term"].parse::<u64>().map_err(|_| invalid())?;
        let session_raw = &captures["session"];
        let session = match session_raw.parse::<i64>() {
            Ok(number) => SessionPart::Number(number),
            Err(_) => SessionPart::Label(session_raw.to_string()),
        };
        Ok(Self {
            lang: captures["lang"].to_uppercase(),
            term,
            session,
            rest: captures["rest"].to_string(),
        })
    }
}

impl fmt::Display for ParlaMintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParlaMint-{}_T{:02}.S{}.{}",
            self.lang, self.term, self.session, self.rest
        )
    }
}

/// Zero-pad term and session to two digits and uppercase the language code.
///
/// A non-numeric session is kept as-is; the term is still padded.
pub fn normalize_id(value: &str) -> Result<String> {
    ParlaMintId::parse(value).map(|id| id.to_string())
}
