//! Origin languages and their single-letter answer codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five canonical origin languages a quiz word can be keyed to.
///
/// The seed dictionary stores these as single uppercase letters (`A`..`E`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Greek,
    Latin,
    OldEnglish,
    French,
    Norse,
}

impl Origin {
    /// All origins in code order.
    pub const ALL: [Origin; 5] = [
        Origin::Greek,
        Origin::Latin,
        Origin::OldEnglish,
        Origin::French,
        Origin::Norse,
    ];

    /// Resolve a seed-dictionary letter code (`"A"`..`"E"`).
    ///
    /// Returns `None` for anything else, including lowercase letters.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Origin::Greek),
            "B" => Some(Origin::Latin),
            "C" => Some(Origin::OldEnglish),
            "D" => Some(Origin::French),
            "E" => Some(Origin::Norse),
            _ => None,
        }
    }

    /// The letter code stored in the seed dictionary and the cache.
    pub fn code(&self) -> &'static str {
        match self {
            Origin::Greek => "A",
            Origin::Latin => "B",
            Origin::OldEnglish => "C",
            Origin::French => "D",
            Origin::Norse => "E",
        }
    }

    /// Full language name shown to the player.
    pub fn name(&self) -> &'static str {
        match self {
            Origin::Greek => "Greek",
            Origin::Latin => "Latin",
            Origin::OldEnglish => "Old English",
            Origin::French => "French",
            Origin::Norse => "Norse",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Origin {
    type Err = String;

    /// Accepts either a letter code or a full language name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Origin::from_code(s)
            .or_else(|| Origin::ALL.into_iter().find(|o| o.name() == s))
            .ok_or_else(|| format!("unknown origin: {s}"))
    }
}

/// Languages offered as answer options, canonical origins first.
///
/// Distractors are sampled from this list.
pub const LANGUAGE_POOL: &[&str] = &[
    "Greek",
    "Latin",
    "Old English",
    "French",
    "Norse",
    "German",
    "Spanish",
    "Italian",
    "Dutch",
    "Sanskrit",
    "Arabic",
    "Hebrew",
    "Celtic",
    "Slavic",
];
