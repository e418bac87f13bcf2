//! The closed beer style taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Beer style.
///
/// `Unknown` is the sentinel for anything unrecognised. Every conversion into
/// this type is total: out-of-range codes and unknown labels fall back to
/// `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeerType {
    #[default]
    Unknown,
    /// <https://en.wikipedia.org/wiki/Ale>
    Ale,
    /// <https://en.wikipedia.org/wiki/Bitter_(beer)>
    Bitter,
    /// <https://en.wikipedia.org/wiki/Lager>
    Lager,
    /// <https://en.wikipedia.org/wiki/India_pale_ale>
    IndiaPaleAle,
    /// <https://en.wikipedia.org/wiki/Stout>
    Stout,
    /// <https://en.wikipedia.org/wiki/Pilsner>
    Pilsner,
    /// <https://en.wikipedia.org/wiki/Porter_(beer)>
    Porter,
    /// <https://en.wikipedia.org/wiki/Pale_ale>
    PaleAle,
}

impl BeerType {
    /// All variants in storage-code order.
    pub const ALL: [BeerType; 9] = [
        BeerType::Unknown,
        BeerType::Ale,
        BeerType::Bitter,
        BeerType::Lager,
        BeerType::IndiaPaleAle,
        BeerType::Stout,
        BeerType::Pilsner,
        BeerType::Porter,
        BeerType::PaleAle,
    ];

    /// Storage code, `1..=9` in declaration order.
    pub fn code(self) -> i32 {
        match self {
            BeerType::Unknown => 1,
            BeerType::Ale => 2,
            BeerType::Bitter => 3,
            BeerType::Lager => 4,
            BeerType::IndiaPaleAle => 5,
            BeerType::Stout => 6,
            BeerType::Pilsner => 7,
            BeerType::Porter => 8,
            BeerType::PaleAle => 9,
        }
    }

    /// Decode a storage code. Codes outside `1..=9` yield `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => BeerType::Ale,
            3 => BeerType::Bitter,
            4 => BeerType::Lager,
            5 => BeerType::IndiaPaleAle,
            6 => BeerType::Stout,
            7 => BeerType::Pilsner,
            8 => BeerType::Porter,
            9 => BeerType::PaleAle,
            _ => BeerType::Unknown,
        }
    }

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            BeerType::Unknown => "Unknown",
            BeerType::Ale => "Ale",
            BeerType::Bitter => "Bitter",
            BeerType::Lager => "Lager",
            BeerType::IndiaPaleAle => "IndiaPaleAle",
            BeerType::Stout => "Stout",
            BeerType::Pilsner => "Pilsner",
            BeerType::Porter => "Porter",
            BeerType::PaleAle => "PaleAle",
        }
    }
}

impl fmt::Display for BeerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerType {
    type Err = std::convert::Infallible;

    /// Case-insensitive label match; `"ipa"` is accepted for `IndiaPaleAle`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("ipa") {
            return Ok(BeerType::IndiaPaleAle);
        }
        Ok(BeerType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
            .unwrap_or_default())
    }
}
