//! The beer catalog entry.

use serde::{Deserialize, Serialize};

use super::{BeerType, ValidationError};

/// One catalog entry.
///
/// The identifier is assigned by the repository at creation time and never
/// changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub beer_type: BeerType,
    #[serde(default)]
    pub brewer: String,
    #[serde(default)]
    pub country: String,
}

impl Beer {
    /// A persisted beer must carry an identifier.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_id());
        }
        Ok(())
    }
}
