//! Per-operation parameter objects.
//!
//! Each is built fresh for a single request, validated before any storage
//! access, and dropped once the call completes.

use serde::{Deserialize, Serialize};

use super::{BeerType, ValidationError};

/// Parameters for creating a beer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBeerParams {
    pub name: String,
    #[serde(rename = "type", default)]
    pub beer_type: BeerType,
    #[serde(default)]
    pub brewer: String,
    #[serde(default)]
    pub country: String,
}

impl CreateBeerParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn beer_type(mut self, beer_type: BeerType) -> Self {
        self.beer_type = beer_type;
        self
    }

    pub fn brewer(mut self, brewer: impl Into<String>) -> Self {
        self.brewer = brewer.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::empty_name());
        }
        Ok(())
    }
}

/// Parameters for fetching a beer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBeerParams {
    pub id: String,
}

impl GetBeerParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_id());
        }
        Ok(())
    }
}

/// A sparse patch for an existing beer.
///
/// `Some` means "apply this value", `None` means "leave the stored value
/// untouched".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBeerParams {
    pub id: String,
    pub name: Option<String>,
    pub beer_type: Option<BeerType>,
    pub brewer: Option<String>,
    pub country: Option<String>,
}

impl UpdateBeerParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_id());
        }
        Ok(())
    }

    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.beer_type.is_none()
            && self.brewer.is_none()
            && self.country.is_none()
    }
}

/// Parameters for deleting a beer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBeerParams {
    pub id: String,
}

impl DeleteBeerParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_id());
        }
        Ok(())
    }
}

/// Parameters for listing one page of beers. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBeersParams {
    pub page: i32,
}

impl ListBeersParams {
    pub fn new(page: i32) -> Self {
        Self { page }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page < 1 {
            return Err(ValidationError::new("page number less than one"));
        }
        Ok(())
    }
}

impl Default for ListBeersParams {
    fn default() -> Self {
        Self { page: 1 }
    }
}
