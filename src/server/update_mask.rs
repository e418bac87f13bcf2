//! Field-mask interpretation for `UpdateBeer`.
//!
//! The mask names which attributes of the request's beer to apply. Paths are
//! matched case-insensitively, in any order, and repeating a path is
//! harmless. The first path outside the recognised set rejects the whole
//! request; later paths are not examined.

use std::str::FromStr;

use prost_types::FieldMask;

use crate::UpdateBeerParams;

use super::convert::beer_type_from_wire;
use super::proto;

/// A beer attribute that may appear in an update mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeerField {
    Name,
    Type,
    Brewer,
    Country,
}

impl BeerField {
    /// Canonical mask path.
    pub fn path(self) -> &'static str {
        match self {
            BeerField::Name => "name",
            BeerField::Type => "type",
            BeerField::Brewer => "brewer",
            BeerField::Country => "country",
        }
    }
}

impl FromStr for BeerField {
    type Err = MaskError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path.to_lowercase().as_str() {
            "name" => Ok(BeerField::Name),
            "type" => Ok(BeerField::Type),
            "brewer" => Ok(BeerField::Brewer),
            "country" => Ok(BeerField::Country),
            other => Err(MaskError::InvalidField(other.to_string())),
        }
    }
}

/// Malformed update request. Reported to callers as `INVALID_ARGUMENT`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("no fields specified")]
    Missing,

    #[error("invalid beer field: {0}")]
    InvalidField(String),
}

impl From<MaskError> for tonic::Status {
    fn from(err: MaskError) -> Self {
        tonic::Status::invalid_argument(err.to_string())
    }
}

/// Build a sparse patch from a full beer value and its update mask.
///
/// The identifier always comes from `beer`; every other field is set only
/// when the mask names it.
pub fn update_params(
    beer: proto::Beer,
    mask: Option<FieldMask>,
) -> Result<UpdateBeerParams, MaskError> {
    let mask = mask.ok_or(MaskError::Missing)?;

    let mut params = UpdateBeerParams::new(beer.id);
    for path in &mask.paths {
        match path.parse::<BeerField>()? {
            BeerField::Name => params.name = Some(beer.name.clone()),
            BeerField::Type => params.beer_type = Some(beer_type_from_wire(beer.r#type)),
            BeerField::Brewer => params.brewer = Some(beer.brewer.clone()),
            BeerField::Country => params.country = Some(beer.country.clone()),
        }
    }
    Ok(params)
}

/// The mask naming exactly the fields present in `params`.
pub fn mask_for(params: &UpdateBeerParams) -> FieldMask {
    let present = [
        (params.name.is_some(), BeerField::Name),
        (params.beer_type.is_some(), BeerField::Type),
        (params.brewer.is_some(), BeerField::Brewer),
        (params.country.is_some(), BeerField::Country),
    ];
    FieldMask {
        paths: present
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, field)| field.path().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BeerType;

    fn beer() -> proto::Beer {
        proto::Beer {
            id: "id".to_string(),
            name: "name".to_string(),
            r#type: proto::BeerType::Stout as i32,
            brewer: "brewer".to_string(),
            country: "Country".to_string(),
        }
    }

    fn mask(paths: &[&str]) -> Option<FieldMask> {
        Some(FieldMask {
            paths: paths.iter().map(|p| p.to_string()).collect(),
        })
    }

    #[test]
    fn missing_mask_is_rejected() {
        assert_eq!(update_params(beer(), None), Err(MaskError::Missing));
    }

    #[test]
    fn empty_mask_yields_empty_patch() {
        let params = update_params(beer(), mask(&[])).unwrap();
        assert_eq!(params.id, "id");
        assert!(params.is_empty());
    }

    #[test]
    fn mixed_case_paths_populate_every_field() {
        let params = update_params(beer(), mask(&["NaMe", "type", "Country", "breweR"])).unwrap();
        assert_eq!(
            params,
            UpdateBeerParams {
                id: "id".to_string(),
                name: Some("name".to_string()),
                beer_type: Some(BeerType::Stout),
                brewer: Some("brewer".to_string()),
                country: Some("Country".to_string()),
            }
        );
    }

    #[test]
    fn only_named_fields_are_set() {
        let params = update_params(beer(), mask(&["brewer"])).unwrap();
        assert_eq!(params.brewer.as_deref(), Some("brewer"));
        assert_eq!(params.name, None);
        assert_eq!(params.beer_type, None);
        assert_eq!(params.country, None);
    }

    #[test]
    fn duplicate_paths_are_idempotent() {
        let once = update_params(beer(), mask(&["name"])).unwrap();
        let twice = update_params(beer(), mask(&["name", "NAME", "name"])).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn path_order_does_not_matter() {
        let a = update_params(beer(), mask(&["country", "type"])).unwrap();
        let b = update_params(beer(), mask(&["type", "country"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_path_fails_fast() {
        let err = update_params(beer(), mask(&["name", "Invalid_Field", "abv"])).unwrap_err();
        assert_eq!(err, MaskError::InvalidField("invalid_field".to_string()));
        assert_eq!(err.to_string(), "invalid beer field: invalid_field");
    }

    #[test]
    fn mask_errors_become_invalid_argument() {
        let status = tonic::Status::from(MaskError::Missing);
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "no fields specified");
    }

    #[test]
    fn unspecified_type_in_mask_sets_unknown() {
        let mut b = beer();
        b.r#type = 77;
        let params = update_params(b, mask(&["type"])).unwrap();
        assert_eq!(params.beer_type, Some(BeerType::Unknown));
    }

    #[test]
    fn mask_for_round_trips_through_update_params() {
        let params = update_params(beer(), mask(&["country", "name"])).unwrap();
        let rebuilt = update_params(beer(), Some(mask_for(&params))).unwrap();
        assert_eq!(rebuilt, params);
    }
}
