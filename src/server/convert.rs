//! Conversions between alehouse native types and protobuf types.
//!
//! Server-side: proto → native for requests, native → proto for responses.
//! Client-side: the reverse direction, in the second half of this file.
//! Field-mask handling for updates lives in [`super::update_mask`].

use crate::{
    Beer, BeerType, CreateBeerParams, DeleteBeerParams, GetBeerParams, ListBeersParams,
    UpdateBeerParams,
};

use super::proto;
use super::update_mask;

// =============================================================================
// Beer type
// =============================================================================

impl From<proto::BeerType> for BeerType {
    fn from(p: proto::BeerType) -> Self {
        match p {
            proto::BeerType::Ale => BeerType::Ale,
            proto::BeerType::Bitter => BeerType::Bitter,
            proto::BeerType::Lager => BeerType::Lager,
            proto::BeerType::IndiaPaleAle => BeerType::IndiaPaleAle,
            proto::BeerType::Stout => BeerType::Stout,
            proto::BeerType::Pilsner => BeerType::Pilsner,
            proto::BeerType::Porter => BeerType::Porter,
            proto::BeerType::PaleAle => BeerType::PaleAle,
            proto::BeerType::Unspecified => BeerType::Unknown,
        }
    }
}

impl From<BeerType> for proto::BeerType {
    fn from(t: BeerType) -> Self {
        match t {
            BeerType::Ale => proto::BeerType::Ale,
            BeerType::Bitter => proto::BeerType::Bitter,
            BeerType::Lager => proto::BeerType::Lager,
            BeerType::IndiaPaleAle => proto::BeerType::IndiaPaleAle,
            BeerType::Stout => proto::BeerType::Stout,
            BeerType::Pilsner => proto::BeerType::Pilsner,
            BeerType::Porter => proto::BeerType::Porter,
            BeerType::PaleAle => proto::BeerType::PaleAle,
            BeerType::Unknown => proto::BeerType::Unspecified,
        }
    }
}

/// Decode a raw wire enum value. Values the schema does not know become
/// [`BeerType::Unknown`].
pub fn beer_type_from_wire(value: i32) -> BeerType {
    proto::BeerType::try_from(value)
        .unwrap_or(proto::BeerType::Unspecified)
        .into()
}

/// Encode a beer type as a raw wire enum value.
pub fn beer_type_to_wire(beer_type: BeerType) -> i32 {
    proto::BeerType::from(beer_type) as i32
}

// =============================================================================
// From Proto → Native (incoming requests)
// =============================================================================

impl From<proto::CreateBeerRequest> for CreateBeerParams {
    fn from(p: proto::CreateBeerRequest) -> Self {
        CreateBeerParams {
            name: p.name,
            beer_type: beer_type_from_wire(p.r#type),
            brewer: p.brewer,
            country: p.country,
        }
    }
}

impl From<proto::GetBeerRequest> for GetBeerParams {
    fn from(p: proto::GetBeerRequest) -> Self {
        GetBeerParams { id: p.id }
    }
}

impl From<proto::DeleteBeerRequest> for DeleteBeerParams {
    fn from(p: proto::DeleteBeerRequest) -> Self {
        DeleteBeerParams { id: p.id }
    }
}

impl From<proto::ListBeersRequest> for ListBeersParams {
    fn from(p: proto::ListBeersRequest) -> Self {
        ListBeersParams { page: p.page }
    }
}

// =============================================================================
// Native → Proto (outgoing responses)
// =============================================================================

impl From<Beer> for proto::Beer {
    fn from(b: Beer) -> Self {
        proto::Beer {
            id: b.id,
            name: b.name,
            r#type: beer_type_to_wire(b.beer_type),
            brewer: b.brewer,
            country: b.country,
        }
    }
}

impl From<Vec<Beer>> for proto::ListBeersResponse {
    fn from(beers: Vec<Beer>) -> Self {
        proto::ListBeersResponse {
            beers: beers.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Client side: Native → Proto requests, Proto → Native responses
// =============================================================================

impl From<CreateBeerParams> for proto::CreateBeerRequest {
    fn from(p: CreateBeerParams) -> Self {
        proto::CreateBeerRequest {
            name: p.name,
            r#type: beer_type_to_wire(p.beer_type),
            brewer: p.brewer,
            country: p.country,
        }
    }
}

impl From<GetBeerParams> for proto::GetBeerRequest {
    fn from(p: GetBeerParams) -> Self {
        proto::GetBeerRequest { id: p.id }
    }
}

impl From<DeleteBeerParams> for proto::DeleteBeerRequest {
    fn from(p: DeleteBeerParams) -> Self {
        proto::DeleteBeerRequest { id: p.id }
    }
}

impl From<ListBeersParams> for proto::ListBeersRequest {
    fn from(p: ListBeersParams) -> Self {
        proto::ListBeersRequest { page: p.page }
    }
}

impl From<UpdateBeerParams> for proto::UpdateBeerRequest {
    fn from(p: UpdateBeerParams) -> Self {
        let update_mask = Some(update_mask::mask_for(&p));
        proto::UpdateBeerRequest {
            beer: Some(proto::Beer {
                id: p.id,
                name: p.name.unwrap_or_default(),
                r#type: beer_type_to_wire(p.beer_type.unwrap_or_default()),
                brewer: p.brewer.unwrap_or_default(),
                country: p.country.unwrap_or_default(),
            }),
            update_mask,
        }
    }
}

impl From<proto::Beer> for Beer {
    fn from(p: proto::Beer) -> Self {
        Beer {
            id: p.id,
            name: p.name,
            beer_type: beer_type_from_wire(p.r#type),
            brewer: p.brewer,
            country: p.country,
        }
    }
}

impl From<proto::ListBeersResponse> for Vec<Beer> {
    fn from(p: proto::ListBeersResponse) -> Self {
        p.beers.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_beer_type_survives_the_wire() {
        for ty in BeerType::ALL {
            assert_eq!(beer_type_from_wire(beer_type_to_wire(ty)), ty);
        }
    }

    #[test]
    fn unknown_maps_to_the_unspecified_sentinel() {
        assert_eq!(beer_type_to_wire(BeerType::Unknown), 0);
        assert_eq!(beer_type_from_wire(0), BeerType::Unknown);
    }

    #[test]
    fn unrecognised_wire_values_decode_as_unknown() {
        for value in [-100, -1, 9, 42, i32::MAX] {
            assert_eq!(beer_type_from_wire(value), BeerType::Unknown);
        }
    }

    #[test]
    fn create_request_maps_field_by_field() {
        let params: CreateBeerParams = proto::CreateBeerRequest {
            name: "Punk IPA".to_string(),
            r#type: proto::BeerType::IndiaPaleAle as i32,
            brewer: "BrewDog".to_string(),
            country: "Scotland".to_string(),
        }
        .into();
        assert_eq!(
            params,
            CreateBeerParams::new("Punk IPA")
                .beer_type(BeerType::IndiaPaleAle)
                .brewer("BrewDog")
                .country("Scotland")
        );
    }

    #[test]
    fn beer_round_trips_through_proto() {
        let beer = Beer {
            id: "id".to_string(),
            name: "London Pride".to_string(),
            beer_type: BeerType::Bitter,
            brewer: "Fuller's".to_string(),
            country: "England".to_string(),
        };
        let wire = proto::Beer::from(beer.clone());
        assert_eq!(wire.r#type, proto::BeerType::Bitter as i32);
        assert_eq!(Beer::from(wire), beer);
    }

    #[test]
    fn empty_list_response_has_no_beers() {
        let response = proto::ListBeersResponse::from(Vec::<Beer>::new());
        assert!(response.beers.is_empty());
    }

    #[test]
    fn update_request_carries_mask_for_present_fields_only() {
        let params = UpdateBeerParams {
            id: "id".to_string(),
            beer_type: Some(BeerType::Porter),
            country: Some("England".to_string()),
            ..Default::default()
        };
        let request = proto::UpdateBeerRequest::from(params);
        let beer = request.beer.unwrap();
        assert_eq!(beer.id, "id");
        assert_eq!(beer.r#type, proto::BeerType::Porter as i32);
        assert_eq!(request.update_mask.unwrap().paths, ["type", "country"]);
    }
}
