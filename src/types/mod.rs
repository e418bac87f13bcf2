//! Domain types for the beer catalog.

mod beer;
mod beer_type;
mod params;
mod validation;

pub use beer::Beer;
pub use beer_type::BeerType;
pub use params::{
    CreateBeerParams, DeleteBeerParams, GetBeerParams, ListBeersParams, UpdateBeerParams,
};
pub use validation::ValidationError;
