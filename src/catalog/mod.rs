//! Catalog implementations

mod builder;
mod interactor;

pub use builder::{Alehouse, AlehouseBuilder};
pub use interactor::BeerInteractor;
