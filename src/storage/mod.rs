//! Storage adapters implementing [`BeerRepository`](crate::BeerRepository).

mod memory;

pub use memory::{IdGenerator, InMemoryBeerRepository};
