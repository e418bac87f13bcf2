//! Alehouse - a beer catalog served over gRPC
//!
//! The crate is layered the usual way for a small service:
//!
//! - [`types`]: the [`Beer`] entity, the [`BeerType`] taxonomy and one
//!   parameter object per operation, each able to validate itself.
//! - [`BeerRepository`]: the persistence port, with an in-memory adapter in
//!   [`storage`].
//! - [`BeerInteractor`]: validates parameters before any storage access and
//!   otherwise passes results through unchanged.
//! - `server`: the tonic service translating wire messages to parameter
//!   objects, interpreting update masks and classifying errors.
//!
//! # Example
//!
//! ```rust
//! use alehouse::{Alehouse, BeerCatalog, BeerType, CreateBeerParams, ListBeersParams};
//!
//! #[tokio::main]
//! async fn main() -> alehouse::Result<()> {
//!     let catalog = Alehouse::builder().build()?;
//!
//!     let beer = catalog
//!         .create_beer(CreateBeerParams::new("Guinness").beer_type(BeerType::Stout))
//!         .await?;
//!     assert!(!beer.id.is_empty());
//!
//!     let page = catalog.list_beers(ListBeersParams::new(1)).await?;
//!     assert_eq!(page.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod error;
pub mod import;
#[cfg(any(feature = "server", feature = "client"))]
pub mod server;
pub mod storage;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use catalog::{Alehouse, AlehouseBuilder, BeerInteractor};
pub use error::{AlehouseError, ErrorClass, Result};
pub use storage::InMemoryBeerRepository;
pub use traits::{BeerCatalog, BeerRepository};
pub use version::{PKG_VERSION, git_sha, version_string};

// Re-export all types
pub use types::{
    Beer, BeerType, CreateBeerParams, DeleteBeerParams, GetBeerParams, ListBeersParams,
    UpdateBeerParams, ValidationError,
};
