//! Open Beer Database import.
//!
//! Reads the JSON export of the Open Beer Database (an array of records whose
//! `fields` object holds `name`, `style_name`, `name_breweries` and `country`)
//! and turns it into [`CreateBeerParams`]. Records without a name are skipped.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{BeerCatalog, BeerType, CreateBeerParams, Result};

/// One record of the export.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenBeerRecord {
    #[serde(default, rename = "datasetid")]
    pub dataset_id: String,
    #[serde(default, rename = "recordid")]
    pub record_id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl OpenBeerRecord {
    /// A string field, or `""` when missing or not a string.
    fn field(&self, name: &str) -> &str {
        self.fields.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Creation parameters for this record, `None` when it has no name.
    pub fn to_params(&self) -> Option<CreateBeerParams> {
        let name = self.field("name");
        if name.is_empty() {
            return None;
        }
        Some(
            CreateBeerParams::new(name)
                .beer_type(style_to_type(self.field("style_name")))
                .brewer(self.field("name_breweries"))
                .country(self.field("country")),
        )
    }
}

/// Parse an export into creation parameters, skipping unnamed records.
pub fn parse_export(json: &str) -> Result<Vec<CreateBeerParams>> {
    let records: Vec<OpenBeerRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let params: Vec<_> = records.iter().filter_map(OpenBeerRecord::to_params).collect();
    debug!(total, kept = params.len(), "parsed open beer database export");
    Ok(params)
}

/// Create every beer through `catalog`, stopping at the first failure.
///
/// Returns the number of beers created.
pub async fn import_into<C: BeerCatalog + ?Sized>(
    catalog: &C,
    beers: Vec<CreateBeerParams>,
) -> Result<usize> {
    let mut created = 0;
    for params in beers {
        catalog.create_beer(params).await?;
        created += 1;
    }
    info!(created, "import finished");
    Ok(created)
}

/// Map an Open Beer Database style name onto the catalog taxonomy.
pub fn style_to_type(style: &str) -> BeerType {
    match style {
        "Ordinary Bitter" | "Special Bitter or Best Bitter" => BeerType::Bitter,

        "American-Style Lager"
        | "American-Style Dark Lager"
        | "American-Style Light Lager"
        | "American-Style Cream Ale or Lager"
        | "American Rye Ale or Lager"
        | "Belgian-Style Quadrupel"
        | "European Low-Alcohol Lager"
        | "Specialty Honey Lager or Ale"
        | "Vienna-Style Lager" => BeerType::Lager,

        "American-Style India Pale Ale"
        | "American-Style India Black Ale"
        | "English-Style India Pale Ale"
        | "Imperial or Double India Pale Ale" => BeerType::IndiaPaleAle,

        "American-Style Imperial Stout"
        | "American-Style Stout"
        | "Classic Irish-Style Dry Stout"
        | "Foreign (Export)-Style Stout"
        | "Oatmeal Stout"
        | "Sweet Stout" => BeerType::Stout,

        "German-Style Pilsener" => BeerType::Pilsner,

        "Baltic-Style Porter" | "Porter" => BeerType::Porter,

        "American-Style Pale Ale"
        | "American-Style Strong Pale Ale"
        | "Belgian-Style Pale Ale"
        | "Belgian-Style Pale Strong Ale"
        | "Classic English-Style Pale Ale"
        | "English-Style Pale Mild Ale" => BeerType::PaleAle,

        "American-Style Amber/Red Ale"
        | "American-Style Barley Wine Ale"
        | "American-Style Brown Ale"
        | "Bamberg-Style Bock Rauchbier"
        | "Belgian-Style Dark Strong Ale"
        | "Belgian-Style Dubbel"
        | "Belgian-Style Fruit Lambic"
        | "Belgian-Style Tripel"
        | "Belgian-Style White"
        | "Dark American-Belgo-Style Ale"
        | "English-Style Dark Mild Ale"
        | "Extra Special Bitter"
        | "French & Belgian-Style Saison"
        | "Fruit Beer"
        | "German-Style Brown Ale/Altbier"
        | "German-Style Doppelbock"
        | "German-Style Heller Bock/Maibock"
        | "German-Style Oktoberfest"
        | "German-Style Schwarzbier"
        | "Golden or Blonde Ale"
        | "Herb and Spice Beer"
        | "Imperial or Double Red Ale"
        | "Irish-Style Red Ale"
        | "Kellerbier - Ale"
        | "Old Ale"
        | "Other Belgian-Style Ales"
        | "Pumpkin Beer"
        | "Scotch Ale"
        | "Scottish-Style Light Ale"
        | "Smoke Beer"
        | "South German-Style Hefeweizen"
        | "South German-Style Weizenbock"
        | "Specialty Beer"
        | "Strong Ale"
        | "Traditional German-Style Bock"
        | "Winter Warmer" => BeerType::Ale,

        _ => BeerType::Unknown,
    }
}
