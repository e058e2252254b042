use serde::{Deserialize, Serialize};

pub type AssetId = String;

/// Stage every asset starts its life in.
pub const INITIAL_STAGE: &str = "Harvested";

/// Schema version written into every stored record. Readers reject records
/// carrying any other value so a future field change cannot be misread.
pub const SCHEMA_VERSION: u32 = 1;

/// A traceable food asset.
///
/// `asset_id`, `product_type`, `quantity`, `unit`, and `origin` are fixed at
/// creation; only `current_stage` and `owner` change afterwards. `owner` is
/// always the identity of the last caller to create or re-stage the record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssetRecord {
    pub schema: u32,
    pub asset_id: AssetId,
    pub product_type: String,
    pub quantity: f64,
    pub unit: String,
    pub origin: String,
    pub current_stage: String,
    pub owner: String,
}

impl AssetRecord {
    /// Builds the record a successful create writes: current schema,
    /// initial stage, creator as owner.
    pub fn new(
        asset_id: impl Into<AssetId>,
        product_type: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        origin: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            asset_id: asset_id.into(),
            product_type: product_type.into(),
            quantity,
            unit: unit.into(),
            origin: origin.into(),
            current_stage: INITIAL_STAGE.to_string(),
            owner: owner.into(),
        }
    }
}
