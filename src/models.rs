//! Wire Models
//!
//! Data structures matching the recommendation backend's JSON contract.

use serde::{Deserialize, Serialize};

/// Request body for the recommendation endpoint.
///
/// Field names are fixed by the backend contract; the sets are sent as
/// sequences in whatever order the user toggled them on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub cuisines: Vec<String>,
    #[serde(rename = "foodTypes")]
    pub food_types: Vec<String>,
    #[serde(rename = "minPrice")]
    pub min_price: u32,
    #[serde(rename = "maxPrice")]
    pub max_price: u32,
}

/// One dish/restaurant pairing returned by the backend.
///
/// `price` is optional: the backend drops the field for menu rows it could
/// not parse a price out of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(rename = "Item_Name")]
    pub item_name: String,
    #[serde(rename = "Restaurant_Name")]
    pub restaurant_name: String,
    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "Food Type")]
    pub food_type: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
}

impl RecommendationItem {
    /// Display price, rounded to the nearest rupee. `None` when the backend
    /// sent no price for this row.
    pub fn price_label(&self) -> Option<String> {
        self.price.map(|p| format!("₹{}", p.round() as i64))
    }
}
