use serde::{Deserialize, Serialize};

/// A catalog item as exposed to the storefront
///
/// Rows come from the `commodities` table; field names on the wire are
/// PascalCase to match what the storefront frontend already consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Commodity {
    #[serde(rename = "CommodityID")]
    pub commodity_id: i32,
    pub name: String,
    pub image_path: Option<String>,
    pub price: f64,
    pub member_price: f64,
    pub description: Option<String>,
    /// Category tag
    #[sqlx(rename = "type")]
    #[serde(rename = "Type")]
    pub category: Option<String>,
}

/// Category tags present in a purchase history, first occurrence order,
/// without duplicates. Rows with no category contribute nothing.
pub fn categories_of(history: &[Commodity]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for category in history.iter().filter_map(|c| c.category.as_deref()) {
        if !categories.iter().any(|seen| seen == category) {
            categories.push(category.to_string());
        }
    }

    categories
}
