use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub product_name: String,
    pub image: String,
    pub from: String,
    pub nutrients: String,
    pub quantity: String,
    pub price: f64,
    pub organic: bool,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}
