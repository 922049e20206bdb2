use crate::models::Product;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/products.json")
}

pub async fn load_catalog(path: &Path) -> Catalog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(products) => Catalog::new(products),
            Err(err) => {
                error!("failed to parse product data: {err}");
                Catalog::default()
            }
        },
        Err(err) => {
            error!("failed to read product data: {err}");
            Catalog::default()
        }
    }
}
