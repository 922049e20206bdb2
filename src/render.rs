use crate::models::Product;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

#[derive(Debug, Clone, Default)]
pub struct Templates {
    pub overview: String,
    pub card: String,
    pub product: String,
}

pub fn replace_template(template: &str, product: &Product) -> String {
    let organic = if product.organic { "organic" } else { "" };
    template
        .replace("{%PRODUCTNAME%}", &product.product_name)
        .replace("{%IMAGE%}", &product.image)
        .replace("{%FROM%}", &product.from)
        .replace("{%NUTRIENTS%}", &product.nutrients)
        .replace("{%QUANTITY%}", &product.quantity)
        .replace("{%PRICE%}", &format!("{:.2}", product.price))
        .replace("{%ORGANIC%}", organic)
        .replace("{%DESCRIPTION%}", &product.description)
        .replace("{%ID%}", &product.id.to_string())
}

pub fn resolve_template_dir() -> PathBuf {
    if let Ok(path) = env::var("APP_TEMPLATE_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from("templates")
}

pub async fn load_templates(dir: &Path) -> Templates {
    Templates {
        overview: read_template(&dir.join("template-overview.html")).await,
        card: read_template(&dir.join("template-card.html")).await,
        product: read_template(&dir.join("template-product.html")).await,
    }
}

async fn read_template(path: &Path) -> String {
    match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) => {
            error!("failed to read template {}: {err}", path.display());
            String::new()
        }
    }
}
