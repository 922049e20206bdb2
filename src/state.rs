use crate::catalog::Catalog;
use crate::render::Templates;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(catalog: Catalog, templates: Templates) -> Self {
        Self {
            catalog: Arc::new(catalog),
            templates: Arc::new(templates),
        }
    }
}
