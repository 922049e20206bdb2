use crate::errors::AppError;
use crate::models::{ListQuery, Product};
use crate::pagination::{page_slice, pagination_html, total_pages};
use crate::render::replace_template;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 20;

pub async fn overview(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let limit = parse_param(query.limit.as_deref(), DEFAULT_LIMIT);
    let requested = parse_param(query.page.as_deref(), DEFAULT_PAGE);

    // out-of-range pages clamp to the last page
    let total = total_pages(state.catalog.len(), limit);
    let page = if total > 0 {
        requested.min(total)
    } else {
        DEFAULT_PAGE
    };

    let cards: String = page_slice(state.catalog.all(), page, limit)
        .iter()
        .map(|product| replace_template(&state.templates.card, product))
        .collect();

    let output = state
        .templates
        .overview
        .replace("{%PRODUCT_CARDS%}", &cards)
        .replace("{%PAGINATION%}", &pagination_html(page, total));

    Html(output)
}

pub async fn product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let product = lookup(&state, &id).ok_or_else(|| AppError::page_not_found("Product not found!"))?;
    Ok(Html(replace_template(&state.templates.product, product)))
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.all().to_vec())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = lookup(&state, &id).ok_or_else(|| AppError::api_not_found("Product not found"))?;
    Ok(Json(product.clone()))
}

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html("<h1>Page not found!</h1>"))
}

fn lookup<'a>(state: &'a AppState, id: &str) -> Option<&'a Product> {
    id.parse().ok().and_then(|id| state.catalog.by_id(id))
}

fn parse_param(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|parsed| *parsed >= 1)
        .unwrap_or(default)
}
