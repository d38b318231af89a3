use crate::{
    dto::products::ProductList,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> ApiResponse<ProductList> {
    let items: Vec<_> = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => state
            .catalog
            .products_in(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.products().to_vec(),
    };

    let total = items.len() as i64;
    let meta = Meta::new(1, total, total);
    ApiResponse::success("Products", ProductList { items }, Some(meta))
}
