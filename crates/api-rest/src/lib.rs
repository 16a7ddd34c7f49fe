//! # API REST
//!
//! HTTP surface for Scamwatch.
//!
//! Handles:
//! - server-rendered catalog pages (list route + detail route per catalog)
//! - the JSON API with OpenAPI/Swagger documentation
//! - fallback navigation for unknown paths
//!
//! Every catalog request is one page visit: it builds fresh view state through
//! [`CatalogService::visit`], applies the request's filters and renders. No state is shared
//! between requests beyond the immutable [`AppState`].

#![warn(rust_2018_idioms)]

pub mod pages;

use api_shared::{CatalogItem, CatalogListRes, HealthRes, HealthService};
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, Json, Redirect},
    routing::get,
    Router,
};
use scamwatch_core::{
    CatalogEntity, CatalogKind, CatalogService, CatalogView, LoadPhase, ScamRecord, TacticRecord,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalogs: CatalogService,
}

/// Filters accepted by list routes.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Free-text query matched against name, description and characteristics.
    pub q: Option<String>,
    /// Exact category, or `all` for no restriction.
    pub category: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, api_list_scams, api_get_scam, api_list_tactics, api_get_tactic),
    components(schemas(HealthRes, CatalogItem, CatalogListRes))
)]
pub struct ApiDoc;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/scams", get(catalog_list::<ScamRecord>))
        .route("/scams/:id", get(catalog_detail::<ScamRecord>))
        .route("/dark-patterns", get(catalog_list::<TacticRecord>))
        .route("/dark-patterns/:id", get(catalog_detail::<TacticRecord>))
        .route("/api/scams", get(api_list_scams))
        .route("/api/scams/:id", get(api_get_scam))
        .route("/api/dark-patterns", get(api_list_tactics))
        .route("/api/dark-patterns/:id", get(api_get_tactic))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn apply_params<T: CatalogEntity>(view: &mut CatalogView<T>, params: &ListParams) {
    if let Some(q) = &params.q {
        view.set_query(q.as_str());
    }
    // An empty category (unselected form control) means no restriction.
    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        view.set_category(category);
    }
}

async fn home() -> Html<String> {
    Html(pages::render_home())
}

/// List route for a catalog.
async fn catalog_list<T: CatalogEntity>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Html<String> {
    let mut view = state.catalogs.visit::<T>().await;
    apply_params(&mut view, &params);
    Html(pages::render_catalog(&view))
}

/// Detail route for a catalog. An unknown id renders the list view.
async fn catalog_detail<T: CatalogEntity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Html<String> {
    let mut view = state.catalogs.visit::<T>().await;
    apply_params(&mut view, &params);
    view.select_by_id(Some(&id));
    if view.selection().is_none() {
        tracing::debug!(catalog = %T::KIND, id = %id, "no such item; showing list");
    }
    Html(pages::render_catalog(&view))
}

/// Redirect unknown paths: below a catalog to its list route, otherwise home.
async fn fallback(uri: Uri) -> Redirect {
    let first = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    match CatalogKind::from_slug(first) {
        Some(kind) => Redirect::to(&format!("/{}", kind.slug())),
        None => Redirect::to("/"),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

fn list_response<'a, T>(view: &'a CatalogView<T>) -> CatalogListRes
where
    T: CatalogEntity,
    CatalogItem: From<&'a T>,
{
    let items: Vec<CatalogItem> = view.visible().into_iter().map(CatalogItem::from).collect();
    CatalogListRes {
        catalog: T::KIND.slug().to_string(),
        loaded: view.phase() == LoadPhase::Ready,
        query: view.query().to_string(),
        category: view.category().as_str().to_string(),
        categories: view
            .category_options()
            .into_iter()
            .map(str::to_string)
            .collect(),
        total: items.len(),
        items,
    }
}

async fn api_list<T>(state: &AppState, params: &ListParams) -> CatalogListRes
where
    T: CatalogEntity,
    for<'a> CatalogItem: From<&'a T>,
{
    let mut view = state.catalogs.visit::<T>().await;
    apply_params(&mut view, params);
    list_response(&view)
}

async fn api_get<T>(
    state: &AppState,
    id: &str,
) -> Result<Json<CatalogItem>, (StatusCode, &'static str)>
where
    T: CatalogEntity,
    for<'a> CatalogItem: From<&'a T>,
{
    let mut view = state.catalogs.visit::<T>().await;
    view.select_by_id(Some(id));
    view.selection()
        .map(|item| Json(CatalogItem::from(item)))
        .ok_or((StatusCode::NOT_FOUND, "Not found"))
}

#[utoipa::path(
    get,
    path = "/api/scams",
    params(ListParams),
    responses(
        (status = 200, description = "Filtered scam types", body = CatalogListRes)
    )
)]
/// List scam types matching the query and category.
///
/// A CMS failure is reported as `loaded: false` with no items, never as an error status.
#[axum::debug_handler]
async fn api_list_scams(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<CatalogListRes> {
    Json(api_list::<ScamRecord>(&state, &params).await)
}

#[utoipa::path(
    get,
    path = "/api/scams/{id}",
    params(("id" = String, Path, description = "CMS item identifier")),
    responses(
        (status = 200, description = "Scam type", body = CatalogItem),
        (status = 404, description = "No scam type with this id")
    )
)]
/// Fetch one scam type by id.
#[axum::debug_handler]
async fn api_get_scam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, (StatusCode, &'static str)> {
    api_get::<ScamRecord>(&state, &id).await
}

#[utoipa::path(
    get,
    path = "/api/dark-patterns",
    params(ListParams),
    responses(
        (status = 200, description = "Filtered deceptive tactics", body = CatalogListRes)
    )
)]
/// List deceptive design tactics matching the query and category.
#[axum::debug_handler]
async fn api_list_tactics(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<CatalogListRes> {
    Json(api_list::<TacticRecord>(&state, &params).await)
}

#[utoipa::path(
    get,
    path = "/api/dark-patterns/{id}",
    params(("id" = String, Path, description = "CMS item identifier")),
    responses(
        (status = 200, description = "Deceptive tactic", body = CatalogItem),
        (status = 404, description = "No tactic with this id")
    )
)]
/// Fetch one deceptive design tactic by id.
#[axum::debug_handler]
async fn api_get_tactic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, (StatusCode, &'static str)> {
    api_get::<TacticRecord>(&state, &id).await
}
