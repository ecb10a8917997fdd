//! Application router configuration with the JSON API and HTML page routes.

use axum::{
    Json, Router,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, put},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    error::MessageBody,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_create_expense_page, get_edit_expense_page, get_expenses_page,
        list_expenses_endpoint,
    },
    html::error_view,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            put(edit_expense_endpoint).delete(delete_expense_endpoint),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive());

    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_create_expense_page))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(get_edit_expense_page));

    api_routes
        .merge(page_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

/// API routes that exist but do not support the request method.
async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageBody::new(format!(
            "Method {method} is not allowed for {}",
            uri.path()
        ))),
    )
        .into_response()
}

/// Unknown API routes get a JSON message, everything else gets an HTML page.
async fn get_404_not_found(uri: Uri) -> Response {
    if uri.path().starts_with(endpoints::EXPENSES_API) {
        return (
            StatusCode::NOT_FOUND,
            Json(MessageBody::new(format!("No route for {}", uri.path()))),
        )
            .into_response();
    }

    let page = error_view(
        "Not Found",
        "404",
        "Sorry, we could not find what you were looking for.",
        "Check the address or head back to the dashboard.",
    );

    (StatusCode::NOT_FOUND, Html(page.into_string())).into_response()
}
