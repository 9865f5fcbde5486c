use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        tutorials::{
            create_tutorial, delete_all_tutorials, delete_tutorial, get_tutorial, list_tutorials,
            search_tutorials, update_tutorial,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the browser client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/tutorials",
            get(list_tutorials)
                .post(create_tutorial)
                .delete(delete_all_tutorials),
        )
        .route("/tutorials/search", get(search_tutorials))
        .route("/tutorials/search/{segment}", get(search_tutorials))
        .route(
            "/tutorials/{id}",
            get(get_tutorial)
                .put(update_tutorial)
                .delete(delete_tutorial),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
