use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors, routes};

// 图鉴相关的路由
pub fn pokemon_routes() -> Router<AppState> {
    Router::new().route(
        "/pokemon",
        get(routes::pokemon::index).post(routes::pokemon::create),
    )
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pokemon_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
