mod app_specific;
pub mod proxy;

use salvo::Router;

// Re-export route constants from core
pub use kunai_core::constants::{
    HEALTH_ROUTE_COMPONENT, HEALTH_ROUTE_PREFIX, PROXY_ROUTE_COMPONENT, PROXY_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main router with the proxy and health endpoints.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(proxy::routes())
        .push(app_specific::routes())
}
