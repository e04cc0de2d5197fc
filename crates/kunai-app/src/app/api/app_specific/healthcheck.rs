use salvo::{Response, Router, handler, writing::Json};
use serde::Serialize;

use kunai_core::constants::{HEALTH_ROUTE_COMPONENT, SERVICE_NAME};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

#[handler]
async fn health(res: &mut Response) {
    res.render(Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HEALTH_ROUTE_COMPONENT).get(health)
}
