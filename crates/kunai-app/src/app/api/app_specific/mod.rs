// Service endpoints that are not part of the proxy itself.

use salvo::Router;

mod healthcheck;

#[must_use]
pub fn routes() -> Router {
    healthcheck::routes()
}
