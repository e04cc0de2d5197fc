//! ## Summary
//! `GET /proxy?url=...&from=...&to=...`
//!
//! Fetches an upstream iCalendar feed, runs it through the repair pipeline
//! and returns the corrected calendar.

mod params;

use salvo::http::StatusCode;
use salvo::http::header::CONTENT_TYPE;
use salvo::writing::Text;
use salvo::{Depot, Request, Response, Router, handler};

use kunai_core::constants::PROXY_ROUTE_COMPONENT;
use kunai_service::fix::FixOptions;
use kunai_service::pipeline::{Processed, process};

use crate::config::get_config_from_depot;
use crate::upstream::get_upstream_from_depot;

pub use params::{ParamError, ProxyParams};

const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// ## Summary
/// Handles proxy requests.
///
/// ## Errors
/// Returns 400 for bad query parameters or a calendar that cannot be parsed,
/// 502 when the upstream fetch fails, and 500 if the request pipeline is
/// misconfigured.
#[handler]
#[tracing::instrument(skip_all, fields(
    method = "GET",
    path = %req.uri().path()
))]
pub async fn proxy(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::info!("Handling proxy request");

    let url = req.query::<String>("url");
    let from = req.query::<String>("from");
    let to = req.query::<String>("to");

    let params = match ProxyParams::parse(url.as_deref(), from.as_deref(), to.as_deref()) {
        Ok(params) => params,
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting proxy request");
            plain_error(res, StatusCode::BAD_REQUEST, e.to_string());
            return;
        }
    };

    let options = match get_config_from_depot(depot) {
        Ok(settings) => FixOptions::from(&settings.calendar),
        Err(e) => {
            tracing::error!(error = %e, "Failed to get configuration");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let upstream = match get_upstream_from_depot(depot) {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get upstream client");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let body = match upstream.fetch(&params.url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, url = %params.url, "Failed to fetch upstream calendar");
            plain_error(res, StatusCode::BAD_GATEWAY, "Failed to fetch iCal file");
            return;
        }
    };

    let range = params.range;
    let processed =
        match tokio::task::spawn_blocking(move || process(&body, &range, &options)).await {
            Ok(Ok(processed)) => processed,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Failed to process upstream calendar");
                plain_error(
                    res,
                    StatusCode::BAD_REQUEST,
                    format!("Failed to process iCal data: {e}"),
                );
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Calendar processing task failed");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                return;
            }
        };

    log_fixes(&processed);

    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(CONTENT_TYPE, CALENDAR_CONTENT_TYPE, true);
    res.status_code(StatusCode::OK);
    if let Err(e) = res.write_body(processed.calendar) {
        tracing::error!("Failed to write response body: {}", e);
    }
}

fn plain_error(res: &mut Response, status: StatusCode, message: impl Into<String>) {
    res.status_code(status);
    res.render(Text::Plain(message.into()));
}

fn log_fixes(processed: &Processed) {
    for line in processed.log.lines() {
        tracing::info!(fix = %line, "Applied fix");
    }
    tracing::info!(
        removed_events = processed.removed_events,
        "iCal processing complete. {}",
        processed.log.summary()
    );
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PROXY_ROUTE_COMPONENT).get(proxy)
}
