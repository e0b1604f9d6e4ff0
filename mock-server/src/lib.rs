//! Stand-in for the Zillow web service.
//!
//! Serves canned XML documents from `testdata/` under `/{Operation}.htm`,
//! the same layout as the real service, so clients can be exercised over
//! real HTTP without an application id or network access.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub const CONTENT_TYPE_XML: &str = "text/xml;charset=utf-8";
pub const MISSING_ZWS_ID: &str = "Error: invalid or missing ZWSID parameter";

/// A canned operation: its path name, document root and response body.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub operation: &'static str,
    pub root: &'static str,
    pub body: &'static str,
}

macro_rules! fixture {
    ($op:literal, $root:literal) => {
        Fixture {
            operation: $op,
            root: $root,
            body: include_str!(concat!("../../testdata/", $op, ".xml")),
        }
    };
}

pub const FIXTURES: [Fixture; 13] = [
    fixture!("GetZestimate", "zestimate"),
    fixture!("GetSearchResults", "searchresults"),
    fixture!("GetChart", "chart"),
    fixture!("GetComps", "comps"),
    fixture!("GetDeepComps", "comps"),
    fixture!("GetDeepSearchResults", "searchresults"),
    fixture!("GetUpdatedPropertyDetails", "updatedPropertyDetails"),
    fixture!("GetRegionChildren", "regionchildren"),
    fixture!("GetRegionChart", "regionchart"),
    fixture!("GetRateSummary", "rateSummary"),
    fixture!("GetMonthlyPayments", "paymentsSummary"),
    fixture!("CalculateMonthlyPaymentsAdvanced", "paymentsdetails"),
    fixture!("CalculateAffordability", "affordabilitydetails"),
];

/// Looks up a fixture by its path segment, with or without `.htm`.
pub fn fixture(segment: &str) -> Option<&'static Fixture> {
    let name = segment.strip_suffix(".htm").unwrap_or(segment);
    FIXTURES.iter().find(|f| f.operation == name)
}

/// The document the service returns when the application id is absent.
pub fn missing_zws_id_document(root: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <{root}><request/><message><text>{MISSING_ZWS_ID}</text><code>2</code></message></{root}>\n"
    )
}

pub fn app() -> Router {
    Router::new().route("/{operation}", get(serve_operation))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn serve_operation(
    Path(segment): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(fixture) = fixture(&segment) else {
        tracing::info!(%segment, "unknown operation");
        return StatusCode::NOT_FOUND.into_response();
    };

    let has_id = params.get("zws-id").is_some_and(|id| !id.trim().is_empty());
    let body = if has_id {
        tracing::info!(operation = fixture.operation, "serving fixture");
        fixture.body.to_string()
    } else {
        tracing::info!(operation = fixture.operation, "rejecting request without zws-id");
        missing_zws_id_document(fixture.root)
    };

    ([(header::CONTENT_TYPE, CONTENT_TYPE_XML)], body).into_response()
}
