//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `Zillow` with the
//! production `UreqTransport` over real HTTP. Validates that query building,
//! transport and XML decoding agree with the served documents.

use std::net::SocketAddr;

use zillow_core::{
    ApiError, ChartRequest, ClientConfig, RateSummaryRequest, SearchRequest, Transport,
    UreqTransport, Zillow, ZillowClient, ZillowResult, ZestimateRequest,
};

/// Runs the mock server on a background thread and returns its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn zillow(addr: SocketAddr, zws_id: &str) -> Zillow {
    Zillow::from_config(&ClientConfig::new(zws_id).with_base_url(format!("http://{addr}")))
}

#[test]
fn zestimate_over_http() {
    let addr = start_server();

    let result = zillow(addr, "X1-integration")
        .get_zestimate(&ZestimateRequest {
            zpid: "48749425".to_string(),
            rentzestimate: false,
        })
        .unwrap();

    assert!(result.message().is_success());
    assert_eq!(result.response.address.zipcode, "98109");
    assert_eq!(result.response.zestimate.amount.value, 1219500);
    assert_eq!(result.response.zestimate.amount.currency, "USD");
}

#[test]
fn transport_returns_status_headers_and_body() {
    let addr = start_server();

    let client = ZillowClient::new(&format!("http://{addr}"), "X1-integration");
    let request = client.build_get_region_chart(&Default::default());
    let response = UreqTransport::new().execute(&request).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("content-type"), Some(mock_server::CONTENT_TYPE_XML));
    assert!(response.body.contains("<zindex currency=\"USD\">463115</zindex>"));
}

#[test]
fn several_operations_share_one_client() {
    let addr = start_server();
    let zillow = zillow(addr, "X1-integration");

    let search = zillow
        .get_search_results(&SearchRequest {
            address: "2114 Bigelow Ave".to_string(),
            city_state_zip: "Seattle, WA".to_string(),
            rentzestimate: true,
        })
        .unwrap();
    assert_eq!(search.response.results[0].zpid, "48749425");

    let chart = zillow
        .get_chart(&ChartRequest {
            zpid: "48749425".to_string(),
            unit_type: "percent".to_string(),
            width: 300,
            height: 150,
            duration: "1year".to_string(),
        })
        .unwrap();
    assert!(chart.response.url.contains("zpid=48749425"));

    let rates = zillow.get_rate_summary(&RateSummaryRequest::default()).unwrap();
    assert_eq!(rates.response.today.len(), 3);
}

#[test]
fn missing_zws_id_is_reported_in_message() {
    let addr = start_server();

    let result = zillow(addr, "")
        .get_zestimate(&ZestimateRequest {
            zpid: "48749425".to_string(),
            rentzestimate: false,
        })
        .unwrap();

    assert!(!result.message().is_success());
    assert_eq!(result.message.code, 2);
    assert_eq!(result.message.text, mock_server::MISSING_ZWS_ID);
    assert_eq!(result.response.zpid, "");
}

#[test]
fn unknown_path_is_a_status_error() {
    let addr = start_server();

    // The mock server only routes single-segment paths.
    let client = ZillowClient::new(&format!("http://{addr}/webservice"), "X1-integration");
    let err = Zillow::with_transport(client, UreqTransport::new())
        .get_rate_summary(&RateSummaryRequest::default())
        .unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, ApiError::Status { status: 404, .. }), "got {err:?}");
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let err = zillow(addr, "X1-integration")
        .get_zestimate(&ZestimateRequest::default())
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
