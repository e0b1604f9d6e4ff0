use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, CONTENT_TYPE_XML, FIXTURES, MISSING_ZWS_ID};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_text(response: axum::response::Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- fixtures ---

#[tokio::test]
async fn zestimate_serves_fixture_as_xml() {
    let resp = app()
        .oneshot(get("/GetZestimate.htm?zws-id=X1-test&zpid=48749425&rentzestimate=false"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], CONTENT_TYPE_XML);
    let body = body_text(resp).await;
    assert!(body.contains("<zpid>48749425</zpid>"));
    assert!(body.contains("<zipcode>98109</zipcode>"));
    assert!(body.contains("<amount currency=\"USD\">1219500</amount>"));
}

#[tokio::test]
async fn every_operation_is_routed() {
    for fixture in &FIXTURES {
        let uri = format!("/{}.htm?zws-id=X1-test", fixture.operation);
        let resp = app().oneshot(get(&uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{}", fixture.operation);
        let body = body_text(resp).await;
        assert_eq!(body, fixture.body, "{}", fixture.operation);
    }
}

// --- missing application id ---

#[tokio::test]
async fn missing_zws_id_returns_service_error() {
    let resp = app()
        .oneshot(get("/GetChart.htm?zpid=48749425&unit-type=percent"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("<chart>"));
    assert!(body.contains(MISSING_ZWS_ID));
    assert!(body.contains("<code>2</code>"));
}

#[tokio::test]
async fn blank_zws_id_is_treated_as_missing() {
    let resp = app()
        .oneshot(get("/GetRateSummary.htm?zws-id=&state=WA"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("<rateSummary>"));
    assert!(body.contains("<code>2</code>"));
}

// --- unknown routes ---

#[tokio::test]
async fn unknown_operation_returns_404() {
    let resp = app()
        .oneshot(get("/GetEverything.htm?zws-id=X1-test"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn nested_path_returns_404() {
    let resp = app()
        .oneshot(get("/webservice/GetZestimate.htm?zws-id=X1-test"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
