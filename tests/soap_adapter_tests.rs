/// SOAP adapter against an in-process fake endpoint
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};

use catalog::api;
use catalog::soap::{check_fault, normalize_products, SoapClient, SoapProductInput};
use catalog::CatalogError;

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<(String, String, String)>>>,
}

const PRODUCTS_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body>
    <ns2:GetProductsResponse xmlns:ns2="http://example.com/products">
      <ns2:product>
        <ns2:id>1</ns2:id>
        <ns2:name>Laptop</ns2:name>
        <ns2:organization><ns2:id>1</ns2:id><ns2:name>Tech Corp</ns2:name></ns2:organization>
        <ns2:category><ns2:id>2</ns2:id><ns2:name>Electronics</ns2:name></ns2:category>
      </ns2:product>
    </ns2:GetProductsResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

const FAULT_RESPONSE: &str = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault>
      <faultcode>soap:Client</faultcode>
      <faultstring>Invalid category</faultstring>
    </soap:Fault>
  </soap:Body>
</soap:Envelope>"#;

async fn handle(State(captured): State<Captured>, headers: HeaderMap, body: String) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    let action = header("soapaction");
    captured
        .requests
        .lock()
        .unwrap()
        .push((action.clone(), header("content-type"), body));
    if action.ends_with("CreateProductRequest") {
        (StatusCode::OK, FAULT_RESPONSE.to_string())
    } else {
        (StatusCode::OK, PRODUCTS_RESPONSE.to_string())
    }
}

async fn spawn_endpoint(captured: Captured) -> String {
    let app = Router::new().route("/ws", post(handle)).with_state(captured);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/ws", addr)
}

fn soap_client(endpoint: String) -> SoapClient {
    api::set_silent(true);
    SoapClient::new(reqwest::Client::new(), endpoint)
}

#[tokio::test]
async fn test_list_products_sends_action_and_normalizes() {
    let captured = Captured::default();
    let soap = soap_client(spawn_endpoint(captured.clone()).await);

    let doc = soap.list_products().await.unwrap();
    let products = normalize_products(&doc).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Laptop");
    assert_eq!(products[0].organization_name(), Some("Tech Corp"));
    assert_eq!(products[0].category_id(), Some(2));

    let requests = captured.requests.lock().unwrap();
    let (action, content_type, body) = &requests[0];
    assert_eq!(action, "http://example.com/products/GetProductsRequest");
    assert!(content_type.starts_with("text/xml"));
    assert!(body.contains("<prod:GetProductsRequest/>"));
}

#[tokio::test]
async fn test_create_product_fault_in_ok_response() {
    let captured = Captured::default();
    let soap = soap_client(spawn_endpoint(captured.clone()).await);

    let input = SoapProductInput {
        name: "Fish & Chips <deluxe>".into(),
        organization_id: 1,
        category_id: 99,
    };
    let doc = soap.create_product(&input).await.unwrap();
    match check_fault(&doc) {
        Err(CatalogError::SoapFault { message }) => assert_eq!(message, "Invalid category"),
        other => panic!("expected fault, got {:?}", other),
    }

    let requests = captured.requests.lock().unwrap();
    let body = &requests[0].2;
    assert!(body.contains("Fish &amp; Chips &lt;deluxe&gt;"));
    assert!(body.contains("<prod:id>99</prod:id>"));
}

#[tokio::test]
async fn test_server_error_status_is_http_error() {
    let app = Router::new().route("/ws", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let soap = soap_client(format!("http://{}/ws", addr));
    assert!(matches!(soap.list_products().await, Err(CatalogError::Http { status: 500 })));
}
