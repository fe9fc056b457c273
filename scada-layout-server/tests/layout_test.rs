use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::common::mock_app::{IMAGE_BASE_URL, MockApp};

mod common;

async fn get(app: &MockApp, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

#[tokio::test]
async fn test_get_tv_layout_by_id() {
    let app = MockApp::new().with_single_cell_device("x.yaml", "X");

    let (status, body) = get(&app, "/web/layout/tv?id=X").await;
    assert_eq!(status, StatusCode::OK);

    let device: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(device["id"], json!("X"));
    assert_eq!(device["imageBaseUrl"], json!(IMAGE_BASE_URL));
    assert_eq!(device["pages"].as_array().unwrap().len(), 1);

    let page = &device["pages"][0];
    assert_eq!(page["title"], json!("Boiler Room"));
    assert_eq!(page["displayTime"], json!(30));
    assert_eq!(page["style"]["backgroundColor"], json!("#1F1F1F"));

    let table = &page["detail"][0];
    assert_eq!(table["type"], json!("grid"));
    assert_eq!(table["style"]["titleBgColor"], json!("#333333"));
    assert_eq!(table["header"], json!([{ "title": "P1" }]));
    assert_eq!(table["footer"]["style"]["valueFontColor"], json!("#AAAAAA"));
    assert_eq!(table["footer"]["style"]["valueFontSize"], json!(14));

    let cell = &table["detail"][0][0];
    assert_eq!(cell["field"], json!("p1"));
    assert_eq!(cell["displayDp"], json!(0));
    assert_eq!(cell["value"], Value::Null);
    assert_eq!(cell["valueUnit"], json!(""));
    assert_eq!(cell["icons"], json!([]));
    for key in ["zero", "bitTrans", "valueTrans"] {
        assert!(cell.as_object().unwrap().contains_key(key), "missing {key}");
        assert_eq!(cell[key], Value::Null);
    }
    assert_eq!(cell["maxValue"], json!(3.0));
    assert_eq!(cell["overMaxValueAlarmText"], json!("High"));
    assert_eq!(cell["style"]["valueFontColor"], json!("#00FF00"));
    assert_eq!(cell["style"]["valueFontSize"], json!(28));
    assert_eq!(cell["dataAt"].as_str().unwrap().len(), "YYYY-MM-DD HH:MM:SS".len());
}

#[tokio::test]
async fn test_get_tv_layout_unknown_id() {
    let app = MockApp::new().with_single_cell_device("x.yaml", "X");

    let (status, body) = get(&app, "/web/layout/tv?id=Y").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(String::from_utf8(body).unwrap(), "not found");
}

#[tokio::test]
async fn test_get_tv_layout_without_id() {
    let app = MockApp::new()
        .with_device("a.yaml", "pages: []\n")
        .with_single_cell_device("b.yaml", "B");

    let (status, body) = get(&app, "/web/layout/tv").await;
    assert_eq!(status, StatusCode::OK);
    let device: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(device["id"], json!("B"));

    let (status, _) = get(&app, "/web/layout/tv?id=").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_tv_layout_validation_error() {
    let app = MockApp::new().with_device(
        "x.yaml",
        r#"
id: "X"
pages:
  - title: Boiler Room
    detail:
      - type: grid
        title: Pressure
        header: [ { title: A }, { title: B } ]
        detail:
          - - title: P1
              field: p1
"#,
    );

    let (status, body) = get(&app, "/web/layout/tv?id=X").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = String::from_utf8(body).unwrap();
    assert!(message.contains("Page: Boiler Room, Table: Pressure"));
}

#[tokio::test]
async fn test_get_tv_layout_missing_pages() {
    let app = MockApp::new().with_device("x.yaml", "id: \"X\"\n");

    let (status, body) = get(&app, "/web/layout/tv?id=X").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(String::from_utf8(body).unwrap(), "tv config missing pages");
}

#[tokio::test]
async fn test_get_tv_layout_without_config_files() {
    let app = MockApp::new();

    let (status, body) = get(&app, "/web/layout/tv?id=X").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8(body).unwrap().starts_with("no tv config files found"));
}

#[tokio::test]
async fn test_get_openapi() {
    let app = MockApp::new();

    let (status, body) = get(&app, "/web/layout/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/web/layout/tv"]["get"].is_object());
}
