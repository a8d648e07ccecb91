mod common;

use axum::http::StatusCode;
use serde_json::json;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use common::{Factory, TestApp};

#[tokio::test]
async fn test_create_brand() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/brands")
        .json(&json!({
            "name": "Essie"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), 1);
    assert_eq!(body["name"].as_str().unwrap(), "Essie");
    assert_eq!(body["label"].as_str().unwrap(), "Brand: Essie");
    assert!(body["created_at"].as_str().is_some());
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_brand_blank_name() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/brands")
        .json(&json!({
            "name": "   "
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Validation error");
    assert!(body["details"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_create_brand_name_too_long() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/brands")
        .json(&json!({
            "name": "x".repeat(101)
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_brand_missing_name() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/brands").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_brand() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("OPI").await;

    let response = app.server.get(&format!("/api/brands/{}", brand.id)).await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), brand.id as i64);
    assert_eq!(body["name"].as_str().unwrap(), "OPI");
}

#[tokio::test]
async fn test_get_brand_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/brands/999").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["details"].as_str().unwrap(), "Brand 999");
}

#[tokio::test]
async fn test_list_brands_ordered_by_name() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_brand("Zoya").await;
    factory.create_brand("Essie").await;
    factory.create_brand("OPI").await;

    let response = app.server.get("/api/brands").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Essie", "OPI", "Zoya"]);
    assert_eq!(body["total"].as_i64().unwrap(), 3);
    assert_eq!(body["limit"].as_i64().unwrap(), 20);
    assert_eq!(body["offset"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_list_brands_pagination() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    for name in ["A England", "Barry M", "China Glaze", "Deborah Lippmann"] {
        factory.create_brand(name).await;
    }

    let response = app.server.get("/api/brands?limit=2&offset=2").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"].as_str().unwrap(), "China Glaze");
    assert_eq!(body["total"].as_i64().unwrap(), 4);
}

#[tokio::test]
async fn test_list_brands_offset_between_pages() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    for name in ["A", "B", "C", "D", "E"] {
        factory.create_brand(name).await;
    }

    let response = app.server.get("/api/brands?limit=2&offset=1").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(body["offset"].as_i64().unwrap(), 1);

    let response = app.server.get("/api/brands?limit=3&offset=4").await;
    let body: serde_json::Value = response.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["E"]);
    assert_eq!(body["total"].as_i64().unwrap(), 5);
}

#[tokio::test]
async fn test_list_brands_search() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_brand("Essie").await;
    factory.create_brand("Holo Taco").await;

    let response = app.server.get("/api/brands?search=taco").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 1);
    assert_eq!(body["data"][0]["name"].as_str().unwrap(), "Holo Taco");
}

#[tokio::test]
async fn test_list_brands_malformed_query() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/brands?limit=lots").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_brand_keeps_created_at() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Esie").await;

    let response = app
        .server
        .put(&format!("/api/brands/{}", brand.id))
        .json(&json!({
            "name": "Essie"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["name"].as_str().unwrap(), "Essie");

    let created_at = OffsetDateTime::parse(body["created_at"].as_str().unwrap(), &Rfc3339).unwrap();
    let updated_at = OffsetDateTime::parse(body["updated_at"].as_str().unwrap(), &Rfc3339).unwrap();
    assert_eq!(created_at, brand.created_at);
    assert!(updated_at >= brand.updated_at);
}

#[tokio::test]
async fn test_update_brand_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .put("/api/brands/42")
        .json(&json!({
            "name": "Essie"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_brand() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;

    let response = app.server.delete(&format!("/api/brands/{}", brand.id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/brands/{}", brand.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}
