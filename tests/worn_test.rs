mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{Factory, TestApp};
use polish_tracker::models::PolishType;

#[tokio::test]
async fn test_create_worn_sets_worn_at() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/worn")
        .json(&json!({
            "notes": "Lasted five days"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), 1);
    assert_eq!(body["worn_at"], body["created_at"]);
    assert_eq!(body["notes"].as_str().unwrap(), "Lasted five days");
    assert!(body["label"].as_str().unwrap().starts_with("Worn #1 on "));
}

#[tokio::test]
async fn test_update_worn_keeps_worn_at() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let worn = factory.create_worn(Some("First try")).await;

    let response = app
        .server
        .put(&format!("/api/worn/{}", worn.id))
        .json(&json!({
            "notes": null
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["notes"].is_null());

    let reloaded = app.server.get(&format!("/api/worn/{}", worn.id)).await;
    let reloaded: serde_json::Value = reloaded.json();
    assert_eq!(reloaded["worn_at"], body["worn_at"]);
    assert_eq!(reloaded["created_at"], body["created_at"]);
}

#[tokio::test]
async fn test_list_worn_most_recent_first() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let first = factory.create_worn(Some("first")).await;
    let second = factory.create_worn(Some("second")).await;

    let response = app.server.get("/api/worn").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 2);
    assert_eq!(body["data"][0]["id"].as_i64().unwrap(), second.id as i64);
    assert_eq!(body["data"][1]["id"].as_i64().unwrap(), first.id as i64);
}

#[tokio::test]
async fn test_create_worn_photo() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let worn = factory.create_worn(None).await;

    let response = app
        .server
        .post("/api/worn-photos")
        .json(&json!({
            "worn_id": worn.id,
            "photo_type": "closeup",
            "image": "worn/2024/closeup.jpg"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["worn_id"].as_i64().unwrap(), worn.id as i64);
    assert_eq!(
        body["image_url"].as_str().unwrap(),
        "/media/worn/2024/closeup.jpg"
    );
    assert_eq!(
        body["label"].as_str().unwrap(),
        format!("Worn #{} - closeup", worn.id)
    );
}

#[tokio::test]
async fn test_create_worn_photo_requires_photo_type() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let worn = factory.create_worn(None).await;

    let response = app
        .server
        .post("/api/worn-photos")
        .json(&json!({
            "worn_id": worn.id,
            "photo_type": "",
            "image": "worn/closeup.jpg"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_worn_photo_unknown_worn() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/worn-photos")
        .json(&json!({
            "worn_id": 3,
            "photo_type": "closeup",
            "image": "worn/closeup.jpg"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_worn_layer() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;

    let response = app
        .server
        .post("/api/worn-layers")
        .json(&json!({
            "worn_id": worn.id,
            "order": 0,
            "polish_id": polish.id
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["layer_type"].as_str().unwrap(), "base_coat");
    assert_eq!(body["polish_name"].as_str().unwrap(), "Grey Matters");
    assert_eq!(
        body["label"].as_str().unwrap(),
        format!("{} - Layer 0: Grey Matters (Base Coat)", worn.id)
    );
}

#[tokio::test]
async fn test_duplicate_layer_order_conflicts() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;
    assert_eq!(worn.id, 1);

    let first = app
        .server
        .post("/api/worn-layers")
        .json(&json!({
            "worn_id": 1,
            "order": 0,
            "layer_type": "base coat",
            "polish_id": polish.id
        }))
        .await;
    first.assert_status(StatusCode::OK);

    let second = app
        .server
        .post("/api/worn-layers")
        .json(&json!({
            "worn_id": 1,
            "order": 0,
            "layer_type": "nail polish",
            "polish_id": polish.id
        }))
        .await;
    second.assert_status(StatusCode::CONFLICT);

    let body: serde_json::Value = second.json();
    assert!(body["details"].as_str().unwrap().contains("worn, order"));
}

#[tokio::test]
async fn test_same_order_in_another_worn_is_allowed() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let monday = factory.create_worn(None).await;
    let friday = factory.create_worn(None).await;
    factory
        .create_layer(monday.id, 0, PolishType::BaseCoat, polish.id)
        .await;

    let response = app
        .server
        .post("/api/worn-layers")
        .json(&json!({
            "worn_id": friday.id,
            "order": 0,
            "polish_id": polish.id
        }))
        .await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_update_layer_into_used_order_conflicts() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;
    factory
        .create_layer(worn.id, 0, PolishType::BaseCoat, polish.id)
        .await;
    let top = factory
        .create_layer(worn.id, 1, PolishType::TopCoat, polish.id)
        .await;

    let response = app
        .server
        .put(&format!("/api/worn-layers/{}", top.id))
        .json(&json!({
            "order": 0
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_negative_layer_order_rejected() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;

    let response = app
        .server
        .post("/api/worn-layers")
        .json(&json!({
            "worn_id": worn.id,
            "order": -1,
            "polish_id": polish.id
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nested_listings() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;
    let other = factory.create_worn(None).await;
    factory
        .create_layer(worn.id, 2, PolishType::TopCoat, polish.id)
        .await;
    factory
        .create_layer(worn.id, 0, PolishType::BaseCoat, polish.id)
        .await;
    factory
        .create_layer(worn.id, 1, PolishType::NailPolish, polish.id)
        .await;
    factory
        .create_layer(other.id, 0, PolishType::BaseCoat, polish.id)
        .await;
    factory.create_photo(worn.id, "closeup").await;
    factory.create_photo(other.id, "outdoor").await;

    let response = app.server.get(&format!("/api/worn/{}/layers", worn.id)).await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let orders: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 1, 2]);

    let response = app.server.get(&format!("/api/worn/{}/photos", worn.id)).await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 1);
    assert_eq!(body["data"][0]["photo_type"].as_str().unwrap(), "closeup");

    let response = app.server.get("/api/worn/99/layers").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_worn_cascades() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;
    let photo = factory.create_photo(worn.id, "closeup").await;
    let layer = factory
        .create_layer(worn.id, 0, PolishType::BaseCoat, polish.id)
        .await;

    let response = app.server.delete(&format!("/api/worn/{}", worn.id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app
        .server
        .get(&format!("/api/worn-photos/{}", photo.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = app
        .server
        .get(&format!("/api/worn-layers/{}", layer.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // Polishes are not owned by a wear session
    let response = app.server.get(&format!("/api/polishes/{}", polish.id)).await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_list_worn_photos_most_recent_session_first() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let monday = factory.create_worn(Some("monday")).await;
    let friday = factory.create_worn(Some("friday")).await;
    let older = factory.create_photo(monday.id, "closeup").await;
    let newer = factory.create_photo(friday.id, "outdoor").await;

    let response = app.server.get("/api/worn-photos").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 2);
    assert_eq!(body["data"][0]["id"].as_i64().unwrap(), newer.id as i64);
    assert_eq!(body["data"][1]["id"].as_i64().unwrap(), older.id as i64);

    let response = app
        .server
        .get(&format!("/api/worn-photos?worn_id={}", monday.id))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 1);
    assert_eq!(body["data"][0]["photo_type"].as_str().unwrap(), "closeup");
}

#[tokio::test]
async fn test_list_worn_layers_by_session_then_order() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let monday = factory.create_worn(Some("monday")).await;
    let friday = factory.create_worn(Some("friday")).await;
    factory
        .create_layer(monday.id, 1, PolishType::TopCoat, polish.id)
        .await;
    factory
        .create_layer(monday.id, 0, PolishType::BaseCoat, polish.id)
        .await;
    factory
        .create_layer(friday.id, 0, PolishType::BaseCoat, polish.id)
        .await;

    let response = app.server.get("/api/worn-layers").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 3);
    let rows: Vec<(i64, i64)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| (l["worn_id"].as_i64().unwrap(), l["order"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (friday.id as i64, 0),
            (monday.id as i64, 0),
            (monday.id as i64, 1)
        ]
    );
}

#[tokio::test]
async fn test_update_worn_photo() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let worn = factory.create_worn(None).await;
    let photo = factory.create_photo(worn.id, "closeup").await;

    let response = app
        .server
        .put(&format!("/api/worn-photos/{}", photo.id))
        .json(&json!({
            "photo_type": "  outdoor ",
            "notes": "Daylight"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["photo_type"].as_str().unwrap(), "outdoor");
    assert_eq!(body["notes"].as_str().unwrap(), "Daylight");
    assert_eq!(body["image"].as_str().unwrap(), photo.image);
    assert_eq!(
        body["label"].as_str().unwrap(),
        format!("Worn #{} - outdoor", worn.id)
    );

    let response = app
        .server
        .put(&format!("/api/worn-photos/{}", photo.id))
        .json(&json!({
            "notes": null
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body["notes"].is_null());
    assert_eq!(body["photo_type"].as_str().unwrap(), "outdoor");
}

#[tokio::test]
async fn test_delete_worn_photo() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let worn = factory.create_worn(None).await;
    let photo = factory.create_photo(worn.id, "closeup").await;
    let kept = factory.create_photo(worn.id, "outdoor").await;

    let response = app
        .server
        .delete(&format!("/api/worn-photos/{}", photo.id))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/api/worn-photos/{}", photo.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get(&format!("/api/worn-photos/{}", kept.id))
        .await
        .assert_status(StatusCode::OK);
    app.server
        .get(&format!("/api/worn/{}", worn.id))
        .await
        .assert_status(StatusCode::OK);

    let response = app
        .server
        .delete(&format!("/api/worn-photos/{}", photo.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_worn_layer() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let brand = factory.create_brand("Essie").await;
    let location = factory.create_location("Drawer A").await;
    let polish = factory.create_polish(brand.id, location.id, "Grey Matters").await;
    let worn = factory.create_worn(None).await;
    let base = factory
        .create_layer(worn.id, 0, PolishType::BaseCoat, polish.id)
        .await;
    factory
        .create_layer(worn.id, 1, PolishType::TopCoat, polish.id)
        .await;

    let response = app
        .server
        .delete(&format!("/api/worn-layers/{}", base.id))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/worn/{}/layers", worn.id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"].as_i64().unwrap(), 1);
    assert_eq!(body["data"][0]["order"].as_i64().unwrap(), 1);

    // The freed slot can be reused
    factory
        .create_layer(worn.id, 0, PolishType::BaseCoat, polish.id)
        .await;

    app.server
        .get(&format!("/api/polishes/{}", polish.id))
        .await
        .assert_status(StatusCode::OK);
}
