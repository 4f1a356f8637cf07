// Integration tests for `CatalogClient` using wiremock.
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use partsbay_api::types::{CreateDeviceTypeRequest, ModelEntry, UpdateBrandRequest};
use partsbay_api::{CatalogClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = CatalogClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_device_types_unwraps_envelope() {
    let (server, client) = setup().await;

    let body = json!({
        "deviceTypes": [
            { "id": "dt1", "name": "Mobile", "slug": "mobile", "icon": "smartphone",
              "isActive": true, "order": 0 },
            { "id": "dt2", "name": "Laptop", "slug": "laptop", "icon": "laptop",
              "isActive": false, "order": 1 },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/device-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let device_types = client.list_device_types().await.unwrap();

    assert_eq!(device_types.len(), 2);
    assert_eq!(device_types[0].name, "Mobile");
    assert_eq!(device_types[0].slug, "mobile");
    assert!(device_types[0].is_active);
    assert!(!device_types[1].is_active);
}

#[tokio::test]
async fn test_list_brands_with_models() {
    let (server, client) = setup().await;

    let body = json!({
        "brands": [
            {
                "id": "b1",
                "categorySlug": "mobile",
                "name": "Apple",
                "slug": "apple",
                "isActive": true,
                "models": [
                    { "name": "iPhone 15", "slug": "iphone-15", "isActive": true },
                    { "name": "iPhone 14", "modelNumber": "A2882", "releaseYear": 2022 },
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/device-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let brands = client.list_brands().await.unwrap();

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].category_slug, "mobile");
    assert_eq!(brands[0].models.len(), 2);
    assert_eq!(brands[0].models[0].is_active, Some(true));
    assert_eq!(brands[0].models[1].model_number.as_deref(), Some("A2882"));
    assert_eq!(brands[0].models[1].release_year, Some(2022));
    assert_eq!(brands[0].models[1].is_active, None);
}

#[tokio::test]
async fn test_create_device_type_sends_full_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/device-types"))
        .and(body_partial_json(json!({
            "name": "Tablet", "slug": "tablet", "icon": "package",
            "isActive": true, "order": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "dt9", "name": "Tablet", "slug": "tablet", "icon": "package",
            "isActive": true, "order": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_device_type(&CreateDeviceTypeRequest {
            name: "Tablet".into(),
            slug: "tablet".into(),
            icon: "package".into(),
            is_active: true,
            order: 0,
        })
        .await
        .unwrap();

    assert_eq!(created.id, "dt9");
}

#[tokio::test]
async fn test_update_brand_is_full_document() {
    let (server, client) = setup().await;

    let models = vec![
        ModelEntry {
            name: "iPad Air".into(),
            model_number: None,
            release_year: None,
            is_active: Some(false),
            slug: Some("ipad-air".into()),
        },
        ModelEntry {
            name: "iPad Pro".into(),
            model_number: None,
            release_year: None,
            is_active: Some(true),
            slug: Some("ipad-pro".into()),
        },
    ];

    Mock::given(method("PUT"))
        .and(path("/api/device-categories/b1"))
        .and(body_partial_json(json!({
            "categorySlug": "tablet",
            "name": "Apple",
            "slug": "apple",
            "isActive": true,
            "models": [
                { "name": "iPad Air", "slug": "ipad-air", "isActive": false },
                { "name": "iPad Pro", "slug": "ipad-pro", "isActive": true },
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1", "categorySlug": "tablet", "name": "Apple", "slug": "apple",
            "isActive": true, "models": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_brand(
            "b1",
            &UpdateBrandRequest {
                category_slug: "tablet".into(),
                name: "Apple".into(),
                slug: "apple".into(),
                models,
                is_active: true,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_disable_part_category_hits_dedicated_endpoint() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/part-categories/pc1/disable"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.disable_part_category("pc1").await.unwrap();
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = MockServer::start().await;
    let token = secrecy::SecretString::from("sekrit-admin-token");
    let client =
        CatalogClient::new(&server.uri(), Some(&token), &TransportConfig::default()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(header("authorization", "Bearer sekrit-admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let templates = client.list_global_categories().await.unwrap();
    assert!(templates.is_empty());
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_error_field_becomes_user_facing_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/device-types"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "error": "device type already exists" })),
        )
        .mount(&server)
        .await;

    let err = client
        .create_device_type(&CreateDeviceTypeRequest {
            name: "Mobile".into(),
            slug: "mobile".into(),
            icon: "smartphone".into(),
            is_active: true,
            order: 0,
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "device type already exists");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/device-types"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "bad token" })))
        .mount(&server)
        .await;

    let err = client.list_device_types().await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_missing_envelope_key_yields_empty_list() {
    let (server, client) = setup().await;

    // A defensive backend quirk: an empty object instead of the envelope.
    Mock::given(method("GET"))
        .and(path("/api/part-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let categories = client.list_part_categories().await.unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/device-types"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.list_device_types().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}
