//! HTTP gateway tests against a mock catalog backend.

use catalog_data::{CatalogGateway, GatewayConfig, HttpCatalogGateway};
use catalog_model::{CatalogError, MediaKind, Product, ProductDraft, ProductId, ProductPatch};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> HttpCatalogGateway {
    HttpCatalogGateway::new(&GatewayConfig::new(server.uri()).with_timeout(5)).unwrap()
}

fn product_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "desc",
        "categoryName": "RPG",
        "mediaType": "Game",
        "format": "PS5",
        "price": 59.99,
        "stockQuantity": 10,
        "releaseDate": "2024-12-01",
        "publisher": "Studio",
        "ratingAge": "M (17+)",
        "imageFile": "cover.jpg"
    })
}

#[tokio::test]
async fn test_fetch_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "RPG", "description": "Role playing", "products": [product_json(1, "Alpha Quest")]},
            {"id": 2, "name": "Empty", "description": "", "products": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let categories = gateway(&server).fetch_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].products[0].name, "Alpha Quest");
    assert_eq!(categories[0].products[0].media_type, MediaKind::Game);
    assert!(categories[1].products.is_empty());
}

#[tokio::test]
async fn test_fetch_categories_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let err = gateway(&server).fetch_categories().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_fetch_categories_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway(&server).fetch_categories().await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::Http {
            status: 500,
            message: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let gateway = HttpCatalogGateway::new(&GatewayConfig::new("http://127.0.0.1:1").with_timeout(2)).unwrap();
    let err = gateway.fetch_categories().await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_fetch_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(7, "Beta")))
        .mount(&server)
        .await;

    let product = gateway(&server).fetch_product(ProductId::new(7)).await.unwrap();
    assert_eq!(product.id, ProductId::new(7));
    assert_eq!(product.name, "Beta");
}

#[tokio::test]
async fn test_fetch_missing_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gateway(&server).fetch_product(ProductId::new(404)).await.unwrap_err();
    assert_eq!(err, CatalogError::NotFound("product 404".to_string()));
}

#[tokio::test]
async fn test_create_product_posts_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/product"))
        .and(body_json(json!({"name": "New Game", "price": 19.99, "stockQuantity": 3})))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_json(11, "New Game")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = ProductDraft::new("New Game").with_price(19.99).with_stock_quantity(3);
    let created = gateway(&server).create_product(&draft).await.unwrap();
    assert_eq!(created.id, ProductId::new(11));
}

#[tokio::test]
async fn test_replace_product_puts_collection() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(5, "Renamed")))
        .expect(1)
        .mount(&server)
        .await;

    let product = Product::new(5, "Renamed");
    let replaced = gateway(&server).replace_product(&product).await.unwrap();
    assert_eq!(replaced.name, "Renamed");
}

#[tokio::test]
async fn test_patch_product() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/product/1"))
        .and(body_json(json!({"stockQuantity": 50})))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(1, "Alpha Quest")))
        .expect(1)
        .mount(&server)
        .await;

    let patch = ProductPatch::new().stock_quantity(50);
    let updated = gateway(&server).patch_product(ProductId::new(1), &patch).await.unwrap();
    assert_eq!(updated.id, ProductId::new(1));
}

#[tokio::test]
async fn test_delete_product() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/product/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server).delete_product(ProductId::new(2)).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_product() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/product/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gateway(&server).delete_product(ProductId::new(2)).await.unwrap_err();
    assert!(err.is_not_found());
}
