//! Integration tests for the order status, order shipping address,
//! product and product custom field services.

use bigcommerce_api::resources::{
    OrderShippingAddressListParams, OrderStatusListParams, ProductCustomFieldListParams,
    ProductListParams,
};
use bigcommerce_api::{BigCommerceClient, ClientConfig, Context, Endpoint, Password, Username};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BAD_REQUEST_JSON: &str = r#"[{"status":400,"message":"Bad Request"}]"#;

fn create_client(server: &MockServer) -> BigCommerceClient {
    let config = ClientConfig::builder()
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .username(Username::new("bigcommerce-rust").unwrap())
        .password(Password::new("12345"))
        .build()
        .unwrap();
    BigCommerceClient::new(config).unwrap()
}

fn bad_request() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_raw(BAD_REQUEST_JSON, "application/json")
}

fn ok_json(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

// ============================================================================
// Order statuses
// ============================================================================

#[tokio::test]
async fn test_order_status_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/order_statuses/"))
        .and(query_param("limit", "10"))
        .respond_with(ok_json(serde_json::json!([
            { "id": 1, "name": "Pending", "order": 1 },
            { "id": 11, "name": "Awaiting Fulfillment", "order": 2 }
        ])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = OrderStatusListParams {
        limit: Some(10),
        ..Default::default()
    };
    let statuses = client
        .order_statuses
        .list(&Context::background(), &params)
        .await
        .unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[1].name, "Awaiting Fulfillment");
}

#[tokio::test]
async fn test_order_status_show() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/order_statuses/11"))
        .respond_with(ok_json(
            serde_json::json!({ "id": 11, "name": "Awaiting Fulfillment", "order": 2 }),
        ))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let status = client
        .order_statuses
        .show(&Context::background(), 11)
        .await
        .unwrap();

    assert_eq!(status.id, 11);
    assert_eq!(status.order, 2);
}

#[tokio::test]
async fn test_order_status_show_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/order_statuses/11"))
        .respond_with(bad_request())
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .order_statuses
        .show(&Context::background(), 11)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "400 Bad Request");
}

// ============================================================================
// Order shipping addresses
// ============================================================================

#[tokio::test]
async fn test_shipping_address_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders/100/shipping_addresses/"))
        .respond_with(ok_json(serde_json::json!([
            { "id": 1, "order_id": 100, "city": "Austin", "shipping_method": "None" }
        ])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let addresses = client
        .order_shipping_addresses
        .list(
            &Context::background(),
            100,
            &OrderShippingAddressListParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].order_id, 100);
    assert_eq!(addresses[0].address.city.as_deref(), Some("Austin"));
}

#[tokio::test]
async fn test_shipping_address_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders/100/shipping_addresses/count"))
        .respond_with(ok_json(serde_json::json!({ "count": 2 })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let count = client
        .order_shipping_addresses
        .count(
            &Context::background(),
            100,
            &OrderShippingAddressListParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(*count, 2);
}

#[tokio::test]
async fn test_shipping_address_show_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders/100/shipping_addresses/1"))
        .respond_with(bad_request())
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .order_shipping_addresses
        .show(&Context::background(), 100, 1)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "400 Bad Request");
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_product_list_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/"))
        .and(query_param("is_visible", "true"))
        .and(query_param("min_inventory_level", "0"))
        .respond_with(ok_json(serde_json::json!([{ "id": 123 }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = ProductListParams {
        is_visible: Some(true),
        min_inventory_level: Some(0),
        ..Default::default()
    };
    let products = client
        .products
        .list(&Context::background(), &params)
        .await
        .unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 123);
}

#[tokio::test]
async fn test_product_show() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/123"))
        .respond_with(ok_json(serde_json::json!({
            "id": 123,
            "name": "Red scarf",
            "price": "89.0000",
            "primary_image": { "tiny_url": "https://cdn.example.com/tiny.jpg" }
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let product = client
        .products
        .show(&Context::background(), 123)
        .await
        .unwrap();

    assert_eq!(product.name, "Red scarf");
    assert_eq!(product.price, "89.0000");
    assert_eq!(product.primary_image.tiny_url, "https://cdn.example.com/tiny.jpg");
}

#[tokio::test]
async fn test_product_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/count"))
        .respond_with(ok_json(serde_json::json!({ "count": 41 })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let count = client
        .products
        .count(&Context::background(), &ProductListParams::default())
        .await
        .unwrap();

    assert_eq!(*count, 41);
}

#[tokio::test]
async fn test_product_list_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/"))
        .respond_with(bad_request())
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .products
        .list(&Context::background(), &ProductListParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "400 Bad Request");
}

// ============================================================================
// Product custom fields
// ============================================================================

#[tokio::test]
async fn test_custom_field_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/7/custom_fields"))
        .and(query_param("page", "2"))
        .respond_with(ok_json(serde_json::json!([
            { "id": 3, "product_id": 7, "name": "Material", "text": "Wool" }
        ])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = ProductCustomFieldListParams {
        page: Some(2),
        ..Default::default()
    };
    let fields = client
        .product_custom_fields
        .list(&Context::background(), 7, &params)
        .await
        .unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].text, "Wool");
}

#[tokio::test]
async fn test_custom_field_show_and_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/7/custom_fields/3"))
        .respond_with(ok_json(
            serde_json::json!({ "id": 3, "product_id": 7, "name": "Material", "text": "Wool" }),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products/7/custom_fields/count"))
        .respond_with(ok_json(serde_json::json!({ "count": 1 })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let ctx = Context::background();

    let field = client
        .product_custom_fields
        .show(&ctx, 7, 3)
        .await
        .unwrap();
    assert_eq!(field.name, "Material");

    let count = client.product_custom_fields.count(&ctx, 7).await.unwrap();
    assert_eq!(*count, 1);
}

#[tokio::test]
async fn test_custom_field_show_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/7/custom_fields/3"))
        .respond_with(bad_request())
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .product_custom_fields
        .show(&Context::background(), 7, 3)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "400 Bad Request");
}
