use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_auth_record() -> AuthRecord {
    AuthRecord {
        token: "tok-123".to_owned(),
        token_type: "Bearer".to_owned(),
        username: "alice".to_owned(),
        account_type: AccountType::Customer,
    }
}

fn make_product() -> Product {
    Product {
        id: 7,
        name: "Mechanical Keyboard".to_owned(),
        details: Some("Tenkeyless, brown switches".to_owned()),
        price: 89.99,
        stock_count: 12,
        merchant_id: 3,
        merchant_company_name: Some("KeyCo".to_owned()),
        category_id: Some(2),
        category_name: Some("Electronics".to_owned()),
        photo_ids: vec![101, 102],
        created_at: Some("2025-08-20T14:30:00".to_owned()),
    }
}

// =============================================================
// AuthRecord serde
// =============================================================

#[test]
fn auth_record_round_trip() {
    let record = make_auth_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: AuthRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

#[test]
fn auth_record_uses_server_field_names() {
    let json = serde_json::to_string(&make_auth_record()).unwrap();
    assert!(json.contains("\"tokenType\":\"Bearer\""));
    assert!(json.contains("\"type\":\"CUSTOMER\""));
    assert!(!json.contains("token_type"));
    assert!(!json.contains("account_type"));
}

#[test]
fn auth_record_deserializes_from_server_shape() {
    let json = r#"{
        "token": "abc",
        "tokenType": "Bearer",
        "username": "mira",
        "type": "MERCHANT"
    }"#;
    let record: AuthRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.username, "mira");
    assert_eq!(record.account_type, AccountType::Merchant);
}

#[test]
fn auth_record_rejects_missing_token() {
    let json = r#"{"tokenType": "Bearer", "username": "mira", "type": "MERCHANT"}"#;
    assert!(serde_json::from_str::<AuthRecord>(json).is_err());
}

#[test]
fn has_token_rejects_empty_and_whitespace() {
    let mut record = make_auth_record();
    assert!(record.has_token());
    record.token = String::new();
    assert!(!record.has_token());
    record.token = "   ".to_owned();
    assert!(!record.has_token());
}

// =============================================================
// AccountType serde
// =============================================================

#[test]
fn account_type_serializes_screaming_snake() {
    assert_eq!(serde_json::to_string(&AccountType::Customer).unwrap(), "\"CUSTOMER\"");
    assert_eq!(serde_json::to_string(&AccountType::Merchant).unwrap(), "\"MERCHANT\"");
}

#[test]
fn account_type_rejects_lowercase() {
    assert!(serde_json::from_str::<AccountType>("\"customer\"").is_err());
}

// =============================================================
// OrderStatus serde + helpers
// =============================================================

#[test]
fn order_status_serializes_screaming_snake() {
    assert_eq!(serde_json::to_string(&OrderStatus::Created).unwrap(), "\"CREATED\"");
    assert_eq!(
        serde_json::to_string(&OrderStatus::RejectByMerchant).unwrap(),
        "\"REJECT_BY_MERCHANT\""
    );
    assert_eq!(
        serde_json::to_string(&OrderStatus::RejectByCustomer).unwrap(),
        "\"REJECT_BY_CUSTOMER\""
    );
}

#[test]
fn order_status_wire_name_round_trips_every_variant() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_wire_name(status.wire_name()), Some(status));
    }
}

#[test]
fn order_status_from_wire_name_rejects_unknown() {
    assert_eq!(OrderStatus::from_wire_name("SHIPPED"), None);
    assert_eq!(OrderStatus::from_wire_name("created"), None);
}

#[test]
fn order_status_labels_distinguish_rejection_sides() {
    assert_eq!(OrderStatus::RejectByCustomer.label(), "Cancelled by you");
    assert_eq!(OrderStatus::RejectByMerchant.label(), "Rejected by merchant");
}

// =============================================================
// Product serde
// =============================================================

#[test]
fn product_round_trip() {
    let product = make_product();
    let json = serde_json::to_string(&product).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(product, back);
}

#[test]
fn product_deserializes_with_missing_optionals() {
    let json = r#"{
        "id": 1,
        "name": "Mug",
        "details": null,
        "price": 4.5,
        "stockCount": 100,
        "merchantId": 9,
        "merchantCompanyName": null,
        "categoryId": null,
        "categoryName": null,
        "createdAt": null
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.stock_count, 100);
    assert!(product.photo_ids.is_empty());
    assert!(product.category_name.is_none());
}

// =============================================================
// CartItem + Order serde
// =============================================================

#[test]
fn cart_item_deserializes_from_server_shape() {
    let json = r#"{
        "itemId": 11,
        "productId": 7,
        "productName": "Mug",
        "count": 3,
        "pricePerUnit": 4.5,
        "totalPrice": 13.5
    }"#;
    let item: CartItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.item_id, 11);
    assert_eq!(item.count, 3);
    assert!((item.total_price - 13.5).abs() < f64::EPSILON);
}

#[test]
fn order_deserializes_from_server_shape() {
    let json = r#"{
        "orderId": 21,
        "productId": 7,
        "productName": "Mug",
        "count": 2,
        "totalAmount": 9.0,
        "status": "REJECT_BY_MERCHANT",
        "rejectReason": "out of stock",
        "createdAt": "2025-08-21T09:00:00"
    }"#;
    let order: Order = serde_json::from_str(json).unwrap();
    assert_eq!(order.status, OrderStatus::RejectByMerchant);
    assert_eq!(order.reject_reason.as_deref(), Some("out of stock"));
}

// =============================================================
// Request payload shapes
// =============================================================

#[test]
fn register_request_uses_server_field_names() {
    let request = RegisterRequest {
        username: "shopco".to_owned(),
        password: "secret".to_owned(),
        name: "Shop".to_owned(),
        surname: "Co".to_owned(),
        account_type: AccountType::Merchant,
        company_name: Some("ShopCo LLC".to_owned()),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"type\":\"MERCHANT\""));
    assert!(json.contains("\"companyName\":\"ShopCo LLC\""));
}

#[test]
fn add_to_cart_request_uses_camel_case() {
    let request = AddToCartRequest { product_id: 7, count: 2 };
    assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"productId":7,"count":2}"#);
}

#[test]
fn update_order_status_request_carries_optional_reason() {
    let request = UpdateOrderStatusRequest {
        status: OrderStatus::RejectByMerchant,
        reject_reason: Some("damaged stock".to_owned()),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"status\":\"REJECT_BY_MERCHANT\""));
    assert!(json.contains("\"rejectReason\":\"damaged stock\""));
}

#[test]
fn product_request_uses_camel_case() {
    let request = ProductRequest {
        category_id: 2,
        name: "Mug".to_owned(),
        details: "Ceramic".to_owned(),
        price: 4.5,
        stock_count: 10,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"categoryId\":2"));
    assert!(json.contains("\"stockCount\":10"));
}
