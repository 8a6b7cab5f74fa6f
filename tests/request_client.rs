mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::Form;
use serde_json::{Value, json};

use cleanzy_client::api::{
    ApiClient, CreateBooking, LoginData, OrderStatus, PhotoUpload, RequestClient, RequestError,
    RequestOptions,
};
use common::{closed_port_url, spawn_backend};

fn backend_order(id: &str, rating: f64) -> Value {
    json!({
        "pickupId": id,
        "wasteType": "General Waste",
        "pickupTime": "09:00 AM - 11:00 AM",
        "pickupDate": "2025-01-15",
        "userLocation": "123 Main St, Bangalore",
        "cost": "₹50.0",
        "pickupRating": rating,
        "notes": "",
        "photoFilename": null,
        "userId": 1,
        "driverId": 1
    })
}

#[tokio::test]
async fn lists_orders_as_dashboard_rows() {
    let router = Router::new().route(
        "/api/orders",
        get(|| async { Json(json!([backend_order("PK1", 4.5), backend_order("PK2", 0.0)])) }),
    );
    let api = ApiClient::new(&spawn_backend(router).await).unwrap();

    let orders = api.orders.list_orders().await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, "PK1");
    assert_eq!(orders[0].status, OrderStatus::Completed);
    assert_eq!(orders[1].id, "PK2");
    assert_eq!(orders[1].status, OrderStatus::Scheduled);
    assert_eq!(orders[1].address, "123 Main St, Bangalore");
}

#[tokio::test]
async fn fetches_single_order_detail() {
    let router = Router::new().route(
        "/api/orders/{id}",
        get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
            Json(backend_order(&id, 0.0))
        }),
    );
    let api = ApiClient::new(&spawn_backend(router).await).unwrap();

    let detail = api.orders.get_order("1736900000").await.unwrap();

    assert_eq!(detail.id, "1736900000");
    assert_eq!(detail.rating_label(), "Not Rated");
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let router = Router::new().route(
        "/api/profile",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "No user found"}))) }),
    );
    let api = ApiClient::new(&spawn_backend(router).await).unwrap();

    let err = api.users.get_profile().await.unwrap_err();

    assert!(matches!(
        &err,
        RequestError::Application { status: 404, message } if message == "No user found"
    ));
    assert_eq!(err.user_message(), "No user found");
}

#[tokio::test]
async fn undecodable_error_body_falls_back_silently() {
    let router = Router::new().route(
        "/api/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Internal Server Error</h1>") }),
    );
    let api = ApiClient::new(&spawn_backend(router).await).unwrap();

    let err = api.products.list_products().await.unwrap_err();

    assert!(matches!(
        &err,
        RequestError::Application { status: 500, message } if message == "Unknown error"
    ));
}

#[tokio::test]
async fn success_with_unexpected_shape_is_a_decode_error() {
    let router = Router::new().route(
        "/api/profile",
        get(|| async { Json(json!({"name": "John Doe"})) }),
    );
    let api = ApiClient::new(&spawn_backend(router).await).unwrap();

    let err = api.users.get_profile().await.unwrap_err();

    assert!(matches!(err, RequestError::Decode(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = ApiClient::new(&closed_port_url().await).unwrap();

    let err = api.products.pricing().await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
}

#[tokio::test]
async fn login_posts_json_credentials() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if content_type != "application/json" || body["password"] != "secret" {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": "Invalid credentials"})),
                );
            }
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": "Login successful!",
                    "user": {"id": 1, "username": "John Doe", "email": body["email"]}
                })),
            )
        }),
    );
    let api = ApiClient::new(&spawn_backend(router).await).unwrap();

    let ok = api
        .auth
        .login(&LoginData {
            email: "john@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(ok.user.unwrap().email, "john@example.com");

    let err = api
        .auth
        .login(&LoginData {
            email: "john@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[derive(Debug, Default)]
struct ReceivedBooking {
    content_types: Vec<String>,
    fields: Vec<(String, Option<String>, Vec<u8>)>,
}

type Received = Arc<Mutex<ReceivedBooking>>;

async fn record_booking(
    State(received): State<Received>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let content_types = headers
        .get_all(header::CONTENT_TYPE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect();

    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.expect("field bytes").to_vec();
        fields.push((name, file_name, data));
    }

    let mut received = received.lock().unwrap();
    received.content_types = content_types;
    received.fields = fields;
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "bookingId": "1736900000",
            "message": "Booking created successfully!"
        })),
    )
}

fn booking_backend(received: &Received) -> Router {
    Router::new()
        .route("/api/bookings/create", post(record_booking))
        .with_state(Arc::clone(received))
}

fn assert_single_multipart_content_type(received: &ReceivedBooking) {
    assert_eq!(
        received.content_types.len(),
        1,
        "content types were {:?}",
        received.content_types
    );
    assert!(
        received.content_types[0].starts_with("multipart/form-data; boundary="),
        "content type was {:?}",
        received.content_types[0]
    );
}

fn field_text(received: &ReceivedBooking, name: &str) -> Option<String> {
    received
        .fields
        .iter()
        .find(|(field, _, _)| field == name)
        .map(|(_, _, data)| String::from_utf8_lossy(data).into_owned())
}

#[tokio::test]
async fn booking_is_sent_as_multipart_with_computed_boundary() {
    let received = Received::default();
    let api = ApiClient::new(&spawn_backend(booking_backend(&received)).await).unwrap();

    let response = api
        .bookings
        .create_booking(CreateBooking {
            waste_type: "Electronic Waste".to_string(),
            address: "12 Lake View".to_string(),
            pickup_time: "02:00 PM - 04:00 PM".to_string(),
            notes: Some(String::new()),
            photo: Some(PhotoUpload {
                file_name: "tv.png".to_string(),
                bytes: vec![0x89, b'P', b'N', b'G'],
                mime: Some("image/png".to_string()),
            }),
        })
        .await
        .unwrap();
    assert_eq!(response.booking_id, "1736900000");

    let received = received.lock().unwrap();
    assert_single_multipart_content_type(&received);
    let names: Vec<&str> = received
        .fields
        .iter()
        .map(|(name, _, _)| name.as_str())
        .collect();
    // Blank notes are not sent at all.
    assert_eq!(names, vec!["wasteType", "address", "pickupTime", "photo"]);
    let (_, file_name, data) = &received.fields[3];
    assert_eq!(file_name.as_deref(), Some("tv.png"));
    assert_eq!(data, &vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn booking_notes_are_sent_verbatim() {
    let received = Received::default();
    let api = ApiClient::new(&spawn_backend(booking_backend(&received)).await).unwrap();

    api.bookings
        .create_booking(CreateBooking {
            waste_type: "Organic Waste".to_string(),
            address: "7 Park Road".to_string(),
            pickup_time: "09:00 AM - 11:00 AM".to_string(),
            notes: Some("ring bell".to_string()),
            photo: None,
        })
        .await
        .unwrap();

    let received = received.lock().unwrap();
    let names: Vec<&str> = received
        .fields
        .iter()
        .map(|(name, _, _)| name.as_str())
        .collect();
    assert_eq!(names, vec!["wasteType", "address", "pickupTime", "notes"]);
    assert_eq!(field_text(&received, "notes").as_deref(), Some("ring bell"));
}

#[tokio::test]
async fn caller_content_type_is_dropped_for_multipart_bodies() {
    let received = Received::default();
    let requests = RequestClient::new(&spawn_backend(booking_backend(&received)).await).unwrap();

    let form = Form::new()
        .text("wasteType", "General Waste")
        .text("address", "1 Hill St")
        .text("pickupTime", "02:00 PM - 04:00 PM");
    let options = RequestOptions::post()
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .multipart(form);
    let reply: Value = requests.call("/api/bookings/create", options).await.unwrap();
    assert_eq!(reply["bookingId"], "1736900000");

    let received = received.lock().unwrap();
    assert_single_multipart_content_type(&received);
    assert_eq!(
        field_text(&received, "address").as_deref(),
        Some("1 Hill St")
    );
}

#[tokio::test]
async fn incomplete_booking_never_reaches_the_backend() {
    let api = ApiClient::new(&closed_port_url().await).unwrap();

    let err = api
        .bookings
        .create_booking(CreateBooking {
            waste_type: "General Waste".to_string(),
            ..CreateBooking::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::InvalidRequest(_)));
}

#[tokio::test]
async fn raw_call_decodes_into_any_shape() {
    let router = Router::new().route("/api/services", get(|| async { Json(json!([])) }));
    let requests = RequestClient::new(&spawn_backend(router).await).unwrap();

    let services: Vec<Value> = requests.get("/api/services").await.unwrap();

    assert!(services.is_empty());
}
