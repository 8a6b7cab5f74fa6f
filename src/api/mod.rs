pub mod auth;
pub mod bookings;
pub mod chat;
pub mod endpoints;
pub mod error;
pub mod orders;
pub mod products;
pub mod request;
pub mod users;

pub use auth::{AuthClient, AuthResponse, LoginData, SignUpData};
pub use bookings::{BookingClient, BookingResponse, CreateBooking, PhotoUpload};
pub use chat::{ChatClient, ChatReply, ChatRequest, ResetReply};
pub use error::RequestError;
pub use orders::{BackendOrder, OrderClient, OrderDetail, OrderStatus, OrderSummary};
pub use products::{Product, ProductClient, ServicePlan};
pub use request::{RequestBody, RequestClient, RequestOptions};
pub use users::{DriverRecord, UserClient, UserProfile, UserRecord};

/// Every domain client, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub orders: OrderClient,
    pub bookings: BookingClient,
    pub users: UserClient,
    pub products: ProductClient,
    pub chat: ChatClient,
    pub auth: AuthClient,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        Ok(Self::from_requests(RequestClient::new(base_url)?))
    }

    pub fn from_requests(requests: RequestClient) -> Self {
        Self {
            orders: OrderClient::new(requests.clone()),
            bookings: BookingClient::new(requests.clone()),
            users: UserClient::new(requests.clone()),
            products: ProductClient::new(requests.clone()),
            chat: ChatClient::new(requests.clone()),
            auth: AuthClient::new(requests),
        }
    }
}
