//! Backend route table.

use super::error::RequestError;

// Auth
pub const SIGNUP: &str = "/api/auth/signup";
pub const LOGIN: &str = "/api/auth/login";

// Chat
pub const CHAT: &str = "/api/chat";
pub const CHAT_RESET: &str = "/api/chat/reset";

// Orders / bookings
pub const ORDERS: &str = "/api/orders";
pub const CREATE_BOOKING: &str = "/api/bookings/create";

// Users
pub const USERS: &str = "/api/users";
pub const PROFILE: &str = "/api/profile";
pub const DRIVERS: &str = "/api/drivers";

// Catalog
pub const PRODUCTS: &str = "/api/products";
pub const PRICING: &str = "/api/pricing";
pub const SERVICES: &str = "/api/services";

pub fn order_details(order_id: &str) -> Result<String, RequestError> {
    Ok(format!("{ORDERS}/{}", path_segment(order_id)?))
}

pub fn product_details(product_id: u64) -> String {
    format!("{PRODUCTS}/{product_id}")
}

/// Rejects ids that would change the shape of the path they are spliced into.
fn path_segment(id: &str) -> Result<&str, RequestError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RequestError::InvalidRequest("id must not be empty".to_string()));
    }
    if id.contains(['/', '?', '#']) || id.chars().any(char::is_whitespace) {
        return Err(RequestError::InvalidRequest(format!(
            "`{id}` is not a valid path segment"
        )));
    }
    Ok(id)
}
