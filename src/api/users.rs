use serde::{Deserialize, Serialize};

use super::endpoints;
use super::error::RequestError;
use super::request::RequestClient;

/// The signed-in customer as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub userid: i64,
    pub username: String,
    pub userphonenumber: String,
    pub useremail: String,
    pub userlocation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub driverid: i64,
    pub drivername: String,
    pub phonenumber: String,
    pub platenumber: String,
    /// Registration timestamp, `%Y-%m-%d %H:%M:%S`.
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct UserClient {
    requests: RequestClient,
}

impl UserClient {
    pub fn new(requests: RequestClient) -> Self {
        Self { requests }
    }

    pub async fn get_profile(&self) -> Result<UserProfile, RequestError> {
        self.requests.get(endpoints::PROFILE).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, RequestError> {
        self.requests.get(endpoints::USERS).await
    }

    pub async fn list_drivers(&self) -> Result<Vec<DriverRecord>, RequestError> {
        self.requests.get(endpoints::DRIVERS).await
    }
}
