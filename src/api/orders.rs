use std::fmt;

use serde::{Deserialize, Serialize};

use super::endpoints;
use super::error::RequestError;
use super::request::RequestClient;

/// Order record exactly as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendOrder {
    pub pickup_id: String,
    pub waste_type: String,
    pub pickup_time: String,
    pub pickup_date: String,
    pub user_location: String,
    pub cost: String,
    pub pickup_rating: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_filename: Option<String>,
    pub user_id: i64,
    pub driver_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Scheduled,
    Completed,
}

impl OrderStatus {
    /// A pickup only gets rated once it has happened.
    pub fn from_rating(rating: f64) -> Self {
        if rating > 0.0 {
            Self::Completed
        } else {
            Self::Scheduled
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dashboard's booking list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: String,
    pub status: OrderStatus,
    pub date: String,
    pub time: String,
    pub address: String,
    pub service: String,
}

impl From<BackendOrder> for OrderSummary {
    fn from(order: BackendOrder) -> Self {
        Self {
            status: OrderStatus::from_rating(order.pickup_rating),
            id: order.pickup_id,
            date: order.pickup_date,
            time: order.pickup_time,
            address: order.user_location,
            service: order.waste_type,
        }
    }
}

/// Everything the order-detail view shows for a single pickup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub id: String,
    pub status: OrderStatus,
    pub date: String,
    pub time: String,
    pub address: String,
    pub service: String,
    pub cost: String,
    /// `None` until the pickup has been rated.
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub photo_filename: Option<String>,
    pub user_id: i64,
    pub driver_id: i64,
}

impl OrderDetail {
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{rating:.1}"),
            None => "Not Rated".to_string(),
        }
    }
}

impl From<BackendOrder> for OrderDetail {
    fn from(order: BackendOrder) -> Self {
        Self {
            status: OrderStatus::from_rating(order.pickup_rating),
            rating: (order.pickup_rating > 0.0).then_some(order.pickup_rating),
            id: order.pickup_id,
            date: order.pickup_date,
            time: order.pickup_time,
            address: order.user_location,
            service: order.waste_type,
            cost: order.cost,
            notes: order.notes.filter(|notes| !notes.is_empty()),
            photo_filename: order.photo_filename,
            user_id: order.user_id,
            driver_id: order.driver_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderClient {
    requests: RequestClient,
}

impl OrderClient {
    pub fn new(requests: RequestClient) -> Self {
        Self { requests }
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, RequestError> {
        let orders: Vec<BackendOrder> = self.requests.get(endpoints::ORDERS).await?;
        Ok(orders.into_iter().map(OrderSummary::from).collect())
    }

    pub async fn get_order_record(&self, order_id: &str) -> Result<BackendOrder, RequestError> {
        let path = endpoints::order_details(order_id)?;
        self.requests.get(&path).await
    }

    pub async fn get_order(&self, order_id: &str) -> Result<OrderDetail, RequestError> {
        self.get_order_record(order_id).await.map(OrderDetail::from)
    }
}
