use serde::{Deserialize, Serialize};

use super::endpoints;
use super::error::RequestError;
use super::request::RequestClient;

/// Shop item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    /// Pre-formatted price, currency symbol included.
    pub price: String,
    pub image: String,
    pub rating: f64,
}

/// Pickup plan from the pricing / services pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlight: Option<bool>,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductClient {
    requests: RequestClient,
}

impl ProductClient {
    pub fn new(requests: RequestClient) -> Self {
        Self { requests }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, RequestError> {
        self.requests.get(endpoints::PRODUCTS).await
    }

    pub async fn get_product(&self, product_id: u64) -> Result<Product, RequestError> {
        self.requests
            .get(&endpoints::product_details(product_id))
            .await
    }

    pub async fn pricing(&self) -> Result<Vec<ServicePlan>, RequestError> {
        self.requests.get(endpoints::PRICING).await
    }

    pub async fn services(&self) -> Result<Vec<ServicePlan>, RequestError> {
        self.requests.get(endpoints::SERVICES).await
    }
}
