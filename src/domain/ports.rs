use super::order::Order;
use super::refund::Refund;
use super::return_request::ReturnRequest;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts an order. Returns `false` without touching the store if the id
    /// is already taken.
    async fn insert(&self, order: Order) -> Result<bool>;
    async fn get(&self, order_id: &str) -> Result<Option<Order>>;
}

#[async_trait]
pub trait ReturnRequestStore: Send + Sync {
    /// Inserts a request. Returns `false` without touching the store if the id
    /// is already taken.
    async fn insert(&self, request: ReturnRequest) -> Result<bool>;
    async fn update(&self, request: ReturnRequest) -> Result<()>;
    async fn get(&self, rma_id: &str) -> Result<Option<ReturnRequest>>;
    /// All requests in the order they were created.
    async fn all(&self) -> Result<Vec<ReturnRequest>>;
}

#[async_trait]
pub trait RefundStore: Send + Sync {
    async fn append(&self, refund: Refund) -> Result<()>;
    async fn count(&self) -> Result<usize>;
    async fn all(&self) -> Result<Vec<Refund>>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type ReturnRequestStoreBox = Box<dyn ReturnRequestStore>;
pub type RefundStoreBox = Box<dyn RefundStore>;
pub type ClockBox = Box<dyn Clock>;
