use crate::domain::order::Order;
use crate::domain::ports::{OrderStore, RefundStore, ReturnRequestStore};
use crate::domain::refund::Refund;
use crate::domain::return_request::ReturnRequest;
use crate::error::{Result, RmaError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory registry of orders keyed by order id.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: Order) -> Result<bool> {
        let mut orders = self.orders.write().await;
        match orders.entry(order.order_id().to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(order);
                Ok(true)
            }
        }
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id).cloned())
    }
}

/// A thread-safe in-memory registry of return requests.
///
/// Keeps creation order so summaries list requests the way they were filed.
#[derive(Default, Clone)]
pub struct InMemoryReturnRequestStore {
    requests: Arc<RwLock<Vec<ReturnRequest>>>,
}

impl InMemoryReturnRequestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReturnRequestStore for InMemoryReturnRequestStore {
    async fn insert(&self, request: ReturnRequest) -> Result<bool> {
        let mut requests = self.requests.write().await;
        if requests.iter().any(|r| r.rma_id == request.rma_id) {
            return Ok(false);
        }
        requests.push(request);
        Ok(true)
    }

    async fn update(&self, request: ReturnRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        let slot = requests
            .iter_mut()
            .find(|r| r.rma_id == request.rma_id)
            .ok_or_else(|| RmaError::RmaNotFound(request.rma_id.clone()))?;
        *slot = request;
        Ok(())
    }

    async fn get(&self, rma_id: &str) -> Result<Option<ReturnRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.iter().find(|r| r.rma_id == rma_id).cloned())
    }

    async fn all(&self) -> Result<Vec<ReturnRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.clone())
    }
}

/// A thread-safe, append-only in-memory log of processed refunds.
#[derive(Default, Clone)]
pub struct InMemoryRefundStore {
    refunds: Arc<RwLock<Vec<Refund>>>,
}

impl InMemoryRefundStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefundStore for InMemoryRefundStore {
    async fn append(&self, refund: Refund) -> Result<()> {
        let mut refunds = self.refunds.write().await;
        refunds.push(refund);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.refunds.read().await.len())
    }

    async fn all(&self) -> Result<Vec<Refund>> {
        let refunds = self.refunds.read().await;
        Ok(refunds.clone())
    }
}
