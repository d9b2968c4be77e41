use super::summary::Summary;
use crate::config::{ChannelPolicy, ServiceConfig, TransitionPolicy};
use crate::domain::order::Order;
use crate::domain::ports::{ClockBox, OrderStoreBox, RefundStoreBox, ReturnRequestStoreBox};
use crate::domain::refund::{ChannelKind, Refund, RefundChannel, RefundId};
use crate::domain::return_request::{NewReturn, ReturnRequest, ReturnStatus};
use crate::error::{Result, RmaError};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::in_memory::{
    InMemoryOrderStore, InMemoryRefundStore, InMemoryReturnRequestStore,
};
use tokio::sync::Mutex;

/// A processed refund together with the confirmation lines it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundReceipt {
    pub refund: Refund,
    pub confirmation: Vec<String>,
}

/// Registry and workflow driver for orders, return requests and refunds.
///
/// `RmaService` owns the three stores. Callers get cloned snapshots back and
/// refer to requests by rma id. Inspection and refund processing run under a
/// single workflow lock, so the refund counter and the status check it depends
/// on cannot interleave.
pub struct RmaService {
    orders: OrderStoreBox,
    requests: ReturnRequestStoreBox,
    refunds: RefundStoreBox,
    clock: ClockBox,
    config: ServiceConfig,
    workflow: Mutex<()>,
}

impl RmaService {
    /// Creates a new `RmaService` instance.
    ///
    /// # Arguments
    ///
    /// * `orders` - The order registry.
    /// * `requests` - The return request registry.
    /// * `refunds` - The refund log.
    /// * `config` - Transition and channel policies plus channel details.
    pub fn new(
        orders: OrderStoreBox,
        requests: ReturnRequestStoreBox,
        refunds: RefundStoreBox,
        config: ServiceConfig,
    ) -> Self {
        Self {
            orders,
            requests,
            refunds,
            clock: Box::new(SystemClock),
            config,
            workflow: Mutex::new(()),
        }
    }

    /// Creates a service backed by in-memory stores.
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(
            Box::new(InMemoryOrderStore::new()),
            Box::new(InMemoryReturnRequestStore::new()),
            Box::new(InMemoryRefundStore::new()),
            config,
        )
    }

    /// Replaces the clock used to stamp processed dates.
    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    pub async fn add_order(&self, order: Order) -> Result<()> {
        let order_id = order.order_id().to_string();
        if !self.orders.insert(order).await? {
            tracing::warn!(order_id = %order_id, "duplicate order rejected");
            return Err(RmaError::DuplicateOrder(order_id));
        }
        tracing::debug!(order_id = %order_id, "order registered");
        Ok(())
    }

    pub async fn order(&self, order_id: &str) -> Result<Order> {
        self.orders
            .get(order_id)
            .await?
            .ok_or_else(|| RmaError::OrderNotFound(order_id.to_string()))
    }

    /// Opens a return request in `Requested`.
    ///
    /// The referenced order is not checked here; a dangling order id only
    /// surfaces when a refund is processed.
    pub async fn create_rma(&self, new: NewReturn) -> Result<ReturnRequest> {
        let request = ReturnRequest::from(new);
        if !self.requests.insert(request.clone()).await? {
            tracing::warn!(rma_id = %request.rma_id, "duplicate rma rejected");
            return Err(RmaError::DuplicateRma(request.rma_id));
        }
        tracing::debug!(rma_id = %request.rma_id, order_id = %request.order_id, "rma created");
        Ok(request)
    }

    pub async fn return_request(&self, rma_id: &str) -> Result<ReturnRequest> {
        self.requests
            .get(rma_id)
            .await?
            .ok_or_else(|| RmaError::RmaNotFound(rma_id.to_string()))
    }

    /// Approves (`true`) or denies (`false`) a return request and returns the
    /// updated request.
    pub async fn inspect_and_approve(&self, rma_id: &str, approved: bool) -> Result<ReturnRequest> {
        let _guard = self.workflow.lock().await;
        let mut request = self.return_request(rma_id).await?;

        match self.config.transitions {
            TransitionPolicy::Permissive => {
                let status = if approved {
                    ReturnStatus::Approved
                } else {
                    ReturnStatus::Denied
                };
                if request.status.is_terminal() && request.status != status {
                    tracing::warn!(
                        rma_id = %rma_id,
                        from = %request.status,
                        to = %status,
                        "overwriting terminal status"
                    );
                }
                request.force_status(status);
            }
            TransitionPolicy::Strict => {
                if approved {
                    request.approve()?;
                } else {
                    request.deny()?;
                }
            }
        }

        self.requests.update(request.clone()).await?;
        tracing::info!(rma_id = %rma_id, status = %request.status, "rma inspected");
        Ok(request)
    }

    /// Refunds the full order total of an approved request through the named
    /// channel.
    ///
    /// Nothing is recorded when the request is not approved or its order is
    /// unknown.
    pub async fn process_refund(&self, rma_id: &str, channel_name: &str) -> Result<RefundReceipt> {
        let _guard = self.workflow.lock().await;
        let request = self.return_request(rma_id).await?;

        if !request.is_approved() {
            tracing::warn!(
                rma_id = %rma_id,
                status = %request.status,
                "RMA not approved. Refund denied."
            );
            return Err(RmaError::NotApproved {
                rma_id: request.rma_id,
                status: request.status,
            });
        }

        let order = match self.orders.get(&request.order_id).await? {
            Some(order) => order,
            None => {
                tracing::warn!(
                    rma_id = %rma_id,
                    order_id = %request.order_id,
                    "order not found for refund"
                );
                return Err(RmaError::OrderNotFound(request.order_id));
            }
        };

        let channel = self.select_channel(channel_name)?;
        let refund_id = RefundId::next_after(self.refunds.count().await?)?;

        let mut refund = Refund::new(refund_id, request.rma_id, order.total(), channel);
        let confirmation = refund.process(self.clock.today());
        for line in &confirmation {
            tracing::info!(refund_id = %refund_id, "{line}");
        }

        self.refunds.append(refund.clone()).await?;
        Ok(RefundReceipt {
            refund,
            confirmation,
        })
    }

    pub async fn summary(&self) -> Result<Summary> {
        Ok(Summary {
            requests: self.requests.all().await?,
            refunds: self.refunds.all().await?,
        })
    }

    fn select_channel(&self, channel_name: &str) -> Result<RefundChannel> {
        let kind = match ChannelKind::parse(channel_name) {
            Some(kind) => kind,
            None => match self.config.channels {
                ChannelPolicy::Lenient => {
                    tracing::warn!(channel = %channel_name, "unknown refund channel, using wallet");
                    ChannelKind::Wallet
                }
                ChannelPolicy::Strict => {
                    return Err(RmaError::UnknownChannel(channel_name.to_string()));
                }
            },
        };

        Ok(match kind {
            ChannelKind::Card => RefundChannel::Card {
                card_token: self.config.card_token.clone(),
            },
            ChannelKind::Wallet => RefundChannel::Wallet {
                wallet_id: self.config.wallet_id.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::infrastructure::clock::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(config: ServiceConfig) -> RmaService {
        RmaService::in_memory(config).with_clock(Box::new(FixedClock(date(2025, 8, 10))))
    }

    async fn seeded(config: ServiceConfig) -> RmaService {
        let service = service(config);
        service
            .add_order(Order::new(
                "O101",
                "Alice",
                vec!["Laptop".to_string(), "Mouse".to_string()],
                Money::new(dec!(50000)).unwrap(),
                date(2025, 8, 1),
            ))
            .await
            .unwrap();
        service
            .create_rma(NewReturn::new("RMA01", "O101", "Defective product", "Used"))
            .await
            .unwrap();
        service
    }

    #[tokio::test]
    async fn test_refund_stamps_clock_date() {
        let service = seeded(ServiceConfig::default()).await;
        service.inspect_and_approve("RMA01", true).await.unwrap();

        let receipt = service.process_refund("RMA01", "Card").await.unwrap();
        assert_eq!(receipt.refund.processed_date, Some(date(2025, 8, 10)));
        assert_eq!(
            receipt.confirmation,
            vec![
                "Refund RF1 processed for RMA RMA01 | Amount: 50000".to_string(),
                "Refund credited back to Card: XXXX-1234".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_refund_uses_configured_channel_details() {
        let config = ServiceConfig {
            card_token: "XXXX-9999".to_string(),
            wallet_id: "W-42".to_string(),
            ..ServiceConfig::default()
        };
        let service = seeded(config).await;
        service.inspect_and_approve("RMA01", true).await.unwrap();

        let receipt = service.process_refund("RMA01", "wallet").await.unwrap();
        assert_eq!(
            receipt.refund.channel,
            RefundChannel::Wallet {
                wallet_id: "W-42".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_rma() {
        let service = seeded(ServiceConfig::default()).await;
        assert!(matches!(
            service.inspect_and_approve("RMA99", true).await,
            Err(RmaError::RmaNotFound(_))
        ));
        assert!(matches!(
            service.process_refund("RMA99", "Card").await,
            Err(RmaError::RmaNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_strict_transitions_keep_first_decision() {
        let service = seeded(ServiceConfig::strict()).await;
        service.inspect_and_approve("RMA01", false).await.unwrap();

        let result = service.inspect_and_approve("RMA01", true).await;
        assert!(matches!(result, Err(RmaError::InvalidTransition { .. })));
        assert_eq!(
            service.return_request("RMA01").await.unwrap().status,
            ReturnStatus::Denied
        );
    }
}
