use crate::domain::money::Money;
use crate::domain::refund::Refund;
use crate::domain::return_request::ReturnRequest;
use serde::Serialize;
use std::fmt;

/// Point-in-time report of every return request and every refund.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub requests: Vec<ReturnRequest>,
    pub refunds: Vec<Refund>,
}

impl Summary {
    pub fn total_refunded(&self) -> Money {
        self.refunds
            .iter()
            .fold(Money::ZERO, |total, refund| total + refund.amount)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- RMA & Refund Summary ---")?;
        for request in &self.requests {
            writeln!(f, "{request}")?;
        }
        for refund in &self.refunds {
            writeln!(
                f,
                "RefundID: {} | Method: {}",
                refund.refund_id,
                refund.channel.method()
            )?;
        }
        Ok(())
    }
}
