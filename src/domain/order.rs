use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchase that return requests can be filed against.
///
/// Orders are read-only once registered with the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    buyer: String,
    items: Vec<String>,
    total: Money,
    purchase_date: NaiveDate,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        buyer: impl Into<String>,
        items: Vec<String>,
        total: Money,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            buyer: buyer.into(),
            items,
            total,
            purchase_date,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn buyer(&self) -> &str {
        &self.buyer
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID: {} | Buyer: {} | Amount: {}",
            self.order_id, self.buyer, self.total
        )
    }
}
