use super::money::Money;
use crate::error::RmaError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RefundId(u32);

impl RefundId {
    pub fn new(seq: u32) -> Self {
        Self(seq)
    }

    pub fn seq(&self) -> u32 {
        self.0
    }

    /// The id following `count` already issued refunds.
    pub fn next_after(count: usize) -> Result<Self, RmaError> {
        u32::try_from(count)
            .ok()
            .and_then(|count| count.checked_add(1))
            .map(Self)
            .ok_or_else(|| {
                RmaError::ValidationError(format!("refund id space exhausted after {count}"))
            })
    }
}

impl fmt::Display for RefundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RF{}", self.0)
    }
}

impl From<RefundId> for String {
    fn from(id: RefundId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for RefundId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix("RF")
            .and_then(|seq| seq.parse().ok())
            .map(Self)
            .ok_or_else(|| format!("invalid refund id: {value}"))
    }
}

/// The payment mechanism a refund is returned through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Card,
    Wallet,
}

impl ChannelKind {
    /// Matches a channel name exactly, ignoring letter case only. `None` for
    /// anything that is neither card nor wallet.
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("card") {
            Some(ChannelKind::Card)
        } else if name.eq_ignore_ascii_case("wallet") {
            Some(ChannelKind::Wallet)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "PascalCase")]
pub enum RefundChannel {
    Card { card_token: String },
    Wallet { wallet_id: String },
}

impl RefundChannel {
    pub fn kind(&self) -> ChannelKind {
        match self {
            RefundChannel::Card { .. } => ChannelKind::Card,
            RefundChannel::Wallet { .. } => ChannelKind::Wallet,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            RefundChannel::Card { .. } => "Card",
            RefundChannel::Wallet { .. } => "Wallet",
        }
    }

    fn confirmation(&self) -> String {
        match self {
            RefundChannel::Card { card_token } => {
                format!("Refund credited back to Card: {card_token}")
            }
            RefundChannel::Wallet { wallet_id } => {
                format!("Refund added to Wallet: {wallet_id}")
            }
        }
    }
}

/// Money returned against an approved return request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub refund_id: RefundId,
    pub rma_id: String,
    pub amount: Money,
    pub channel: RefundChannel,
    pub processed_date: Option<NaiveDate>,
}

impl Refund {
    pub fn new(
        refund_id: RefundId,
        rma_id: impl Into<String>,
        amount: Money,
        channel: RefundChannel,
    ) -> Self {
        Self {
            refund_id,
            rma_id: rma_id.into(),
            amount,
            channel,
            processed_date: None,
        }
    }

    /// Stamps the processed date and returns the confirmation lines: the
    /// shared amount line followed by the channel-specific one.
    pub fn process(&mut self, today: NaiveDate) -> Vec<String> {
        self.processed_date = Some(today);
        vec![
            format!(
                "Refund {} processed for RMA {} | Amount: {}",
                self.refund_id, self.rma_id, self.amount
            ),
            self.channel.confirmation(),
        ]
    }
}
