use crate::error::{Result, RmaError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReturnStatus {
    #[default]
    Requested,
    Approved,
    Denied,
}

impl ReturnStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReturnStatus::Requested)
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReturnStatus::Requested => "REQUESTED",
            ReturnStatus::Approved => "APPROVED",
            ReturnStatus::Denied => "DENIED",
        };
        f.write_str(label)
    }
}

/// Fields for opening a return request.
///
/// `photo` is optional: a return can be filed with or without a photo of the
/// item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReturn {
    pub rma_id: String,
    pub order_id: String,
    pub reason: String,
    pub condition: String,
    pub photo: Option<String>,
}

impl NewReturn {
    pub fn new(
        rma_id: impl Into<String>,
        order_id: impl Into<String>,
        reason: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            rma_id: rma_id.into(),
            order_id: order_id.into(),
            reason: reason.into(),
            condition: condition.into(),
            photo: None,
        }
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// A request to return the goods of an order.
///
/// Moves `Requested -> Approved` or `Requested -> Denied`. The guarded
/// transitions refuse to leave a terminal state; `force_status` overwrites
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub rma_id: String,
    pub order_id: String,
    pub reason: String,
    pub condition: String,
    pub photo: Option<String>,
    pub status: ReturnStatus,
}

impl From<NewReturn> for ReturnRequest {
    fn from(new: NewReturn) -> Self {
        Self {
            rma_id: new.rma_id,
            order_id: new.order_id,
            reason: new.reason,
            condition: new.condition,
            photo: new.photo,
            status: ReturnStatus::Requested,
        }
    }
}

impl ReturnRequest {
    pub fn approve(&mut self) -> Result<()> {
        self.transition(ReturnStatus::Approved)
    }

    pub fn deny(&mut self) -> Result<()> {
        self.transition(ReturnStatus::Denied)
    }

    pub fn force_status(&mut self, status: ReturnStatus) {
        self.status = status;
    }

    pub fn is_approved(&self) -> bool {
        self.status == ReturnStatus::Approved
    }

    fn transition(&mut self, to: ReturnStatus) -> Result<()> {
        if self.status.is_terminal() {
            return Err(RmaError::InvalidTransition {
                rma_id: self.rma_id.clone(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl fmt::Display for ReturnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RMA ID: {} | Order: {} | Reason: {}",
            self.rma_id, self.order_id, self.reason
        )?;
        if let Some(photo) = &self.photo {
            write!(f, " | Photo: {}", photo)?;
        }
        write!(f, " | Status: {}", self.status)
    }
}
