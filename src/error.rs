use crate::domain::return_request::ReturnStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RmaError>;

#[derive(Error, Debug)]
pub enum RmaError {
    #[error("Order {0} already exists")]
    DuplicateOrder(String),
    #[error("RMA {0} already exists")]
    DuplicateRma(String),
    #[error("Order {0} not found")]
    OrderNotFound(String),
    #[error("RMA {0} not found")]
    RmaNotFound(String),
    #[error("RMA {rma_id} not approved (status {status}). Refund denied.")]
    NotApproved { rma_id: String, status: ReturnStatus },
    #[error("RMA {rma_id} cannot move from {from} to {to}")]
    InvalidTransition {
        rma_id: String,
        from: ReturnStatus,
        to: ReturnStatus,
    },
    #[error("Unknown refund channel: {0}")]
    UnknownChannel(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
