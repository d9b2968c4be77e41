use crate::domain::order::Order;
use crate::domain::return_request::NewReturn;

/// One step of a return workflow, as read from a script or built in code.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    AddOrder(Order),
    CreateReturn(NewReturn),
    Inspect { rma_id: String, approved: bool },
    Refund { rma_id: String, channel: String },
}
