use crate::application::event::WorkflowEvent;
use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::return_request::NewReturn;
use crate::error::{Result, RmaError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum EventType {
    Order,
    Return,
    Inspect,
    Refund,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Decision {
    #[serde(alias = "approved")]
    Approve,
    #[serde(alias = "denied")]
    Deny,
}

/// One raw script row. Which columns matter depends on `type`.
#[derive(Debug, Deserialize)]
struct EventRecord {
    r#type: EventType,
    id: String,
    #[serde(default)]
    order: Option<String>,
    #[serde(default)]
    buyer: Option<String>,
    #[serde(default)]
    items: Option<String>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    decision: Option<Decision>,
    #[serde(default)]
    channel: Option<String>,
}

fn required<T>(value: Option<T>, column: &str, id: &str) -> Result<T> {
    value.ok_or_else(|| {
        RmaError::ValidationError(format!("row {id}: missing required column '{column}'"))
    })
}

/// Parses the amount text directly so no precision is lost on the way to
/// `Decimal`.
fn parse_amount(raw: &str, id: &str) -> Result<Decimal> {
    Decimal::from_str(raw)
        .map_err(|e| RmaError::ValidationError(format!("row {id}: invalid amount '{raw}': {e}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl EventRecord {
    fn into_event(self) -> Result<WorkflowEvent> {
        let id = self.id;
        if id.is_empty() {
            return Err(RmaError::ValidationError(
                "missing required column 'id'".to_string(),
            ));
        }

        let event = match self.r#type {
            EventType::Order => {
                let buyer = required(non_empty(self.buyer), "buyer", &id)?;
                let total = Money::new(parse_amount(
                    &required(non_empty(self.amount), "amount", &id)?,
                    &id,
                )?)?;
                let date = required(self.date, "date", &id)?;
                let items = self
                    .items
                    .unwrap_or_default()
                    .split(';')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect();
                WorkflowEvent::AddOrder(Order::new(id, buyer, items, total, date))
            }
            EventType::Return => {
                let order_id = required(non_empty(self.order), "order", &id)?;
                let reason = required(non_empty(self.reason), "reason", &id)?;
                let condition = required(non_empty(self.condition), "condition", &id)?;
                let mut new = NewReturn::new(id, order_id, reason, condition);
                new.photo = non_empty(self.photo);
                WorkflowEvent::CreateReturn(new)
            }
            EventType::Inspect => {
                let decision = required(self.decision, "decision", &id)?;
                WorkflowEvent::Inspect {
                    rma_id: id,
                    approved: decision == Decision::Approve,
                }
            }
            EventType::Refund => {
                let channel = required(non_empty(self.channel), "channel", &id)?;
                WorkflowEvent::Refund { rma_id: id, channel }
            }
        };
        Ok(event)
    }
}

/// Reads workflow events from a CSV script.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so trailing unused columns may be left off a row.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and converts rows. A bad row yields an error for that row
    /// only.
    pub fn events(self) -> impl Iterator<Item = Result<WorkflowEvent>> {
        self.reader
            .into_deserialize::<EventRecord>()
            .map(|result| result.map_err(RmaError::from).and_then(EventRecord::into_event))
    }
}
