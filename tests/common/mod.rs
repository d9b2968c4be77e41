#![allow(dead_code)]

use chrono::NaiveDate;
use rma_workflow::application::service::RmaService;
use rma_workflow::config::ServiceConfig;
use rma_workflow::domain::money::Money;
use rma_workflow::domain::order::Order;
use rma_workflow::domain::return_request::NewReturn;
use rma_workflow::infrastructure::clock::FixedClock;
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 12] = [
    "type", "id", "order", "buyer", "items", "amount", "date", "reason", "condition", "photo",
    "decision", "channel",
];

pub fn processing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
}

pub fn service(config: ServiceConfig) -> RmaService {
    RmaService::in_memory(config).with_clock(Box::new(FixedClock(processing_date())))
}

pub fn order(id: &str, buyer: &str, total: Decimal) -> Order {
    Order::new(
        id,
        buyer,
        vec!["Laptop".to_string()],
        Money::new(total).unwrap(),
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
    )
}

/// A service holding one order and one fresh request against it.
pub async fn with_request(config: ServiceConfig, total: Decimal) -> RmaService {
    let service = service(config);
    service.add_order(order("O101", "Alice", total)).await.unwrap();
    service
        .create_rma(NewReturn::new("RMA01", "O101", "Defective product", "Used"))
        .await
        .unwrap();
    service
}

/// Writes a workflow script. Each row lists columns in `HEADER` order and may
/// stop early.
pub fn write_script(path: &Path, rows: &[&[&str]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(*row)?;
    }
    wtr.flush()?;
    Ok(())
}
