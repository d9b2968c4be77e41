use super::event::WorkflowEvent;
use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::return_request::NewReturn;
use crate::error::{Result, RmaError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The built-in sequence run when no script is given: two orders, one return
/// approved and refunded to card, one denied whose wallet refund is refused.
pub fn demo_events() -> Result<Vec<WorkflowEvent>> {
    Ok(vec![
        WorkflowEvent::AddOrder(order(
            "O101",
            "Alice",
            &["Laptop", "Mouse"],
            dec!(50000),
            (2025, 8, 1),
        )?),
        WorkflowEvent::AddOrder(order(
            "O102",
            "Bob",
            &["Headphones"],
            dec!(2000),
            (2025, 8, 5),
        )?),
        WorkflowEvent::CreateReturn(NewReturn::new(
            "RMA01",
            "O101",
            "Defective product",
            "Used",
        )),
        WorkflowEvent::CreateReturn(
            NewReturn::new("RMA02", "O102", "Not working", "New").with_photo("photo.jpg"),
        ),
        WorkflowEvent::Inspect {
            rma_id: "RMA01".to_string(),
            approved: true,
        },
        WorkflowEvent::Inspect {
            rma_id: "RMA02".to_string(),
            approved: false,
        },
        WorkflowEvent::Refund {
            rma_id: "RMA01".to_string(),
            channel: "Card".to_string(),
        },
        WorkflowEvent::Refund {
            rma_id: "RMA02".to_string(),
            channel: "Wallet".to_string(),
        },
    ])
}

fn order(
    id: &str,
    buyer: &str,
    items: &[&str],
    total: Decimal,
    (y, m, d): (i32, u32, u32),
) -> Result<Order> {
    let purchase_date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
        RmaError::ValidationError(format!("order {id}: invalid purchase date {y}-{m}-{d}"))
    })?;
    Ok(Order::new(
        id,
        buyer,
        items.iter().map(|item| item.to_string()).collect(),
        Money::new(total)?,
        purchase_date,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_orders_keep_their_data() {
        let events = demo_events().unwrap();
        assert_eq!(events.len(), 8);
        match &events[0] {
            WorkflowEvent::AddOrder(order) => {
                assert_eq!(order.total().value(), dec!(50000));
                assert_eq!(
                    order.purchase_date(),
                    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
                );
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_order_rejects_bad_constants() {
        assert!(matches!(
            order("O1", "Ann", &["Lamp"], dec!(1), (2025, 2, 30)),
            Err(RmaError::ValidationError(msg)) if msg.contains("purchase date")
        ));
        assert!(matches!(
            order("O1", "Ann", &["Lamp"], dec!(-1), (2025, 2, 1)),
            Err(RmaError::ValidationError(_))
        ));
    }
}
