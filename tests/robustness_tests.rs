mod common;

use common::{order, service, with_request};
use rma_workflow::config::{ServiceConfig, TransitionPolicy};
use rma_workflow::domain::return_request::{NewReturn, ReturnStatus};
use rma_workflow::error::RmaError;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_duplicate_order_rejected() {
    let service = service(ServiceConfig::default());
    service.add_order(order("O101", "Alice", dec!(50000))).await.unwrap();

    let result = service.add_order(order("O101", "Mallory", dec!(1))).await;
    assert!(matches!(result, Err(RmaError::DuplicateOrder(id)) if id == "O101"));

    // First registration wins.
    let stored = service.order("O101").await.unwrap();
    assert_eq!(stored.buyer(), "Alice");
    assert_eq!(stored.total().value(), dec!(50000));
}

#[tokio::test]
async fn test_duplicate_rma_rejected() {
    let service = with_request(ServiceConfig::default(), dec!(10)).await;
    service.inspect_and_approve("RMA01", true).await.unwrap();

    let result = service
        .create_rma(NewReturn::new("RMA01", "O101", "Again", "New"))
        .await;
    assert!(matches!(result, Err(RmaError::DuplicateRma(id)) if id == "RMA01"));

    let stored = service.return_request("RMA01").await.unwrap();
    assert_eq!(stored.status, ReturnStatus::Approved);
    assert_eq!(stored.reason, "Defective product");
    assert_eq!(service.summary().await.unwrap().requests.len(), 1);
}

#[tokio::test]
async fn test_refund_for_missing_order() {
    let service = service(ServiceConfig::default());
    service
        .create_rma(NewReturn::new("RMA01", "O404", "Defective", "Used"))
        .await
        .unwrap();
    service.inspect_and_approve("RMA01", true).await.unwrap();

    let result = service.process_refund("RMA01", "Card").await;
    assert!(matches!(result, Err(RmaError::OrderNotFound(id)) if id == "O404"));
    assert!(service.summary().await.unwrap().refunds.is_empty());
}

#[tokio::test]
async fn test_unknown_lookups() {
    let service = service(ServiceConfig::default());
    assert!(matches!(
        service.order("O1").await,
        Err(RmaError::OrderNotFound(_))
    ));
    assert!(matches!(
        service.return_request("RMA1").await,
        Err(RmaError::RmaNotFound(_))
    ));
}

#[tokio::test]
async fn test_strict_transitions_reject_second_decision() {
    let config = ServiceConfig {
        transitions: TransitionPolicy::Strict,
        ..ServiceConfig::default()
    };
    let service = with_request(config, dec!(10)).await;
    service.inspect_and_approve("RMA01", true).await.unwrap();

    let result = service.inspect_and_approve("RMA01", false).await;
    assert!(matches!(
        result,
        Err(RmaError::InvalidTransition {
            from: ReturnStatus::Approved,
            to: ReturnStatus::Denied,
            ..
        })
    ));

    // Re-approving a terminal request is refused too.
    assert!(service.inspect_and_approve("RMA01", true).await.is_err());

    // The approval still stands, so the refund goes through.
    let receipt = service.process_refund("RMA01", "Card").await.unwrap();
    assert_eq!(receipt.refund.amount.value(), dec!(10));
}
