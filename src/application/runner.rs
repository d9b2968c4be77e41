use super::event::WorkflowEvent;
use super::service::RmaService;
use crate::error::{Result, RmaError};
use std::io::Write;

/// Replays workflow events against a service and narrates each outcome.
///
/// A rejected event is reported and the run carries on. Only a failure to
/// write the narrative stops it.
pub struct Runner<'a, W: Write> {
    service: &'a RmaService,
    out: W,
    rejected: usize,
}

impl<'a, W: Write> Runner<'a, W> {
    pub fn new(service: &'a RmaService, out: W) -> Self {
        Self {
            service,
            out,
            rejected: 0,
        }
    }

    /// Number of events the service refused so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Applies every event in order. Unreadable events count as rejected.
    pub async fn run<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<WorkflowEvent>>,
    {
        for event in events {
            match event {
                Ok(event) => self.apply(event).await?,
                Err(e) => {
                    tracing::error!(error = %e, "unreadable workflow event");
                    self.reject(&e)?;
                }
            }
        }
        Ok(())
    }

    pub async fn apply(&mut self, event: WorkflowEvent) -> Result<()> {
        match event {
            WorkflowEvent::AddOrder(order) => {
                let line = order.to_string();
                match self.service.add_order(order).await {
                    Ok(()) => writeln!(self.out, "{line}")?,
                    Err(e) => self.reject(&e)?,
                }
            }
            WorkflowEvent::CreateReturn(new) => match self.service.create_rma(new).await {
                Ok(request) => writeln!(self.out, "{request}")?,
                Err(e) => self.reject(&e)?,
            },
            WorkflowEvent::Inspect { rma_id, approved } => {
                match self.service.inspect_and_approve(&rma_id, approved).await {
                    Ok(request) => {
                        writeln!(self.out, "Inspected {}: {}", request.rma_id, request.status)?
                    }
                    Err(e) => self.reject(&e)?,
                }
            }
            WorkflowEvent::Refund { rma_id, channel } => {
                match self.service.process_refund(&rma_id, &channel).await {
                    Ok(receipt) => {
                        for line in receipt.confirmation {
                            writeln!(self.out, "{line}")?;
                        }
                    }
                    Err(e) => self.reject(&e)?,
                }
            }
        }
        Ok(())
    }

    fn reject(&mut self, error: &RmaError) -> Result<()> {
        self.rejected += 1;
        match error {
            RmaError::NotApproved { .. } => writeln!(self.out, "RMA not approved. Refund denied.")?,
            other => writeln!(self.out, "Error: {other}")?,
        }
        Ok(())
    }
}
