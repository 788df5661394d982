// SPDX-FileCopyrightText: 2026 Redress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event sink that records emitted events for assertions.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use redress_core::{EventSink, RedressError, TicketEvent};

/// Captures every emitted [`TicketEvent`] in order.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TicketEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of all events emitted so far.
    pub fn events(&self) -> Vec<TicketEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of events emitted so far.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn emit(&self, event: TicketEvent) -> Result<(), RedressError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
