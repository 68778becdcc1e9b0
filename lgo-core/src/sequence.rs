//! Last-issued-wins bookkeeping for in-flight requests.
//!
//! Each widget gets a counter. Issuing a request bumps it; a completion is
//! only applied if its ticket still carries the latest number.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Disaggregation,
    Ranking,
    Trend,
    Detail,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    widget: Widget,
    seq: u64,
}

impl Ticket {
    pub fn widget(&self) -> Widget {
        self.widget
    }
}

#[derive(Debug, Default, Clone)]
pub struct RequestSequencer {
    latest: HashMap<Widget, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, widget: Widget) -> Ticket {
        let seq = self.latest.entry(widget).or_insert(0);
        *seq += 1;
        Ticket { widget, seq: *seq }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.widget) == Some(&ticket.seq)
    }

    /// Invalidate everything in flight for `widget`.
    pub fn cancel(&mut self, widget: Widget) {
        if let Some(seq) = self.latest.get_mut(&widget) {
            *seq += 1;
        }
    }
}
