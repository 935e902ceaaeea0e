//! Bridges comparator events onto the tracing stack.
//!
//! The core keeps its diff algorithm free of logging; this observer is
//! what the CLI injects to get per-page log lines on stderr.

use routediff_core::compare::{DiffEvent, DiffObserver};

pub struct TracingObserver;

impl DiffObserver for TracingObserver {
    fn on_event(&mut self, event: DiffEvent<'_>) {
        match event {
            DiffEvent::PageChanged { name, size_delta } => {
                tracing::info!(page = name, size_delta, "page changed");
            }
            DiffEvent::PageAdded { name } => {
                tracing::info!(page = name, "page is new");
            }
            DiffEvent::PageDeleted { name } => {
                tracing::info!(page = name, "page was deleted");
            }
            DiffEvent::GlobalChangeSuspected { total_changes } => {
                tracing::warn!(total_changes, "possible global change detected");
            }
            DiffEvent::ComponentIdChanged { name, from, to } => {
                tracing::info!(page = name, from, to, "component id changed");
            }
        }
    }
}
