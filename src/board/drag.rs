//! Keyboard drag-and-drop capability
//!
//! Tracks registered drop targets (column ids in display order), the item
//! being dragged and the hovered target, and turns gestures into
//! [`DragEvent`]s for the board controller. The hovered target plays the
//! role of the pointer's nearest drop zone.

use crate::types::{ColumnId, TaskId};

/// Drag lifecycle notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Started {
        item_id: TaskId,
    },
    Ended {
        item_id: TaskId,
        source: ColumnId,
        /// `None` when the drag was cancelled or ended outside any target
        destination: Option<ColumnId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    item_id: TaskId,
    source: ColumnId,
    hovered: ColumnId,
}

#[derive(Debug, Clone, Default)]
pub struct DragContext {
    targets: Vec<ColumnId>,
    active: Option<ActiveDrag>,
}

impl DragContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registered drop targets
    pub fn register_targets(&mut self, targets: impl IntoIterator<Item = ColumnId>) {
        self.targets = targets.into_iter().collect();
    }

    pub fn targets(&self) -> &[ColumnId] {
        &self.targets
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_item(&self) -> Option<&TaskId> {
        self.active.as_ref().map(|d| &d.item_id)
    }

    pub fn source(&self) -> Option<&ColumnId> {
        self.active.as_ref().map(|d| &d.source)
    }

    /// Hovered target, if it is still registered
    pub fn hovered(&self) -> Option<&ColumnId> {
        let active = self.active.as_ref()?;
        self.targets.iter().find(|t| **t == active.hovered)
    }

    /// Pick up `item_id` from `source`. Ignored while another drag is active.
    pub fn begin(&mut self, item_id: TaskId, source: ColumnId) -> Option<DragEvent> {
        if self.active.is_some() {
            return None;
        }
        self.active = Some(ActiveDrag {
            item_id: item_id.clone(),
            hovered: source.clone(),
            source,
        });
        Some(DragEvent::Started { item_id })
    }

    /// Move the hover one target to the right (stops at the last target)
    pub fn hover_next(&mut self) {
        self.step_hover(1);
    }

    /// Move the hover one target to the left (stops at the first target)
    pub fn hover_prev(&mut self) {
        self.step_hover(-1);
    }

    fn step_hover(&mut self, delta: isize) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if self.targets.is_empty() {
            return;
        }
        let current = self
            .targets
            .iter()
            .position(|t| *t == active.hovered)
            .unwrap_or(0) as isize;
        let last = self.targets.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        active.hovered = self.targets[next].clone();
    }

    /// Drop onto the hovered target
    pub fn drop_item(&mut self) -> Option<DragEvent> {
        let destination = self.hovered().cloned();
        let active = self.active.take()?;
        Some(DragEvent::Ended {
            item_id: active.item_id,
            source: active.source,
            destination,
        })
    }

    /// Abort the drag; the item stays where it was
    pub fn cancel(&mut self) -> Option<DragEvent> {
        let active = self.active.take()?;
        Some(DragEvent::Ended {
            item_id: active.item_id,
            source: active.source,
            destination: None,
        })
    }
}
