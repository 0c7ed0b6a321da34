//! Instance label allocation.

use bimstep_model::EntityId;
use slotmap::SecondaryMap;

/// Assigns `#N` labels in emission order for one serialization pass.
///
/// Labels start at 1, are contiguous, and are never reassigned.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    labels: SecondaryMap<EntityId, u64>,
    order: Vec<EntityId>,
}

impl LabelAllocator {
    /// An allocator with no label assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of `id`, assigning the next free one on first use.
    pub fn label(&mut self, id: EntityId) -> u64 {
        if let Some(&label) = self.labels.get(id) {
            return label;
        }
        let label = self.order.len() as u64 + 1;
        self.labels.insert(id, label);
        self.order.push(id);
        label
    }

    /// Previously assigned label of `id`.
    pub fn get(&self, id: EntityId) -> Option<u64> {
        self.labels.get(id).copied()
    }

    /// Entities in label order (`order()[0]` is `#1`).
    pub fn order(&self) -> &[EntityId] {
        &self.order
    }

    /// Number of labels assigned.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no label was assigned.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
