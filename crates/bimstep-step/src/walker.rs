//! Graph discovery and label assignment.
//!
//! Every entity reachable from the root through forward attributes or inverse
//! fields is labeled exactly once. An entity is labeled after the entities its
//! forward attributes reference, and before the entities reachable only
//! through its inverse fields. The walk keeps an explicit work stack, so graph
//! depth is not limited by the call stack.

use bimstep_model::{AttributeValue, EntityId, Model};
use slotmap::SecondaryMap;
use tracing::trace;

use crate::error::SerializationError;
use crate::labels::LabelAllocator;

enum Step {
    /// Discover an entity and schedule its forward references.
    Visit(EntityId),
    /// All forward references are labeled: label the entity, then follow
    /// its inverse fields.
    Emit(EntityId),
}

/// Walks one model from a root entity.
///
/// All traversal state belongs to a single [`walk`](Self::walk) call.
#[derive(Debug, Clone, Copy)]
pub struct GraphWalker<'a, 's> {
    model: &'a Model<'s>,
}

impl<'a, 's> GraphWalker<'a, 's> {
    /// A walker over `model`.
    pub fn new(model: &'a Model<'s>) -> Self {
        Self { model }
    }

    /// Label every entity reachable from `root`, in emission order.
    pub fn walk(&self, root: EntityId) -> Result<LabelAllocator, SerializationError> {
        if !self.model.contains(root) {
            return Err(SerializationError::NullRoot);
        }

        let mut labels = LabelAllocator::new();
        let mut discovered: SecondaryMap<EntityId, ()> = SecondaryMap::new();
        let mut stack = vec![Step::Visit(root)];
        let mut children = Vec::new();

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(id) => {
                    let Some(entity) = self.model.entity(id) else {
                        continue;
                    };
                    if discovered.insert(id, ()).is_some() {
                        continue;
                    }
                    stack.push(Step::Emit(id));

                    children.clear();
                    for (_, value) in entity.attributes() {
                        if let AttributeValue::Present(value) = value {
                            value.for_each_entity(&mut |child| children.push(child));
                        }
                    }
                    stack.extend(children.drain(..).rev().map(Step::Visit));
                }
                Step::Emit(id) => {
                    let label = labels.label(id);
                    trace!(label, ?id, "labeled entity");

                    if let Some(entity) = self.model.entity(id) {
                        children.clear();
                        for (_, members) in entity.inverses() {
                            children.extend_from_slice(members);
                        }
                        stack.extend(children.drain(..).rev().map(Step::Visit));
                    }
                }
            }
        }

        Ok(labels)
    }
}
