//! Instance record emission.

use std::fmt::Write;

use bimstep_model::EntityRef;

use crate::encoder::ValueEncoder;
use crate::error::{EncodeError, SerializationError};
use crate::labels::LabelAllocator;

/// Renders `#N=TYPE(args);` records.
#[derive(Debug, Clone, Copy)]
pub struct LineEmitter<'a> {
    labels: &'a LabelAllocator,
    encoder: ValueEncoder<'a>,
}

impl<'a> LineEmitter<'a> {
    /// An emitter resolving labels (including references) through `labels`.
    pub fn new(labels: &'a LabelAllocator) -> Self {
        Self {
            labels,
            encoder: ValueEncoder::new(labels),
        }
    }

    /// Append the record of `entity`, terminated by a newline.
    pub fn emit(&self, out: &mut String, entity: EntityRef<'_>) -> Result<(), SerializationError> {
        let ty = entity.entity_type();
        let label = self.labels.get(entity.id()).ok_or_else(|| {
            SerializationError::unencodable(ty.name(), "#", EncodeError::Unlabeled(entity.id()))
        })?;

        let _ = write!(out, "#{label}=");
        out.push_str(ty.step_name());
        out.push('(');
        for (i, (slot, value)) in entity.attributes().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.encoder
                .encode_attribute(out, value)
                .map_err(|err| SerializationError::unencodable(ty.name(), slot.name, err))?;
        }
        out.push_str(");\n");
        Ok(())
    }
}
