//! Physical-file serialization of a model.

use std::path::Path;

use bimstep_model::{EntityId, Model};
use tracing::debug;

use crate::emitter::LineEmitter;
use crate::error::{SerializationError, StepError};
use crate::header::Header;
use crate::walker::GraphWalker;
use crate::writer::write_to_file;

/// Serializes the graph reachable from a root entity.
///
/// Holds only the header; every call labels the graph from scratch, so one
/// serializer can be shared across threads and models.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    header: Header,
}

impl Serializer {
    /// A serializer writing `header`.
    pub fn new(header: Header) -> Self {
        Self { header }
    }

    /// Header written by [`serialize`](Self::serialize).
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The complete file: header, DATA section and trailer.
    pub fn serialize(
        &self,
        model: &Model<'_>,
        root: EntityId,
    ) -> Result<String, SerializationError> {
        let data = self.serialize_data(model, root)?;

        let mut out = String::with_capacity(data.len() + 512);
        out.push_str("ISO-10303-21;\nHEADER;\n");
        self.header.render(&mut out);
        out.push_str("ENDSEC;\nDATA;\n");
        out.push_str(&data);
        out.push_str("ENDSEC;\nEND-ISO-10303-21;\n");
        Ok(out)
    }

    /// The DATA section records only, one per line.
    pub fn serialize_data(
        &self,
        model: &Model<'_>,
        root: EntityId,
    ) -> Result<String, SerializationError> {
        debug!(entities = model.len(), "serializing model");
        let labels = GraphWalker::new(model).walk(root)?;

        let emitter = LineEmitter::new(&labels);
        let mut out = String::new();
        for entity in labels.order().iter().filter_map(|&id| model.entity(id)) {
            emitter.emit(&mut out, entity)?;
        }

        debug!(records = labels.len(), bytes = out.len(), "serialized model");
        Ok(out)
    }

    /// Serialize, then write the file. Nothing is written if serialization fails.
    pub fn export(
        &self,
        model: &Model<'_>,
        root: EntityId,
        path: impl AsRef<Path>,
    ) -> Result<(), StepError> {
        let text = self.serialize(model, root)?;
        write_to_file(&text, path)?;
        Ok(())
    }
}

/// Serialize with the default header.
pub fn serialize(model: &Model<'_>, root: EntityId) -> Result<String, SerializationError> {
    Serializer::default().serialize(model, root)
}

/// Serialize with the default header and write to `path`.
pub fn export(model: &Model<'_>, root: EntityId, path: impl AsRef<Path>) -> Result<(), StepError> {
    Serializer::default().export(model, root, path)
}
