#![warn(missing_docs)]

//! ISO 10303-21 physical-file export for bimstep models.
//!
//! Walks the entity graph reachable from a root, labels every entity once
//! (`#1`, `#2`, ...) and renders one record per entity with its explicit
//! attributes in schema order. Inverse fields extend reachability but are
//! never written.
//!
//! # Example
//!
//! ```
//! use bimstep_model::Model;
//! use bimstep_step::serialize;
//!
//! let mut model = Model::ifc2x3();
//! let person = model.create("IfcPerson").set("GivenName", "Ada").build().unwrap();
//!
//! let text = serialize(&model, person).unwrap();
//! assert!(text.contains("#1=IFCPERSON($,$,'Ada',$,$,$,$,$);\n"));
//! ```

mod emitter;
mod encoder;
mod error;
mod header;
mod labels;
mod serializer;
mod walker;
mod writer;

#[cfg(test)]
mod fixture;

pub use emitter::LineEmitter;
pub use encoder::{encode_string, format_real, ValueEncoder, DERIVED_MARKER, NULL_MARKER};
pub use error::{EncodeError, SerializationError, StepError, WriteError};
pub use header::Header;
pub use labels::LabelAllocator;
pub use serializer::{export, serialize, Serializer};
pub use walker::GraphWalker;
pub use writer::write_to_file;
