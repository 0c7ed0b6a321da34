#![warn(missing_docs)]

//! Entity model for IFC physical-file export.
//!
//! Provides the schema registration tables (one flattened descriptor per
//! entity type, inherited attributes first), the value model, and an
//! arena-backed [`Model`] whose entities reference each other by [`EntityId`].
//! Inverse fields are kept up to date as entities are inserted.
//!
//! # Example
//!
//! ```
//! use bimstep_model::Model;
//!
//! let mut model = Model::ifc2x3();
//! let person = model.create("IfcPerson").set("GivenName", "Ada").build().unwrap();
//! let org = model.create("IfcOrganization").set("Name", "ACME").build().unwrap();
//! let pao = model
//!     .create("IfcPersonAndOrganization")
//!     .set("ThePerson", person)
//!     .set("TheOrganization", org)
//!     .build()
//!     .unwrap();
//!
//! let engaged = model.entity(person).unwrap().inverse("EngagedIn").unwrap();
//! assert_eq!(engaged, &[pao][..]);
//! ```

mod document;
mod error;
pub mod ifc2x3;
mod model;
mod registry;
pub mod schema;
mod value;

pub use document::{Document, DocumentEntity, LoadedDocument};
pub use error::{DocumentError, ModelError, SchemaError};
pub use model::{AttributeValue, EntityBuilder, EntityId, EntityRef, Model};
pub use registry::{AttributeSlot, EntityType, InverseSlot, SchemaRegistry};
pub use value::{Logical, Value};
