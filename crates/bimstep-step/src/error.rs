//! Error types for physical-file export.

use std::path::PathBuf;

use bimstep_model::EntityId;
use thiserror::Error;

/// A single value with no physical-file representation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// NaN or infinite real.
    #[error("Real {0} has no finite literal")]
    NonFiniteReal(f64),

    /// Enumerant name outside the keyword alphabet.
    #[error("Invalid enumerant name: {0:?}")]
    InvalidEnumerant(String),

    /// Defined type name outside the keyword alphabet.
    #[error("Invalid type name: {0:?}")]
    InvalidTypeName(String),

    /// Entity reference without an assigned label.
    #[error("Entity {0:?} has no label")]
    Unlabeled(EntityId),
}

/// Failure of a serialization pass. No text is returned when this occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializationError {
    /// Root entity is not part of the model.
    #[error("Root entity is not part of the model")]
    NullRoot,

    /// An attribute value cannot be written.
    #[error("Cannot encode {entity}.{attribute}: {source}")]
    UnencodableValue {
        /// Type of the entity holding the value.
        entity: String,
        /// Attribute name.
        attribute: String,
        /// Why the value cannot be written.
        #[source]
        source: EncodeError,
    },
}

impl SerializationError {
    /// Create an unencodable-value error.
    pub fn unencodable(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        source: EncodeError,
    ) -> Self {
        Self::UnencodableValue {
            entity: entity.into(),
            attribute: attribute.into(),
            source,
        }
    }
}

/// Failure writing an exported file.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Empty destination path.
    #[error("Destination path is empty")]
    InvalidPath,

    /// Destination cannot be opened or written.
    #[error("Cannot write {}: {source}", path.display())]
    Unwritable {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of [`export`](crate::Serializer::export).
#[derive(Error, Debug)]
pub enum StepError {
    /// Serialization pass failed.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Writing the file failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}
