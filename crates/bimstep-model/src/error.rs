//! Error types for schema registration, model construction and document loading.

use thiserror::Error;

/// Inconsistent schema declaration table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two declarations share a name.
    #[error("Duplicate entity type: {0}")]
    DuplicateType(String),

    /// Supertype not declared before its subtype.
    #[error("Entity {entity} names unknown supertype {supertype}")]
    UnknownSupertype {
        /// Declaring entity.
        entity: String,
        /// Missing supertype.
        supertype: String,
    },

    /// DERIVE redeclaration of an attribute that is not inherited.
    #[error("Entity {entity} derives unknown inherited attribute {attribute}")]
    UnknownDerived {
        /// Declaring entity.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Attribute or inverse name already used in the supertype chain.
    #[error("Entity {entity} redeclares attribute {attribute}")]
    DuplicateAttribute {
        /// Declaring entity.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Inverse field pointing at an unregistered entity or attribute.
    #[error("Inverse {entity}.{inverse} refers to unknown {source_type}")]
    UnknownInverseSource {
        /// Declaring entity.
        entity: String,
        /// Inverse name.
        inverse: String,
        /// Missing source entity (or `Entity.Attribute`).
        source_type: String,
    },
}

/// Construction-time validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Type not registered in the schema.
    #[error("Unknown entity type: {0}")]
    UnknownType(String),

    /// Abstract types cannot be instantiated.
    #[error("Entity type {0} is abstract")]
    AbstractType(String),

    /// No explicit attribute with that name.
    #[error("{entity} has no attribute {attribute}")]
    UnknownAttribute {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Attribute is DERIVE in this type and cannot be assigned.
    #[error("{entity}.{attribute} is derived and cannot be set")]
    DerivedAttribute {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Attribute assigned more than once.
    #[error("{entity}.{attribute} is set twice")]
    DuplicateAttribute {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Mandatory attribute left absent.
    #[error("{entity}.{attribute} is mandatory")]
    MissingAttribute {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Mandatory aggregate given no members.
    #[error("{entity}.{attribute} needs at least one member")]
    EmptyAggregate {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Aggregate attribute given a single value.
    #[error("{entity}.{attribute} expects a list")]
    ExpectedAggregate {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },

    /// Reference to an entity that is not part of this model.
    #[error("{entity}.{attribute} references an entity outside the model")]
    DanglingReference {
        /// Entity type.
        entity: String,
        /// Attribute name.
        attribute: String,
    },
}

/// Failure while loading a JSON model document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Malformed JSON or unexpected document shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entities share a local id.
    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),

    /// Reference to an id that no entity declares.
    #[error("Unknown entity id: {0}")]
    UnknownId(String),

    /// Entities referencing each other through forward attributes.
    #[error("Forward reference cycle through entity {0}")]
    ReferenceCycle(String),

    /// JSON value with no model counterpart.
    #[error("Invalid value for {entity}.{attribute}: {message}")]
    InvalidValue {
        /// Local entity id.
        entity: String,
        /// Attribute name.
        attribute: String,
        /// What was wrong.
        message: String,
    },

    /// Entity rejected by model validation.
    #[error("Entity {id}: {source}")]
    Model {
        /// Local entity id.
        id: String,
        /// Validation failure.
        #[source]
        source: ModelError,
    },
}
