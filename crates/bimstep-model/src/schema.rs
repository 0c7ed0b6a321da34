//! Static entity declarations.
//!
//! An [`EntityDef`] holds only what its EXPRESS entity declares locally:
//! explicit attributes, inherited attributes redeclared as DERIVE, and
//! inverse fields. The [`SchemaRegistry`](crate::SchemaRegistry) flattens the
//! supertype chain into per-type descriptors once at startup.

/// A locally declared explicit attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    /// Attribute name as written in the schema (e.g. `OwnerHistory`).
    pub name: &'static str,
    /// `OPTIONAL` in the schema; may be left absent (`$`).
    pub optional: bool,
    /// `SET`/`LIST` valued; a mandatory aggregate must not be empty.
    pub aggregate: bool,
}

impl AttributeDef {
    /// A mandatory single-valued attribute.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            optional: false,
            aggregate: false,
        }
    }

    /// An optional single-valued attribute.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
            aggregate: false,
        }
    }

    /// A mandatory aggregate with at least one member.
    pub const fn aggregate(name: &'static str) -> Self {
        Self {
            name,
            optional: false,
            aggregate: true,
        }
    }

    /// An optional aggregate.
    pub const fn optional_aggregate(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
            aggregate: true,
        }
    }
}

/// A locally declared inverse field: the entities of type `source` whose
/// attribute `attribute` references the declaring entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InverseDef {
    /// Inverse name (e.g. `IsDecomposedBy`).
    pub name: &'static str,
    /// Entity type holding the forward attribute.
    pub source: &'static str,
    /// Forward attribute on `source` that points back here.
    pub attribute: &'static str,
}

impl InverseDef {
    /// Declare an inverse field.
    pub const fn new(name: &'static str, source: &'static str, attribute: &'static str) -> Self {
        Self {
            name,
            source,
            attribute,
        }
    }
}

/// One entity declaration of a schema.
#[derive(Debug, Clone, Copy)]
pub struct EntityDef {
    /// Entity name in schema casing (e.g. `IfcWall`).
    pub name: &'static str,
    /// Direct supertype, declared earlier in the same table.
    pub supertype: Option<&'static str>,
    /// `ABSTRACT SUPERTYPE`; cannot be instantiated.
    pub is_abstract: bool,
    /// Locally declared explicit attributes, in schema order.
    pub attributes: &'static [AttributeDef],
    /// Inherited attributes this entity redeclares as DERIVE.
    pub derived: &'static [&'static str],
    /// Locally declared inverse fields, in schema order.
    pub inverses: &'static [InverseDef],
}

impl EntityDef {
    /// A root entity with no attributes.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            supertype: None,
            is_abstract: false,
            attributes: &[],
            derived: &[],
            inverses: &[],
        }
    }

    /// Set the direct supertype.
    pub const fn subtype_of(self, supertype: &'static str) -> Self {
        Self {
            supertype: Some(supertype),
            ..self
        }
    }

    /// Mark as abstract.
    pub const fn abstract_type(self) -> Self {
        Self {
            is_abstract: true,
            ..self
        }
    }

    /// Set the locally declared attributes.
    pub const fn attributes(self, attributes: &'static [AttributeDef]) -> Self {
        Self { attributes, ..self }
    }

    /// Set the inherited attributes redeclared as DERIVE.
    pub const fn derives(self, derived: &'static [&'static str]) -> Self {
        Self { derived, ..self }
    }

    /// Set the locally declared inverse fields.
    pub const fn inverses(self, inverses: &'static [InverseDef]) -> Self {
        Self { inverses, ..self }
    }
}
