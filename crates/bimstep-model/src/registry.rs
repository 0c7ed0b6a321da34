//! Flattened per-type descriptors.
//!
//! Every declared entity gets one [`EntityType`] whose attribute list is the
//! supertype's list followed by the locally declared attributes. Ranks keep
//! counting from the supertype's last rank; explicit attributes and inverse
//! fields are numbered independently.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::SchemaError;
use crate::ifc2x3;
use crate::schema::EntityDef;

/// An explicit attribute in a flattened descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSlot {
    /// Position in the emitted record, inherited attributes first.
    pub rank: usize,
    /// Attribute name.
    pub name: &'static str,
    /// May be absent (`$`).
    pub optional: bool,
    /// SET/LIST valued.
    pub aggregate: bool,
    /// Redeclared as DERIVE by this type or one of its supertypes (`*`).
    pub derived: bool,
    /// Entity that declared the attribute.
    pub declared_in: &'static str,
}

/// An inverse field in a flattened descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseSlot {
    /// Position among inverse fields, inherited fields first.
    pub rank: usize,
    /// Inverse name.
    pub name: &'static str,
    /// Entity type holding the forward attribute.
    pub source: &'static str,
    /// Forward attribute on `source`.
    pub attribute: &'static str,
    /// Entity that declared the inverse.
    pub declared_in: &'static str,
}

/// Flattened descriptor of one entity type.
#[derive(Debug, Clone)]
pub struct EntityType {
    name: &'static str,
    step_name: String,
    is_abstract: bool,
    lineage: Vec<&'static str>,
    attributes: Vec<AttributeSlot>,
    inverses: Vec<InverseSlot>,
}

impl EntityType {
    /// Name in schema casing (e.g. `IfcWall`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical physical-file name (e.g. `IFCWALL`).
    pub fn step_name(&self) -> &str {
        &self.step_name
    }

    /// Whether the type is abstract.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Supertype chain from the root entity down to this one.
    pub fn lineage(&self) -> &[&'static str] {
        &self.lineage
    }

    /// Ordered explicit attributes, inherited first.
    pub fn attributes(&self) -> &[AttributeSlot] {
        &self.attributes
    }

    /// Ordered inverse fields, inherited first.
    pub fn inverses(&self) -> &[InverseSlot] {
        &self.inverses
    }

    /// Look up an explicit attribute by name (case-insensitive).
    pub fn attribute(&self, name: &str) -> Option<&AttributeSlot> {
        self.attributes
            .iter()
            .find(|slot| slot.name.eq_ignore_ascii_case(name))
    }

    /// Whether this type is `name` or one of its subtypes.
    pub fn is_a(&self, name: &str) -> bool {
        self.lineage.iter().any(|t| t.eq_ignore_ascii_case(name))
    }
}

/// Registration table of flattened entity types for one schema.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    name: &'static str,
    types: Vec<EntityType>,
    by_name: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Flatten a declaration table. Supertypes must precede their subtypes.
    pub fn build(name: &'static str, defs: &[EntityDef]) -> Result<Self, SchemaError> {
        let mut types: Vec<EntityType> = Vec::with_capacity(defs.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(defs.len());

        for def in defs {
            let key = def.name.to_ascii_uppercase();
            if by_name.contains_key(&key) {
                return Err(SchemaError::DuplicateType(def.name.to_string()));
            }

            let (mut lineage, mut attributes, mut inverses) = match def.supertype {
                Some(supertype) => {
                    let parent = by_name
                        .get(&supertype.to_ascii_uppercase())
                        .map(|&idx| &types[idx])
                        .ok_or_else(|| SchemaError::UnknownSupertype {
                            entity: def.name.to_string(),
                            supertype: supertype.to_string(),
                        })?;
                    (
                        parent.lineage.clone(),
                        parent.attributes.clone(),
                        parent.inverses.clone(),
                    )
                }
                None => (Vec::new(), Vec::new(), Vec::new()),
            };
            lineage.push(def.name);

            for &derived in def.derived {
                let slot = attributes
                    .iter_mut()
                    .find(|slot| slot.name == derived)
                    .ok_or_else(|| SchemaError::UnknownDerived {
                        entity: def.name.to_string(),
                        attribute: derived.to_string(),
                    })?;
                slot.derived = true;
            }

            for attr in def.attributes {
                if attributes.iter().any(|slot| slot.name == attr.name) {
                    return Err(SchemaError::DuplicateAttribute {
                        entity: def.name.to_string(),
                        attribute: attr.name.to_string(),
                    });
                }
                attributes.push(AttributeSlot {
                    rank: attributes.len(),
                    name: attr.name,
                    optional: attr.optional,
                    aggregate: attr.aggregate,
                    derived: false,
                    declared_in: def.name,
                });
            }

            for inverse in def.inverses {
                if inverses.iter().any(|slot| slot.name == inverse.name) {
                    return Err(SchemaError::DuplicateAttribute {
                        entity: def.name.to_string(),
                        attribute: inverse.name.to_string(),
                    });
                }
                inverses.push(InverseSlot {
                    rank: inverses.len(),
                    name: inverse.name,
                    source: inverse.source,
                    attribute: inverse.attribute,
                    declared_in: def.name,
                });
            }

            by_name.insert(key, types.len());
            types.push(EntityType {
                name: def.name,
                step_name: def.name.to_ascii_uppercase(),
                is_abstract: def.is_abstract,
                lineage,
                attributes,
                inverses,
            });
        }

        let registry = Self {
            name,
            types,
            by_name,
        };
        registry.check_inverses()?;
        Ok(registry)
    }

    /// The built-in IFC2X3 registry, flattened on first use.
    pub fn ifc2x3() -> &'static SchemaRegistry {
        static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            SchemaRegistry::build(ifc2x3::SCHEMA_NAME, ifc2x3::ENTITIES)
                .expect("IFC2X3 declaration table is consistent")
        })
    }

    /// Schema identifier (e.g. `IFC2X3`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a type by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&EntityType> {
        self.by_name
            .get(&name.to_ascii_uppercase())
            .map(|&idx| &self.types[idx])
    }

    /// Whether `sub` is `sup` or one of its subtypes. Unknown names are never related.
    pub fn is_subtype_of(&self, sub: &str, sup: &str) -> bool {
        self.get(sub).map(|t| t.is_a(sup)).unwrap_or(false)
    }

    /// All types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &EntityType> {
        self.types.iter()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no type is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // Inverse sources may be declared after the entity naming them, so they
    // are resolved once the whole table is flattened.
    fn check_inverses(&self) -> Result<(), SchemaError> {
        for ty in &self.types {
            for inverse in ty.inverses.iter().filter(|i| i.declared_in == ty.name) {
                let source = self.get(inverse.source).ok_or_else(|| {
                    SchemaError::UnknownInverseSource {
                        entity: ty.name.to_string(),
                        inverse: inverse.name.to_string(),
                        source_type: inverse.source.to_string(),
                    }
                })?;
                if source.attribute(inverse.attribute).is_none() {
                    return Err(SchemaError::UnknownInverseSource {
                        entity: ty.name.to_string(),
                        inverse: inverse.name.to_string(),
                        source_type: format!("{}.{}", inverse.source, inverse.attribute),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeDef, InverseDef};

    #[test]
    fn test_ifc2x3_builds() {
        let registry = SchemaRegistry::ifc2x3();
        assert_eq!(registry.name(), "IFC2X3");
        assert!(registry.get("IfcWall").is_some());
        assert!(registry.get("IFCWALL").is_some());
        assert!(registry.get("IfcWindow").is_none());
    }

    #[test]
    fn test_inherited_attributes_come_first() {
        let registry = SchemaRegistry::ifc2x3();
        let wall = registry.get("IfcWall").unwrap();
        let names: Vec<_> = wall.attributes().iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            [
                "GlobalId",
                "OwnerHistory",
                "Name",
                "Description",
                "ObjectType",
                "ObjectPlacement",
                "Representation",
                "Tag",
            ]
        );
        for (i, slot) in wall.attributes().iter().enumerate() {
            assert_eq!(slot.rank, i);
        }
        assert_eq!(wall.attributes()[7].declared_in, "IfcElement");
        assert_eq!(wall.step_name(), "IFCWALL");
    }

    #[test]
    fn test_site_has_fourteen_attributes() {
        let site = SchemaRegistry::ifc2x3().get("IfcSite").unwrap();
        assert_eq!(site.attributes().len(), 14);
        assert_eq!(site.attributes()[8].name, "CompositionType");
    }

    #[test]
    fn test_inverse_ranks_are_independent() {
        let storey = SchemaRegistry::ifc2x3().get("IfcBuildingStorey").unwrap();
        let names: Vec<_> = storey.inverses().iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            [
                "IsDecomposedBy",
                "Decomposes",
                "HasAssociations",
                "ContainsElements",
            ]
        );
        assert_eq!(storey.inverses()[3].rank, 3);
        assert_eq!(storey.attributes().len(), 10);
    }

    #[test]
    fn test_derived_redeclaration() {
        let registry = SchemaRegistry::ifc2x3();
        let si = registry.get("IfcSIUnit").unwrap();
        assert!(si.attributes()[0].derived);
        assert_eq!(si.attributes()[0].name, "Dimensions");
        let conversion = registry.get("IfcConversionBasedUnit").unwrap();
        assert!(!conversion.attributes()[0].derived);
    }

    #[test]
    fn test_subtype_relation() {
        let registry = SchemaRegistry::ifc2x3();
        assert!(registry.is_subtype_of("IfcRelAggregates", "IfcRelDecomposes"));
        assert!(registry.is_subtype_of("IfcWall", "IfcProduct"));
        assert!(registry.is_subtype_of("IfcWall", "IfcWall"));
        assert!(!registry.is_subtype_of("IfcProject", "IfcProduct"));
        assert!(!registry.is_subtype_of("IfcNothing", "IfcRoot"));
    }

    #[test]
    fn test_unknown_supertype() {
        static DEFS: &[EntityDef] = &[EntityDef::new("Child").subtype_of("Parent")];
        let err = SchemaRegistry::build("TEST", DEFS).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownSupertype { .. }));
    }

    #[test]
    fn test_unknown_derived() {
        static DEFS: &[EntityDef] = &[
            EntityDef::new("Parent").attributes(&[AttributeDef::required("A")]),
            EntityDef::new("Child").subtype_of("Parent").derives(&["B"]),
        ];
        let err = SchemaRegistry::build("TEST", DEFS).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownDerived { .. }));
    }

    #[test]
    fn test_duplicate_type() {
        static DEFS: &[EntityDef] = &[EntityDef::new("Thing"), EntityDef::new("THING")];
        let err = SchemaRegistry::build("TEST", DEFS).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType(_)));
    }

    #[test]
    fn test_unknown_inverse_source() {
        static DEFS: &[EntityDef] = &[EntityDef::new("Target")
            .inverses(&[InverseDef::new("UsedBy", "Missing", "Target")])];
        let err = SchemaRegistry::build("TEST", DEFS).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownInverseSource { .. }));
    }
}
