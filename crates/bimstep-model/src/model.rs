//! Entity arena.
//!
//! Entities live in a [`SlotMap`]; the key is the entity's identity. Two
//! entities with equal attribute values are still two entities.

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::error::ModelError;
use crate::registry::{AttributeSlot, EntityType, InverseSlot, SchemaRegistry};
use crate::value::Value;

new_key_type! {
    /// Stable identity of an entity within one [`Model`].
    pub struct EntityId;
}

/// Storage for one entity, indexed by slot rank.
#[derive(Debug, Clone)]
struct EntityData<'s> {
    ty: &'s EntityType,
    values: Vec<Option<Value>>,
    inverses: Vec<Vec<EntityId>>,
}

/// State of one explicit attribute of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    /// A value is present.
    Present(&'a Value),
    /// Optional attribute left unset.
    Absent,
    /// Inherited attribute redeclared as DERIVE by the concrete type.
    Derived,
}

impl<'a> AttributeValue<'a> {
    /// The present value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            AttributeValue::Present(v) => Some(v),
            _ => None,
        }
    }
}

/// A population of entities conforming to one schema.
#[derive(Debug, Clone)]
pub struct Model<'s> {
    schema: &'s SchemaRegistry,
    entities: SlotMap<EntityId, EntityData<'s>>,
}

impl Model<'static> {
    /// An empty IFC2X3 model.
    pub fn ifc2x3() -> Self {
        Model::new(SchemaRegistry::ifc2x3())
    }
}

impl<'s> Model<'s> {
    /// An empty model for `schema`.
    pub fn new(schema: &'s SchemaRegistry) -> Self {
        Self {
            schema,
            entities: SlotMap::with_key(),
        }
    }

    /// Schema this model conforms to.
    pub fn schema(&self) -> &'s SchemaRegistry {
        self.schema
    }

    /// Start building an entity of `type_name`.
    pub fn create<'m>(&'m mut self, type_name: &str) -> EntityBuilder<'m, 's> {
        let ty = match self.schema.get(type_name) {
            Some(ty) if ty.is_abstract() => Err(ModelError::AbstractType(ty.name().to_string())),
            Some(ty) => Ok(ty),
            None => Err(ModelError::UnknownType(type_name.to_string())),
        };
        let values = match &ty {
            Ok(ty) => vec![None; ty.attributes().len()],
            Err(_) => Vec::new(),
        };
        EntityBuilder {
            model: self,
            ty,
            values,
            error: None,
        }
    }

    /// Whether `id` belongs to this model.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Read-only view of an entity.
    pub fn entity(&self, id: EntityId) -> Option<EntityRef<'_>> {
        self.entities.get(id).map(|data| EntityRef {
            id,
            ty: data.ty,
            values: &data.values,
            inverses: &data.inverses,
        })
    }

    /// All entity ids, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the model holds no entity.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn insert(&mut self, ty: &'s EntityType, values: Vec<Option<Value>>) -> EntityId {
        let mut back_refs = Vec::new();
        for (slot, value) in ty.attributes().iter().zip(&values) {
            if let Some(value) = value {
                value.for_each_entity(&mut |target| back_refs.push((target, slot.name)));
            }
        }

        let id = self.entities.insert(EntityData {
            ty,
            values,
            inverses: vec![Vec::new(); ty.inverses().len()],
        });
        trace!(entity = ty.name(), ?id, "inserted entity");

        for (target, attribute) in back_refs {
            let Some(data) = self.entities.get_mut(target) else {
                continue;
            };
            for (slot, members) in data.ty.inverses().iter().zip(data.inverses.iter_mut()) {
                if slot.attribute == attribute && ty.is_a(slot.source) && !members.contains(&id) {
                    members.push(id);
                }
            }
        }
        id
    }
}

/// Read-only view of one entity.
#[derive(Debug, Clone, Copy)]
pub struct EntityRef<'a> {
    id: EntityId,
    ty: &'a EntityType,
    values: &'a [Option<Value>],
    inverses: &'a [Vec<EntityId>],
}

impl<'a> EntityRef<'a> {
    /// Identity of the entity.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Concrete type descriptor.
    pub fn entity_type(&self) -> &'a EntityType {
        self.ty
    }

    /// Explicit attributes in emission order, inherited first.
    pub fn attributes(&self) -> impl Iterator<Item = (&'a AttributeSlot, AttributeValue<'a>)> {
        self.ty
            .attributes()
            .iter()
            .zip(self.values.iter())
            .map(|(slot, value)| {
                let state = match value {
                    _ if slot.derived => AttributeValue::Derived,
                    Some(v) => AttributeValue::Present(v),
                    None => AttributeValue::Absent,
                };
                (slot, state)
            })
    }

    /// Inverse fields in declaration order, inherited first.
    pub fn inverses(&self) -> impl Iterator<Item = (&'a InverseSlot, &'a [EntityId])> {
        self.ty
            .inverses()
            .iter()
            .zip(self.inverses.iter())
            .map(|(slot, members)| (slot, members.as_slice()))
    }

    /// State of the attribute called `name`.
    pub fn get(&self, name: &str) -> Option<AttributeValue<'a>> {
        self.attributes()
            .find(|(slot, _)| slot.name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Members of the inverse field called `name`.
    pub fn inverse(&self, name: &str) -> Option<&'a [EntityId]> {
        self.inverses()
            .find(|(slot, _)| slot.name.eq_ignore_ascii_case(name))
            .map(|(_, members)| members)
    }
}

/// Collects attribute values and validates them on [`build`](Self::build).
///
/// The first error encountered is kept and returned by `build`.
pub struct EntityBuilder<'m, 's> {
    model: &'m mut Model<'s>,
    ty: Result<&'s EntityType, ModelError>,
    values: Vec<Option<Value>>,
    error: Option<ModelError>,
}

impl<'m, 's> EntityBuilder<'m, 's> {
    /// Assign the attribute called `name`.
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.assign(name, value.into()) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Assign the attribute when `value` is `Some`, leave it absent otherwise.
    pub fn set_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Validate and insert the entity.
    pub fn build(self) -> Result<EntityId, ModelError> {
        let ty = self.ty?;
        if let Some(err) = self.error {
            return Err(err);
        }

        for (slot, value) in ty.attributes().iter().zip(&self.values) {
            if slot.derived {
                continue;
            }
            match value {
                None if !slot.optional => {
                    return Err(ModelError::MissingAttribute {
                        entity: ty.name().to_string(),
                        attribute: slot.name.to_string(),
                    });
                }
                Some(Value::List(items)) if items.is_empty() && !slot.optional => {
                    return Err(ModelError::EmptyAggregate {
                        entity: ty.name().to_string(),
                        attribute: slot.name.to_string(),
                    });
                }
                Some(value) => {
                    if slot.aggregate && value.as_list().is_none() {
                        return Err(ModelError::ExpectedAggregate {
                            entity: ty.name().to_string(),
                            attribute: slot.name.to_string(),
                        });
                    }
                    let mut dangling = false;
                    value.for_each_entity(&mut |id| dangling |= !self.model.contains(id));
                    if dangling {
                        return Err(ModelError::DanglingReference {
                            entity: ty.name().to_string(),
                            attribute: slot.name.to_string(),
                        });
                    }
                }
                None => {}
            }
        }

        Ok(self.model.insert(ty, self.values))
    }

    fn assign(&mut self, name: &str, value: Value) -> Result<(), ModelError> {
        let ty = match &self.ty {
            Ok(ty) => *ty,
            // Reported by build().
            Err(_) => return Ok(()),
        };
        let slot = ty.attribute(name).ok_or_else(|| ModelError::UnknownAttribute {
            entity: ty.name().to_string(),
            attribute: name.to_string(),
        })?;
        if slot.derived {
            return Err(ModelError::DerivedAttribute {
                entity: ty.name().to_string(),
                attribute: slot.name.to_string(),
            });
        }
        let target = &mut self.values[slot.rank];
        if target.is_some() {
            return Err(ModelError::DuplicateAttribute {
                entity: ty.name().to_string(),
                attribute: slot.name.to_string(),
            });
        }
        *target = Some(value);
        Ok(())
    }
}
