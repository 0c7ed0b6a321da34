//! Attribute values.

use crate::model::EntityId;

/// Three-valued EXPRESS logical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logical {
    /// `.T.`
    True,
    /// `.F.`
    False,
    /// `.U.`
    Unknown,
}

impl From<bool> for Logical {
    fn from(value: bool) -> Self {
        if value {
            Logical::True
        } else {
            Logical::False
        }
    }
}

/// A value held by an explicit attribute.
///
/// Everything except [`Value::Entity`] is a by-value leaf that is written
/// inline; entities are written as references to their own record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Reference to another entity of the same model.
    Entity(EntityId),
    /// Text (IfcLabel, IfcText, IfcIdentifier, ...).
    String(String),
    /// Real number (measures, ratios).
    Real(f64),
    /// Integer (counts, exponents, time stamps).
    Integer(i64),
    /// BOOLEAN.
    Boolean(bool),
    /// LOGICAL.
    Logical(Logical),
    /// Enumerant name without the surrounding dots.
    Enum(String),
    /// Defined type wrapped for a SELECT, e.g. `IFCPLANEANGLEMEASURE(0.5)`.
    Typed {
        /// Defined type name.
        type_name: String,
        /// Wrapped value.
        value: Box<Value>,
    },
    /// SET or LIST, in insertion order.
    List(Vec<Value>),
}

impl Value {
    /// An enumerant.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    /// A defined type wrapped for a SELECT.
    pub fn typed(type_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Typed {
            type_name: type_name.into(),
            value: Box::new(value.into()),
        }
    }

    /// An aggregate from anything convertible into values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Try to get as an entity reference.
    pub fn as_entity(&self) -> Option<EntityId> {
        match self {
            Value::Entity(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Call `f` for every entity reference inside this value, depth-first,
    /// in aggregate order.
    pub fn for_each_entity(&self, f: &mut impl FnMut(EntityId)) {
        match self {
            Value::Entity(id) => f(*id),
            Value::List(items) => items.iter().for_each(|item| item.for_each_entity(f)),
            Value::Typed { value, .. } => value.for_each_entity(f),
            _ => {}
        }
    }

    /// Entity references inside this value, in order.
    pub fn entities(&self) -> Vec<EntityId> {
        let mut ids = Vec::new();
        self.for_each_entity(&mut |id| ids.push(id));
        ids
    }
}

impl From<EntityId> for Value {
    fn from(id: EntityId) -> Self {
        Value::Entity(id)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Logical> for Value {
    fn from(v: Logical) -> Self {
        Value::Logical(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from("a"), Value::String("a".into()));
        assert_eq!(Value::from(3), Value::Integer(3));
        assert_eq!(Value::from(0.5), Value::Real(0.5));
        assert_eq!(
            Value::from(vec![1.0, 2.0]),
            Value::List(vec![Value::Real(1.0), Value::Real(2.0)])
        );
        assert_eq!(Value::from(Logical::Unknown), Value::Logical(Logical::Unknown));
    }

    #[test]
    fn test_entities_in_order() {
        let mut keys: SlotMap<EntityId, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());
        let value = Value::List(vec![
            Value::Entity(b),
            Value::Real(1.0),
            Value::typed("IfcWrapper", Value::Entity(a)),
            Value::List(vec![Value::Entity(b)]),
        ]);
        assert_eq!(value.entities(), vec![b, a, b]);
        assert!(Value::Real(1.0).entities().is_empty());
    }
}
