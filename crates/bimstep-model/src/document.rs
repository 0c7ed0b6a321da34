//! JSON model documents.
//!
//! A document lists entities with local string ids and names the root:
//!
//! ```json
//! {
//!   "root": "project",
//!   "entities": [
//!     { "id": "person", "type": "IfcPerson", "attributes": { "GivenName": "" } },
//!     { "id": "org", "type": "IfcOrganization", "attributes": { "Name": "ACME" } }
//!   ]
//! }
//! ```
//!
//! Attribute values map as follows: `null` is absent, strings are strings,
//! integers stay integers, other numbers are reals, booleans are BOOLEAN,
//! arrays are aggregates, and the objects `{"ref": id}`, `{"enum": NAME}`,
//! `{"logical": "T"|"F"|"U"}` and `{"typed": TYPE, "value": v}` map to entity
//! references, enumerants, logicals and SELECT-wrapped defined types.
//! Entities may appear in any order; they are inserted forward references
//! first.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use tracing::debug;

use crate::error::DocumentError;
use crate::model::{EntityId, Model};
use crate::registry::SchemaRegistry;
use crate::value::{Logical, Value};

/// A serialized model population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Local id of the entity the export starts from.
    pub root: String,
    /// Entity declarations.
    pub entities: Vec<DocumentEntity>,
}

/// One entity of a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntity {
    /// Local id, unique within the document.
    pub id: String,
    /// Entity type name (case-insensitive).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Attribute values by name.
    #[serde(default)]
    pub attributes: BTreeMap<String, Json>,
}

/// Result of [`Document::load`].
#[derive(Debug)]
pub struct LoadedDocument<'s> {
    /// The populated model.
    pub model: Model<'s>,
    /// Id of the document root.
    pub root: EntityId,
    /// Local ids mapped to model ids.
    pub ids: HashMap<String, EntityId>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a model for `schema` from this document.
    pub fn load<'s>(
        &self,
        schema: &'s SchemaRegistry,
    ) -> Result<LoadedDocument<'s>, DocumentError> {
        let mut index = HashMap::with_capacity(self.entities.len());
        for (i, entity) in self.entities.iter().enumerate() {
            if index.insert(entity.id.as_str(), i).is_some() {
                return Err(DocumentError::DuplicateId(entity.id.clone()));
            }
        }

        let order = self.insertion_order(&index)?;
        let mut model = Model::new(schema);
        let mut ids: HashMap<String, EntityId> = HashMap::with_capacity(order.len());

        for i in order {
            let entity = &self.entities[i];
            let mut builder = model.create(&entity.type_name);
            for (name, json) in &entity.attributes {
                let value = convert(json, &ids).map_err(|message| DocumentError::InvalidValue {
                    entity: entity.id.clone(),
                    attribute: name.clone(),
                    message,
                })?;
                builder = builder.set_opt(name, value);
            }
            let id = builder.build().map_err(|source| DocumentError::Model {
                id: entity.id.clone(),
                source,
            })?;
            ids.insert(entity.id.clone(), id);
        }

        let root = *ids
            .get(&self.root)
            .ok_or_else(|| DocumentError::UnknownId(self.root.clone()))?;
        debug!(entities = model.len(), root = %self.root, "loaded document");

        Ok(LoadedDocument { model, root, ids })
    }

    // Depth-first post-order over forward references, so every referenced
    // entity is inserted before its referrer.
    fn insertion_order(&self, index: &HashMap<&str, usize>) -> Result<Vec<usize>, DocumentError> {
        let mut marks = vec![Mark::Unvisited; self.entities.len()];
        let mut order = Vec::with_capacity(self.entities.len());

        for start in 0..self.entities.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // (entity, whether its dependencies were already pushed)
            let mut stack = vec![(start, false)];
            while let Some((i, expanded)) = stack.pop() {
                if expanded {
                    marks[i] = Mark::Done;
                    order.push(i);
                    continue;
                }
                match marks[i] {
                    Mark::Done => continue,
                    Mark::InProgress => {
                        return Err(DocumentError::ReferenceCycle(self.entities[i].id.clone()))
                    }
                    Mark::Unvisited => {}
                }
                marks[i] = Mark::InProgress;
                stack.push((i, true));

                let mut deps = Vec::new();
                for json in self.entities[i].attributes.values() {
                    collect_refs(json, &mut deps);
                }
                for dep in deps.into_iter().rev() {
                    let j = *index
                        .get(dep)
                        .ok_or_else(|| DocumentError::UnknownId(dep.to_string()))?;
                    match marks[j] {
                        Mark::Done => {}
                        Mark::InProgress => {
                            return Err(DocumentError::ReferenceCycle(dep.to_string()))
                        }
                        Mark::Unvisited => stack.push((j, false)),
                    }
                }
            }
        }
        Ok(order)
    }
}

fn collect_refs<'a>(json: &'a Json, out: &mut Vec<&'a str>) {
    match json {
        Json::Array(items) => items.iter().for_each(|item| collect_refs(item, out)),
        Json::Object(map) => {
            if let Some(Json::String(id)) = map.get("ref") {
                out.push(id);
            } else if let Some(inner) = map.get("value") {
                collect_refs(inner, out);
            }
        }
        _ => {}
    }
}

/// Convert one JSON attribute value. `Ok(None)` means absent.
fn convert(json: &Json, ids: &HashMap<String, EntityId>) -> Result<Option<Value>, String> {
    match json {
        Json::Null => Ok(None),
        other => convert_present(other, ids).map(Some),
    }
}

fn convert_present(json: &Json, ids: &HashMap<String, EntityId>) -> Result<Value, String> {
    match json {
        Json::Null => Err("null inside an aggregate or typed value".to_string()),
        Json::Bool(b) => Ok(Value::Boolean(*b)),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else {
                n.as_f64()
                    .map(Value::Real)
                    .ok_or_else(|| format!("number {n} is out of range"))
            }
        }
        Json::Array(items) => items
            .iter()
            .map(|item| convert_present(item, ids))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Json::Object(map) => {
            if let Some(target) = map.get("ref") {
                let target = target.as_str().ok_or("\"ref\" must be a string")?;
                ids.get(target)
                    .copied()
                    .map(Value::Entity)
                    .ok_or_else(|| format!("unknown entity id {target}"))
            } else if let Some(name) = map.get("enum") {
                name.as_str()
                    .map(Value::enumeration)
                    .ok_or_else(|| "\"enum\" must be a string".to_string())
            } else if let Some(logical) = map.get("logical") {
                match logical.as_str() {
                    Some("T") => Ok(Value::Logical(Logical::True)),
                    Some("F") => Ok(Value::Logical(Logical::False)),
                    Some("U") => Ok(Value::Logical(Logical::Unknown)),
                    _ => Err("\"logical\" must be one of \"T\", \"F\", \"U\"".to_string()),
                }
            } else if let Some(type_name) = map.get("typed") {
                let type_name = type_name.as_str().ok_or("\"typed\" must be a string")?;
                let inner = map.get("value").ok_or("typed value needs \"value\"")?;
                Ok(Value::typed(type_name, convert_present(inner, ids)?))
            } else {
                Err("expected one of \"ref\", \"enum\", \"logical\", \"typed\"".to_string())
            }
        }
    }
}
