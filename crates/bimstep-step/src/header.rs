//! HEADER section records.

use serde::{Deserialize, Serialize};

use crate::encoder::encode_string;

/// Contents of the three HEADER records.
///
/// Every field has a default, so a partial TOML table is a valid header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    /// `FILE_DESCRIPTION` description lines.
    pub description: Vec<String>,
    /// `FILE_DESCRIPTION` implementation level.
    pub implementation_level: String,
    /// `FILE_NAME` name.
    pub name: String,
    /// `FILE_NAME` time stamp, ISO 8601.
    pub time_stamp: String,
    /// `FILE_NAME` authors.
    pub author: Vec<String>,
    /// `FILE_NAME` organizations.
    pub organization: Vec<String>,
    /// `FILE_NAME` preprocessor version.
    pub preprocessor_version: String,
    /// `FILE_NAME` originating system.
    pub originating_system: String,
    /// `FILE_NAME` authorization.
    pub authorization: String,
    /// `FILE_SCHEMA` schema identifiers.
    pub schema: Vec<String>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            description: vec!["ViewDefinition [CoordinationView]".to_string()],
            implementation_level: "2;1".to_string(),
            name: String::new(),
            time_stamp: String::new(),
            author: vec![String::new()],
            organization: vec![String::new()],
            preprocessor_version: concat!("bimstep ", env!("CARGO_PKG_VERSION")).to_string(),
            originating_system: String::new(),
            authorization: String::new(),
            schema: vec![bimstep_model::ifc2x3::SCHEMA_NAME.to_string()],
        }
    }
}

impl Header {
    /// Append the three records, one per line.
    pub fn render(&self, out: &mut String) {
        out.push_str("FILE_DESCRIPTION(");
        push_list(out, &self.description);
        out.push(',');
        encode_string(out, &self.implementation_level);
        out.push_str(");\n");

        out.push_str("FILE_NAME(");
        encode_string(out, &self.name);
        out.push(',');
        encode_string(out, &self.time_stamp);
        out.push(',');
        push_list(out, &self.author);
        out.push(',');
        push_list(out, &self.organization);
        for field in [
            &self.preprocessor_version,
            &self.originating_system,
            &self.authorization,
        ] {
            out.push(',');
            encode_string(out, field);
        }
        out.push_str(");\n");

        out.push_str("FILE_SCHEMA(");
        push_list(out, &self.schema);
        out.push_str(");\n");
    }
}

fn push_list(out: &mut String, items: &[String]) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_string(out, item);
    }
    out.push(')');
}
