//! Value encoding into the physical-file lexical grammar.
//!
//! Produces byte-exact tokens:
//! - Entity references (`#12`)
//! - Strings (`'it''s'`, with `\X\`, `\X2\` and `\X4\` escapes)
//! - Reals (`0.1`, `1.0E-5`, `-1.4210854715202E-17`)
//! - Integers, booleans and logicals (`.T.`, `.F.`, `.U.`)
//! - Enumerants (`.ELEMENT.`)
//! - Typed values (`IFCPLANEANGLEMEASURE(0.5)`)
//! - Aggregates (`(#1,#2)`)
//! - Absent (`$`) and derived (`*`) attributes

use std::fmt::Write;

use bimstep_model::{AttributeValue, Logical, Value};

use crate::error::EncodeError;
use crate::labels::LabelAllocator;

/// Marker for an absent optional attribute.
pub const NULL_MARKER: &str = "$";

/// Marker for an inherited attribute redeclared as DERIVE.
pub const DERIVED_MARKER: &str = "*";

/// Encodes values, resolving entity references through assigned labels.
#[derive(Debug, Clone, Copy)]
pub struct ValueEncoder<'a> {
    labels: &'a LabelAllocator,
}

impl<'a> ValueEncoder<'a> {
    /// An encoder resolving references through `labels`.
    pub fn new(labels: &'a LabelAllocator) -> Self {
        Self { labels }
    }

    /// Append the encoding of one attribute slot.
    pub fn encode_attribute(
        &self,
        out: &mut String,
        attribute: AttributeValue<'_>,
    ) -> Result<(), EncodeError> {
        match attribute {
            AttributeValue::Present(value) => self.encode(out, value),
            AttributeValue::Absent => {
                out.push_str(NULL_MARKER);
                Ok(())
            }
            AttributeValue::Derived => {
                out.push_str(DERIVED_MARKER);
                Ok(())
            }
        }
    }

    /// Append the encoding of `value`.
    pub fn encode(&self, out: &mut String, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Entity(id) => {
                let label = self.labels.get(*id).ok_or(EncodeError::Unlabeled(*id))?;
                let _ = write!(out, "#{label}");
            }
            Value::String(s) => encode_string(out, s),
            Value::Real(v) => out.push_str(&format_real(*v)?),
            Value::Integer(v) => {
                let _ = write!(out, "{v}");
            }
            Value::Boolean(b) => out.push_str(if *b { ".T." } else { ".F." }),
            Value::Logical(l) => out.push_str(match l {
                Logical::True => ".T.",
                Logical::False => ".F.",
                Logical::Unknown => ".U.",
            }),
            Value::Enum(name) => {
                if !is_keyword(name) {
                    return Err(EncodeError::InvalidEnumerant(name.clone()));
                }
                out.push('.');
                out.push_str(&name.to_ascii_uppercase());
                out.push('.');
            }
            Value::Typed { type_name, value } => {
                if !is_keyword(type_name) {
                    return Err(EncodeError::InvalidTypeName(type_name.clone()));
                }
                out.push_str(&type_name.to_ascii_uppercase());
                out.push('(');
                self.encode(out, value)?;
                out.push(')');
            }
            Value::List(items) => {
                out.push('(');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.encode(out, item)?;
                }
                out.push(')');
            }
        }
        Ok(())
    }
}

// Keywords and enumerants: a letter or underscore, then letters, digits or underscores.
fn is_keyword(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Append `text` as a quoted string literal.
///
/// Apostrophes and backslashes are doubled, printable ASCII is copied,
/// other ASCII characters become `\X\HH`, and runs of non-ASCII characters
/// become `\X2\HHHH…\X0\` (BMP) or `\X4\HHHHHHHH…\X0\` (other planes).
pub fn encode_string(out: &mut String, text: &str) {
    out.push('\'');
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(ch),
            c if c.is_ascii() => {
                let _ = write!(out, "\\X\\{:02X}", c as u32);
            }
            first => {
                let mut run = vec![first];
                while let Some(&next) = chars.peek() {
                    if next.is_ascii() {
                        break;
                    }
                    run.push(next);
                    chars.next();
                }
                encode_extended(out, &run);
            }
        }
    }
    out.push('\'');
}

fn encode_extended(out: &mut String, run: &[char]) {
    let mut wide: Option<bool> = None;
    for &ch in run {
        let is_wide = (ch as u32) > 0xFFFF;
        if wide != Some(is_wide) {
            if wide.is_some() {
                out.push_str("\\X0\\");
            }
            out.push_str(if is_wide { "\\X4\\" } else { "\\X2\\" });
            wide = Some(is_wide);
        }
        if is_wide {
            let _ = write!(out, "{:08X}", ch as u32);
        } else {
            let _ = write!(out, "{:04X}", ch as u32);
        }
    }
    if wide.is_some() {
        out.push_str("\\X0\\");
    }
}

/// Format a real as the shortest literal that reads back to the same value.
///
/// Magnitudes in `[1e-3, 1e7)` use plain decimal notation, all others use
/// `d.dddE±n`. There is always at least one digit after the decimal point,
/// and the sign of negative zero is kept.
pub fn format_real(value: f64) -> Result<String, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFiniteReal(value));
    }

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let magnitude = value.abs();
    if magnitude == 0.0 {
        out.push_str("0.0");
        return Ok(out);
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.4210854715202e-17`.
    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .ok_or(EncodeError::NonFiniteReal(value))?;
    let exponent: i32 = exponent
        .parse()
        .map_err(|_| EncodeError::NonFiniteReal(value))?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (1e-3..1e7).contains(&magnitude) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.extend(std::iter::repeat('0').take(int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take((-exponent - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() > 1 {
            out.push_str(&digits[1..]);
        } else {
            out.push('0');
        }
        let _ = write!(out, "E{exponent}");
    }
    Ok(out)
}
