use std::collections::BTreeMap;

use crate::error::Result;
use crate::parser::scanner::{Scalar, Scanner};

/// Value of one key inside a generic `{ key value, .. }` body. Bare
/// keywords with no value (NonLooping, WrapWidth) record as `Flag`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Array(Vec<f32>),
    Interval([u32; 2]),
    Extent([f32; 3]),
    Flag,
}

/// A parsed generic block: optional quoted-name or numeric-index prefix
/// plus its key/value body.
#[derive(Debug, Clone, Default)]
pub struct ObjectBlock {
    pub name: Option<String>,
    pub index: Option<f64>,
    pub props: BTreeMap<String, Value>,
}

impl ObjectBlock {
    pub fn take_number(&mut self, key: &str) -> Option<f64> {
        match self.props.remove(key) {
            Some(Value::Number(n)) => Some(n),
            Some(other) => {
                self.props.insert(key.to_string(), other);
                None
            }
            None => None,
        }
    }

    pub fn take_string(&mut self, key: &str) -> Option<String> {
        match self.props.remove(key) {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.props.insert(key.to_string(), other);
                None
            }
            None => None,
        }
    }

    pub fn take_extent(&mut self, key: &str) -> Option<[f32; 3]> {
        match self.props.remove(key) {
            Some(Value::Extent(e)) => Some(e),
            Some(other) => {
                self.props.insert(key.to_string(), other);
                None
            }
            None => None,
        }
    }

    pub fn take_interval(&mut self, key: &str) -> Option<[u32; 2]> {
        match self.props.remove(key) {
            Some(Value::Interval(i)) => Some(i),
            Some(other) => {
                self.props.insert(key.to_string(), other);
                None
            }
            None => None,
        }
    }

    pub fn take_array(&mut self, key: &str) -> Option<Vec<f32>> {
        match self.props.remove(key) {
            Some(Value::Array(a)) => Some(a),
            Some(other) => {
                self.props.insert(key.to_string(), other);
                None
            }
            None => None,
        }
    }

    /// True when the key was present in any form; the key is removed.
    /// Flag keywords promote on presence alone.
    pub fn take_flag(&mut self, key: &str) -> bool {
        self.props.remove(key).is_some()
    }
}

/// Reads an optional prefix (quoted name, else a number) followed by a
/// `{ key value, .. }` body. The value shape is chosen by peeking:
/// `{` array, `"` string, digit or `-` number, anything else a bare flag.
/// Interval and extent keys get their fixed-arity typed reads.
pub fn parse_object(sc: &mut Scanner) -> Result<ObjectBlock> {
    let mut obj = ObjectBlock::default();
    if let Some(name) = sc.quoted_string()? {
        obj.name = Some(name.to_string());
    } else if matches!(sc.peek(), Some(c) if c == b'-' || c.is_ascii_digit()) {
        obj.index = Some(sc.number()?);
    }
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        let key = sc
            .keyword()
            .ok_or_else(|| sc.error("expected keyword"))?
            .to_string();
        let value = match sc.peek() {
            Some(b'{') => match key.as_str() {
                "Interval" => {
                    let v = sc.array_fixed::<u32, 2>()?.unwrap_or_default();
                    Value::Interval(v)
                }
                "MinimumExtent" | "MaximumExtent" => {
                    let v = sc.array_fixed::<f32, 3>()?.unwrap_or_default();
                    Value::Extent(v)
                }
                _ => Value::Array(sc.array()?.unwrap_or_default()),
            },
            Some(b'"') => Value::String(sc.quoted_string()?.unwrap_or_default().to_string()),
            Some(c) if c == b'-' || c.is_ascii_digit() => Value::Number(sc.number()?),
            _ => Value::Flag,
        };
        obj.props.insert(key, value);
        sc.accept(b',');
    }
    Ok(obj)
}

/// Reads `<count> { {..}, {..}, .. }` concatenating the inner arrays into
/// one flat buffer. The count header is a hint only and never trusted.
pub fn parse_vector_list<T: Scalar>(sc: &mut Scanner) -> Result<Vec<T>> {
    let _count = sc.number()?;
    sc.expect(b'{')?;
    let mut out = Vec::new();
    while !sc.accept(b'}') {
        if !sc.array_into(&mut out)? {
            return Err(sc.error("expected array"));
        }
        sc.accept(b',');
    }
    Ok(out)
}
