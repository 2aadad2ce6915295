//! Parameter validation.
//!
//! Every operation declares a static [`Schema`]: an ordered list of [`Field`]s, each
//! carrying one [`Rule`]. Parameters are checked as a keyed JSON map, so typed
//! parameter structs are serialized first (see [`validate_params`]).
//!
//! All rules are evaluated; violations are collected in declaration order and
//! returned together. Keys not named by the schema are ignored.
//!
//! A value is absent only when its key is missing or `null`. `0`, `false` and `""`
//! are present values and satisfy a required rule of the matching type.

mod format;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub use format::Format;

use crate::error::ValidationError;

/// JSON types a parameter can be required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Object => "object",
            Primitive::Array => "array",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Primitive::String => value.is_string(),
            Primitive::Number => value.is_number(),
            Primitive::Boolean => value.is_boolean(),
            Primitive::Object => value.is_object(),
            Primitive::Array => value.is_array(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation directive.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required(Primitive),
    Optional(Primitive),
    /// Required string in the given format.
    Format(Format),
    OptionalFormat(Format),
    /// Required string equal to one of the listed values.
    OneOf(&'static [&'static str]),
    OptionalOneOf(&'static [&'static str]),
    /// Required object whose own fields are checked against the nested schema.
    Object(&'static [Field]),
    /// Optional array of objects, each checked against the nested schema.
    OptionalList(&'static [Field]),
}

/// A named parameter and the rule it must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
}

impl Field {
    pub const fn new(name: &'static str, rule: Rule) -> Self {
        Self { name, rule }
    }
}

/// The ordered rule set of one operation.
pub type Schema = &'static [Field];

/// The bearer token every authenticated operation requires.
pub const ACCESS_TOKEN: Field = Field::new("accessToken", Rule::Required(Primitive::String));

/// Validates a keyed parameter map against a schema.
pub fn validate(params: &Map<String, Value>, schema: &[Field]) -> Result<(), ValidationError> {
    let mut problems = Vec::new();
    check_fields(None, params, schema, &mut problems);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(problems))
    }
}

/// Serializes a typed parameter struct and validates it against a schema.
pub fn validate_params<T: Serialize + ?Sized>(
    params: &T,
    schema: &[Field],
) -> Result<(), ValidationError> {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => validate(&map, schema),
        Ok(other) => Err(ValidationError::new(vec![format!(
            "parameters must be an object but was {}",
            type_name(&other)
        )])),
        Err(e) => Err(ValidationError::new(vec![format!(
            "parameters could not be serialized: {e}"
        )])),
    }
}

fn check_fields(
    prefix: Option<&str>,
    params: &Map<String, Value>,
    schema: &[Field],
    problems: &mut Vec<String>,
) {
    for field in schema {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{}", field.name),
            None => field.name.to_string(),
        };
        let value = params.get(field.name).filter(|v| !v.is_null());
        check(&path, field.rule, value, problems);
    }
}

fn check(path: &str, rule: Rule, value: Option<&Value>, problems: &mut Vec<String>) {
    match (rule, value) {
        (Rule::Required(ty), None) => {
            problems.push(format!("{path} is a required {ty} but was undefined"));
        }
        (Rule::Required(ty), Some(v)) if !ty.matches(v) => {
            problems.push(format!("{path} is a required {ty} but was {}", type_name(v)));
        }
        (Rule::Optional(ty), Some(v)) if !ty.matches(v) => {
            problems.push(format!("{path} is an optional {ty} but was {}", type_name(v)));
        }
        (Rule::Format(format), v) | (Rule::OptionalFormat(format), v @ Some(_)) => {
            if !v.is_some_and(|v| format.matches(v)) {
                problems.push(format!(
                    "Expected a value of type `{format}` for `{path}` but received `{}`",
                    render(v)
                ));
            }
        }
        (Rule::OneOf(allowed), v) | (Rule::OptionalOneOf(allowed), v @ Some(_)) => {
            let ok = v
                .and_then(Value::as_str)
                .is_some_and(|s| allowed.iter().any(|a| *a == s));
            if !ok {
                problems.push(format!(
                    "Expected one of [{}] for `{path}` but received `{}`",
                    allowed.join(", "),
                    render(v)
                ));
            }
        }
        (Rule::Object(fields), Some(Value::Object(map))) => {
            check_fields(Some(path), map, fields, problems);
        }
        (Rule::Object(_), v) => {
            problems.push(format!(
                "{path} is a required object but was {}",
                v.map_or("undefined", type_name)
            ));
        }
        (Rule::OptionalList(fields), Some(Value::Array(items))) => {
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                match item {
                    Value::Object(map) => check_fields(Some(&item_path), map, fields, problems),
                    other => problems.push(format!(
                        "{item_path} is a required object but was {}",
                        type_name(other)
                    )),
                }
            }
        }
        (Rule::OptionalList(_), Some(v)) => {
            problems.push(format!("{path} is an optional array but was {}", type_name(v)));
        }
        _ => {}
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), Value::to_string)
}
