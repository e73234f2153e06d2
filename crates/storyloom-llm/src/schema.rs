//! Output schema descriptor
//!
//! A backend-neutral description of the JSON shape a caller wants back.
//! The gemini module translates it to the wire format; the client uses it
//! again to check the parsed response.

use serde_json::Value;

/// Kind of value a schema node describes
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// JSON string
    String,
    /// Whole number
    Integer,
    /// Any JSON number
    Number,
    /// true / false
    Boolean,
    /// Homogeneous array
    Array(Box<Schema>),
    /// Object with named fields, in declaration order
    Object(Vec<Field>),
}

/// A schema node
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// What the node describes
    pub kind: SchemaKind,

    /// Hint passed to the backend
    pub description: Option<String>,
}

/// A named property of an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Property name
    pub name: String,

    /// Schema of the property value
    pub schema: Schema,

    /// Whether the property must be present (and non-null)
    pub required: bool,
}

impl Field {
    /// A property that must be present
    pub fn required(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            required: true,
        }
    }

    /// A property that may be omitted
    pub fn optional(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            required: false,
        }
    }
}

impl Schema {
    fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    /// String node
    pub fn string() -> Self {
        Self::of(SchemaKind::String)
    }

    /// Integer node
    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer)
    }

    /// Number node
    pub fn number() -> Self {
        Self::of(SchemaKind::Number)
    }

    /// Boolean node
    pub fn boolean() -> Self {
        Self::of(SchemaKind::Boolean)
    }

    /// Array of `items`
    pub fn array(items: Schema) -> Self {
        Self::of(SchemaKind::Array(Box::new(items)))
    }

    /// Object with the given fields
    pub fn object(fields: Vec<Field>) -> Self {
        Self::of(SchemaKind::Object(fields))
    }

    /// Attach a description
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check a parsed value against this schema
    ///
    /// Extra object properties are allowed; missing required ones and type
    /// mismatches are reported with a JSON-path-like location.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        self.validate_at("$", value)
    }

    fn validate_at(&self, path: &str, value: &Value) -> Result<(), String> {
        match &self.kind {
            SchemaKind::String => {
                if !value.is_string() {
                    return Err(format!("{}: expected string, found {}", path, type_name(value)));
                }
            }
            SchemaKind::Integer => {
                let whole = value.is_i64()
                    || value.is_u64()
                    || value.as_f64().map(|f| f.fract() == 0.0).unwrap_or(false);
                if !whole {
                    return Err(format!("{}: expected integer, found {}", path, type_name(value)));
                }
            }
            SchemaKind::Number => {
                if !value.is_number() {
                    return Err(format!("{}: expected number, found {}", path, type_name(value)));
                }
            }
            SchemaKind::Boolean => {
                if !value.is_boolean() {
                    return Err(format!("{}: expected boolean, found {}", path, type_name(value)));
                }
            }
            SchemaKind::Array(items) => {
                let array = value
                    .as_array()
                    .ok_or_else(|| format!("{}: expected array, found {}", path, type_name(value)))?;
                for (idx, item) in array.iter().enumerate() {
                    items.validate_at(&format!("{}[{}]", path, idx), item)?;
                }
            }
            SchemaKind::Object(fields) => {
                let object = value
                    .as_object()
                    .ok_or_else(|| format!("{}: expected object, found {}", path, type_name(value)))?;
                for field in fields {
                    let field_path = format!("{}.{}", path, field.name);
                    match object.get(&field.name) {
                        Some(Value::Null) | None if field.required => {
                            return Err(format!("{}: missing required field", field_path));
                        }
                        Some(Value::Null) | None => {}
                        Some(v) => field.schema.validate_at(&field_path, v)?,
                    }
                }
            }
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character_schema() -> Schema {
        Schema::array(Schema::object(vec![
            Field::required("name", Schema::string()),
            Field::optional("role", Schema::string()),
            Field::required("ending", Schema::string()),
        ]))
    }

    #[test]
    fn test_valid_array_of_objects() {
        let value = json!([
            {"name": "Mara", "ending": "She leaves the city", "role": "Protagonist"},
            {"name": "Tobin", "ending": "Unknown", "extra": 3}
        ]);
        assert!(character_schema().validate(&value).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let value = json!([{"name": "Mara"}]);
        let err = character_schema().validate(&value).unwrap_err();
        assert_eq!(err, "$[0].ending: missing required field");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let value = json!([{"name": "Mara", "ending": null}]);
        assert!(character_schema().validate(&value).is_err());
    }

    #[test]
    fn test_optional_field_may_be_null() {
        let value = json!([{"name": "Mara", "ending": "x", "role": null}]);
        assert!(character_schema().validate(&value).is_ok());
    }

    #[test]
    fn test_wrong_top_level_type() {
        let err = character_schema().validate(&json!({"name": "Mara"})).unwrap_err();
        assert!(err.contains("expected array"));
    }

    #[test]
    fn test_integer_accepts_whole_floats_only() {
        let schema = Schema::integer();
        assert!(schema.validate(&json!(42)).is_ok());
        assert!(schema.validate(&json!(42.0)).is_ok());
        assert!(schema.validate(&json!(42.5)).is_err());
        assert!(schema.validate(&json!("42")).is_err());
    }

    #[test]
    fn test_nested_path_in_error() {
        let schema = Schema::object(vec![Field::required(
            "points",
            Schema::array(Schema::object(vec![Field::required("tension", Schema::integer())])),
        )]);
        let err = schema
            .validate(&json!({"points": [{"tension": 5}, {"tension": "high"}]}))
            .unwrap_err();
        assert!(err.starts_with("$.points[1].tension"));
    }

    #[test]
    fn test_describe_sets_description() {
        let schema = Schema::string().describe("Name of the plot stage");
        assert_eq!(schema.description.as_deref(), Some("Name of the plot stage"));
    }
}
