//! Implicit type conversions applied to a validated configuration

use serde_json::Value;

use crate::attribute::{AttributeType, Attributes, ElementType, Schema};

/// Convert numbers and booleans given for string attributes into strings.
///
/// Only meaningful after [`crate::validate_config`] reported no errors;
/// values that do not fit the schema are left untouched.
pub fn conform_config(schema: &Schema, config: &mut Value) {
    conform_block(&schema.attributes, config);
}

fn conform_block(attributes: &Attributes, value: &mut Value) {
    let Value::Object(block) = value else {
        return;
    };
    for (name, value) in block.iter_mut() {
        let Some(attribute) = attributes.get(name) else {
            continue;
        };
        match &attribute.attribute_type {
            AttributeType::String => stringify(value),
            AttributeType::List {
                element: ElementType::String,
            } => {
                if let Value::Array(items) = value {
                    items.iter_mut().for_each(stringify);
                }
            }
            AttributeType::Map {
                element: ElementType::String,
            } => {
                if let Value::Object(entries) = value {
                    entries.values_mut().for_each(stringify);
                }
            }
            AttributeType::SingleNested { attributes } => conform_block(attributes, value),
            AttributeType::ListNested { attributes } => {
                if let Value::Array(items) = value {
                    for item in items {
                        conform_block(attributes, item);
                    }
                }
            }
            _ => {}
        }
    }
}

fn stringify(value: &mut Value) {
    let converted = match value {
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return,
    };
    *value = Value::String(converted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use serde_json::json;

    #[test]
    fn test_numbers_become_strings() {
        let schema = Schema::new(
            Attributes::new()
                .with("image", Attribute::string())
                .with("replicas", Attribute::int64())
                .with("args", Attribute::string_list())
                .with("requests", Attribute::string_map())
                .with(
                    "env",
                    Attribute::object(Attributes::new().with("value", Attribute::string())),
                ),
        );
        let mut config = json!({
            "image": 7,
            "replicas": 3,
            "args": ["--quiet", true],
            "requests": {"cpu": 2},
            "env": {"value": 1.5},
        });
        conform_config(&schema, &mut config);
        assert_eq!(
            config,
            json!({
                "image": "7",
                "replicas": 3,
                "args": ["--quiet", "true"],
                "requests": {"cpu": "2"},
                "env": {"value": "1.5"},
            })
        );
    }
}
