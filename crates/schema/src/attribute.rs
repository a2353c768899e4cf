//! Attribute and schema declarations

use serde::Serialize;
use std::collections::BTreeMap;

use crate::validators::Validator;

/// Top-level schema of a data source
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Schema version
    pub version: i64,

    /// Human readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Root attributes
    pub attributes: Attributes,
}

impl Schema {
    pub fn new(attributes: Attributes) -> Self {
        Self {
            version: 0,
            description: None,
            attributes,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Types implementing this trait declare the attributes of their configuration block.
pub trait SchemaObject {
    fn attributes() -> Attributes;
}

/// Named attributes of one configuration block, kept in name order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, replacing any previous declaration with the same name
    pub fn with(mut self, name: &str, attribute: Attribute) -> Self {
        self.0.insert(name.to_string(), attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Attribute)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count every attribute in this block and all nested blocks
    pub fn count_recursive(&self) -> usize {
        self.0
            .values()
            .map(|attribute| match attribute.nested_attributes() {
                Some(nested) => 1 + nested.count_recursive(),
                None => 1,
            })
            .sum()
    }
}

/// Element type of list and map attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    String,
    Int64,
}

/// Value type of an attribute
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Bool,
    /// Kubernetes int-or-string: accepts a whole number or a string
    IntOrString,
    List {
        element: ElementType,
    },
    Map {
        element: ElementType,
    },
    SingleNested {
        attributes: Attributes,
    },
    ListNested {
        attributes: Attributes,
    },
}

impl AttributeType {
    /// Short name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Int64 => "number",
            AttributeType::Bool => "bool",
            AttributeType::IntOrString => "number or string",
            AttributeType::List { .. } => "list",
            AttributeType::Map { .. } => "map",
            AttributeType::SingleNested { .. } => "object",
            AttributeType::ListNested { .. } => "list of objects",
        }
    }
}

/// A single configuration attribute
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub attribute_type: AttributeType,

    pub required: bool,

    pub optional: bool,

    pub computed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,

    /// Setting the attribute still works but produces a warning with this message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Attribute {
    fn of(attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            required: false,
            optional: true,
            computed: false,
            description: None,
            validators: Vec::new(),
            deprecation_message: None,
        }
    }

    pub fn string() -> Self {
        Self::of(AttributeType::String)
    }

    pub fn int64() -> Self {
        Self::of(AttributeType::Int64)
    }

    pub fn bool() -> Self {
        Self::of(AttributeType::Bool)
    }

    pub fn int_or_string() -> Self {
        Self::of(AttributeType::IntOrString)
    }

    pub fn string_list() -> Self {
        Self::of(AttributeType::List {
            element: ElementType::String,
        })
    }

    pub fn int64_list() -> Self {
        Self::of(AttributeType::List {
            element: ElementType::Int64,
        })
    }

    pub fn string_map() -> Self {
        Self::of(AttributeType::Map {
            element: ElementType::String,
        })
    }

    /// Nested single object declared by `T`
    pub fn nested<T: SchemaObject>() -> Self {
        Self::of(AttributeType::SingleNested {
            attributes: T::attributes(),
        })
    }

    /// Nested list of objects declared by `T`
    pub fn nested_list<T: SchemaObject>() -> Self {
        Self::of(AttributeType::ListNested {
            attributes: T::attributes(),
        })
    }

    /// Nested single object with explicitly given attributes
    pub fn object(attributes: Attributes) -> Self {
        Self::of(AttributeType::SingleNested { attributes })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self.computed = false;
        self
    }

    /// Value is produced by the data source and must not be configured
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self.required = false;
        self.optional = false;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecation_message = Some(message.into());
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Attributes of a nested block, if this attribute is one
    pub fn nested_attributes(&self) -> Option<&Attributes> {
        match &self.attribute_type {
            AttributeType::SingleNested { attributes } | AttributeType::ListNested { attributes } => {
                Some(attributes)
            }
            _ => None,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Port;

    impl SchemaObject for Port {
        fn attributes() -> Attributes {
            Attributes::new()
                .with("name", Attribute::string())
                .with("container_port", Attribute::int64().required())
        }
    }

    #[test]
    fn test_builder_flags() {
        let required = Attribute::string().required();
        assert!(required.required);
        assert!(!required.optional);

        let computed = Attribute::string().computed();
        assert!(computed.is_read_only());
        assert!(!Attribute::string().is_read_only());
    }

    #[test]
    fn test_nested_attributes_come_from_schema_object() {
        let attribute = Attribute::nested_list::<Port>();
        let nested = attribute.nested_attributes().unwrap();
        assert_eq!(nested.len(), 2);
        assert!(nested.get("container_port").unwrap().required);
    }

    #[test]
    fn test_count_recursive() {
        let attributes = Attributes::new()
            .with("ports", Attribute::nested_list::<Port>())
            .with("image", Attribute::string());
        assert_eq!(attributes.count_recursive(), 4);
    }

    #[test]
    fn test_schema_serializes_to_json() {
        let schema = Schema::new(
            Attributes::new().with("yaml", Attribute::string().computed().describe("Rendered")),
        );
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["attributes"]["yaml"]["type"], "string");
        assert_eq!(json["attributes"]["yaml"]["computed"], true);
        assert_eq!(json["attributes"]["yaml"]["description"], "Rendered");
    }
}
