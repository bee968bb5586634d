/// Input kind of a single form field. Anything outside the known kinds is
/// carried verbatim and validates as required free text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldType {
    Text,
    Email,
    Number,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Other(name) => name,
        }
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        match value {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "number" => FieldType::Number,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

/// Describes one input within a template. `field_name` is the semantic key
/// used for validation and value lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    pub field_name: String,
    pub field_type: FieldType,
    pub label: String,
}

impl FieldDescriptor {
    pub fn new(
        field_name: impl Into<String>,
        field_type: impl Into<FieldType>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            field_type: field_type.into(),
            label: label.into(),
        }
    }
}

/// Reusable blueprint for a form. Immutable once handed to the field set;
/// `name` must be non-empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormTemplate {
    pub name: String,
    pub sub_fields: Vec<FieldDescriptor>,
}

impl FormTemplate {
    pub fn new(name: impl Into<String>, sub_fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            sub_fields,
        }
    }
}

/// One input of an active instance. `name` is the derived globally-unique
/// identifier; `field_name` is inherited from the descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceField {
    pub name: String,
    pub field_name: String,
    pub field_type: FieldType,
    pub label: String,
}

/// A concrete, independently-identified copy of a template currently active
/// in the set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormInstance {
    pub id: String,
    pub name: String,
    pub sub_fields: Vec<InstanceField>,
}
