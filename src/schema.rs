use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::template::{FieldType, FormInstance, FormTemplate};

/// A user-entered value. Text is what inputs produce; numeric widgets may
/// hand over decimals directly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Decimal::from(value))
    }
}

/// One record of entered values, keyed by descriptor `field_name`.
pub type Record = BTreeMap<String, FieldValue>;

/// The full data shape handed to [`FormSchema::validate`]: one ordered record
/// sequence per form name, mirroring the active instance set.
pub type SubmissionValues = BTreeMap<String, Vec<Record>>;

/// Locates the failing input: rendered as `form[index].field`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldPath {
    pub form: String,
    pub index: usize,
    pub field: String,
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}].{}", self.form, self.index, self.field)
    }
}

/// First failure encountered by a synchronous validate call. Recoverable;
/// validation never mutates state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    Required(FieldPath),
    InvalidEmail(FieldPath),
    NotANumber(FieldPath),
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required(_) => "必須項目です",
            ValidationError::InvalidEmail(_) => "有効なメールアドレスを入力してください",
            ValidationError::NotANumber(_) => "数値で入力してください",
        }
    }

    pub fn path(&self) -> &FieldPath {
        match self {
            ValidationError::Required(path)
            | ValidationError::InvalidEmail(path)
            | ValidationError::NotANumber(path) => path,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path(), self.message())
    }
}

impl std::error::Error for ValidationError {}

enum RuleFailure {
    Required,
    InvalidEmail,
    NotANumber,
}

/// Validation rule selected per descriptor type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldRule {
    Text,
    Email,
    Number,
}

impl FieldRule {
    pub fn for_type(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Email => FieldRule::Email,
            FieldType::Number => FieldRule::Number,
            // Unrecognized types validate as required free text.
            FieldType::Text | FieldType::Other(_) => FieldRule::Text,
        }
    }

    fn check(self, value: Option<&FieldValue>) -> Result<(), RuleFailure> {
        match self {
            FieldRule::Text => match value {
                Some(FieldValue::Text(text)) if text.is_empty() => Err(RuleFailure::Required),
                Some(_) => Ok(()),
                None => Err(RuleFailure::Required),
            },
            FieldRule::Email => match value {
                Some(FieldValue::Text(text)) if text.is_empty() => Err(RuleFailure::Required),
                Some(FieldValue::Text(text)) if looks_like_email(text) => Ok(()),
                Some(_) => Err(RuleFailure::InvalidEmail),
                None => Err(RuleFailure::Required),
            },
            FieldRule::Number => match value {
                Some(FieldValue::Number(_)) => Ok(()),
                Some(FieldValue::Text(text)) => match Decimal::from_str(text.trim()) {
                    Ok(_) => Ok(()),
                    Err(_) => Err(RuleFailure::NotANumber),
                },
                None => Err(RuleFailure::Required),
            },
        }
    }
}

// RFC-5322-lite shape check: one `@`, non-empty local part, dotted domain
// with non-empty labels, no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Anything the schema builder can read a form shape from: blueprints before
/// instantiation or live instances from the field set.
pub trait FormShape {
    fn form_name(&self) -> &str;
    fn field_specs(&self) -> Vec<(&str, &FieldType)>;
}

impl FormShape for FormTemplate {
    fn form_name(&self) -> &str {
        &self.name
    }

    fn field_specs(&self) -> Vec<(&str, &FieldType)> {
        self.sub_fields
            .iter()
            .map(|descriptor| (descriptor.field_name.as_str(), &descriptor.field_type))
            .collect()
    }
}

impl FormShape for FormInstance {
    fn form_name(&self) -> &str {
        &self.name
    }

    fn field_specs(&self) -> Vec<(&str, &FieldType)> {
        self.sub_fields
            .iter()
            .map(|field| (field.field_name.as_str(), &field.field_type))
            .collect()
    }
}

/// Compiled validator over the submission data shape. Fails fast: the first
/// failing field in schema order, then record order, then field order yields
/// the single error of a validate call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormSchema {
    forms: Vec<(String, Vec<(String, FieldRule)>)>,
}

impl FormSchema {
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.forms.iter().any(|(form_name, _)| form_name == name)
    }

    pub fn form_names(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(|(name, _)| name.as_str())
    }

    /// Form names absent from `values` pass, as do submission keys unknown to
    /// the schema; keeping the shapes synchronized is the caller's contract.
    pub fn validate(&self, values: &SubmissionValues) -> Result<(), ValidationError> {
        for (form_name, rules) in &self.forms {
            let Some(records) = values.get(form_name) else {
                continue;
            };
            for (index, record) in records.iter().enumerate() {
                for (field_name, rule) in rules {
                    if let Err(failure) = rule.check(record.get(field_name)) {
                        let path = FieldPath {
                            form: form_name.clone(),
                            index,
                            field: field_name.clone(),
                        };
                        return Err(match failure {
                            RuleFailure::Required => ValidationError::Required(path),
                            RuleFailure::InvalidEmail => ValidationError::InvalidEmail(path),
                            RuleFailure::NotANumber => ValidationError::NotANumber(path),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Builds the validator for the given forms. Duplicate names keep the first
/// occurrence's position; the last definition wins.
pub fn build_schema<F: FormShape>(forms: &[F]) -> FormSchema {
    let mut schema = FormSchema::default();
    for form in forms {
        let rules = form
            .field_specs()
            .into_iter()
            .map(|(field_name, field_type)| {
                (field_name.to_string(), FieldRule::for_type(field_type))
            })
            .collect::<Vec<_>>();
        match schema
            .forms
            .iter_mut()
            .find(|(name, _)| name.as_str() == form.form_name())
        {
            Some(entry) => entry.1 = rules,
            None => schema.forms.push((form.form_name().to_string(), rules)),
        }
    }
    schema
}
