mod field_set;
mod schema;
mod store;
mod suffix;
mod template;


pub use field_set::DynamicFieldSet;
pub use schema::{
    FieldPath, FieldRule, FieldValue, FormSchema, FormShape, Record, SubmissionValues,
    ValidationError, build_schema,
};
pub use store::{ContactStore, ContactValue};
pub use suffix::{RandomSuffix, SUFFIX_LEN, SuffixGenerator};
pub use template::{FieldDescriptor, FieldType, FormInstance, FormTemplate, InstanceField};
