use serde::{Deserialize, Serialize};

use crate::field_set::splice_remove;

/// One entered contact record, mirroring an active instance 1:1.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactValue {
    pub name: String,
    pub email: String,
}

/// Owned state for the contact use case. Not a singleton; the rendering layer
/// holds it and keeps it in lockstep with the field set.
#[derive(Clone, Debug, Default)]
pub struct ContactStore {
    values: Vec<ContactValue>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[ContactValue] {
        &self.values
    }

    pub fn value_mut(&mut self, index: usize) -> Option<&mut ContactValue> {
        self.values.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn add_form(&mut self) {
        self.values.push(ContactValue::default());
    }

    /// Splice semantics, matching the field set. The store itself carries no
    /// bounds.
    pub fn remove_form(&mut self, index: isize) {
        splice_remove(&mut self.values, index);
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Pretty-printed JSON of the current records, for the live preview pane.
    pub fn preview_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values)
    }
}
