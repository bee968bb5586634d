use crate::suffix::{RandomSuffix, SuffixGenerator};
use crate::template::{FormInstance, FormTemplate, InstanceField};

/// Ordered collection of [`FormInstance`]s stamped from templates, bounded by
/// an inclusive `[field_min, field_max]` range. The set exclusively owns its
/// instances; all mutation goes through the three operations below.
pub struct DynamicFieldSet {
    fields: Vec<FormInstance>,
    field_min: usize,
    field_max: usize,
    suffix: Box<dyn SuffixGenerator>,
}

impl DynamicFieldSet {
    /// Bounds are fixed for the lifetime of the set; `field_min <= field_max`
    /// is a caller contract.
    pub fn new(fields: Vec<FormInstance>, field_min: usize, field_max: usize) -> Self {
        Self::with_suffix_generator(fields, field_min, field_max, Box::new(RandomSuffix))
    }

    pub fn with_suffix_generator(
        fields: Vec<FormInstance>,
        field_min: usize,
        field_max: usize,
        suffix: Box<dyn SuffixGenerator>,
    ) -> Self {
        Self {
            fields,
            field_min,
            field_max,
            suffix,
        }
    }

    pub fn fields(&self) -> &[FormInstance] {
        &self.fields
    }

    pub fn field_min(&self) -> usize {
        self.field_min
    }

    pub fn field_max(&self) -> usize {
        self.field_max
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stamps a new instance from `template` and appends it. Silently ignored
    /// when the set is already at `field_max`. Every stamped identifier gets
    /// its own fresh suffix.
    pub fn add_field(&mut self, template: &FormTemplate) {
        if self.fields.len() >= self.field_max {
            return;
        }

        let base_name = template.name.as_str();
        let sub_fields = template
            .sub_fields
            .iter()
            .map(|descriptor| InstanceField {
                name: format!(
                    "{base_name}_{}_{}",
                    descriptor.field_name,
                    self.suffix.suffix()
                ),
                field_name: descriptor.field_name.clone(),
                field_type: descriptor.field_type.clone(),
                label: descriptor.label.clone(),
            })
            .collect();

        self.fields.push(FormInstance {
            id: format!("{base_name}_{}", self.suffix.suffix()),
            name: base_name.to_string(),
            sub_fields,
        });
    }

    /// Removes the instance at `index` with splice semantics (see
    /// [`splice_remove`]). Silently ignored while the set is at or below
    /// `field_min`, regardless of index validity.
    pub fn remove_field(&mut self, index: isize) {
        if self.fields.len() <= self.field_min {
            return;
        }
        splice_remove(&mut self.fields, index);
    }

    /// Unconditional clear, bypassing `field_min`. Idempotent.
    pub fn remove_all_fields(&mut self) {
        self.fields.clear();
    }
}

/// Removes one element with `Array.prototype.splice(index, 1)` semantics:
/// a negative index counts from the end and clamps to the front, an index at
/// or past the end removes nothing. Never panics.
pub(crate) fn splice_remove<T>(items: &mut Vec<T>, index: isize) -> Option<T> {
    let len = items.len() as isize;
    let start = if index < 0 { (len + index).max(0) } else { index };
    if start < len {
        Some(items.remove(start as usize))
    } else {
        None
    }
}
