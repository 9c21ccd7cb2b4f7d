use std::path::{Path, PathBuf};

use super::form_field::FormField;

/// A file to be signed together with the form fields placed on it.
///
/// Only the path is kept; the file is read by the HTTP client at submission time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    file: PathBuf,
    form_fields: Vec<FormField>,
}

impl Document {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            form_fields: vec![],
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn set_file(&mut self, file: impl Into<PathBuf>) {
        self.file = file.into();
    }

    pub fn form_fields(&self) -> &[FormField] {
        &self.form_fields
    }

    pub fn add_form_field(&mut self, form_field: FormField) {
        self.form_fields.push(form_field);
    }

    pub fn set_form_fields(&mut self, form_fields: Vec<FormField>) {
        self.form_fields = form_fields;
    }

    pub fn has_form_fields(&self) -> bool {
        !self.form_fields.is_empty()
    }
}
