pub(crate) struct FormField {
  pub(crate) allow_blank: bool,
  pub(crate) field_label: &'static str,
  pub(crate) hidden: bool,
  pub(crate) invalid: bool,
  pub(crate) name: &'static str,
  pub(crate) value: String,
}

impl FormField {
  pub(crate) const BLANK_TEXT: &str = "This field is required";

  pub(crate) fn hidden(name: &'static str, value: &str) -> Self {
    Self {
      allow_blank: true,
      field_label: "",
      hidden: true,
      invalid: false,
      name,
      value: value.into(),
    }
  }

  pub(crate) fn is_blank(&self) -> bool {
    self.value.trim().is_empty()
  }

  pub(crate) fn required(field_label: &'static str, name: &'static str) -> Self {
    Self {
      allow_blank: false,
      field_label,
      hidden: false,
      invalid: false,
      name,
      value: String::new(),
    }
  }

  /// Marks the field invalid when it is blank but must not be.
  pub(crate) fn validate(&mut self) -> bool {
    self.invalid = !self.allow_blank && self.is_blank();
    !self.invalid
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn whitespace_only_counts_as_blank() {
    let mut field = FormField::required("Story URL", "storyLink");
    field.value = "   ".into();

    assert!(!field.validate());
    assert!(field.invalid);
  }

  #[test]
  fn filling_a_required_field_clears_the_indicator() {
    let mut field = FormField::required("Story URL", "storyLink");
    assert!(!field.validate());

    field.value = "http://x".into();

    assert!(field.validate());
    assert!(!field.invalid);
  }

  #[test]
  fn hidden_fields_allow_blank() {
    let mut field = FormField::hidden("marker", "");

    assert!(field.validate());
  }
}
