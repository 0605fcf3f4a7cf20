//! Step-gated wizard engine shared by the registration flows.
//!
//! A wizard holds an ordered list of steps, the accumulated form record and
//! the error map for the active step. Forward navigation is gated on the
//! active step's validation; backward navigation is always allowed. Editing
//! a field clears exactly that field's error, nothing else. All transitions
//! are synchronous, pure state mutations.

mod attachment;

pub use attachment::{Attachment, AttachmentPreview};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::flows::{FlowKind, Registration};

/// Field-name-to-message map for the active step. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap(BTreeMap<&'static str, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// A value written into a form field by the front end.
///
/// The raw text is kept even when semantically invalid; validity is only
/// checked at step-advance time.
#[derive(Debug)]
pub enum FieldValue {
    /// Free text, or the label of a single-choice selection.
    Text(String),
    /// Boolean field (consent checkbox, delivery toggle).
    Flag(bool),
    /// Toggle membership of an entry in a multi-select field.
    Toggle(String),
    /// Attach a file: replaces the value of a single-file field, appends to
    /// a multi-file field.
    Attach(Attachment),
    /// Remove the file at the given index from a multi-file field.
    Detach(usize),
    /// Clear the field back to its empty state, releasing any attachments.
    Clear,
}

/// One page of a multi-page form, gating progress on its own field subset.
pub struct StepDef<F: ?Sized> {
    pub title: &'static str,
    pub validate: fn(&F) -> ErrorMap,
}

/// The accumulated record of one registration flow.
///
/// Implementations supply the ordered steps, the typed field set and the
/// conversion into the tagged [`Registration`] handed to the submission
/// collaborator.
pub trait FlowForm: Default + 'static {
    /// Typed handle for one field of this form.
    type Field: Copy + Eq + std::fmt::Debug;

    /// Which registration flow this form belongs to.
    fn flow() -> FlowKind;

    /// The ordered steps of this flow. Never empty.
    fn steps() -> &'static [StepDef<Self>];

    /// Stable field name used as the error-map key.
    fn field_name(field: Self::Field) -> &'static str;

    /// Look up a field handle by its stable name.
    fn field_from_name(name: &str) -> Option<Self::Field>;

    /// Write a value into the record. Values of a kind the field cannot
    /// hold are logged and ignored; the record is never left half-written.
    fn apply(&mut self, field: Self::Field, value: FieldValue);

    /// Consume the completed record into its tagged registration.
    fn into_registration(self) -> Registration;
}

/// Wizard state: 1-based step index, form record and active error map.
///
/// Created when the wizard opens (step 1, default record) and discarded when
/// it is closed or successfully submitted; dropping it releases every
/// attachment held by the record.
pub struct Wizard<F: FlowForm> {
    step: usize,
    form: F,
    errors: ErrorMap,
}

impl<F: FlowForm> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FlowForm> Wizard<F> {
    pub fn new() -> Self {
        Self {
            step: 1,
            form: F::default(),
            errors: ErrorMap::new(),
        }
    }

    /// Current step index, always within `[1, step_count]`.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count() -> usize {
        F::steps().len()
    }

    pub fn step_title(&self) -> &'static str {
        F::steps()[self.step - 1].title
    }

    pub fn is_final_step(&self) -> bool {
        self.step == Self::step_count()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Write `value` into `field`. If an error is currently recorded for
    /// that field, clear exactly that entry; other fields are not
    /// revalidated.
    pub fn set_field(&mut self, field: F::Field, value: FieldValue) {
        self.form.apply(field, value);
        self.errors.remove(F::field_name(field));
    }

    /// Run the active step's validation without changing any state.
    pub fn validate_current(&self) -> ErrorMap {
        (F::steps()[self.step - 1].validate)(&self.form)
    }

    /// Validate the active step and advance on success.
    ///
    /// On success the step index increments (capped at the final step) and
    /// the error map is cleared. On failure the error map is replaced with
    /// every violation found in the step and the index does not change.
    pub fn advance(&mut self) -> bool {
        let errors = self.validate_current();
        if errors.is_empty() {
            self.step = (self.step + 1).min(Self::step_count());
            self.errors = ErrorMap::new();
            true
        } else {
            tracing::debug!(
                step = self.step,
                errors = errors.len(),
                "step blocked by validation"
            );
            self.errors = errors;
            false
        }
    }

    /// Step backward, floor 1. Never validates: users may always go back to
    /// fix earlier input. The error map is left as-is.
    pub fn retreat(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Validate the final step and, on success, hand over the completed
    /// record tagged with its flow. On failure the error map is recorded
    /// and the wizard stays on the final step.
    ///
    /// After a successful submit the wizard holds a fresh default record
    /// and should be discarded by its caller.
    pub fn submit(&mut self) -> Result<Registration, ErrorMap> {
        let steps = F::steps();
        let errors = (steps[steps.len() - 1].validate)(&self.form);
        if errors.is_empty() {
            self.errors = ErrorMap::new();
            Ok(std::mem::take(&mut self.form).into_registration())
        } else {
            self.errors = errors.clone();
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::consumer::ConsumerSignup;

    /// Minimal two-step flow exercising the engine in isolation.
    #[derive(Debug, Default)]
    struct ProbeForm {
        name: String,
        agreed: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ProbeField {
        Name,
        Agreed,
    }

    fn validate_name(form: &ProbeForm) -> ErrorMap {
        let mut errors = ErrorMap::new();
        if form.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        errors
    }

    fn validate_agreed(form: &ProbeForm) -> ErrorMap {
        let mut errors = ErrorMap::new();
        if !form.agreed {
            errors.insert("agreed", "You must agree to terms and conditions");
        }
        errors
    }

    impl FlowForm for ProbeForm {
        type Field = ProbeField;

        fn flow() -> FlowKind {
            FlowKind::Consumer
        }

        fn steps() -> &'static [StepDef<Self>] {
            const STEPS: &[StepDef<ProbeForm>] = &[
                StepDef {
                    title: "Name",
                    validate: validate_name,
                },
                StepDef {
                    title: "Consent",
                    validate: validate_agreed,
                },
            ];
            STEPS
        }

        fn field_name(field: ProbeField) -> &'static str {
            match field {
                ProbeField::Name => "name",
                ProbeField::Agreed => "agreed",
            }
        }

        fn field_from_name(name: &str) -> Option<ProbeField> {
            match name {
                "name" => Some(ProbeField::Name),
                "agreed" => Some(ProbeField::Agreed),
                _ => None,
            }
        }

        fn apply(&mut self, field: ProbeField, value: FieldValue) {
            match (field, value) {
                (ProbeField::Name, FieldValue::Text(v)) => self.name = v,
                (ProbeField::Agreed, FieldValue::Flag(v)) => self.agreed = v,
                _ => {}
            }
        }

        fn into_registration(self) -> Registration {
            Registration::Consumer(ConsumerSignup {
                name: self.name,
                email: String::new(),
                phone: String::new(),
                password: String::new(),
            })
        }
    }

    #[test]
    fn test_new_wizard_starts_on_step_one() {
        let wizard = Wizard::<ProbeForm>::new();
        assert_eq!(wizard.step(), 1);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.step_title(), "Name");
    }

    #[test]
    fn test_advance_blocked_until_step_valid() {
        let mut wizard = Wizard::<ProbeForm>::new();

        assert!(!wizard.advance());
        assert_eq!(wizard.step(), 1);
        assert!(wizard.errors().contains("name"));

        wizard.set_field(ProbeField::Name, FieldValue::Text("Nimal".into()));
        assert!(wizard.advance());
        assert_eq!(wizard.step(), 2);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_advance_caps_at_final_step() {
        let mut wizard = Wizard::<ProbeForm>::new();
        wizard.set_field(ProbeField::Name, FieldValue::Text("Nimal".into()));
        wizard.advance();
        wizard.set_field(ProbeField::Agreed, FieldValue::Flag(true));

        assert!(wizard.advance());
        assert_eq!(wizard.step(), 2);
        // Idempotent on a valid final step.
        assert!(wizard.advance());
        assert_eq!(wizard.step(), 2);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_retreat_floors_at_step_one() {
        let mut wizard = Wizard::<ProbeForm>::new();
        wizard.retreat();
        assert_eq!(wizard.step(), 1);

        wizard.set_field(ProbeField::Name, FieldValue::Text("Nimal".into()));
        wizard.advance();
        wizard.retreat();
        assert_eq!(wizard.step(), 1);
        wizard.retreat();
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_retreat_leaves_error_map_untouched() {
        let mut wizard = Wizard::<ProbeForm>::new();
        wizard.set_field(ProbeField::Name, FieldValue::Text("Nimal".into()));
        wizard.advance();
        assert!(!wizard.advance());
        assert!(wizard.errors().contains("agreed"));

        wizard.retreat();
        assert!(wizard.errors().contains("agreed"));
    }

    #[test]
    fn test_editing_field_clears_only_its_error() {
        let mut wizard = Wizard::<ProbeForm>::new();
        assert!(!wizard.advance());

        // Error for a different field survives the edit.
        let mut errors = wizard.validate_current();
        errors.insert("agreed", "placeholder");
        assert_eq!(errors.len(), 2);
        errors.remove("name");
        assert!(errors.contains("agreed"));
        assert!(!errors.contains("name"));

        wizard.set_field(ProbeField::Name, FieldValue::Text("Nimal".into()));
        assert!(!wizard.errors().contains("name"));
    }

    #[test]
    fn test_submit_gates_on_final_step_rules() {
        let mut wizard = Wizard::<ProbeForm>::new();
        wizard.set_field(ProbeField::Name, FieldValue::Text("Nimal".into()));
        wizard.advance();

        let errors = wizard.submit().unwrap_err();
        assert!(errors.contains("agreed"));
        assert_eq!(wizard.step(), 2);

        wizard.set_field(ProbeField::Agreed, FieldValue::Flag(true));
        let record = wizard.submit().expect("valid final step should submit");
        assert_eq!(record.role(), "consumer");
    }
}
