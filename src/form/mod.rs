//! Password form state: length input, class toggles, and the last result.

use crate::pass::{
    self, CharClass, ClassSet, GeneratedPassword, GenerationRequest, SamplingPolicy,
    ValidationError, charset,
};
use crate::rand::IndexSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub length_text: String,
    pub classes: ClassSet,
    pub policy: SamplingPolicy,
    password: GeneratedPassword,
    pool_size: usize,
    generated: bool,
}

impl FormState {
    pub fn toggle(&mut self, class: CharClass) {
        self.classes.toggle(class);
    }

    pub fn set_length(&mut self, text: &str) {
        self.length_text = text.trim().to_string();
    }

    pub fn request(&self) -> Result<GenerationRequest, ValidationError> {
        GenerationRequest::validated(&self.length_text, self.classes)
    }

    /// Validate, then generate once and replace the displayed password.
    /// On a validation error nothing is generated and the old password stays.
    pub fn submit<R: IndexSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), ValidationError> {
        let request = self.request()?;
        self.password = pass::generate(&request, self.policy, rng);
        self.pool_size = charset::size(request.classes);
        self.generated = true;
        log::debug!("form submitted: {:?}", request);
        Ok(())
    }

    /// Back to the initial flags with no password. The sampling policy is a
    /// launch option, not a form field, so it survives.
    pub fn reset(&mut self) {
        *self = Self {
            policy: self.policy,
            ..Self::default()
        };
        log::debug!("form reset");
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.is_generated().then_some(&self.password)
    }

    /// Pool size the current password was drawn from; toggles made after
    /// generating do not change it.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            length_text: String::new(),
            classes: ClassSet {
                lowercase: true,
                ..ClassSet::NONE
            },
            policy: SamplingPolicy::Exact,
            password: GeneratedPassword::default(),
            pool_size: 0,
            generated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Scripted;

    #[test]
    fn initial_flags() {
        let form = FormState::default();
        assert!(form.classes.lowercase);
        assert!(!form.classes.uppercase && !form.classes.digits && !form.classes.symbols);
        assert!(!form.is_generated());
        assert!(form.password().is_none());
    }

    #[test]
    fn submit_generates_lowercase_by_default() {
        let mut form = FormState::default();
        form.set_length(" 5 ");
        form.submit(&mut Scripted::new(&[0, 1, 2, 3, 25])).unwrap();
        assert_eq!(form.password().unwrap().as_str(), "abcdz");
        assert!(form.is_generated());
    }

    #[test]
    fn invalid_length_does_not_generate() {
        let mut form = FormState::default();
        form.set_length("20");
        let err = form.submit(&mut Scripted::new(&[0])).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { max: 16 });
        assert!(!form.is_generated());
    }

    #[test]
    fn failed_submit_keeps_previous_password() {
        let mut form = FormState::default();
        form.set_length("4");
        form.submit(&mut Scripted::new(&[7])).unwrap();
        form.set_length("");
        assert_eq!(
            form.submit(&mut Scripted::new(&[0])),
            Err(ValidationError::Required)
        );
        assert_eq!(form.password().unwrap().as_str(), "hhhh");
    }

    #[test]
    fn toggles_change_pool() {
        let mut form = FormState::default();
        form.toggle(CharClass::Lowercase);
        form.toggle(CharClass::Digits);
        form.set_length("4");
        form.submit(&mut Scripted::new(&[0, 9, 3, 4])).unwrap();
        assert_eq!(form.password().unwrap().as_str(), "0934");
    }

    #[test]
    fn empty_selection_submits_without_error() {
        let mut form = FormState::default();
        form.toggle(CharClass::Lowercase);
        form.set_length("8");
        form.submit(&mut Scripted::new(&[0])).unwrap();
        assert!(form.is_generated());
        assert!(form.password().unwrap().is_empty());
    }

    #[test]
    fn pool_size_is_fixed_at_submit() {
        let mut form = FormState::default();
        form.toggle(CharClass::Digits);
        form.set_length("6");
        form.submit(&mut Scripted::new(&[4])).unwrap();
        assert_eq!(form.pool_size(), 36);

        form.toggle(CharClass::Symbols);
        form.toggle(CharClass::Uppercase);
        assert_eq!(form.pool_size(), 36);

        form.reset();
        assert_eq!(form.pool_size(), 0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut form = FormState {
            policy: SamplingPolicy::Legacy,
            ..FormState::default()
        };
        form.toggle(CharClass::Uppercase);
        form.toggle(CharClass::Symbols);
        form.toggle(CharClass::Lowercase);
        form.set_length("12");
        form.submit(&mut Scripted::new(&[1, 2, 3])).unwrap();

        form.reset();

        assert_eq!(
            form,
            FormState {
                policy: SamplingPolicy::Legacy,
                ..FormState::default()
            }
        );
        assert!(form.password().is_none());
    }
}
