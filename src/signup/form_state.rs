use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::validation::FieldErrors;
use super::webhook::{SubmitError, WebhookPayload, FAILURE_ALERT};
use super::SignupRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// What the component should do after the user hits submit.
#[derive(Debug, PartialEq)]
pub enum SubmitAttempt<R: SignupRecord> {
    /// A request is already out, or the form is done. Send nothing.
    Busy,
    /// Validation failed; errors are now on the form.
    Invalid,
    /// Post this payload, then report back through `finish_submit`.
    Ready(WebhookPayload<R>),
}

/// State behind one form instance: the record being edited, its field
/// errors, and where the submission stands.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<R: SignupRecord> {
    record: R,
    errors: FieldErrors<R::Field>,
    status: SubmitStatus,
}

impl<R: SignupRecord> Default for FormState<R> {
    fn default() -> Self {
        Self {
            record: R::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
        }
    }
}

impl<R: SignupRecord> FormState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors<R::Field> {
        &self.errors
    }

    pub fn error(&self, field: R::Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn value(&self, field: R::Field) -> &str {
        self.record.value(field)
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    pub fn set_field(&mut self, field: R::Field, value: String) {
        self.record.set(field, value);
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> SubmitAttempt<R> {
        if self.status != SubmitStatus::Idle {
            debug!("Ignoring {} submit while {:?}", R::KIND.as_str(), self.status);
            return SubmitAttempt::Busy;
        }

        self.errors = self.record.validate();
        if !self.errors.is_empty() {
            debug!(
                "{} form has {} invalid field(s): {:?}",
                R::KIND.as_str(),
                self.errors.len(),
                self.errors.fields().collect::<Vec<_>>()
            );
            return SubmitAttempt::Invalid;
        }

        self.status = SubmitStatus::Submitting;
        SubmitAttempt::Ready(WebhookPayload::new(self.record.clone(), now))
    }

    /// Applies the webhook outcome. On failure returns the alert text to show;
    /// the record is kept so the user can resubmit.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Option<&'static str> {
        if self.status != SubmitStatus::Submitting {
            warn!("Dropping {} submit result with no request in flight", R::KIND.as_str());
            return None;
        }

        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                None
            }
            Err(_) => {
                self.status = SubmitStatus::Idle;
                Some(FAILURE_ALERT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::student::{StudentField, StudentSignup};
    use crate::signup::vendor::{VendorField, VendorSignup};
    use crate::signup::SignupKind;

    fn filled_student() -> FormState<StudentSignup> {
        let mut form = FormState::new();
        form.set_field(StudentField::FirstName, "Ada".into());
        form.set_field(StudentField::LastName, "Okoye".into());
        form.set_field(StudentField::Email, "ada@example.com".into());
        form.set_field(StudentField::Hall, "Zik Hall".into());
        form
    }

    fn ready_count<R: SignupRecord>(attempts: &[SubmitAttempt<R>]) -> usize {
        attempts
            .iter()
            .filter(|a| matches!(a, SubmitAttempt::Ready(_)))
            .count()
    }

    #[test]
    fn new_form_is_empty_and_idle() {
        let student: FormState<StudentSignup> = FormState::new();
        assert_eq!(student.status(), SubmitStatus::Idle);
        assert_eq!(student.record(), &StudentSignup::default());
        assert!(student.errors().is_empty());

        let vendor: FormState<VendorSignup> = FormState::default();
        assert_eq!(vendor.status(), SubmitStatus::Idle);
        assert_eq!(vendor.value(VendorField::Description), "");
    }

    #[test]
    fn valid_submit_goes_idle_submitting_submitted() {
        let mut form = filled_student();
        assert_eq!(form.status(), SubmitStatus::Idle);

        let attempt = form.begin_submit(Utc::now());
        match &attempt {
            SubmitAttempt::Ready(payload) => {
                assert_eq!(payload.kind, SignupKind::Student);
                assert_eq!(&payload.record, form.record());
            }
            other => panic!("expected a payload, got {other:?}"),
        }
        assert!(form.is_submitting());

        assert_eq!(form.finish_submit(Ok(())), None);
        assert!(form.is_submitted());
    }

    #[test]
    fn second_click_while_in_flight_sends_nothing() {
        let mut form = filled_student();
        let attempts = vec![
            form.begin_submit(Utc::now()),
            form.begin_submit(Utc::now()),
            form.begin_submit(Utc::now()),
        ];
        assert_eq!(ready_count(&attempts), 1);
        assert_eq!(attempts[1], SubmitAttempt::Busy);
        assert!(form.is_submitting());
    }

    #[test]
    fn submitted_form_stays_submitted() {
        let mut form = filled_student();
        let _ = form.begin_submit(Utc::now());
        form.finish_submit(Ok(()));
        assert_eq!(form.begin_submit(Utc::now()), SubmitAttempt::Busy);
        assert_eq!(form.finish_submit(Ok(())), None);
        assert!(form.is_submitted());
    }

    #[test]
    fn invalid_student_never_reaches_the_webhook() {
        let mut form: FormState<StudentSignup> = FormState::new();
        form.set_field(StudentField::LastName, "Okoye".into());
        form.set_field(StudentField::Email, "bad".into());

        assert_eq!(form.begin_submit(Utc::now()), SubmitAttempt::Invalid);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(
            form.errors().fields().collect::<Vec<_>>(),
            vec![StudentField::FirstName, StudentField::Email, StudentField::Hall]
        );
    }

    #[test]
    fn failure_returns_to_idle_with_record_intact() {
        let mut form = filled_student();
        let before = form.record().clone();
        let _ = form.begin_submit(Utc::now());

        let alert = form.finish_submit(Err(SubmitError::Rejected(500)));
        assert_eq!(alert, Some(FAILURE_ALERT));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.record(), &before);

        // manual resubmit is allowed
        assert!(matches!(form.begin_submit(Utc::now()), SubmitAttempt::Ready(_)));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form: FormState<VendorSignup> = FormState::new();
        assert_eq!(form.begin_submit(Utc::now()), SubmitAttempt::Invalid);
        assert_eq!(form.errors().len(), VendorField::ALL.len());

        form.set_field(VendorField::Phone, "1".into());
        assert_eq!(form.error(VendorField::Phone), None);
        assert!(form.error(VendorField::Email).is_some());
        assert_eq!(form.value(VendorField::Phone), "1");

        // next submit re-validates everything, so the bad phone is back
        assert_eq!(form.begin_submit(Utc::now()), SubmitAttempt::Invalid);
        assert_eq!(form.error(VendorField::Phone), Some("Please enter a valid phone number"));
    }

    #[test]
    fn stale_errors_are_replaced_by_fresh_validation() {
        let mut form = filled_student();
        form.set_field(StudentField::Email, "nope".into());
        assert_eq!(form.begin_submit(Utc::now()), SubmitAttempt::Invalid);

        // fix the email without going through set_field's clearing
        form.record.email = "ada@example.com".into();
        assert!(matches!(form.begin_submit(Utc::now()), SubmitAttempt::Ready(_)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn late_result_without_request_is_ignored() {
        let mut form = filled_student();
        assert_eq!(form.finish_submit(Err(SubmitError::Rejected(404))), None);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }
}
