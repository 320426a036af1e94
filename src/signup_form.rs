//! Signup Form State
//!
//! Field storage for the signup view, plus the programmatic mirror of the
//! browser's `required` / `type=email` checks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{ApiResult, FormError};
use crate::models::SignupRequest;

/// The four text inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::FullName,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    /// Input `name`/`id` attribute
    pub fn name(self) -> &'static str {
        match self {
            SignupField::FullName => "fullName",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            SignupField::FullName => "Full Name",
            SignupField::Email => "Email Address",
            SignupField::Password => "Password",
            SignupField::ConfirmPassword => "Confirm Password",
        }
    }
}

impl std::fmt::Display for SignupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Signup form values with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::FullName => &self.full_name,
            // type=email inputs strip surrounding whitespace before `required`
            SignupField::Email => self.email.trim(),
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Build the account payload. Password and confirmation are not compared.
    pub fn to_request(&self) -> Result<SignupRequest, FormError> {
        if let Some(field) = SignupField::ALL.into_iter().find(|f| self.value(*f).is_empty()) {
            return Err(FormError::MissingField(field));
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(SignupRequest {
            full_name: self.full_name.clone(),
            email: email.to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}

/// Outcome of the latest signup submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Accepted,
    Failed(String),
}

/// Submit lifecycle around the backend request; at most one in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    status: SubmitStatus,
}

impl Submission {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    /// `None` while a request is in flight or when the form fails its checks
    /// (the check message becomes the status).
    pub fn begin(&mut self, form: &SignupForm) -> Option<SignupRequest> {
        if self.is_pending() {
            return None;
        }
        match form.to_request() {
            Ok(request) => {
                self.status = SubmitStatus::Pending;
                Some(request)
            }
            Err(e) => {
                log::warn!("[signup] submit blocked: {}", e);
                self.status = SubmitStatus::Failed(e.to_string());
                None
            }
        }
    }

    pub fn finish(&mut self, result: ApiResult<()>) {
        if !self.is_pending() {
            return;
        }
        self.status = match result {
            Ok(()) => SubmitStatus::Accepted,
            Err(e) => SubmitStatus::Failed(e.user_message()),
        };
    }
}

pub type SignupStore = Store<SignupForm>;

/// Write one field of the store, leaving the other fields' subscribers untouched.
/// No cross-field checks.
pub fn store_set_field(store: &SignupStore, field: SignupField, value: String) {
    match field {
        SignupField::FullName => *store.full_name().write() = value,
        SignupField::Email => *store.email().write() = value,
        SignupField::Password => *store.password().write() = value,
        SignupField::ConfirmPassword => *store.confirm_password().write() = value,
    }
}

/// Update a field by its input `name`. Unknown names are ignored (returns false).
pub fn handle_change(store: &SignupStore, name: &str, value: String) -> bool {
    match SignupField::from_name(name) {
        Some(field) => {
            store_set_field(store, field, value);
            true
        }
        None => false,
    }
}

/// Tracked read of one field
pub fn store_field_value(store: &SignupStore, field: SignupField) -> String {
    match field {
        SignupField::FullName => store.full_name().get(),
        SignupField::Email => store.email().get(),
        SignupField::Password => store.password().get(),
        SignupField::ConfirmPassword => store.confirm_password().get(),
    }
}

const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Browser `type=email` shape: `local@label(.label)*`
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c));
    local_ok && !domain.is_empty() && domain.split('.').all(is_valid_domain_label)
}

fn is_valid_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret-1".to_string(),
            confirm_password: "secret-1".to_string(),
        }
    }

    #[test]
    fn test_handle_change_updates_one_field() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(filled());
            assert!(handle_change(&store, "email", "a@b.com".to_string()));
            assert_eq!(store.email().get_untracked(), "a@b.com");
            store.with_untracked(|form| {
                assert_eq!(form.full_name, "Ada Lovelace");
                assert_eq!(form.password, "secret-1");
                assert_eq!(form.confirm_password, "secret-1");
            });
        });
    }

    #[test]
    fn test_handle_change_ignores_unknown_name() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(filled());
            assert!(!handle_change(&store, "terms", "on".to_string()));
            store.with_untracked(|form| assert_eq!(*form, filled()));
        });
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in SignupField::ALL {
            assert_eq!(SignupField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_empty_field_blocks_request() {
        for field in SignupField::ALL {
            let mut form = filled();
            match field {
                SignupField::FullName => form.full_name.clear(),
                SignupField::Email => form.email.clear(),
                SignupField::Password => form.password.clear(),
                SignupField::ConfirmPassword => form.confirm_password.clear(),
            }
            assert_eq!(form.value(field), "");
            assert_eq!(form.to_request(), Err(FormError::MissingField(field)));
        }
        assert_eq!(
            SignupForm::default().to_request(),
            Err(FormError::MissingField(SignupField::FullName))
        );
    }

    #[test]
    fn test_mismatched_passwords_still_accepted() {
        let mut form = filled();
        form.confirm_password = "something-else".to_string();
        let req = form.to_request().unwrap();
        assert_eq!(req.password, "secret-1");
        assert_eq!(req.confirm_password, "something-else");
    }

    #[test]
    fn test_whitespace_email_is_missing() {
        let mut form = filled();
        form.email = "   ".to_string();
        assert_eq!(form.to_request(), Err(FormError::MissingField(SignupField::Email)));
    }

    #[test]
    fn test_submission_rejects_invalid_form() {
        let mut submission = Submission::default();
        let mut form = filled();
        form.password.clear();
        assert_eq!(submission.begin(&form), None);
        assert_eq!(
            submission.status(),
            &SubmitStatus::Failed("Password is required".to_string())
        );
    }

    #[test]
    fn test_second_submit_dropped_while_pending() {
        let mut submission = Submission::default();
        assert!(submission.begin(&filled()).is_some());
        assert!(submission.is_pending());
        assert_eq!(submission.begin(&filled()), None);
        assert!(submission.is_pending());
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut submission = Submission::default();
        submission.finish(Ok(()));
        assert_eq!(submission.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_email_blocks_request() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert_eq!(form.to_request(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_email_is_trimmed() {
        let mut form = filled();
        form.email = "  ada@example.com ".to_string();
        assert_eq!(form.to_request().unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub-domain.example.org"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@-b.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod with_backend {
        use super::*;
        use crate::commands::testing::RecordingBackend;
        use crate::commands::Backend;
        use crate::error::ApiError;

        async fn submit(submission: &mut Submission, form: &SignupForm, backend: &dyn Backend) {
            if let Some(request) = submission.begin(form) {
                let result = backend.create_account(&request).await;
                submission.finish(result);
            }
        }

        #[tokio::test]
        async fn test_mismatched_passwords_reach_backend() {
            let backend = RecordingBackend::default();
            let mut submission = Submission::default();
            let mut form = filled();
            form.confirm_password = "different".to_string();
            submit(&mut submission, &form, &backend).await;

            assert_eq!(submission.status(), &SubmitStatus::Accepted);
            let accounts = backend.accounts.lock().unwrap();
            assert_eq!(accounts.len(), 1);
            assert_eq!(accounts[0].confirm_password, "different");
        }

        #[tokio::test]
        async fn test_invalid_form_never_reaches_backend() {
            let backend = RecordingBackend::default();
            let mut submission = Submission::default();
            submit(&mut submission, &SignupForm::default(), &backend).await;

            assert!(backend.accounts.lock().unwrap().is_empty());
            assert_eq!(
                submission.status(),
                &SubmitStatus::Failed("Full Name is required".to_string())
            );
        }

        #[tokio::test]
        async fn test_backend_error_becomes_failed_status() {
            let error = ApiError::Rejected("Email already registered".to_string());
            let backend = RecordingBackend::failing(error.clone());
            let mut submission = Submission::default();
            submit(&mut submission, &filled(), &backend).await;

            assert_eq!(backend.accounts.lock().unwrap().len(), 1);
            assert_eq!(submission.status(), &SubmitStatus::Failed(error.user_message()));
        }
    }
}
