pub mod validation;
pub mod student;
pub mod vendor;
pub mod form_state;
pub mod webhook;

use std::fmt::Debug;

use serde::Serialize;

use validation::FieldErrors;

/// Discriminator sent as `type` alongside every webhook payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignupKind {
    Student,
    Vendor,
}

impl SignupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupKind::Student => "student",
            SignupKind::Vendor => "vendor",
        }
    }
}

/// A form's field-value record. Implemented by [`student::StudentSignup`]
/// and [`vendor::VendorSignup`].
pub trait SignupRecord: Clone + Default + PartialEq + Serialize + 'static {
    type Field: Copy + Ord + Debug + 'static;

    const KIND: SignupKind;

    fn value(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    fn validate(&self) -> FieldErrors<Self::Field>;
}
