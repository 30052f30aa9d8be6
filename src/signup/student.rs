use serde::Serialize;

use super::validation::{self, FieldErrors};
use super::{SignupKind, SignupRecord};

/// Halls of residence offered in the signup form and on the partner list.
pub const HALLS: [&str; 9] = [
    "Kuti Hall",
    "Zik Hall",
    "Bello Hall",
    "Indi Hall",
    "Idia Hall",
    "Awo Hall",
    "Queens Hall",
    "Tedder Hall",
    "Mellanby Hall",
];

pub const OTHER_HALL: &str = "Other";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
    Hall,
}

impl StudentField {
    #[cfg(test)]
    pub const ALL: [StudentField; 4] = [
        StudentField::FirstName,
        StudentField::LastName,
        StudentField::Email,
        StudentField::Hall,
    ];

    /// DOM id / wire name.
    pub fn name(&self) -> &'static str {
        match self {
            StudentField::FirstName => "firstName",
            StudentField::LastName => "lastName",
            StudentField::Email => "email",
            StudentField::Hall => "hall",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hall: String,
}

impl SignupRecord for StudentSignup {
    type Field = StudentField;

    const KIND: SignupKind = SignupKind::Student;

    fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.first_name,
            StudentField::LastName => &self.last_name,
            StudentField::Email => &self.email,
            StudentField::Hall => &self.hall,
        }
    }

    fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::FirstName => self.first_name = value,
            StudentField::LastName => self.last_name = value,
            StudentField::Email => self.email = value,
            StudentField::Hall => self.hall = value,
        }
    }

    fn validate(&self) -> FieldErrors<StudentField> {
        let mut errors = FieldErrors::new();
        errors.check(
            StudentField::FirstName,
            validation::required(&self.first_name, "First name is required"),
        );
        errors.check(
            StudentField::LastName,
            validation::required(&self.last_name, "Last name is required"),
        );
        errors.check(StudentField::Email, validation::email(&self.email));
        errors.check(
            StudentField::Hall,
            validation::required(&self.hall, "Hall is required"),
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> StudentSignup {
        StudentSignup {
            first_name: "Ada".into(),
            last_name: "Okoye".into(),
            email: "ada@example.com".into(),
            hall: "Zik Hall".into(),
        }
    }

    #[test]
    fn complete_signup_has_no_errors() {
        assert!(ada().validate().is_empty());
    }

    #[test]
    fn reports_each_broken_field() {
        let signup = StudentSignup {
            first_name: String::new(),
            email: "bad".into(),
            hall: String::new(),
            ..ada()
        };
        let errors = signup.validate();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![StudentField::FirstName, StudentField::Email, StudentField::Hall]
        );
        assert_eq!(errors.get(StudentField::Email), Some("Please enter a valid email address"));
        assert_eq!(errors.get(StudentField::Hall), Some("Hall is required"));
    }

    #[test]
    fn whitespace_counts_as_empty_for_every_field() {
        for field in StudentField::ALL {
            let mut signup = ada();
            signup.set(field, "   ".into());
            let errors = signup.validate();
            assert!(errors.contains(field), "{field:?}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn other_and_listed_halls_are_accepted() {
        for hall in HALLS.iter().chain(std::iter::once(&OTHER_HALL)) {
            let mut signup = ada();
            signup.set(StudentField::Hall, hall.to_string());
            assert!(signup.validate().is_empty(), "{hall}");
            assert_eq!(signup.value(StudentField::Hall), *hall);
        }
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = serde_json::to_value(ada()).unwrap();
        for field in StudentField::ALL {
            assert_eq!(json[field.name()], ada().value(field));
        }
    }
}
