use serde::Serialize;

use super::validation::{self, text_length, FieldErrors};
use super::{SignupKind, SignupRecord};

pub const BUSINESS_TYPES: [&str; 10] = [
    "Restaurant/Food Service",
    "Grocery Store",
    "Pharmacy",
    "Bookstore/Stationery",
    "Laundry Service",
    "Electronics/Tech",
    "Fashion/Clothing",
    "Beauty/Personal Care",
    "Printing Services",
    "Other",
];

/// Shown next to the description counter. Longer text is still accepted.
pub const DESCRIPTION_SOFT_LIMIT: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum VendorField {
    BusinessName,
    OwnerName,
    Email,
    Phone,
    BusinessType,
    Description,
}

impl VendorField {
    #[cfg(test)]
    pub const ALL: [VendorField; 6] = [
        VendorField::BusinessName,
        VendorField::OwnerName,
        VendorField::Email,
        VendorField::Phone,
        VendorField::BusinessType,
        VendorField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VendorField::BusinessName => "businessName",
            VendorField::OwnerName => "ownerName",
            VendorField::Email => "email",
            VendorField::Phone => "phone",
            VendorField::BusinessType => "businessType",
            VendorField::Description => "description",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSignup {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub description: String,
}

impl VendorSignup {
    /// Text for the `n/500 characters` hint under the description.
    pub fn description_counter(&self) -> String {
        format!(
            "{}/{} characters",
            text_length(&self.description),
            DESCRIPTION_SOFT_LIMIT
        )
    }
}

impl SignupRecord for VendorSignup {
    type Field = VendorField;

    const KIND: SignupKind = SignupKind::Vendor;

    fn value(&self, field: VendorField) -> &str {
        match field {
            VendorField::BusinessName => &self.business_name,
            VendorField::OwnerName => &self.owner_name,
            VendorField::Email => &self.email,
            VendorField::Phone => &self.phone,
            VendorField::BusinessType => &self.business_type,
            VendorField::Description => &self.description,
        }
    }

    fn set(&mut self, field: VendorField, value: String) {
        match field {
            VendorField::BusinessName => self.business_name = value,
            VendorField::OwnerName => self.owner_name = value,
            VendorField::Email => self.email = value,
            VendorField::Phone => self.phone = value,
            VendorField::BusinessType => self.business_type = value,
            VendorField::Description => self.description = value,
        }
    }

    fn validate(&self) -> FieldErrors<VendorField> {
        let mut errors = FieldErrors::new();
        errors.check(
            VendorField::BusinessName,
            validation::required(&self.business_name, "Business name is required"),
        );
        errors.check(
            VendorField::OwnerName,
            validation::required(&self.owner_name, "Owner name is required"),
        );
        errors.check(VendorField::Email, validation::email(&self.email));
        errors.check(VendorField::Phone, validation::phone(&self.phone));
        errors.check(
            VendorField::BusinessType,
            validation::required(&self.business_type, "Business type is required"),
        );
        errors.check(VendorField::Description, validation::description(&self.description));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mama_put() -> VendorSignup {
        VendorSignup {
            business_name: "Mama Put Kitchen".into(),
            owner_name: "Chinedu Eze".into(),
            email: "orders@mamaput.ng".into(),
            phone: "+234 803 123 4567".into(),
            business_type: "Restaurant/Food Service".into(),
            description: "Home-style jollof and swallow for hall residents.".into(),
        }
    }

    #[test]
    fn complete_application_has_no_errors() {
        assert!(mama_put().validate().is_empty());
    }

    #[test]
    fn short_description_only_flags_description() {
        let vendor = VendorSignup {
            description: "Cheap jollof!!!".into(),
            ..mama_put()
        };
        assert_eq!(text_length(&vendor.description), 15);
        let errors = vendor.validate();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![VendorField::Description]);
        assert_eq!(
            errors.get(VendorField::Description),
            Some("Please provide at least 20 characters describing your business")
        );
    }

    #[test]
    fn empty_application_flags_everything() {
        let errors = VendorSignup::default().validate();
        assert_eq!(errors.fields().collect::<Vec<_>>(), VendorField::ALL.to_vec());
        assert_eq!(errors.get(VendorField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(VendorField::Description), Some("Business description is required"));
    }

    #[test]
    fn short_phone_is_rejected() {
        let vendor = VendorSignup {
            phone: "0803 12".into(),
            ..mama_put()
        };
        assert_eq!(
            vendor.validate().get(VendorField::Phone),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn long_description_is_not_an_error() {
        let vendor = VendorSignup {
            description: "x".repeat(DESCRIPTION_SOFT_LIMIT + 50),
            ..mama_put()
        };
        assert!(vendor.validate().is_empty());
        assert_eq!(vendor.description_counter(), "550/500 characters");
    }

    #[test]
    fn counter_matches_browser_length() {
        let vendor = VendorSignup {
            description: "Suya 🔥🔥".into(),
            ..mama_put()
        };
        assert_eq!(vendor.description_counter(), "9/500 characters");
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = serde_json::to_value(mama_put()).unwrap();
        for field in VendorField::ALL {
            assert_eq!(json[field.name()], mama_put().value(field));
        }
    }
}
