use yew::prelude::*;

use super::fields::{SelectField, TextAreaField, TextField};
use super::signup_form::{FormLayout, SignupForm};
use crate::signup::form_state::FormState;
use crate::signup::vendor::{VendorField, VendorSignup, BUSINESS_TYPES};

pub type VendorWaitlistForm = SignupForm<VendorSignup>;

const EARLY_PARTNER_BENEFITS: [&str; 4] = [
    "Zero setup fees and reduced commission rates",
    "Priority listing in the app",
    "Dedicated account manager support",
    "Marketing co-op opportunities",
];

impl FormLayout for VendorSignup {
    const TITLE: &'static str = "Join as a Vendor Partner";
    const SUBTITLE: &'static str = "Partner with Cydex to reach thousands of students across university halls. Zero setup fees for early partners.";
    const SUBMIT_LABEL: &'static str = "Submit Partner Application";
    const BUSY_LABEL: &'static str = "Submitting Application...";
    const DISCLAIMER: &'static str =
        "By applying, you agree to Cydex's partner terms. We'll contact you within 48 hours.";

    fn badge() -> Html {
        html! { <div class="signup-badge">{"🏪"}</div> }
    }

    fn fields(form: &FormState<Self>, on_edit: &Callback<(VendorField, String)>) -> Html {
        let edit = |field: VendorField| on_edit.reform(move |value: String| (field, value));
        let error = |field: VendorField| form.error(field).map(str::to_owned);
        let value = |field: VendorField| form.value(field).to_owned();

        html! {
            <>
                <div class="form-row">
                    <TextField
                        name={VendorField::BusinessName.name()}
                        label="Business Name"
                        icon="🏪"
                        placeholder="Enter your business name"
                        value={value(VendorField::BusinessName)}
                        error={error(VendorField::BusinessName)}
                        on_input={edit(VendorField::BusinessName)}
                    />
                    <TextField
                        name={VendorField::OwnerName.name()}
                        label="Owner/Manager Name"
                        icon="👤"
                        placeholder="Enter owner/manager name"
                        value={value(VendorField::OwnerName)}
                        error={error(VendorField::OwnerName)}
                        on_input={edit(VendorField::OwnerName)}
                    />
                </div>
                <div class="form-row">
                    <TextField
                        name={VendorField::Email.name()}
                        label="Business Email"
                        input_type="email"
                        icon="✉️"
                        placeholder="Enter business email"
                        value={value(VendorField::Email)}
                        error={error(VendorField::Email)}
                        on_input={edit(VendorField::Email)}
                    />
                    <TextField
                        name={VendorField::Phone.name()}
                        label="Phone Number"
                        input_type="tel"
                        icon="📞"
                        placeholder="Enter phone number"
                        value={value(VendorField::Phone)}
                        error={error(VendorField::Phone)}
                        on_input={edit(VendorField::Phone)}
                    />
                </div>
                <SelectField
                    name={VendorField::BusinessType.name()}
                    label="Business Type"
                    icon="📦"
                    prompt="Select business type"
                    options={BUSINESS_TYPES.to_vec()}
                    value={value(VendorField::BusinessType)}
                    error={error(VendorField::BusinessType)}
                    on_input={edit(VendorField::BusinessType)}
                />
                <TextAreaField
                    name={VendorField::Description.name()}
                    label="Business Description"
                    placeholder="Describe your business, products/services, and why you'd like to partner with Cydex..."
                    value={value(VendorField::Description)}
                    error={error(VendorField::Description)}
                    hint={Some(form.record().description_counter())}
                    on_input={edit(VendorField::Description)}
                />
            </>
        }
    }

    fn extras() -> Html {
        html! {
            <div class="partner-benefits">
                <h4>{"Early Partner Benefits:"}</h4>
                <ul>
                    { for EARLY_PARTNER_BENEFITS.iter().map(|benefit| html! {
                        <li>{format!("• {}", benefit)}</li>
                    }) }
                </ul>
            </div>
        }
    }

    fn confirmation() -> Html {
        html! {
            <>
                <h3>{"Welcome to Cydex Partners!"}</h3>
                <p>
                    {"Thank you for your interest in partnering with Cydex. Our team will review your application and contact you within 48 hours."}
                </p>
                <div class="confirmation-status">{"🤝 Partner Application: Submitted Successfully"}</div>
            </>
        }
    }
}
