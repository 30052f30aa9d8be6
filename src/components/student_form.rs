use yew::prelude::*;

use super::fields::{SelectField, TextField};
use super::signup_form::{FormLayout, SignupForm};
use crate::signup::form_state::FormState;
use crate::signup::student::{StudentField, StudentSignup, HALLS, OTHER_HALL};

pub type StudentWaitlistForm = SignupForm<StudentSignup>;

fn hall_options() -> Vec<&'static str> {
    HALLS.iter().copied().chain(std::iter::once(OTHER_HALL)).collect()
}

impl FormLayout for StudentSignup {
    const TITLE: &'static str = "Join the Waitlist";
    const SUBTITLE: &'static str =
        "Be among the first 5,000 founding members and unlock exclusive benefits.";
    const SUBMIT_LABEL: &'static str = "Secure My Founding Member Spot";
    const BUSY_LABEL: &'static str = "Joining Waitlist...";
    const DISCLAIMER: &'static str =
        "By joining, you agree to receive updates about Cydex. No spam, unsubscribe anytime.";

    fn fields(form: &FormState<Self>, on_edit: &Callback<(StudentField, String)>) -> Html {
        let edit = |field: StudentField| on_edit.reform(move |value: String| (field, value));
        let error = |field: StudentField| form.error(field).map(str::to_owned);
        let value = |field: StudentField| form.value(field).to_owned();

        html! {
            <>
                <div class="form-row">
                    <TextField
                        name={StudentField::FirstName.name()}
                        label="First Name"
                        icon="👤"
                        placeholder="Enter your first name"
                        value={value(StudentField::FirstName)}
                        error={error(StudentField::FirstName)}
                        on_input={edit(StudentField::FirstName)}
                    />
                    <TextField
                        name={StudentField::LastName.name()}
                        label="Last Name"
                        icon="👤"
                        placeholder="Enter your last name"
                        value={value(StudentField::LastName)}
                        error={error(StudentField::LastName)}
                        on_input={edit(StudentField::LastName)}
                    />
                </div>
                <TextField
                    name={StudentField::Email.name()}
                    label="Email Address"
                    input_type="email"
                    icon="✉️"
                    placeholder="Enter your email address"
                    value={value(StudentField::Email)}
                    error={error(StudentField::Email)}
                    on_input={edit(StudentField::Email)}
                />
                <SelectField
                    name={StudentField::Hall.name()}
                    label="Hall of Residence"
                    icon="🏠"
                    prompt="Select your hall"
                    options={hall_options()}
                    value={value(StudentField::Hall)}
                    error={error(StudentField::Hall)}
                    on_input={edit(StudentField::Hall)}
                />
            </>
        }
    }

    fn confirmation() -> Html {
        html! {
            <>
                <h3>{"Welcome to Cydex!"}</h3>
                <p>
                    {"You're now on our exclusive waitlist. We'll notify you as soon as Cydex launches in your area."}
                </p>
                <div class="confirmation-status">{"🎉 Founding Member Status: Activated"}</div>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hall_dropdown_ends_with_other() {
        let options = hall_options();
        assert_eq!(options.len(), HALLS.len() + 1);
        assert_eq!(options.last(), Some(&OTHER_HALL));
        assert_eq!(options[1], "Zik Hall");
    }
}
