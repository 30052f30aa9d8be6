use chrono::Utc;
use log::{debug, error, info};
use yew::prelude::*;

use crate::config;
use crate::signup::form_state::{FormState, SubmitAttempt};
use crate::signup::webhook::{deliver, SubmitError};
use crate::signup::SignupRecord;

/// Copy and field markup for one kind of signup. The shared [`SignupForm`]
/// component owns state, validation and submission.
pub trait FormLayout: SignupRecord {
    const TITLE: &'static str;
    const SUBTITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    const BUSY_LABEL: &'static str;
    const DISCLAIMER: &'static str;

    fn badge() -> Html {
        html! {}
    }

    fn fields(form: &FormState<Self>, on_edit: &Callback<(Self::Field, String)>) -> Html;

    /// Rendered between the fields and the submit button.
    fn extras() -> Html {
        html! {}
    }

    fn confirmation() -> Html;
}

pub enum SignupMsg<F> {
    Edit(F, String),
    Submit,
    Delivered(Result<(), SubmitError>),
}

pub struct SignupForm<L: FormLayout> {
    form: FormState<L>,
}

impl<L: FormLayout> Component for SignupForm<L> {
    type Message = SignupMsg<L::Field>;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SignupMsg::Edit(field, value) => {
                self.form.set_field(field, value);
                true
            }
            SignupMsg::Submit => match self.form.begin_submit(Utc::now()) {
                SubmitAttempt::Ready(payload) => {
                    let url = config::webhook_url(L::KIND);
                    info!("Submitting {} signup", L::KIND.as_str());
                    ctx.link().send_future(async move {
                        SignupMsg::Delivered(deliver(url, &payload).await)
                    });
                    true
                }
                SubmitAttempt::Invalid => {
                    info!(
                        "{} form blocked by {} invalid field(s)",
                        L::KIND.as_str(),
                        self.form.errors().len()
                    );
                    true
                }
                SubmitAttempt::Busy => false,
            },
            SignupMsg::Delivered(outcome) => {
                if let Err(e) = &outcome {
                    error!("Error submitting {} form: {}", L::KIND.as_str(), e);
                }
                if let Some(message) = self.form.finish_submit(outcome) {
                    show_alert(message);
                }
                debug!("{} form now {:?}", L::KIND.as_str(), self.form.status());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.is_submitted() {
            return html! {
                <div class="signup-card signup-confirmation fade-in">
                    <div class="confirmation-check">{"✓"}</div>
                    { L::confirmation() }
                </div>
            };
        }

        let on_edit = ctx
            .link()
            .callback(|(field, value): (L::Field, String)| SignupMsg::Edit(field, value));
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            SignupMsg::Submit
        });
        let submitting = self.form.is_submitting();

        html! {
            <div class="signup-card slide-up">
                <div class="signup-header">
                    { L::badge() }
                    <h3>{L::TITLE}</h3>
                    <p>{L::SUBTITLE}</p>
                </div>
                <form class="signup-form" {onsubmit}>
                    { L::fields(&self.form, &on_edit) }
                    { L::extras() }
                    <button type="submit" class="signup-submit" disabled={submitting}>
                        if submitting {
                            <>
                                <span class="loading-spinner"></span>
                                {L::BUSY_LABEL}
                            </>
                        } else {
                            {L::SUBMIT_LABEL}
                        }
                    </button>
                    <p class="signup-disclaimer">{L::DISCLAIMER}</p>
                </form>
            </div>
        }
    }
}

fn show_alert(message: &str) {
    let Some(window) = web_sys::window() else {
        error!("No window available to show alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        error!("Failed to show alert: {:?}", e);
    }
}

/// Form styles, mounted once by the landing page.
pub const FORM_STYLES: &str = r#"
.signup-card {
    background: #ffffff;
    border: 1px solid rgba(22, 101, 52, 0.12);
    border-radius: 16px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
    padding: 2rem;
}
.signup-header {
    text-align: center;
    margin-bottom: 2rem;
}
.signup-header h3 {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
}
.signup-header p,
.signup-disclaimer,
.field-hint {
    color: #6b7280;
}
.signup-badge {
    width: 64px;
    height: 64px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: rgba(22, 163, 74, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
}
.signup-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
.form-field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
}
.input-wrapper {
    position: relative;
}
.input-icon {
    position: absolute;
    left: 0.75rem;
    top: 50%;
    transform: translateY(-50%);
    opacity: 0.6;
}
.input-field {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font: inherit;
    background: #fff;
}
.input-field.with-icon {
    padding-left: 2.5rem;
}
.input-field.no-resize {
    resize: none;
}
.input-field.has-error {
    border-color: #dc2626;
}
.field-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.field-error {
    margin-top: 0.25rem;
    font-size: 0.875rem;
    color: #dc2626;
}
.field-hint {
    margin-left: auto;
    font-size: 0.75rem;
}
.partner-benefits {
    background: rgba(22, 163, 74, 0.06);
    border: 1px solid rgba(22, 163, 74, 0.2);
    border-radius: 8px;
    padding: 1rem;
}
.partner-benefits h4 {
    color: #16a34a;
    font-weight: 600;
    margin-bottom: 0.5rem;
}
.partner-benefits ul {
    list-style: none;
    font-size: 0.875rem;
    color: #6b7280;
}
.signup-submit {
    width: 100%;
    height: 3rem;
    border: none;
    border-radius: 8px;
    background: #16a34a;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    transition: transform 0.2s, background 0.2s;
}
.signup-submit:hover {
    background: #15803d;
    transform: scale(1.02);
}
.signup-submit:disabled {
    opacity: 0.5;
    cursor: not-allowed;
    transform: none;
}
.signup-disclaimer {
    font-size: 0.75rem;
    text-align: center;
}
.signup-confirmation {
    text-align: center;
}
.confirmation-check {
    font-size: 3rem;
    color: #16a34a;
    margin-bottom: 1rem;
}
.confirmation-status {
    margin-top: 1.5rem;
    background: rgba(22, 163, 74, 0.08);
    border: 1px solid rgba(22, 163, 74, 0.2);
    border-radius: 8px;
    padding: 1rem;
    color: #16a34a;
    font-weight: 600;
    font-size: 0.875rem;
}
.loading-spinner {
    display: inline-block;
    width: 20px;
    height: 20px;
    border: 3px solid rgba(255,255,255,.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
@media (max-width: 768px) {
    .form-row {
        grid-template-columns: 1fr;
    }
    .signup-card {
        padding: 1.5rem;
    }
}
"#;
