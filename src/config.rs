use log::Level;

use crate::signup::SignupKind;

const STUDENT_WEBHOOK_PLACEHOLDER: &str = "YOUR_ZAPIER_WEBHOOK_URL_HERE";
const VENDOR_WEBHOOK_PLACEHOLDER: &str = "YOUR_VENDOR_ZAPIER_WEBHOOK_URL_HERE";

/// Webhook each form posts to. Set at build time through
/// `CYDEX_STUDENT_WEBHOOK_URL` / `CYDEX_VENDOR_WEBHOOK_URL`.
pub fn webhook_url(kind: SignupKind) -> &'static str {
    match kind {
        SignupKind::Student => {
            option_env!("CYDEX_STUDENT_WEBHOOK_URL").unwrap_or(STUDENT_WEBHOOK_PLACEHOLDER)
        }
        SignupKind::Vendor => {
            option_env!("CYDEX_VENDOR_WEBHOOK_URL").unwrap_or(VENDOR_WEBHOOK_PLACEHOLDER)
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_form_has_its_own_destination() {
        assert!(!webhook_url(SignupKind::Student).is_empty());
        assert!(!webhook_url(SignupKind::Vendor).is_empty());
        assert_ne!(webhook_url(SignupKind::Student), webhook_url(SignupKind::Vendor));
    }
}
