//! Quote-request form: validation and cart summary rendering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MedcartError, Result};
use crate::model::{CartLine, UserType};

/// Fixed subject line for every quote request.
pub const SUBJECT: &str = "Wholesale quote request";

/// `local@domain.tld` shape. Deliberately loose; the mailbox is the real
/// validator.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// Contact details accompanying a quote request.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub user_type: Option<UserType>,
}

/// Checks the form field by field and reports the first failing rule only,
/// mirroring the inline single-message behavior of the form. No rule firing
/// means the form may be sent.
pub fn validate(form: &ContactForm) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(MedcartError::Validation("Please enter your name".into()));
    }
    if form.email.trim().is_empty() {
        return Err(MedcartError::Validation(
            "Please enter your e-mail address".into(),
        ));
    }
    if !EMAIL_RE.is_match(form.email.trim()) {
        return Err(MedcartError::Validation(
            "Please enter a valid e-mail address".into(),
        ));
    }
    if form.phone.trim().is_empty() {
        return Err(MedcartError::Validation(
            "Please enter your phone number".into(),
        ));
    }
    if form.user_type.is_none() {
        return Err(MedcartError::Validation(
            "Please select who you are requesting the quote as".into(),
        ));
    }
    Ok(())
}

/// Renders the cart as the human-readable request body: one line per cart
/// entry, `NAME (PACKAGING) - QUANTITY`, packaging omitted when absent.
pub fn render_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| match &line.medicine.packaging {
            Some(packaging) => format!(
                "{} ({}) - {}",
                line.medicine.name, packaging, line.quantity
            ),
            None => format!("{} - {}", line.medicine.name, line.quantity),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
