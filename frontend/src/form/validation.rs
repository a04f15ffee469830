use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::phone::{format_phone, phone_digits, MAX_PHONE_DIGITS};

const MIN_NAME_CHARS: usize = 3;
const MIN_OPTIONAL_PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Which contact fields the opt-in form insists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Email required, WhatsApp optional.
    OptionalContact,
    /// WhatsApp required (11 digits), ebook download triggered on success.
    WhatsAppRequired,
}

/// Raw field values as typed on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub terms: bool,
}

/// A form that passed every rule, with trimmed and normalized values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidLead {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone_digits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, insira um nome válido (mínimo 3 caracteres)")]
    NameTooShort,

    #[error("Por favor, insira um e-mail válido")]
    InvalidEmail,

    #[error("Por favor, insira um número de WhatsApp válido ou deixe em branco")]
    InvalidOptionalPhone,

    #[error("Por favor, insira um número de WhatsApp válido com DDD (11 dígitos)")]
    InvalidWhatsApp,

    #[error("Você precisa concordar com os termos para receber o ebook")]
    TermsNotAccepted,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks name, email, phone and terms in that order and reports the first
/// rule that fails.
pub fn validate(variant: FormVariant, form: &LeadForm) -> Result<ValidLead, ValidationError> {
    let name = form.name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }

    let email = form.email.trim();
    let digits = phone_digits(&form.phone);

    let (email, digits) = match variant {
        FormVariant::OptionalContact => {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail);
            }
            if !digits.is_empty() && digits.len() < MIN_OPTIONAL_PHONE_DIGITS {
                return Err(ValidationError::InvalidOptionalPhone);
            }
            (Some(email.to_string()), digits)
        }
        FormVariant::WhatsAppRequired => {
            if digits.len() != MAX_PHONE_DIGITS {
                return Err(ValidationError::InvalidWhatsApp);
            }
            let email = is_valid_email(email).then(|| email.to_string());
            (email, digits)
        }
    };

    if !form.terms {
        return Err(ValidationError::TermsNotAccepted);
    }

    let (phone, phone_digits) = if digits.is_empty() {
        (None, None)
    } else {
        (Some(format_phone(&digits)), Some(digits))
    };

    Ok(ValidLead {
        name: name.to_string(),
        email,
        phone,
        phone_digits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str) -> LeadForm {
        LeadForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            terms: true,
        }
    }

    #[test]
    fn short_names_are_rejected_after_trimming() {
        for variant in [FormVariant::OptionalContact, FormVariant::WhatsAppRequired] {
            for name in ["", "Jo", "   Jo   ", "a "] {
                let result = validate(variant, &form(name, "a@b.com", "11987654321"));
                assert_eq!(result, Err(ValidationError::NameTooShort));
            }
            let ok = validate(variant, &form("  Ana ", "a@b.com", "11987654321")).unwrap();
            assert_eq!(ok.name, "Ana");
        }
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let result = validate(FormVariant::OptionalContact, &form("Zé", "a@b.com", ""));
        assert_eq!(result, Err(ValidationError::NameTooShort));
    }

    #[test]
    fn optional_contact_requires_a_plausible_email() {
        for email in ["", "joana", "joana@", "joana@mail", "jo ana@mail.com"] {
            let result = validate(FormVariant::OptionalContact, &form("Joana", email, ""));
            assert_eq!(result, Err(ValidationError::InvalidEmail), "{}", email);
        }
        assert!(validate(FormVariant::OptionalContact, &form("Joana", "jo@mail.com", "")).is_ok());
    }

    #[test]
    fn optional_contact_phone_digit_counts() {
        let all = "11987654321";
        for n in 0..=all.len() {
            let result = validate(FormVariant::OptionalContact, &form("Joana", "a@b.com", &all[..n]));
            if n == 0 || n >= 10 {
                assert!(result.is_ok(), "{} digits should pass", n);
            } else {
                assert_eq!(result, Err(ValidationError::InvalidOptionalPhone), "{} digits", n);
            }
        }
    }

    #[test]
    fn whatsapp_required_accepts_only_eleven_digits() {
        let all = "119876543219";
        for n in 0..=all.len() {
            let result = validate(FormVariant::WhatsAppRequired, &form("Joana", "", &all[..n]));
            // input is capped at 11, so 12 typed digits still count as 11
            if n >= 11 {
                assert!(result.is_ok(), "{} digits should pass", n);
            } else {
                assert_eq!(result, Err(ValidationError::InvalidWhatsApp), "{} digits", n);
            }
        }
    }

    #[test]
    fn terms_must_be_checked() {
        let mut f = form("Joana Silva", "a@b.com", "");
        f.terms = false;
        assert_eq!(
            validate(FormVariant::OptionalContact, &f),
            Err(ValidationError::TermsNotAccepted)
        );
    }

    #[test]
    fn valid_lead_carries_formatted_phone_and_digits() {
        let lead = validate(
            FormVariant::WhatsAppRequired,
            &form("Joana Silva", "not-an-email", "(11) 98765-4321"),
        )
        .unwrap();
        assert_eq!(lead.phone.as_deref(), Some("(11) 98765-4321"));
        assert_eq!(lead.phone_digits.as_deref(), Some("11987654321"));
        assert_eq!(lead.email, None);
    }
}
