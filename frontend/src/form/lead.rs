use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LEAD_STORAGE_KEY;
use crate::error::LandingError;
use crate::storage::KeyValueStore;

use super::validation::{LeadForm, ValidLead};

/// Stored in place of the phone when the visitor left it blank.
pub const PHONE_NOT_PROVIDED: &str = "Não informado";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_digits: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub page_url: String,
}

impl LeadRecord {
    pub fn new(lead: ValidLead, submitted_at: DateTime<Utc>, page_url: &str) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            phone: lead.phone.unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
            phone_digits: lead.phone_digits,
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            page_url: page_url.to_string(),
        }
    }

    /// Field values to show when the visitor comes back.
    pub fn to_form(&self) -> LeadForm {
        let phone = if self.phone == PHONE_NOT_PROVIDED {
            String::new()
        } else {
            self.phone.clone()
        };
        LeadForm {
            name: self.name.clone(),
            email: self.email.clone().unwrap_or_default(),
            phone,
            terms: false,
        }
    }
}

pub fn save_lead(store: &dyn KeyValueStore, record: &LeadRecord) -> Result<(), LandingError> {
    let json = serde_json::to_string(record)?;
    store.set(LEAD_STORAGE_KEY, &json)
}

pub fn load_lead(store: &dyn KeyValueStore) -> Result<Option<LeadRecord>, LandingError> {
    match store.get(LEAD_STORAGE_KEY) {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn lead(phone: Option<&str>, digits: Option<&str>) -> ValidLead {
        ValidLead {
            name: "Joana Silva".to_string(),
            email: Some("joana@mail.com".to_string()),
            phone: phone.map(str::to_string),
            phone_digits: digits.map(str::to_string),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let record = LeadRecord::new(
            lead(Some("(11) 98765-4321"), Some("11987654321")),
            at,
            "https://example.com/",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phoneDigits"], "11987654321");
        assert_eq!(json["pageUrl"], "https://example.com/");
        assert_eq!(json["timestamp"], "2026-10-15T12:00:00.000Z");
    }

    #[test]
    fn blank_phone_is_stored_as_not_provided_and_not_prefilled() {
        let record = LeadRecord::new(lead(None, None), Utc::now(), "");
        assert_eq!(record.phone, PHONE_NOT_PROVIDED);
        assert!(record.phone_digits.is_none());
        assert_eq!(record.to_form().phone, "");
    }

    #[test]
    fn reload_reproduces_name_and_phone() {
        let store = MemoryStorage::new();
        let record = LeadRecord::new(
            lead(Some("(11) 98765-4321"), Some("11987654321")),
            Utc::now(),
            "https://example.com/",
        );
        save_lead(&store, &record).unwrap();

        let loaded = load_lead(&store).unwrap().unwrap();
        assert_eq!(loaded, record);
        let form = loaded.to_form();
        assert_eq!(form.name, "Joana Silva");
        assert_eq!(form.phone, "(11) 98765-4321");
        assert!(!form.terms);
    }

    #[test]
    fn tolerates_records_with_missing_fields() {
        let store = MemoryStorage::new();
        store.set(LEAD_STORAGE_KEY, r#"{"email":"a@b.com"}"#).unwrap();
        let form = load_lead(&store).unwrap().unwrap().to_form();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let store = MemoryStorage::new();
        store.set(LEAD_STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(load_lead(&store), Err(LandingError::MalformedLead(_))));
    }
}
