use crate::form::validation::FormVariant;

pub const LEAD_STORAGE_KEY: &str = "leadData";
pub const COUNTDOWN_STORAGE_KEY: &str = "countdownTarget";

pub const PROCESSING_DELAY_MS: u32 = 1_500;
pub const DOWNLOAD_DELAY_MS: u32 = 1_000;
pub const BUTTON_RESTORE_MS: u32 = 3_000;
pub const ERROR_DISMISS_MS: u32 = 5_000;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;
pub const OFFER_WINDOW_MS: i64 = 24 * 60 * 60 * 1_000;

pub const ANCHOR_SCROLL_OFFSET: i32 = 80;
pub const CTA_SCROLL_OFFSET: i32 = 100;
pub const CTA_FOCUS_DELAY_MS: u32 = 500;

#[cfg(feature = "whatsapp-required")]
pub fn form_variant() -> FormVariant {
    FormVariant::WhatsAppRequired
}

#[cfg(not(feature = "whatsapp-required"))]
pub fn form_variant() -> FormVariant {
    FormVariant::OptionalContact
}

#[cfg(debug_assertions)]
pub fn get_ebook_url() -> &'static str {
    "http://localhost:8080/assets/ebook-mulheres-emocionalmente-fortes.pdf"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_ebook_url() -> &'static str {
    "/assets/ebook-mulheres-emocionalmente-fortes.pdf"
}
