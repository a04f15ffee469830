use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAnchorElement};

use crate::config;
use crate::error::LandingError;

use super::lead::LeadRecord;

/// Side effects of a submission that stand in for a real backend.
pub trait SubmitEffects {
    /// Simulated latency. Resolves to an error if processing "fails".
    fn delay(&self, ms: u32) -> LocalBoxFuture<'static, Result<(), LandingError>>;

    fn deliver_ebook(&self, lead: &LeadRecord) -> Result<(), LandingError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserEffects;

impl SubmitEffects for BrowserEffects {
    fn delay(&self, ms: u32) -> LocalBoxFuture<'static, Result<(), LandingError>> {
        Box::pin(async move {
            TimeoutFuture::new(ms).await;
            Ok(())
        })
    }

    fn deliver_ebook(&self, lead: &LeadRecord) -> Result<(), LandingError> {
        let anchor = window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
            .ok_or_else(|| LandingError::Processing("could not create download link".to_string()))?;
        anchor.set_href(config::get_ebook_url());
        anchor.set_download("mulheres-emocionalmente-fortes.pdf");
        anchor.click();
        info!("Ebook download started for {}", lead.name);
        Ok(())
    }
}
