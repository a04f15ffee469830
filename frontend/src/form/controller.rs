//! Lead form submission.
//!
//! `Idle → Validating → Idle` on a validation failure, otherwise
//! `Validating → Submitting → Succeeded`. `Succeeded` is terminal for the
//! page lifetime; a processing failure drops back to `Idle` so the visitor
//! can try again.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::config::{DOWNLOAD_DELAY_MS, PROCESSING_DELAY_MS};
use crate::storage::KeyValueStore;

use super::effects::SubmitEffects;
use super::lead::{load_lead, save_lead, LeadRecord};
use super::validation::{validate, FormVariant, LeadForm, ValidationError};

pub const PROCESSING_ERROR_MESSAGE: &str =
    "Ocorreu um erro ao processar seu pedido. Por favor, tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission was already accepted on this page.
    Ignored,
    Invalid(ValidationError),
    /// Processing failed; the form is open again.
    Failed(&'static str),
    Succeeded(LeadRecord),
}

pub struct FormController {
    variant: FormVariant,
    store: Rc<dyn KeyValueStore>,
    state: Cell<SubmissionState>,
}

impl FormController {
    pub fn new(variant: FormVariant, store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            variant,
            store,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// Values from the last stored lead, or a blank form.
    pub fn prefill(&self) -> LeadForm {
        match load_lead(self.store.as_ref()) {
            Ok(Some(record)) => record.to_form(),
            Ok(None) => LeadForm::default(),
            Err(e) => {
                warn!("Erro ao carregar dados salvos: {}", e);
                LeadForm::default()
            }
        }
    }

    /// Validates and stores the lead. On success the controller is left in
    /// `Submitting`; the error side carries the outcome that ends the attempt.
    pub fn accept(
        &self,
        form: &LeadForm,
        page_url: &str,
        now: DateTime<Utc>,
    ) -> Result<LeadRecord, SubmitOutcome> {
        if self.state.get() != SubmissionState::Idle {
            return Err(SubmitOutcome::Ignored);
        }

        self.state.set(SubmissionState::Validating);
        let lead = match validate(self.variant, form) {
            Ok(lead) => lead,
            Err(e) => {
                self.state.set(SubmissionState::Idle);
                return Err(SubmitOutcome::Invalid(e));
            }
        };

        self.state.set(SubmissionState::Submitting);
        let record = LeadRecord::new(lead, now, page_url);
        if let Err(e) = save_lead(self.store.as_ref(), &record) {
            warn!("Lead could not be saved locally: {}", e);
        }
        Ok(record)
    }

    /// Waits out the simulated processing for an accepted lead.
    pub async fn process(&self, record: LeadRecord, effects: &dyn SubmitEffects) -> SubmitOutcome {
        if self.state.get() != SubmissionState::Submitting {
            return SubmitOutcome::Ignored;
        }

        if let Err(e) = effects.delay(PROCESSING_DELAY_MS).await {
            error!("Erro no processo: {}", e);
            self.state.set(SubmissionState::Idle);
            return SubmitOutcome::Failed(PROCESSING_ERROR_MESSAGE);
        }

        self.state.set(SubmissionState::Succeeded);
        info!("Lead accepted for {}", record.name);
        SubmitOutcome::Succeeded(record)
    }

    /// Sends the ebook after a short pause; only the WhatsApp variant does this.
    pub async fn deliver(&self, record: &LeadRecord, effects: &dyn SubmitEffects) {
        if self.variant != FormVariant::WhatsAppRequired {
            return;
        }
        let delivered = match effects.delay(DOWNLOAD_DELAY_MS).await {
            Ok(()) => effects.deliver_ebook(record),
            Err(e) => Err(e),
        };
        if let Err(e) = delivered {
            warn!("Ebook download skipped: {}", e);
        }
    }
}
