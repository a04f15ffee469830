//! UI events and the page state they drive.
//!
//! Components dispatch a [`UiEvent`]; [`PageState::apply`] is the only place
//! the visible state changes. Side effects (timers, scrolling, storage) stay
//! in the components that dispatch.

use std::rc::Rc;

use yew::Reducible;

use crate::form::controller::SubmissionState;
use crate::form::phone::format_phone;
use crate::form::validation::LeadForm;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    NameInput(String),
    EmailInput(String),
    PhoneInput(String),
    FormSubmit,
    MenuToggle,
    FaqToggle(usize),
    ModalClose,
    AnchorClick(String),
    SubmissionChanged(SubmissionState),
    ShowError(String),
    DismissError(u32),
    ButtonRestored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNotice {
    pub id: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub open_faq: Option<usize>,
    pub modal_open: bool,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub submission: SubmissionState,
    pub button_busy: bool,
    pub error: Option<ErrorNotice>,
    next_error_id: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            menu_open: false,
            open_faq: None,
            modal_open: false,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            submission: SubmissionState::Idle,
            button_busy: false,
            error: None,
            next_error_id: 0,
        }
    }
}

impl PageState {
    /// Starts the form fields from a previously stored lead.
    pub fn from_prefill(prefill: &LeadForm) -> Self {
        Self {
            name: prefill.name.clone(),
            email: prefill.email.clone(),
            phone: format_phone(&prefill.phone),
            ..Self::default()
        }
    }

    /// The values to validate when the visitor submits.
    pub fn lead_form(&self, terms: bool) -> LeadForm {
        LeadForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            terms,
        }
    }

    pub fn apply(mut self, event: UiEvent) -> Self {
        match event {
            UiEvent::NameInput(name) => self.name = name,
            UiEvent::EmailInput(email) => self.email = email,
            UiEvent::PhoneInput(raw) => self.phone = format_phone(&raw),
            UiEvent::FormSubmit => {
                if self.submission == SubmissionState::Idle {
                    self.submission = SubmissionState::Validating;
                }
            }
            UiEvent::MenuToggle => self.menu_open = !self.menu_open,
            UiEvent::FaqToggle(index) => {
                self.open_faq = if self.open_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            UiEvent::ModalClose => self.modal_open = false,
            UiEvent::AnchorClick(_) => self.menu_open = false,
            UiEvent::SubmissionChanged(state) => {
                let previous = std::mem::replace(&mut self.submission, state);
                match state {
                    SubmissionState::Submitting => self.button_busy = true,
                    SubmissionState::Succeeded if previous == SubmissionState::Submitting => {
                        self.modal_open = true;
                    }
                    _ => {}
                }
            }
            UiEvent::ShowError(message) => {
                self.error = Some(ErrorNotice {
                    id: self.next_error_id,
                    message,
                });
                self.next_error_id = self.next_error_id.wrapping_add(1);
            }
            UiEvent::DismissError(id) => {
                if self.error.as_ref().map(|e| e.id) == Some(id) {
                    self.error = None;
                }
            }
            UiEvent::ButtonRestored => self.button_busy = false,
        }
        self
    }
}

impl Reducible for PageState {
    type Action = UiEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: Vec<UiEvent>) -> PageState {
        events
            .into_iter()
            .fold(PageState::default(), |state, event| state.apply(event))
    }

    #[test]
    fn faq_keeps_at_most_one_answer_open() {
        let state = run(vec![UiEvent::FaqToggle(0), UiEvent::FaqToggle(2)]);
        assert_eq!(state.open_faq, Some(2));

        let state = state.apply(UiEvent::FaqToggle(2));
        assert_eq!(state.open_faq, None);
    }

    #[test]
    fn anchor_click_closes_the_mobile_menu() {
        let state = run(vec![UiEvent::MenuToggle]);
        assert!(state.menu_open);
        let state = state.apply(UiEvent::AnchorClick("#beneficios".to_string()));
        assert!(!state.menu_open);
    }

    #[test]
    fn success_opens_modal_and_close_hides_it() {
        let state = run(vec![
            UiEvent::FormSubmit,
            UiEvent::SubmissionChanged(SubmissionState::Submitting),
        ]);
        assert!(state.button_busy);
        assert!(!state.modal_open);

        let state = state.apply(UiEvent::SubmissionChanged(SubmissionState::Succeeded));
        assert!(state.modal_open);
        let state = state.apply(UiEvent::ModalClose).apply(UiEvent::ButtonRestored);
        assert!(!state.modal_open);
        assert!(!state.button_busy);
        assert_eq!(state.submission, SubmissionState::Succeeded);
    }

    #[test]
    fn new_error_replaces_old_and_stale_dismissal_is_ignored() {
        let state = run(vec![
            UiEvent::ShowError("primeiro".to_string()),
            UiEvent::ShowError("segundo".to_string()),
        ]);
        let current = state.error.clone().unwrap();
        assert_eq!(current.message, "segundo");

        let state = state.apply(UiEvent::DismissError(current.id.wrapping_sub(1)));
        assert!(state.error.is_some());
        let state = state.apply(UiEvent::DismissError(current.id));
        assert!(state.error.is_none());
    }

    #[test]
    fn typed_name_and_email_survive_other_updates() {
        let state = run(vec![
            UiEvent::NameInput("Joana Silva".to_string()),
            UiEvent::EmailInput("joana@mail.com".to_string()),
            UiEvent::PhoneInput("1".to_string()),
            UiEvent::ShowError("erro".to_string()),
            UiEvent::SubmissionChanged(SubmissionState::Idle),
            UiEvent::PhoneInput("11987654321".to_string()),
        ]);
        let form = state.lead_form(true);
        assert_eq!(form.name, "Joana Silva");
        assert_eq!(form.email, "joana@mail.com");
        assert_eq!(form.phone, "(11) 98765-4321");
        assert!(form.terms);
    }

    #[test]
    fn prefill_seeds_the_fields() {
        let prefill = LeadForm {
            name: "Joana".to_string(),
            email: "jo@mail.com".to_string(),
            phone: "11987654321".to_string(),
            terms: false,
        };
        let state = PageState::from_prefill(&prefill)
            .apply(UiEvent::NameInput("Joana Silva".to_string()));
        assert_eq!(state.name, "Joana Silva");
        assert_eq!(state.email, "jo@mail.com");
        assert_eq!(state.phone, "(11) 98765-4321");
    }

    #[test]
    fn repeated_success_notice_does_not_reopen_modal() {
        let state = run(vec![
            UiEvent::SubmissionChanged(SubmissionState::Submitting),
            UiEvent::SubmissionChanged(SubmissionState::Succeeded),
            UiEvent::ModalClose,
            UiEvent::FormSubmit,
            UiEvent::SubmissionChanged(SubmissionState::Succeeded),
        ]);
        assert!(!state.modal_open);
        assert_eq!(state.submission, SubmissionState::Succeeded);
    }

    #[test]
    fn phone_input_is_formatted() {
        let state = run(vec![UiEvent::PhoneInput("11987654321".to_string())]);
        assert_eq!(state.phone, "(11) 98765-4321");
    }
}
