use chrono::Utc;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::config::{self, BUTTON_RESTORE_MS, ERROR_DISMISS_MS};
use crate::events::{ErrorNotice, UiEvent};
use crate::form::controller::{SubmissionState, SubmitOutcome};
use crate::form::phone::format_phone;
use crate::form::validation::{FormVariant, LeadForm};
use crate::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub submitted: bool,
    pub button_busy: bool,
    pub error: Option<ErrorNotice>,
    pub on_event: Callback<UiEvent>,
}

fn is_checked(node: &NodeRef) -> bool {
    node.cast::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

fn restore_button_later(on_event: Callback<UiEvent>) {
    Timeout::new(BUTTON_RESTORE_MS, move || {
        on_event.emit(UiEvent::ButtonRestored);
    })
    .forget();
}

fn submit_lead(session: SessionHandle, form: LeadForm, on_event: Callback<UiEvent>) {
    let page_url = window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();

    let record = match session.controller.accept(&form, &page_url, Utc::now()) {
        Ok(record) => record,
        Err(SubmitOutcome::Invalid(e)) => {
            on_event.emit(UiEvent::SubmissionChanged(SubmissionState::Idle));
            on_event.emit(UiEvent::ShowError(e.to_string()));
            return;
        }
        Err(_) => {
            gloo_console::log!("Lead already submitted on this page");
            return;
        }
    };

    on_event.emit(UiEvent::SubmissionChanged(SubmissionState::Submitting));
    spawn_local(async move {
        let effects = session.effects.clone();
        match session.controller.process(record, effects.as_ref()).await {
            SubmitOutcome::Succeeded(record) => {
                on_event.emit(UiEvent::SubmissionChanged(SubmissionState::Succeeded));
                restore_button_later(on_event.clone());
                session.controller.deliver(&record, effects.as_ref()).await;
            }
            SubmitOutcome::Failed(message) => {
                on_event.emit(UiEvent::SubmissionChanged(SubmissionState::Idle));
                on_event.emit(UiEvent::ShowError(message.to_string()));
                restore_button_later(on_event);
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::Ignored => {}
        }
    });
}

#[function_component(LeadFormSection)]
pub fn lead_form_section(props: &LeadFormProps) -> Html {
    let session = use_context::<SessionHandle>();
    let terms_ref = use_node_ref();

    let variant = session
        .as_ref()
        .map(|s| s.controller.variant())
        .unwrap_or_else(config::form_variant);
    let whatsapp_required = variant == FormVariant::WhatsAppRequired;

    // A new error restarts the timer; the old one is dropped with the effect.
    {
        let on_event = props.on_event.clone();
        let error_id = props.error.as_ref().map(|e| e.id);
        use_effect_with_deps(
            move |error_id| {
                let timeout = error_id.map(|id| {
                    Timeout::new(ERROR_DISMISS_MS, move || {
                        on_event.emit(UiEvent::DismissError(id));
                    })
                });
                move || drop(timeout)
            },
            error_id,
        );
    }

    let on_name_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::NameInput(input.value()));
        })
    };

    let on_email_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(UiEvent::EmailInput(input.value()));
        })
    };

    let on_phone_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone(&input.value());
            input.set_value(&formatted);
            on_event.emit(UiEvent::PhoneInput(formatted));
        })
    };

    let onsubmit = {
        let session = session.clone();
        let terms_ref = terms_ref.clone();
        let name = props.name.clone();
        let email = props.email.clone();
        let phone = props.phone.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let form = LeadForm {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                terms: is_checked(&terms_ref),
            };
            on_event.emit(UiEvent::FormSubmit);
            submit_lead(session, form, on_event.clone());
        })
    };

    html! {
        <section id="formulario" class="form-section">
            <div class="container">
                <div class="form-card">
                    <h2>{"Receba o ebook gratuito"}</h2>
                    <p class="form-subtitle">
                        {"Preencha seus dados e comece hoje a fortalecer sua saúde emocional."}
                    </p>
                    <form id="leadForm" class="lead-form" onsubmit={onsubmit} novalidate={true}>
                        <div class="form-group">
                            <label for="name">{"Seu nome *"}</label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Como você gostaria de ser chamada?"
                                value={props.name.clone()}
                                oninput={on_name_input}
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">
                                { if whatsapp_required { "Seu melhor e-mail" } else { "Seu melhor e-mail *" } }
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="seuemail@exemplo.com"
                                value={props.email.clone()}
                                oninput={on_email_input}
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone">
                                { if whatsapp_required { "WhatsApp com DDD *" } else { "WhatsApp (opcional)" } }
                            </label>
                            <input
                                id="phone"
                                type="tel"
                                placeholder="(11) 98765-4321"
                                value={props.phone.clone()}
                                oninput={on_phone_input}
                            />
                        </div>
                        <div class="form-check">
                            <input id="terms" type="checkbox" ref={terms_ref} />
                            <label for="terms">
                                {"Concordo em receber o ebook e conteúdos sobre saúde emocional. "}
                                <a href="/termos">{"Termos de uso"}</a>
                            </label>
                        </div>
                        if let Some(error) = props.error.as_ref() {
                            <div class="form-error">
                                <i class="fas fa-exclamation-circle"></i>
                                <span>{&error.message}</span>
                            </div>
                        }
                        <button id="submitBtn" type="submit" class="btn-submit" disabled={props.button_busy}>
                            if props.button_busy {
                                <i class="fas fa-spinner fa-spin"></i>
                                {" Processando seu pedido..."}
                            } else {
                                <i class="fas fa-download"></i>
                                {" Quero meu ebook gratuito"}
                            }
                        </button>
                        if props.submitted {
                            <p class="form-confirmed">
                                <i class="fas fa-check-circle"></i>
                                {" Cadastro confirmado. Confira seu e-mail."}
                            </p>
                        }
                    </form>
                </div>
            </div>
        </section>
    }
}
