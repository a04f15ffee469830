use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::countdown_banner::CountdownBanner;
use crate::components::faq::Faq;
use crate::components::lead_form::LeadFormSection;
use crate::components::nav::Nav;
use crate::components::success_modal::SuccessModal;
use crate::config::{CTA_FOCUS_DELAY_MS, CTA_SCROLL_OFFSET};
use crate::events::{PageState, UiEvent};
use crate::form::controller::SubmissionState;
use crate::scroll::{focus_later, scroll_to_id, use_scroll_reveal};
use crate::session::{PageSession, SessionHandle};
use crate::Route;

const BENEFITS: [(&str, &str, &str); 4] = [
    ("fa-heart", "Autoconhecimento", "Entenda a origem das suas reações e aprenda a acolher o que sente."),
    ("fa-shield-alt", "Limites saudáveis", "Diga não sem culpa e proteja sua energia nas relações."),
    ("fa-seedling", "Autoestima", "Fortaleça a forma como você se enxerga e se trata no dia a dia."),
    ("fa-balance-scale", "Equilíbrio", "Ferramentas práticas para lidar com ansiedade e sobrecarga."),
];

const CHAPTERS: [&str; 5] = [
    "Capítulo 1: Autoconhecimento emocional",
    "Capítulo 2: Como nomear e acolher emoções difíceis",
    "Capítulo 3: Limites que protegem sem afastar",
    "Capítulo 4: Relações mais leves e recíprocas",
    "Capítulo 5: Um plano de cuidado emocional para 30 dias",
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Mariana, 34 anos", "Li em uma tarde e já comecei a aplicar os exercícios. Me sinto muito mais consciente das minhas escolhas."),
    ("Fernanda, 41 anos", "O capítulo sobre limites mudou a forma como converso com a minha família."),
    ("Camila, 28 anos", "Linguagem simples e acolhedora. Parece uma conversa com uma amiga que entende do assunto."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let session = use_state(|| SessionHandle::new(PageSession::browser()));
    let prefill = use_state(|| session.controller.prefill());
    let state = use_reducer(|| PageState::from_prefill(&prefill));

    let on_event = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: UiEvent| dispatcher.dispatch(event))
    };

    use_scroll_reveal();

    let cta_click = Callback::from(|e: MouseEvent| {
        if scroll_to_id("leadForm", CTA_SCROLL_OFFSET) {
            e.prevent_default();
            focus_later("name", CTA_FOCUS_DELAY_MS);
        }
    });

    html! {
        <ContextProvider<SessionHandle> context={(*session).clone()}>
            <div id="topo" class="landing-page">
                <Nav menu_open={state.menu_open} on_event={on_event.clone()} />

                <section class="hero">
                    <div class="container hero-content">
                        <span class="hero-tag">{"Ebook gratuito"}</span>
                        <h1>{"Mulheres Emocionalmente Fortes"}</h1>
                        <p class="hero-subtitle">
                            {"Um guia prático escrito por uma psicóloga para você cuidar das suas emoções, fortalecer sua autoestima e viver relações mais saudáveis."}
                        </p>
                        <a class="btn-cta" href="#leadForm" onclick={cta_click}>
                            {"Quero receber o ebook"}
                        </a>
                        <CountdownBanner />
                    </div>
                </section>

                <section id="beneficios" class="benefits-section">
                    <div class="container">
                        <h2 class="section-title">{"O que você vai conquistar"}</h2>
                        <div class="benefits-grid">
                            { for BENEFITS.iter().map(|(icon, title, text)| html! {
                                <div class="benefit-card">
                                    <i class={classes!("fas", *icon)}></i>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="conteudo" class="content-section">
                    <div class="container">
                        <h2 class="section-title">{"O que tem dentro do ebook"}</h2>
                        <ul class="content-list">
                            { for CHAPTERS.iter().map(|chapter| html! {
                                <li class="content-item">
                                    <i class="fas fa-check"></i>
                                    <span>{*chapter}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </section>

                <section id="depoimentos" class="testimonials-section">
                    <div class="container">
                        <h2 class="section-title">{"Quem já leu recomenda"}</h2>
                        <div class="testimonials-grid">
                            { for TESTIMONIALS.iter().map(|(author, quote)| html! {
                                <div class="testimonial-card">
                                    <p class="testimonial-text">{format!("\u{201c}{}\u{201d}", quote)}</p>
                                    <p class="testimonial-author">{*author}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <LeadFormSection
                    name={state.name.clone()}
                    email={state.email.clone()}
                    phone={state.phone.clone()}
                    submitted={state.submission == SubmissionState::Succeeded}
                    button_busy={state.button_busy}
                    error={state.error.clone()}
                    on_event={on_event.clone()}
                />

                <Faq open_index={state.open_faq} on_event={on_event.clone()} />

                <footer class="footer">
                    <div class="container">
                        <p>{"© Mulheres Emocionalmente Fortes. Todos os direitos reservados."}</p>
                        <Link<Route> to={Route::Terms} classes="footer-link">
                            {"Termos de uso e privacidade"}
                        </Link<Route>>
                    </div>
                </footer>

                <SuccessModal open={state.modal_open} on_event={on_event} />
            </div>
            <style>
                {r#"
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .form-error {
                    background-color: rgba(239, 68, 68, 0.1);
                    border: 1px solid var(--danger-color, #ef4444);
                    padding: 12px 15px;
                    margin: 15px 0;
                    border-radius: var(--border-radius, 8px);
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    color: var(--danger-color, #ef4444);
                    font-weight: 500;
                    animation: fadeIn 0.3s ease;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }

                .faq-answer.open {
                    max-height: 500px;
                }

                .faq-question i {
                    transition: transform 0.3s ease;
                }

                .faq-question.active i {
                    transform: rotate(180deg);
                }

                .nav-mobile {
                    display: none;
                }

                .nav-mobile.active {
                    display: flex;
                    flex-direction: column;
                }

                .modal {
                    display: none;
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }

                .modal.active {
                    display: flex;
                }

                .modal-tip {
                    margin-top: 20px;
                    padding: 15px;
                    background: #f0f9ff;
                    border-radius: 8px;
                }

                .modal-tip p {
                    font-size: 0.9rem;
                    margin: 0;
                }

                .countdown-ended {
                    color: white;
                    font-size: 1.2rem;
                }
                "#}
            </style>
        </ContextProvider<SessionHandle>>
    }
}
