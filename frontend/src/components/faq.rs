use yew::prelude::*;

use crate::events::UiEvent;

pub const FAQ_ENTRIES: [(&str, &str); 5] = [
    (
        "O ebook é realmente gratuito?",
        "Sim. Basta preencher o formulário com seus dados e você recebe o material completo sem nenhum custo.",
    ),
    (
        "Para quem é este material?",
        "Para mulheres que desejam compreender melhor as próprias emoções, estabelecer limites saudáveis e construir relações mais equilibradas.",
    ),
    (
        "Em quanto tempo recebo o ebook?",
        "Logo após a confirmação do cadastro. Verifique também a caixa de spam e a aba de promoções do seu e-mail.",
    ),
    (
        "Meus dados ficam seguros?",
        "Seus dados são usados apenas para o envio do ebook e de conteúdos sobre saúde emocional. Você pode cancelar quando quiser.",
    ),
    (
        "O ebook substitui a terapia?",
        "Não. O material é um apoio para o autoconhecimento, mas não substitui o acompanhamento de um profissional de psicologia.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_event: Callback<UiEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_event = props.on_event.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::FaqToggle(index));
        })
    };

    html! {
        <div class="faq-item">
            <button class={classes!("faq-question", props.open.then(|| "active"))} onclick={toggle}>
                <span>{props.question}</span>
                <i class="fas fa-chevron-down"></i>
            </button>
            <div class={classes!("faq-answer", props.open.then(|| "open"))}>
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub open_index: Option<usize>,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="section-title">{"Perguntas frequentes"}</h2>
                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| html! {
                        <FaqItem
                            index={index}
                            question={*question}
                            answer={*answer}
                            open={props.open_index == Some(index)}
                            on_event={props.on_event.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
