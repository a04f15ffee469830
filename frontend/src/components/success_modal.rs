use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, Node};
use yew::prelude::*;

use crate::events::UiEvent;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub open: bool,
    pub on_event: Callback<UiEvent>,
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.dyn_into::<HtmlElement>().ok())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    use_effect_with_deps(
        |open| {
            if *open {
                set_body_overflow("hidden");
            }
            let was_open = *open;
            move || {
                if was_open {
                    set_body_overflow("auto");
                }
            }
        },
        props.open,
    );

    let close = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(UiEvent::ModalClose))
    };

    // Only clicks on the backdrop itself close the modal.
    let backdrop_click = {
        let on_event = props.on_event.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if target.is_some() && target == backdrop_ref.get() {
                on_event.emit(UiEvent::ModalClose);
            }
        })
    };

    html! {
        <div
            id="successModal"
            class={classes!("modal", props.open.then(|| "active"))}
            ref={backdrop_ref}
            onclick={backdrop_click}
        >
            <div class="modal-content">
                <button id="closeModal" class="modal-close" onclick={close}>
                    <i class="fas fa-times"></i>
                </button>
                <div class="modal-header">
                    <i class="fas fa-check-circle"></i>
                    <h3>{"Pedido confirmado!"}</h3>
                </div>
                <div class="modal-body">
                    <p>{"Parabéns! Seu pedido foi processado com sucesso."}</p>
                    <p>{"Em instantes você receberá o ebook no seu e-mail."}</p>
                    <div class="modal-tip">
                        <p>
                            <i class="fas fa-lightbulb"></i>
                            <strong>{" Dica:"}</strong>
                            {" Comece pelo capítulo sobre autoconhecimento emocional."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
