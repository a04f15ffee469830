use yew::prelude::*;

use crate::events::UiEvent;
use crate::scroll::anchor_click;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#beneficios", "Benefícios"),
    ("#conteudo", "Conteúdo"),
    ("#depoimentos", "Depoimentos"),
    ("#faq", "Dúvidas"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_event: Callback<UiEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_event } = props;

    let toggle_menu = {
        let on_event = on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_event.emit(UiEvent::MenuToggle);
        })
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                html! {
                    <a class={class} href={*href} onclick={anchor_click(*href, on_event.clone())}>
                        {*label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class="header">
            <div class="container nav-content">
                <a class="logo" href="#topo" onclick={anchor_click("#topo", on_event.clone())}>
                    {"Mulheres Emocionalmente Fortes"}
                </a>
                <nav class="nav-desktop">
                    { links("nav-link") }
                </nav>
                <button id="menuToggle" class="menu-toggle" onclick={toggle_menu}>
                    <i class={classes!("fas", if *menu_open { "fa-times" } else { "fa-bars" })}></i>
                </button>
            </div>
            <nav id="navMobile" class={classes!("nav-mobile", menu_open.then(|| "active"))}>
                { links("nav-mobile-link") }
            </nav>
        </header>
    }
}
