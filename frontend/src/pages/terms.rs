use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{COUNTDOWN_STORAGE_KEY, LEAD_STORAGE_KEY};
use crate::Route;

#[function_component(Terms)]
pub fn terms() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Termos de uso e privacidade"}</h1>

                <section>
                    <h2>{"1. Sobre o material"}</h2>
                    <p>{"O ebook \"Mulheres Emocionalmente Fortes\" é um conteúdo educativo e gratuito. Ele não substitui o acompanhamento psicológico individual."}</p>
                </section>

                <section>
                    <h2>{"2. Dados informados"}</h2>
                    <p>{"Ao preencher o formulário você informa nome, e-mail e, opcionalmente, WhatsApp. Esses dados são usados apenas para o envio do ebook e de conteúdos relacionados."}</p>
                </section>

                <section>
                    <h2>{"3. Armazenamento no seu navegador"}</h2>
                    <p>{"Para facilitar seu retorno, esta página guarda no seu próprio navegador:"}</p>
                    <ul>
                        <li><strong>{LEAD_STORAGE_KEY}</strong>{": os dados do último formulário enviado, usados para preencher os campos automaticamente."}</li>
                        <li><strong>{COUNTDOWN_STORAGE_KEY}</strong>{": o horário de término da oferta exibida no contador."}</li>
                    </ul>
                    <p>{"Você pode apagar essas informações a qualquer momento limpando os dados de navegação."}</p>
                </section>

                <section>
                    <h2>{"4. Cancelamento"}</h2>
                    <p>{"Todos os e-mails enviados possuem um link para cancelar o recebimento."}</p>
                </section>

                <Link<Route> to={Route::Landing} classes="legal-back">
                    {"Voltar para a página inicial"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    padding: 4rem 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .legal-content section {
                    border-radius: 12px;
                    padding: 2rem;
                    margin: 1.5rem auto;
                }

                .legal-content p, .legal-content li {
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
