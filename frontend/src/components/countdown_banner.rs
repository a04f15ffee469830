use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::COUNTDOWN_TICK_MS;
use crate::countdown::{tick, CountdownTick};
use crate::session::SessionHandle;

#[function_component(CountdownBanner)]
pub fn countdown_banner() -> Html {
    let session = use_context::<SessionHandle>();
    let current = use_state(|| None::<CountdownTick>);

    let ended = matches!(*current, Some(CountdownTick::Ended));

    // The interval lives as long as this effect; switching to `ended` runs the
    // cleanup, which cancels it.
    {
        let current = current.clone();
        use_effect_with_deps(
            move |(ended, session): &(bool, Option<SessionHandle>)| {
                let interval = match (*ended, session.clone()) {
                    (false, Some(session)) => {
                        let update = move || {
                            let now = Utc::now().timestamp_millis();
                            current.set(Some(tick(session.store.as_ref(), now)));
                        };
                        update();
                        Some(Interval::new(COUNTDOWN_TICK_MS, update))
                    }
                    _ => None,
                };
                move || drop(interval)
            },
            (ended, session.clone()),
        );
    }

    let body = match *current {
        Some(CountdownTick::Ended) => html! {
            <div class="countdown-ended">{"Últimas horas da oferta!"}</div>
        },
        Some(CountdownTick::Running(remaining)) => html! {
            <>
                <div class="countdown-item">
                    <span id="hours">{remaining.hours_text()}</span>
                    <small>{"horas"}</small>
                </div>
                <div class="countdown-item">
                    <span id="minutes">{remaining.minutes_text()}</span>
                    <small>{"min"}</small>
                </div>
                <div class="countdown-item">
                    <span id="seconds">{remaining.seconds_text()}</span>
                    <small>{"seg"}</small>
                </div>
            </>
        },
        None => html! {},
    };

    html! {
        <div class="urgency-banner">
            <p>{"Oferta gratuita por tempo limitado. Termina em:"}</p>
            <div id="countdown" class="countdown">
                { body }
            </div>
        </div>
    }
}
