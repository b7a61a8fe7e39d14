//! # Toast Container
//!
//! Renders the app-wide toast stack and prunes it when the oldest toast
//! expires.

use chrono::Utc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::{ToastAction, ToastContext};

#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let toasts = use_context::<ToastContext>();
    let next_expiry = toasts.as_ref().and_then(|t| t.queue.next_expiry());

    // One timer, always aimed at the earliest expiry
    {
        let toasts = toasts.clone();
        use_effect_with_deps(
            move |next_expiry| {
                let timeout = (*next_expiry).zip(toasts).map(|(at, toasts)| {
                    let wait = (at - Utc::now()).num_milliseconds().clamp(0, i64::from(u32::MAX));
                    Timeout::new(wait as u32, move || {
                        toasts.dispatch(ToastAction::Prune(Utc::now()));
                    })
                });
                move || drop(timeout)
            },
            next_expiry,
        );
    }

    let Some(toasts) = toasts else {
        return html! {};
    };

    html! {
        <div class="toast-stack" aria-live="polite">
            { for toasts.queue.iter().map(|toast| {
                let id = toast.id;
                let onclick = {
                    let toasts = toasts.clone();
                    Callback::from(move |_: MouseEvent| toasts.dispatch(ToastAction::Dismiss(id)))
                };
                html! {
                    <div
                        key={id.0}
                        class={classes!("toast", format!("toast-{}", toast.kind.as_str()))}
                        role="status"
                        {onclick}
                    >
                        { toast.message.clone() }
                    </div>
                }
            }) }
        </div>
    }
}
