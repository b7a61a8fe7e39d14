//! # FAQ Accordion

use signex_core::content::FAQS;
use yew::prelude::*;

use crate::state::{AccordionAction, AccordionState};

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let state = use_reducer(|| AccordionState::new(FAQS.to_vec()));

    html! {
        <div class="faq">
            { for state.accordion.entries().iter().enumerate().map(|(index, entry)| {
                let open = state.accordion.is_open(index);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| state.dispatch(AccordionAction::Toggle(index)))
                };
                html! {
                    <div class={classes!("faq-item", open.then_some("open"))}>
                        <button class="faq-question" aria-expanded={open.to_string()} {onclick}>
                            <span>{ entry.question }</span>
                            <span class="faq-chevron" aria-hidden="true">{ "⌄" }</span>
                        </button>
                        <div class="faq-answer" hidden={!open}>
                            <p>{ entry.answer }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
