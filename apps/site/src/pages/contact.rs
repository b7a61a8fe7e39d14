//! # Contact Page
//!
//! Contact form, office details and the FAQ accordion.
//!
//! ## Timers
//! ```text
//! form.next_deadline() ──► Timeout ──► Tick(now)
//!        │
//!        └── changes whenever the phase changes, which drops the old
//!            Timeout and schedules a new one
//!
//! pending submission ──► spawn_local(send_submission) ──► Resolve { id, .. }
//! ```

use chrono::Utc;
use gloo_timers::callback::Timeout;
use signex_core::content::{ADDRESS, BUSINESS_HOURS, EMAIL_ADDRESSES, PHONE_NUMBERS};
use signex_core::{ContactField, ServiceChoice};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::commands::contact::send_submission;
use crate::components::FaqAccordion;
use crate::state::{ConfigState, ContactAction, ContactState};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_context::<ConfigState>().unwrap_or_default();
    let state = {
        let config = config.clone();
        use_reducer(move || ContactState::new(config.submission_mode(), config.form_timings()))
    };

    // Phase deadlines: end of the simulated delay, end of the confirmation window.
    {
        let deadline = state.form.next_deadline();
        let state = state.clone();
        use_effect_with_deps(
            move |deadline| {
                let handle = deadline.map(|deadline| {
                    let wait = (deadline - Utc::now()).num_milliseconds().clamp(0, i64::from(u32::MAX));
                    Timeout::new(wait as u32, move || {
                        state.dispatch(ContactAction::Tick(Utc::now()));
                    })
                });
                move || drop(handle)
            },
            deadline,
        );
    }

    {
        let pending_id = state.pending.as_ref().map(|p| p.id);
        let pending = state.pending.clone();
        let state = state.clone();
        let endpoint = config.contact_endpoint.clone();
        use_effect_with_deps(
            move |_| {
                if let (Some(submission), Some(endpoint)) = (pending, endpoint) {
                    spawn_local(async move {
                        let outcome = send_submission(&endpoint, &submission)
                            .await
                            .map_err(|err| err.message);
                        state.dispatch(ContactAction::Resolve {
                            id: submission.id,
                            at: Utc::now(),
                            outcome,
                        });
                    });
                }
                || ()
            },
            pending_id,
        );
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit(Utc::now()));
        })
    };

    let on_input = |field: ContactField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            state.dispatch(ContactAction::SetField(field, value));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            state.dispatch(ContactAction::SetField(ContactField::Message, value));
        })
    };

    let on_service = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            state.dispatch(ContactAction::SetField(ContactField::Service, value));
        })
    };

    let form = &state.form;
    let data = form.data();
    let submitting = form.is_submitting();

    let banner = if form.is_submitted() {
        html! {
            <div class="panel panel-success" role="status">
                { "Thank you for your message! We'll get back to you soon." }
            </div>
        }
    } else if let Some(message) = form.failure() {
        html! { <div class="panel panel-error" role="alert">{ message.to_string() }</div> }
    } else if let Some(error) = &state.error {
        html! { <div class="panel panel-error" role="alert">{ error.message.clone() }</div> }
    } else {
        html! {}
    };

    html! {
        <div class="contact">
            <section class="page-banner">
                <h1>{ "Contact Us" }</h1>
                <p>{ "Get in touch with our team for inquiries, quotes, or support" }</p>
            </section>

            <section class="section">
                <div class="container-custom split">
                    <div class="card contact-form-card">
                        <h2>{ "Send Us a Message" }</h2>
                        { banner }
                        <form class="contact-form" {onsubmit}>
                            <div class="form-row">
                                <label>
                                    { "Your Name *" }
                                    <input
                                        type="text"
                                        name={ContactField::Name.name()}
                                        maxlength={max_len(ContactField::Name)}
                                        value={data.name.clone()}
                                        required={ContactField::Name.is_required()}
                                        oninput={on_input(ContactField::Name)}
                                    />
                                </label>
                                <label>
                                    { "Email Address *" }
                                    <input
                                        type="email"
                                        name={ContactField::Email.name()}
                                        maxlength={max_len(ContactField::Email)}
                                        value={data.email.clone()}
                                        required={ContactField::Email.is_required()}
                                        oninput={on_input(ContactField::Email)}
                                    />
                                </label>
                            </div>
                            <div class="form-row">
                                <label>
                                    { "Phone Number" }
                                    <input
                                        type="tel"
                                        name={ContactField::Phone.name()}
                                        maxlength={max_len(ContactField::Phone)}
                                        value={data.phone.clone()}
                                        oninput={on_input(ContactField::Phone)}
                                    />
                                </label>
                                <label>
                                    { "Company Name" }
                                    <input
                                        type="text"
                                        name={ContactField::Company.name()}
                                        maxlength={max_len(ContactField::Company)}
                                        value={data.company.clone()}
                                        oninput={on_input(ContactField::Company)}
                                    />
                                </label>
                            </div>
                            <label>
                                { "Service Interested In *" }
                                <select
                                    name={ContactField::Service.name()}
                                    required={ContactField::Service.is_required()}
                                    onchange={on_service}
                                >
                                    { for ServiceChoice::ALL.iter().map(|choice| html! {
                                        <option value={choice.label()} selected={*choice == data.service}>
                                            { choice.label() }
                                        </option>
                                    }) }
                                </select>
                            </label>
                            <label>
                                { "Your Message *" }
                                <textarea
                                    name={ContactField::Message.name()}
                                    maxlength={max_len(ContactField::Message)}
                                    rows="5"
                                    value={data.message.clone()}
                                    required={ContactField::Message.is_required()}
                                    oninput={on_message}
                                />
                            </label>
                            <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                                if submitting {
                                    <span class="spinner spinner-inline" aria-hidden="true" />
                                    { "Sending..." }
                                } else {
                                    { "Send Message" }
                                }
                            </button>
                        </form>
                    </div>

                    <div class="contact-info">
                        <div class="card">
                            <h3>{ "Our Office" }</h3>
                            <p>{ ADDRESS }</p>
                        </div>
                        <div class="card">
                            <h3>{ "Phone" }</h3>
                            { for PHONE_NUMBERS.iter().map(|phone| html! {
                                <p><a href={format!("tel:{}", phone.replace(' ', ""))}>{ *phone }</a></p>
                            }) }
                        </div>
                        <div class="card">
                            <h3>{ "Email" }</h3>
                            { for EMAIL_ADDRESSES.iter().map(|email| html! {
                                <p><a href={format!("mailto:{email}")}>{ *email }</a></p>
                            }) }
                        </div>
                        <div class="card">
                            <h3>{ "Business Hours" }</h3>
                            { for BUSINESS_HOURS.iter().map(|line| html! { <p>{ *line }</p> }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container-custom narrow">
                    <div class="section-intro">
                        <h2>{ "Frequently Asked Questions" }</h2>
                        <p>{ "Quick answers to the questions we hear most often" }</p>
                    </div>
                    <FaqAccordion />
                </div>
            </section>
        </div>
    }
}

/// `maxlength` attribute for a text field; the same limit `submit` checks.
fn max_len(field: ContactField) -> Option<AttrValue> {
    field.max_len().map(|n| AttrValue::from(n.to_string()))
}
