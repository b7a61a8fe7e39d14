//! # Team Carousel
//!
//! Leadership profiles, one slide at a time, advancing on a timer.
//!
//! Slides are keyed by index. After a move the old slide stays mounted with
//! `slide-exit-{side}` while the new one plays `slide-enter-{side}`; the
//! old one is dropped once `SLIDE_TRANSITION_MS` has passed.

use gloo_timers::callback::{Interval, Timeout};
use signex_core::content::TEAM_MEMBERS;
use signex_core::{Side, TeamMember};
use tracing::debug;
use yew::prelude::*;

use crate::state::{CarouselAction, CarouselState, ConfigState};

/// Matches the slide keyframe duration in `styles.css`.
const SLIDE_TRANSITION_MS: u32 = 500;

#[function_component(TeamCarousel)]
pub fn team_carousel() -> Html {
    let config = use_context::<ConfigState>().unwrap_or_default();
    let interval = config.carousel_interval();
    let state = use_reducer(move || CarouselState::new(TEAM_MEMBERS.to_vec(), interval));

    // Auto-advance, cancelled when the handle drops on unmount
    {
        let state = state.clone();
        let period = state.carousel.auto_advance_interval();
        use_effect_with_deps(
            move |period: &chrono::Duration| {
                let millis = period.num_milliseconds().clamp(1, i64::from(u32::MAX)) as u32;
                let handle = Interval::new(millis, move || {
                    debug!("Carousel auto-advance");
                    state.dispatch(CarouselAction::Next);
                });
                move || drop(handle)
            },
            period,
        );
    }

    // Unmount the outgoing slide once its exit animation is over
    {
        let leaving = state.leaving;
        let key = (state.carousel.index(), leaving);
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let handle = leaving.map(|_| {
                    Timeout::new(SLIDE_TRANSITION_MS, move || {
                        state.dispatch(CarouselAction::Settle);
                    })
                });
                move || drop(handle)
            },
            key,
        );
    }

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    let carousel = &state.carousel;
    let direction = carousel.direction();
    let enter = direction.enter_from();
    let exit = direction.exit_to();

    let leaving = state
        .leaving
        .and_then(|index| carousel.entries().get(index).map(|member| (index, member)))
        .map(|(index, member)| {
            html! {
                <div
                    key={index}
                    class={classes!("slide", "slide-leaving", format!("slide-exit-{}", exit.as_str()))}
                    aria-hidden="true"
                >
                    { member_card(member) }
                </div>
            }
        });
    let current = carousel.current().map(|member| {
        html! {
            <div
                key={carousel.index()}
                class={classes!("slide", format!("slide-enter-{}", enter.as_str()))}
            >
                { member_card(member) }
            </div>
        }
    });

    html! {
        <div class="team-carousel">
            <button class="carousel-arrow prev" aria-label="Previous team member" onclick={on_prev}>
                { "‹" }
            </button>

            <div class="carousel-viewport">
                { for leaving.into_iter().chain(current) }
            </div>

            <button class="carousel-arrow next" aria-label="Next team member" onclick={on_next}>
                { "›" }
            </button>

            <div class="carousel-dots">
                { for (0..carousel.len()).map(|index| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(index)))
                    };
                    html! {
                        <button
                            class={classes!("dot", carousel.is_active(index).then_some("active"))}
                            aria-label={format!("Go to slide {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

fn member_card(member: &TeamMember) -> Html {
    let image = html! {
        <div class="member-image">
            <img src={member.image} alt={member.name} />
        </div>
    };
    let body = html! {
        <div class="member-body">
            <h3>{ member.name }</h3>
            <p class="member-position">{ member.position }</p>
            <p>{ member.bio }</p>
            <h4>{ "Areas of Expertise" }</h4>
            <ul class="member-expertise">
                { for member.expertise.iter().map(|e| html! { <li>{ *e }</li> }) }
            </ul>
        </div>
    };

    html! {
        <div class="member-card">
            if member.image_side == Side::Left {
                { image }{ body }
            } else {
                { body }{ image }
            }
        </div>
    }
}
