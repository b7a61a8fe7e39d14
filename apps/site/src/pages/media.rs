//! # Media Page
//!
//! Project gallery. The listing is loaded once on mount.

use signex_core::{GallerySource, StaticGallery};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::state::{ConfigState, GalleryAction, GalleryState};

#[function_component(MediaPage)]
pub fn media_page() -> Html {
    let config = use_context::<ConfigState>().unwrap_or_default();
    let state = use_reducer(GalleryState::default);

    let load = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(GalleryAction::Begin);
            let state = state.clone();
            spawn_local(async move {
                let result = StaticGallery::default().list();
                state.dispatch(GalleryAction::Finish(result));
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                || ()
            },
            (),
        );
    }

    let gallery = &state.gallery;
    let body = if gallery.is_loading() {
        html! {
            <div class="spinner-wrap">
                <div class="spinner" role="progressbar" aria-label="Loading gallery" />
            </div>
        }
    } else if gallery.error().is_some() {
        let onclick = load.reform(|_: MouseEvent| ());
        html! {
            <div class="panel panel-error">
                <p>{ "The gallery could not be loaded." }</p>
                <button class="btn btn-primary" {onclick}>{ "Try again" }</button>
            </div>
        }
    } else if gallery.is_empty_loaded() {
        html! { <div class="panel">{ "No photos yet. Check back soon!" }</div> }
    } else {
        html! {
            <div class="gallery-grid">
                { for gallery.urls(&config.gallery_prefix).into_iter().enumerate().map(|(index, src)| html! {
                    <div class="gallery-item" key={index}>
                        <img {src} alt={format!("Gallery image {}", index + 1)} loading="lazy" />
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <div class="media">
            <section class="page-banner">
                <h1>{ "Media" }</h1>
                <p>{ "Browse through our project gallery and media collection" }</p>
            </section>

            <section class="section">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Our Project Gallery" }</h2>
                        <p>{ "Explore our completed projects and installations across various locations" }</p>
                    </div>
                    { body }
                </div>
            </section>

            <section class="section section-muted">
                <div class="container-custom section-intro">
                    <h2>{ "Video Gallery" }</h2>
                    <p>{ "Coming soon! We're working on adding video content to showcase our projects in action." }</p>
                </div>
            </section>
        </div>
    }
}
