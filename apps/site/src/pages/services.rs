//! # Services Page
//!
//! Certifications (downloadable), product lines and supporting services.

use chrono::Utc;
use signex_core::content::{CERTIFICATES, PRODUCT_LINES, SUPPORT_SERVICES};
use signex_core::{Certificate, ProductLine};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::commands::download::download;
use crate::routes::Route;
use crate::state::{ConfigState, ToastAction, ToastContext};

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <div class="services">
            <section class="page-banner">
                <h1>{ "Our Services" }</h1>
                <p>{ "Comprehensive road safety infrastructure solutions designed to meet the highest standards" }</p>
            </section>

            <section class="section">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Our Certifications" }</h2>
                        <p>{ "We are proud to maintain the highest industry standards through these certifications" }</p>
                    </div>
                    <div class="card-grid four">
                        { for CERTIFICATES.iter().map(|cert| html! {
                            <CertificateCard key={cert.id} certificate={cert.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Our Products" }</h2>
                        <p>{ "Manufactured in-house to MORTH and IRC standards" }</p>
                    </div>
                    { for PRODUCT_LINES.iter().enumerate().map(|(index, line)| product_line(line, index % 2 == 1)) }
                </div>
            </section>

            <section class="section section-muted">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Additional Services" }</h2>
                        <p>{ "Beyond manufacturing, we support every stage of your project" }</p>
                    </div>
                    <div class="card-grid three">
                        { for SUPPORT_SERVICES.iter().map(|service| html! {
                            <div class="card">
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container-custom split">
                    <img src="/images/image.png" alt="Comprehensive Highway Safety Solutions" class="split-image" />
                    <div class="split-body">
                        <span class="badge">{ "One-Stop Solution" }</span>
                        <h3>{ "Complete Highway & Road Safety Solutions" }</h3>
                        <p>
                            { "We are capable of handling all highway and road safety solutions under one roof. \
                               As your one-stop solution provider, we deliver comprehensive safety infrastructure \
                               that meets the highest industry standards and regulatory requirements." }
                        </p>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">{ "Get Started →" }</Link<Route>>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CertificateCardProps {
    certificate: Certificate,
}

#[function_component(CertificateCard)]
fn certificate_card(props: &CertificateCardProps) -> Html {
    let config = use_context::<ConfigState>().unwrap_or_default();
    let toasts = use_context::<ToastContext>();
    let cert = props.certificate.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        let notice = download(&cert, &config.certificate_prefix);
        if let Some(toasts) = &toasts {
            toasts.dispatch(ToastAction::Push(notice, Utc::now()));
        }
    });

    let cert = &props.certificate;
    html! {
        <div class="card certificate-card">
            <div class="certificate-icon">{ cert.icon }</div>
            <h3>{ cert.title }</h3>
            <p>{ cert.description }</p>
            <button class="btn btn-primary btn-block" {onclick}>{ "Download Certificate" }</button>
        </div>
    }
}

fn product_line(line: &ProductLine, reversed: bool) -> Html {
    html! {
        <div class={classes!("product-line", reversed.then_some("reversed"))}>
            <div class="product-images">
                { for line.images.iter().map(|image| html! {
                    <img src={image.src} alt={image.alt} loading="lazy" />
                }) }
            </div>
            <div class="product-body">
                <span class="badge">{ line.tagline }</span>
                <h3>{ line.title }</h3>
                <p>{ line.description }</p>
                <ul class="check-list">
                    { for line.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                </ul>
            </div>
        </div>
    }
}
