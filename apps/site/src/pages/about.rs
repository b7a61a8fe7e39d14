//! # About Page

use signex_core::content::CORE_VALUES;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TeamCarousel;
use crate::routes::Route;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="about">
            <section class="page-banner">
                <h1>{ "About Us" }</h1>
                <p>{ "Learn about our journey, our values and the people behind SignEx" }</p>
            </section>

            <section class="section">
                <div class="container-custom split">
                    <div class="split-body">
                        <h2>{ "About SignEx" }</h2>
                        <p>
                            { "Signex Safety Solutions LLP has emerged as a trusted single-window supplier and \
                               service provider for roads and highway furniture across Central India. As a 3M \
                               Authorized Convertor, we offer end-to-end highway safety solutions including \
                               retro-reflective signage, thermoplastic road marking, metal crash barriers and \
                               custom steel fabrication for gantries and canopy structures. All our products are \
                               manufactured to meet MORTH and IRC standards. At Signex, safety is not just a \
                               goal - it is a commitment." }
                        </p>
                    </div>
                    <div class="image-pair">
                        <img
                            src="/images/happy-diverse-people-holding-road-signs_53876-139626.jpg"
                            alt="Diverse team at Signex Safety Solutions"
                        />
                        <img
                            src="/images/safety-first-sign-nature_23-2149919552.jpg"
                            alt="Safety First - Our Core Value"
                        />
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Our Core Values" }</h2>
                        <p>{ "The principles that guide everything we do" }</p>
                    </div>
                    <div class="card-grid four">
                        { for CORE_VALUES.iter().map(|(title, description)| html! {
                            <div class="card">
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container-custom">
                    <div class="section-intro">
                        <h2>{ "Our Leadership" }</h2>
                        <p>{ "Meet the people steering SignEx" }</p>
                    </div>
                    <TeamCarousel />
                </div>
            </section>

            <section class="cta">
                <div class="container-custom">
                    <h2>{ "Partner With Us for Safer Roads" }</h2>
                    <Link<Route> to={Route::Contact} classes="btn btn-light">{ "Contact Us Today" }</Link<Route>>
                </div>
            </section>
        </div>
    }
}
