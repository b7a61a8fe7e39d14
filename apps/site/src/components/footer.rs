//! # Footer

use chrono::{Datelike, Utc};
use signex_core::content::{ADDRESS, EMAIL_ADDRESSES, PHONE_NUMBERS};
use signex_core::nav::NAV_LINKS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="container-custom footer-grid">
                <div>
                    <img src="/Logo/signexLogo.png" alt="SignEx logo" class="footer-logo" />
                    <p>{ "Manufacturing road safety products that protect lives on every journey." }</p>
                </div>
                <div>
                    <h4>{ "Quick Links" }</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|l| html! {
                            <li><Link<Route> to={Route::from(l.page)}>{ l.label }</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{ "Contact" }</h4>
                    <p>{ ADDRESS }</p>
                    { for PHONE_NUMBERS.iter().map(|p| html! {
                        <p><a href={format!("tel:{}", p.replace(' ', ""))}>{ *p }</a></p>
                    }) }
                    { for EMAIL_ADDRESSES.iter().map(|e| html! {
                        <p><a href={format!("mailto:{e}")}>{ *e }</a></p>
                    }) }
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {year} SignEx Safety Solutions LLP. All rights reserved.") }
            </div>
        </footer>
    }
}
