//! # Pages
//!
//! One component per route.
//!
//! ```text
//! pages/
//! ├── home.rs      ◄─── Hero typewriter, service teasers
//! ├── about.rs     ◄─── Story, values, leadership carousel
//! ├── services.rs  ◄─── Certificate downloads, product lines
//! ├── media.rs     ◄─── Project gallery
//! ├── contact.rs   ◄─── Contact form, office details, FAQ
//! └── not_found.rs ◄─── Fallback for unknown paths
//! ```

mod about;
mod contact;
mod home;
mod media;
mod not_found;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use media::MediaPage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
