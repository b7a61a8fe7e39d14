//! # SignEx Site Entry Point
//!
//! Trunk compiles this binary to wasm and loads it from `index.html`.
//!
//! ## Startup Sequence
//! 1. Read build-time configuration
//! 2. Initialize tracing (browser console)
//! 3. Mount the Yew app on `<body>`

fn main() {
    // The actual setup is in lib.rs for better testability
    signex_site::run();
}
