//! # contact-page
//!
//! WASM runtime for the static marketing/contact page. Attaches three
//! independent behaviors to server-rendered markup: the persisted dark-mode
//! toggle, the contact modal with its focus trap, and the Brazilian phone
//! mask on the contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Element ids, classes, and storage key, overridable from page JSON |
//! | [`error`] | [`error::PageError`] and the crate `Result` alias |
//! | [`preference`] | Dark-mode preference parsing and the storage seam |
//! | [`modal`] | Testable modal state machine and focus-trap decisions |
//! | [`phone`] | Digit extraction and `(DD) DDDDD-DDDD` rendering |
//! | `dom` | Browser wiring over `web-sys` (only with the `browser` feature) |
//!
//! Everything outside `dom` is plain Rust and is tested natively.

pub mod config;
pub mod error;
pub mod modal;
pub mod phone;
pub mod preference;

#[cfg(feature = "browser")]
pub mod dom;

pub use config::PageConfig;
pub use error::{PageError, Result};
