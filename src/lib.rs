//! A material-style push button with an ink ripple press effect for
//! [Cushy](https://github.com/khonsulabs/cushy).
//!
//! Pressing a [`MaterialButton`] spreads a translucent ripple from the press
//! location to the farthest corner of the button, then fades it out on
//! release. The click callback fires only for releases that qualify as taps:
//! negligible pointer travel, ending inside the button.
//!
//! The crate has two layers:
//!
//! - [`MaterialButton`] is the ready-to-use button: a label plus styling
//!   (padding, font, background, corner radius), all optional with material
//!   defaults.
//! - [`MaterialButtonStyle`] is the appearance and interaction strategy the
//!   button is built from. It can be applied around any widget to give it the
//!   same background, ripple, and tap handling.
//!
//! All animation is driven by Cushy's animation system; this crate runs no
//! timers or threads of its own.
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod button;
mod ripple;
mod style;

pub use button::MaterialButton;
pub use style::MaterialButtonStyle;
