//! PWA Icon Generator Library
//!
//! Renders the fixed set of Progressive Web App icons: a solid square with a
//! centered two-letter label, saved as `icon-{size}x{size}.png`.

pub mod config;
pub mod error;

#[cfg(feature = "render")]
pub mod bitmap_font;
#[cfg(feature = "render")]
pub mod font;
#[cfg(feature = "render")]
pub mod generator;
#[cfg(feature = "render")]
pub mod render;
#[cfg(feature = "render")]
pub mod verify;

pub use crate::config::IconConfig;
pub use crate::error::{ensure_backend, IconError};
#[cfg(feature = "render")]
pub use crate::generator::{generate_icons, GeneratedIcon};
