//! QR Forge - QR codes as printable text art
//!
//! This library turns text into QR codes rendered as plain strings: either
//! one character per module with configurable dark/light characters, or
//! Unicode quadrant block glyphs that pack two module-rows into each printed
//! row. Symbol construction is delegated to the `qrcode` crate; the rendering
//! itself is pure string work.
//!
//! # Example
//! ```
//! use qr_forge::{EcLevel, RenderConfig, generate_ascii};
//!
//! let config = RenderConfig::default();
//! let art = generate_ascii("https://example.com", EcLevel::L, &config).unwrap();
//! println!("{}", art);
//! ```

pub mod config;
pub mod generate;
pub mod matrix;
pub mod render;
pub mod themes;

// Re-export main types for convenience
pub use config::{RenderConfig, RenderMode};
pub use generate::{EcLevel, GenerateError, generate, generate_ascii};
pub use matrix::BitMatrix;
pub use render::{render, render_blocks, render_text};
