//! Matrix generation boundary
//!
//! QR symbol construction (Reed-Solomon coding, mask selection, version
//! sizing) is delegated to the `qrcode` crate; this module wraps it behind a
//! small interface that yields a [`BitMatrix`] for the renderers.

use crate::config::RenderConfig;
use crate::matrix::BitMatrix;
use crate::render::render;
use qrcode::types::QrError;
use qrcode::{Color, QrCode};
use std::fmt;

/// QR error-correction level, trading redundancy for capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    /// ~7% recovery
    #[default]
    L,
    /// ~15% recovery
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl EcLevel {
    /// All levels in increasing order of redundancy
    pub const ALL: [EcLevel; 4] = [EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H];

    /// Human-readable label for UI selectors
    pub fn label(self) -> &'static str {
        match self {
            EcLevel::L => "L (Low ~7%)",
            EcLevel::M => "M (Medium ~15%)",
            EcLevel::Q => "Q (Quartile ~25%)",
            EcLevel::H => "H (High ~30%)",
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(letter)
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// Failure to encode input into a QR symbol
///
/// Never produced by the renderers; callers recover from this at the
/// orchestration boundary and surface a user-facing message.
#[derive(Debug)]
pub enum GenerateError {
    /// Input exceeds the symbol capacity for the chosen correction level
    DataTooLong,
    /// Any other encoder failure
    Encode(QrError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::DataTooLong => {
                write!(f, "input is too long for the selected error-correction level")
            }
            GenerateError::Encode(err) => write!(f, "QR encoding failed: {}", err),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::DataTooLong => None,
            GenerateError::Encode(err) => Some(err),
        }
    }
}

impl From<QrError> for GenerateError {
    fn from(err: QrError) -> Self {
        match err {
            QrError::DataTooLong => GenerateError::DataTooLong,
            other => GenerateError::Encode(other),
        }
    }
}

/// Encode `text` into a QR module matrix
///
/// # Arguments
/// * `text` - The content to encode
/// * `ec_level` - Error-correction level
///
/// # Returns
/// The square module matrix of the smallest QR version that fits the input,
/// or a [`GenerateError`] when the encoder rejects it.
pub fn generate(text: &str, ec_level: EcLevel) -> Result<BitMatrix, GenerateError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level.into())?;
    let size = code.width();
    let data = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();
    Ok(BitMatrix::new(size, data))
}

/// Encode `text` and render it in one step
///
/// Convenience pipeline for callers that do not need to keep the matrix
/// around: validate the config, generate the matrix, render it.
///
/// # Arguments
/// * `text` - The content to encode
/// * `ec_level` - Error-correction level
/// * `config` - Rendering parameters
///
/// # Returns
/// The rendered text art, or a [`GenerateError`] from the encoder.
///
/// # Panics
/// Panics if `config` fails validation.
pub fn generate_ascii(
    text: &str,
    ec_level: EcLevel,
    config: &RenderConfig,
) -> Result<String, GenerateError> {
    config.validate().expect("Invalid configuration");
    let matrix = generate(text, ec_level)?;
    Ok(render(&matrix, config))
}
