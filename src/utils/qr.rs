//! QR code rendering.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::AppError;

/// Smallest edge, in pixels, of a rendered code (quiet zone included).
const MIN_DIMENSION: u32 = 200;

/// Encodes `data` as a QR code and serializes it to PNG bytes.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the data does not fit in a QR code or
/// PNG encoding fails.
pub fn render_png(data: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::internal(format!("QR code generation error: {e}")))?;

    let bitmap = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .quiet_zone(true)
        .build();

    let mut png = Vec::new();
    bitmap
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::internal(format!("PNG encoding error: {e}")))?;

    Ok(png)
}
