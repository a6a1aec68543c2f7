// src/encoder.rs

//! Serializes a finished canvas as an 8-bit indexed PNG and exposes it either as
//! a file on disk or as an inline `data:` URI.

use crate::canvas::Canvas;
use crate::error::EncodeError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::{debug, info};
use png::{BitDepth, ColorType, Encoder};
use std::path::Path;

pub const PNG_MIME: &str = "image/png";

/// Encode `canvas` as a palette PNG. The PLTE chunk is the canvas palette in
/// handle order, so pixel bytes are the handles themselves.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    if canvas.palette().is_empty() {
        return Err(EncodeError::EmptyPalette);
    }

    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, canvas.width() as u32, canvas.height() as u32);
        encoder.set_color(ColorType::Indexed);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_palette(canvas.palette().to_bytes());

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&canvas.index_bytes())?;
        writer.finish()?;
    }

    debug!(
        "Encoded {}x{} canvas with {} colors into {} bytes",
        canvas.width(),
        canvas.height(),
        canvas.palette().len(),
        out.len()
    );
    Ok(out)
}

/// `data:image/png;base64,...` reference suitable for inline embedding.
pub fn data_uri(canvas: &Canvas) -> Result<String, EncodeError> {
    let bytes = encode_png(canvas)?;
    Ok(format!("data:{};base64,{}", PNG_MIME, STANDARD.encode(bytes)))
}

/// Encode and write `canvas` to `path`.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), EncodeError> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, &bytes).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Root-relative URL for a file published under `document_root`.
///
/// `/srv/www/img/a.png` under `/srv/www` becomes `/img/a.png`. Paths outside the
/// document root are returned unchanged.
pub fn url_from_file(path: &Path, document_root: &Path) -> String {
    match path.strip_prefix(document_root) {
        Ok(relative) => {
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("/{}", parts.join("/"))
        }
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
