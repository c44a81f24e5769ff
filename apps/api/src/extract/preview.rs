use image::codecs::jpeg::JpegEncoder;
use pdfium_render::prelude::*;
use tracing::warn;

/// Base render scale against the page's natural 72-dpi width.
const BASE_SCALE: f32 = 1.6;
/// Hard cap on the rendered bitmap width.
const MAX_WIDTH_PX: i32 = 900;
/// JPEG quality out of 100.
const JPEG_QUALITY: u8 = 72;

/// Outcome of a preview render.
///
/// This path never errors out of band: any internal failure (pdfium binding
/// unavailable, empty document, render or encode failure) lands in `error`
/// with `jpeg` left empty. Callers must check `error` explicitly.
#[derive(Debug, Default)]
pub struct PreviewResult {
    pub jpeg: Option<Vec<u8>>,
    pub error: Option<String>,
}

impl PreviewResult {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            jpeg: None,
            error: Some(error.into()),
        }
    }
}

/// Renders page 1 of the document as a width-capped JPEG.
pub fn render_preview(bytes: &[u8]) -> PreviewResult {
    match try_render(bytes) {
        Ok(jpeg) => PreviewResult {
            jpeg: Some(jpeg),
            error: None,
        },
        Err(err) => {
            warn!("preview render failed: {err}");
            PreviewResult::failed(format!("Failed to convert PDF: {err}"))
        }
    }
}

fn try_render(bytes: &[u8]) -> Result<Vec<u8>, String> {
    let bindings =
        Pdfium::bind_to_system_library().map_err(|e| format!("pdfium unavailable: {e}"))?;
    let pdfium = Pdfium::new(bindings);

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| format!("failed to open PDF: {e}"))?;
    let page = document
        .pages()
        .first()
        .map_err(|e| format!("document has no pages: {e}"))?;

    let config = PdfRenderConfig::new().set_target_width(target_width_px(page.width().value));
    let bitmap = page
        .render_with_config(&config)
        .map_err(|e| format!("failed to render page: {e}"))?;

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    bitmap
        .as_image()
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| format!("failed to encode JPEG: {e}"))?;

    Ok(jpeg)
}

/// Target bitmap width for a page: the 1.6x baseline, scaled down so the
/// result never exceeds the width cap. Aspect ratio is preserved by the
/// renderer, which derives height from the target width.
fn target_width_px(page_width_pt: f32) -> i32 {
    let scaled = (page_width_pt * BASE_SCALE).round() as i32;
    scaled.min(MAX_WIDTH_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_width_uses_base_scale_under_cap() {
        // 500pt page at 1.6x -> 800px, under the cap
        assert_eq!(target_width_px(500.0), 800);
    }

    #[test]
    fn test_target_width_caps_wide_pages() {
        // 600pt page at 1.6x would be 960px -> capped
        assert_eq!(target_width_px(600.0), 900);
    }

    #[test]
    fn test_target_width_at_exact_cap_boundary() {
        // 562.5pt * 1.6 = 900 exactly
        assert_eq!(target_width_px(562.5), 900);
    }

    #[test]
    fn test_us_letter_stays_under_cap() {
        // 612pt (US letter) * 1.6 = 979.2 -> capped at 900
        assert_eq!(target_width_px(612.0), 900);
        // A5 width 420pt * 1.6 = 672
        assert_eq!(target_width_px(420.0), 672);
    }

    #[test]
    fn test_render_preview_never_raises_on_garbage() {
        let result = render_preview(b"not a pdf at all");
        assert!(result.jpeg.is_none());
        assert!(result.error.is_some());
        assert!(result.error.unwrap().starts_with("Failed to convert PDF"));
    }
}
