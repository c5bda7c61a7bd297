//! Post image rasterization: SVG document → PNG bytes.
//!
//! Rasterization is CPU-bound. Callers run `PostRenderer::render_png` inside
//! `tokio::task::spawn_blocking`, never on the async executor.

pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use usvg::fontdb;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Failed to allocate a {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

/// Rasterizes a post document. Implement this to swap the rasterizer without
/// touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn PostRenderer>`.
pub trait PostRenderer: Send + Sync {
    fn render_png(&self, svg: &str) -> Result<Vec<u8>, RenderError>;
}

/// resvg-backed renderer. The font database is loaded once at startup and
/// shared by every render.
#[derive(Clone)]
pub struct ResvgRenderer {
    fontdb: Arc<fontdb::Database>,
}

impl ResvgRenderer {
    /// Loads the system fonts plus every font found under `font_dir`.
    pub fn new(font_dir: Option<&Path>) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = font_dir {
            db.load_fonts_dir(dir);
        }
        info!(faces = db.len(), "Rasterizer font database loaded");

        Self {
            fontdb: Arc::new(db),
        }
    }
}

impl PostRenderer for ResvgRenderer {
    fn render_png(&self, svg: &str) -> Result<Vec<u8>, RenderError> {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(svg, &options)?;

        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::PixmapAllocation { width, height })?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        debug!(width, height, bytes = png.len(), "Rendered post image");
        Ok(png)
    }
}

/// Download name for a generated post, stamped with the epoch milliseconds.
pub fn post_filename(timestamp_millis: i64) -> String {
    format!("zafaroo-news-post-{timestamp_millis}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn renderer() -> ResvgRenderer {
        ResvgRenderer {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    #[test]
    fn test_render_png_produces_png() {
        let svg = r##"<svg width="40" height="20" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#22201F"/>
</svg>"##;
        let png = renderer().render_png(svg).expect("valid svg should render");
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        // IHDR width/height, big-endian, right after the chunk header.
        assert_eq!(&png[16..20], &40u32.to_be_bytes());
        assert_eq!(&png[20..24], &20u32.to_be_bytes());
    }

    #[test]
    fn test_render_png_rejects_invalid_svg() {
        let result = renderer().render_png("<not-svg");
        assert!(matches!(result, Err(RenderError::Svg(_))));
    }

    #[test]
    fn test_post_filename() {
        assert_eq!(
            post_filename(1_760_870_400_000),
            "zafaroo-news-post-1760870400000.png"
        );
    }
}
