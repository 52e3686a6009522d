//! Cairo-backed render surface.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::color::{BLACK, Color};
use super::font::FontDescriptor;
use super::surface::{RenderError, RenderSurface};
use crate::util::Point;

/// Outline width for unfilled rectangles and circles
const OUTLINE_WIDTH: f64 = 2.0;

/// Off-screen ARGB image that frames are drawn into.
///
/// Each frame starts from a solid backdrop standing in for the camera image.
/// When an output directory is set, `present` writes the frame as
/// `frame-NNNNNN.png`.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    font: FontDescriptor,
    backdrop: Color,
    output_dir: Option<PathBuf>,
    frame_index: u64,
}

impl CairoSurface {
    pub fn new(width: u32, height: u32, font: FontDescriptor) -> Result<Self, RenderError> {
        Ok(Self {
            surface: create_image(width, height)?,
            font,
            backdrop: BLACK,
            output_dir: None,
            frame_index: 0,
        })
    }

    /// Writes every presented frame into `dir` (created if missing).
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    /// Path the frame with `index` is written to, if an output directory is set.
    pub fn frame_path(&self, index: u64) -> Option<PathBuf> {
        self.output_dir
            .as_deref()
            .map(|dir| dir.join(format!("frame-{index:06}.png")))
    }

    /// Reads one pixel as un-premultiplied-agnostic `[r, g, b, a]` bytes.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.surface.width() || y >= self.surface.height() {
            return None;
        }
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        let argb = u32::from_ne_bytes(bytes);
        Some([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ])
    }

    fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                log::warn!("Failed to create Cairo context: {}", err);
                None
            }
        }
    }

    fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| RenderError::Png(err.to_string()))?;
        log::debug!("Wrote frame to {}", path.display());
        Ok(())
    }
}

fn create_image(width: u32, height: u32) -> Result<cairo::ImageSurface, RenderError> {
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        width as i32,
        height as i32,
    )?)
}

impl RenderSurface for CairoSurface {
    fn begin_frame(&mut self, index: u64, width: u32, height: u32) -> Result<(), RenderError> {
        if self.width() != width || self.height() != height {
            self.surface = create_image(width, height)?;
        }
        self.frame_index = index;

        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(
            self.backdrop.r,
            self.backdrop.g,
            self.backdrop.b,
            self.backdrop.a,
        );
        ctx.paint()?;
        Ok(())
    }

    fn draw_rect(&mut self, top_left: Point, bottom_right: Point, color: Color, filled: bool) {
        let Some(ctx) = self.context() else { return };
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.rectangle(
            top_left.x as f64,
            top_left.y as f64,
            (bottom_right.x - top_left.x) as f64,
            (bottom_right.y - top_left.y) as f64,
        );
        let result = if filled {
            ctx.fill()
        } else {
            ctx.set_line_width(OUTLINE_WIDTH);
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.stroke()
        };
        if let Err(err) = result {
            log::warn!("Failed to draw rectangle: {}", err);
        }
    }

    /// Draws text with its baseline at `position`, using Pango for font lookup.
    fn draw_text(&mut self, position: Point, text: &str, font_size: f64, color: Color) {
        if text.is_empty() {
            return;
        }
        let Some(ctx) = self.context() else { return };

        // Gray antialiasing; subpixel fringes over the camera image
        ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(&ctx);
        let font_desc = pango::FontDescription::from_string(&self.font.to_pango_string(font_size));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left; shift up so `position` is the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        ctx.move_to(position.x as f64, position.y as f64 - baseline);
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        pangocairo::functions::show_layout(&ctx, &layout);
    }

    fn draw_line(&mut self, start: Point, end: Point, color: Color, thickness: f64) {
        let Some(ctx) = self.context() else { return };
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(thickness.max(1.0));
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.move_to(start.x as f64, start.y as f64);
        ctx.line_to(end.x as f64, end.y as f64);
        if let Err(err) = ctx.stroke() {
            log::warn!("Failed to draw line: {}", err);
        }
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, filled: bool) {
        let Some(ctx) = self.context() else { return };
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(1) as f64,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        let result = if filled {
            ctx.fill()
        } else {
            ctx.set_line_width(OUTLINE_WIDTH);
            ctx.stroke()
        };
        if let Err(err) = result {
            log::warn!("Failed to draw circle: {}", err);
        }
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.surface.flush();
        if let Some(path) = self.frame_path(self.frame_index) {
            self.write_png(&path)?;
        }
        Ok(())
    }
}
