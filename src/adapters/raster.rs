use crate::domain::model::Color;
use crate::domain::ports::Surface;
use crate::utils::error::{ReceiptError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

/// 字型以 72 DPI 計算，1pt = 1px
const FONT_DPI: f32 = 72.0;

/// 已載入、已決定大小的字型
pub struct FontFace {
    font: Font<'static>,
    scale: Scale,
}

impl FontFace {
    pub fn from_file<P: AsRef<Path>>(path: P, points: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| ReceiptError::FontLoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(data, points).map_err(|e| match e {
            ReceiptError::FontLoadError { reason, .. } => ReceiptError::FontLoadError {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_bytes(data: Vec<u8>, points: f32) -> Result<Self> {
        let font = Font::try_from_vec(data).ok_or_else(|| ReceiptError::FontLoadError {
            path: "<memory>".to_string(),
            reason: "not a TrueType/OpenType font".to_string(),
        })?;

        let scale = em_scale(&font, points * FONT_DPI / 72.0);
        Ok(Self { font, scale })
    }

    fn layout(&self, text: &str, x: f32, baseline: f32) -> Vec<PositionedGlyph<'_>> {
        self.font
            .layout(text, self.scale, point(x, baseline))
            .collect()
    }

    /// (前進寬度, 行高)
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let glyphs = self.layout(text, 0.0, 0.0);
        let width = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        let vm = self.font.v_metrics(self.scale);
        (width, vm.ascent - vm.descent)
    }
}

/// rusttype 的 Scale 以 ascent-descent 為高度；換算成以 em 為單位的字級
fn em_scale(font: &Font<'_>, pixels_per_em: f32) -> Scale {
    let vm = font.v_metrics_unscaled();
    let units_per_em = f32::from(font.units_per_em());
    let height = vm.ascent - vm.descent;
    if units_per_em > 0.0 && height > 0.0 {
        Scale::uniform(pixels_per_em * height / units_per_em)
    } else {
        Scale::uniform(pixels_per_em)
    }
}

/// 以 `RgbaImage` 為底的畫布
pub struct RasterCanvas {
    image: RgbaImage,
    color: Color,
    font: Option<FontFace>,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            color: Color::BLACK,
            font: None,
        }
    }

    pub fn load_font_face<P: AsRef<Path>>(&mut self, path: P, points: f32) -> Result<()> {
        let face = FontFace::from_file(path, points)?;
        self.font = Some(face);
        Ok(())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn encode_png(&self) -> std::result::Result<Vec<u8>, ImageError> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(buf)
    }

    /// 以覆蓋率 `coverage` 把目前顏色混合到 (x, y)
    fn blend_pixel(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let a = coverage.clamp(0.0, 1.0) * f32::from(self.color.a) / 255.0;
        if a <= 0.0 {
            return;
        }
        let src = self.color.to_rgba();
        let dst = self.image.get_pixel_mut(x, y);
        let inv = 1.0 - a;
        for c in 0..3 {
            dst.0[c] = (f32::from(src[c]) * a + f32::from(dst.0[c]) * inv).round() as u8;
        }
        dst.0[3] = 255;
    }
}

impl Surface for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// 1px 寬、平頭端點：在線段上以像素中心取樣
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (dx, dy) = (x2 - x1, y2 - y1);
        let steps = dx.abs().max(dy.abs()).ceil() as usize;
        for i in 0..steps {
            let t = (i as f32 + 0.5) / steps as f32;
            let x = (x1 + dx * t).floor() as i32;
            let y = (y1 + dy * t).floor() as i32;
            self.blend_pixel(x, y, 1.0);
        }
    }

    fn draw_string_anchored(&mut self, text: &str, x: f32, y: f32, ax: f32, ay: f32) {
        let Some(face) = self.font.take() else {
            tracing::warn!("No font face loaded, skipping text: {}", text);
            return;
        };

        let (w, h) = face.measure(text);
        let x = x - ax * w;
        let y = y + ay * h;

        for glyph in face.layout(text, x, y) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.blend_pixel(gx as i32 + bb.min.x, gy as i32 + bb.min.y, v);
                });
            }
        }

        self.font = Some(face);
    }

    fn measure_string(&self, text: &str) -> (f32, f32) {
        self.font
            .as_ref()
            .map(|face| face.measure(text))
            .unwrap_or((0.0, 0.0))
    }
}
