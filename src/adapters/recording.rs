//! A `Surface` that records draw calls instead of rasterizing them.
//!
//! Used for `--dry-run` previews and for asserting the drawing sequence in tests.

use crate::domain::model::Color;
use crate::domain::ports::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        ax: f32,
        ay: f32,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    color: Color,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color: Color::BLACK,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// (文字, x, y)，依繪製順序
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    /// 把文字依 y 座標輸出成純文字預覽，每段虛線區塊以一行 `-` 表示
    pub fn to_text_preview(&self) -> String {
        let mut out = Vec::new();
        let mut last_dash_y: Option<f32> = None;

        for op in &self.ops {
            match op {
                DrawOp::Text { text, y, .. } => {
                    out.push(format!("{:>6.1} | {}", y, text));
                    last_dash_y = None;
                }
                DrawOp::Line { y1, .. } => {
                    if last_dash_y != Some(*y1) {
                        out.push(format!("{:>6.1} | {}", y1, "-".repeat(32)));
                        last_dash_y = Some(*y1);
                    }
                }
                DrawOp::Clear(_) => {}
            }
        }

        out.join("\n")
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.color,
        });
    }

    fn draw_string_anchored(&mut self, text: &str, x: f32, y: f32, ax: f32, ay: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            ax,
            ay,
            color: self.color,
        });
    }

    fn measure_string(&self, text: &str) -> (f32, f32) {
        // 沒有字型時以每字 1 單位估算
        (text.chars().count() as f32, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_current_color() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.set_color(Color::WHITE);
        surface.draw_line(0.0, 0.0, 1.0, 0.0);
        assert_eq!(
            surface.ops()[0],
            DrawOp::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 0.0,
                color: Color::WHITE
            }
        );
    }

    #[test]
    fn test_text_preview_collapses_dashes() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.draw_string_anchored("商品列表", 50.0, 20.0, 0.5, 0.0);
        surface.draw_line(0.0, 30.0, 2.0, 30.0);
        surface.draw_line(4.0, 30.0, 6.0, 30.0);
        surface.draw_string_anchored("总计: ¥0.00", 50.0, 40.0, 0.5, 0.0);

        let preview = surface.to_text_preview();
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("商品列表"));
        assert!(lines[1].contains("----"));
        assert!(lines[2].ends_with("总计: ¥0.00"));
    }
}
