use crate::core::layout::Layout;
use crate::domain::model::{column_header, item_row, Color, ReceiptContext, SECTION_HEADING};
use crate::domain::ports::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub item_rows: usize,
    pub dash_segments: usize,
    pub total: f64,
}

/// 水平置中畫一行文字，`y` 是文字基線而非頂端
pub fn draw_text_center<S: Surface + ?Sized>(surface: &mut S, text: &str, x: f32, y: f32) {
    surface.draw_string_anchored(text, x, y, 0.5, 0.0);
}

/// 沿 x 軸每隔 `dash + gap` 畫一段長 `dash` 的線，回傳段數
///
/// 段數為 `floor((x2 - x1) / (dash + gap))`。每段起點 y 取 `y1`、終點 y 取 `y2`，
/// 兩者不同時每一段都是斜線。
pub fn draw_dashed_line<S: Surface + ?Sized>(
    surface: &mut S,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    dash_length: f32,
    gap_length: f32,
) -> usize {
    let step = dash_length + gap_length;
    if step <= 0.0 || x2 <= x1 {
        return 0;
    }

    let count = ((x2 - x1) / step).floor() as usize;
    for k in 0..count {
        let start = x1 + k as f32 * step;
        surface.draw_line(start, y1, start + dash_length, y2);
    }
    count
}

pub struct ReceiptRenderer {
    layout: Layout,
}

impl ReceiptRenderer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        receipt: &ReceiptContext,
    ) -> RenderSummary {
        let layout = &self.layout;
        let cx = layout.center_x();
        let mut dash_segments = 0;

        surface.clear(Color::WHITE);
        surface.set_color(Color::BLACK);

        // 商家資訊
        for (line, y) in receipt.merchant_lines().iter().zip(layout.merchant_ys) {
            draw_text_center(surface, line, cx, y);
        }

        // 日期與交易編號
        draw_text_center(surface, &receipt.date_line(), cx, layout.date_y);
        draw_text_center(surface, &receipt.transaction_line(), cx, layout.transaction_y);

        draw_text_center(surface, SECTION_HEADING, cx, layout.heading_y);
        dash_segments += draw_dashed_line(
            surface,
            layout.margin_left,
            layout.divider_y,
            layout.right_x(),
            layout.divider_y,
            layout.dash_length,
            layout.gap_length,
        );

        // 明細表
        let mut y = layout.table_y;
        surface.draw_string_anchored(&column_header(), layout.margin_left, y, 0.0, 0.0);
        y += layout.row_step;
        for item in &receipt.items {
            surface.draw_string_anchored(&item_row(item), layout.margin_left, y, 0.0, 0.0);
            y += layout.row_step;
        }
        tracing::debug!("Drew {} item rows, table ends at y={}", receipt.items.len(), y);

        draw_text_center(surface, &receipt.total_line(), cx, y + layout.total_offset);

        let bottom_y = y + layout.bottom_divider_offset;
        dash_segments += draw_dashed_line(
            surface,
            layout.margin_left,
            bottom_y,
            layout.right_x(),
            bottom_y,
            layout.dash_length,
            layout.gap_length,
        );

        draw_text_center(surface, &receipt.footer, cx, y + layout.footer_offset);

        RenderSummary {
            item_rows: receipt.items.len(),
            dash_segments,
            total: receipt.total(),
        }
    }
}
