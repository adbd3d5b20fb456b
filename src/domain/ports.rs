use crate::domain::model::Color;
use crate::utils::error::Result;

/// 渲染器所依賴的繪圖能力
///
/// 文字錨點：`x -= ax * w`、`y += ay * h`，之後以 `y` 為基線排版。
/// `ax = 0.5, ay = 0` 即水平置中、基線對齊 `y`（不是頂端對齊）。
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// 以指定顏色填滿整張畫布
    fn clear(&mut self, color: Color);

    /// 設定後續線條與文字的顏色
    fn set_color(&mut self, color: Color);

    /// 畫一條線並立即描邊
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn draw_string_anchored(&mut self, text: &str, x: f32, y: f32, ax: f32, ay: f32);

    /// 回傳 (寬, 高)
    fn measure_string(&self, text: &str) -> (f32, f32);
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
