use crate::utils::error::{ReceiptError, Result};
use crate::utils::validation::{
    validate_non_negative, validate_open_range, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};

/// 畫布單邊上限（像素）
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// 小票版面參數（像素），預設值即 80mm 熱感紙的 300x600 版面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// 商店名稱、電話、地址三行的 y
    pub merchant_ys: [f32; 3],
    pub date_y: f32,
    pub transaction_y: f32,
    pub divider_y: f32,
    pub heading_y: f32,
    pub table_y: f32,
    pub row_step: f32,
    /// 以下三項相對於最後一列之後的 y
    pub total_offset: f32,
    pub bottom_divider_offset: f32,
    pub footer_offset: f32,
    pub dash_length: f32,
    pub gap_length: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 300,
            height: 600,
            margin_left: 10.0,
            margin_right: 10.0,
            merchant_ys: [20.0, 40.0, 60.0],
            date_y: 100.0,
            transaction_y: 120.0,
            divider_y: 140.0,
            heading_y: 160.0,
            table_y: 180.0,
            row_step: 20.0,
            total_offset: 10.0,
            bottom_divider_offset: 60.0,
            footer_offset: 80.0,
            dash_length: 2.0,
            gap_length: 2.0,
        }
    }
}

impl Layout {
    pub fn center_x(&self) -> f32 {
        self.width as f32 / 2.0
    }

    pub fn right_x(&self) -> f32 {
        self.width as f32 - self.margin_right
    }
}

impl Validate for Layout {
    fn validate(&self) -> Result<()> {
        validate_positive_number("layout.width", self.width, 1)?;
        validate_positive_number("layout.height", self.height, 1)?;
        for (field, value) in [("layout.width", self.width), ("layout.height", self.height)] {
            if value > MAX_CANVAS_SIDE {
                return Err(ReceiptError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: format!("Canvas side must be at most {} px", MAX_CANVAS_SIDE),
                });
            }
        }

        // 零長度的虛線段畫不出任何像素
        validate_open_range("layout.dash_length", self.dash_length, 0.0, self.width as f32)?;
        validate_non_negative("layout.gap_length", self.gap_length)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_receipt_paper() {
        let layout = Layout::default();
        assert_eq!((layout.width, layout.height), (300, 600));
        assert_eq!(layout.center_x(), 150.0);
        assert_eq!(layout.right_x(), 290.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_zero_step_dash_rejected() {
        let layout = Layout {
            dash_length: 0.0,
            gap_length: 0.0,
            ..Default::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_zero_dash_length_rejected() {
        let layout = Layout {
            dash_length: 0.0,
            gap_length: 4.0,
            ..Default::default()
        };
        let err = layout.validate().unwrap_err();
        assert!(matches!(
            err,
            ReceiptError::InvalidConfigValueError { ref field, .. } if field == "layout.dash_length"
        ));
    }

    #[test]
    fn test_zero_gap_is_solid_line() {
        let layout = Layout {
            gap_length: 0.0,
            ..Default::default()
        };
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let layout: Layout = toml::from_str("width = 4294967295\nheight = 4294967295\n").unwrap();
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidConfigValueError { .. }));
        assert_eq!(err.exit_code(), 1);

        let layout = Layout {
            height: MAX_CANVAS_SIDE + 1,
            ..Default::default()
        };
        assert!(layout.validate().is_err());

        let layout = Layout {
            width: MAX_CANVAS_SIDE,
            height: MAX_CANVAS_SIDE,
            ..Default::default()
        };
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let layout = Layout {
            width: 0,
            ..Default::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let layout: Layout = toml::from_str("width = 400\nrow_step = 24.0\n").unwrap();
        assert_eq!(layout.width, 400);
        assert_eq!(layout.row_step, 24.0);
        assert_eq!(layout.height, 600);
        assert_eq!(layout.merchant_ys, [20.0, 40.0, 60.0]);
    }
}
