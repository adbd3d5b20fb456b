//! 單元測試與整合測試共用的測試字型搜尋

use std::path::PathBuf;

const SYSTEM_FONTS: &[&str] = &[
    "fonts/MiSans-Normal.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// 測試用字型：優先 RECEIPT_TEST_FONT，其次常見的系統字型；找不到時相關測試直接跳過
pub fn find_test_font() -> Option<PathBuf> {
    std::env::var("RECEIPT_TEST_FONT")
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .find(|p| p.is_file())
}
