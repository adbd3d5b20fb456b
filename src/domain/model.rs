use serde::{Deserialize, Serialize};

/// 貨幣前綴，所有金額欄位共用
pub const CURRENCY_PREFIX: &str = "¥";

pub const SECTION_HEADING: &str = "商品列表";
pub const DEFAULT_FOOTER: &str = "感谢光临，欢迎下次光临！";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: f64,
    #[serde(alias = "amount")]
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// 一張小票所需的全部內容；建構後不再變動
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptContext {
    pub merchant: Merchant,
    pub date: String,
    pub transaction_id: String,
    pub items: Vec<LineItem>,
    pub footer: String,
}

impl ReceiptContext {
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn merchant_lines(&self) -> [String; 3] {
        [
            format!("商店名称: {}", self.merchant.name),
            format!("电话: {}", self.merchant.phone),
            format!("地址: {}", self.merchant.address),
        ]
    }

    pub fn date_line(&self) -> String {
        format!("日期: {}", self.date)
    }

    pub fn transaction_line(&self) -> String {
        format!("交易编号: {}", self.transaction_id)
    }

    pub fn total_line(&self) -> String {
        format!("总计: {}{:.2}", CURRENCY_PREFIX, self.total())
    }
}

/// 表頭：商品名 / 单价 / 数量 / 总价，欄寬與明細列對齊
pub fn column_header() -> String {
    format!(
        "{:<15} {}{:<6}  {:<6} {}{:<4}",
        "商品名", CURRENCY_PREFIX, "单价", "数量", CURRENCY_PREFIX, "总价"
    )
}

pub fn item_row(item: &LineItem) -> String {
    format!(
        "{:<15} {}{:<8.2}  {:<10} {}{:<4.2}",
        item.name,
        CURRENCY_PREFIX,
        item.unit_price,
        item.quantity,
        CURRENCY_PREFIX,
        item.line_total()
    )
}
