//! Display locales and number formatting for the calculator UI.

use serde::{Deserialize, Serialize};

use crate::domain::CostComponent;

/// Supported display locales. Traditional Chinese is the default market.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-TW")]
    Tc,
    #[serde(rename = "ja-JP")]
    Jp,
}

impl Language {
    pub fn toggled(&self) -> Language {
        match self {
            Language::Tc => Language::Jp,
            Language::Jp => Language::Tc,
        }
    }

    /// Label shown on the toggle button: the language you would switch *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::Tc => "日本語",
            Language::Jp => "繁體中文",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::Tc => &TC,
            Language::Jp => &JP,
        }
    }
}

/// Static label table for one locale, mirrored across both languages.
pub struct Labels {
    pub app_title: &'static str,
    pub section_price: &'static str,
    pub section_logistics: &'static str,
    pub section_fees: &'static str,
    pub field_selling_price: &'static str,
    pub field_cost_margin: &'static str,
    pub field_shipping_fee: &'static str,
    pub field_dimensions: &'static str,
    pub field_storage_days: &'static str,
    pub field_platform_fee_rate: &'static str,
    pub results_title: &'static str,
    pub net_profit: &'static str,
    pub profit_margin: &'static str,
    pub total_cost_ratio: &'static str,
    pub cost_structure: &'static str,
    pub breakdown: &'static str,
    pub cost_price: &'static str,
    pub sales_bonus: &'static str,
    pub platform_fee: &'static str,
    pub marketing: &'static str,
    pub warehousing: &'static str,
    pub shipping: &'static str,
    pub total_cost: &'static str,
    pub tsai: &'static str,
    pub storage_rate: &'static str,
    pub billable_days: &'static str,
    pub tsai_tooltip: &'static str,
    pub rate_tooltip: &'static str,
    pub reset: &'static str,
    pub reset_done: &'static str,
    pub save_failed: &'static str,
}

impl Labels {
    pub fn component(&self, component: CostComponent) -> &'static str {
        match component {
            CostComponent::CostPrice => self.cost_price,
            CostComponent::SalesBonus => self.sales_bonus,
            CostComponent::PlatformFee => self.platform_fee,
            CostComponent::Marketing => self.marketing,
            CostComponent::Warehousing => self.warehousing,
            CostComponent::Shipping => self.shipping,
        }
    }
}

static TC: Labels = Labels {
    app_title: "MOMO 電商收益試算",
    section_price: "價格與成本設定",
    section_logistics: "物流與材積設定",
    section_fees: "平台與其他費用",
    field_selling_price: "商品售價 (含稅)",
    field_cost_margin: "進價毛利 %",
    field_shipping_fee: "自訂運費",
    field_dimensions: "商品尺寸 (長 x 寬 x 高 cm)",
    field_storage_days: "寄倉天數",
    field_platform_fee_rate: "平台服務費率 %",
    results_title: "試算結果",
    net_profit: "淨利潤",
    profit_margin: "淨利率",
    total_cost_ratio: "總費用率",
    cost_structure: "成本結構分析",
    breakdown: "費用明細",
    cost_price: "進價成本",
    sales_bonus: "銷售獎勵金",
    platform_fee: "平台服務費",
    marketing: "行銷贊助金",
    warehousing: "寄倉倉租費",
    shipping: "運費",
    total_cost: "總成本",
    tsai: "材積數",
    storage_rate: "倉租費率",
    billable_days: "計費天數",
    tsai_tooltip: "材積計算：(長x寬x高)/27826。未滿0.5算0.5，0.5~1算1，超過1依實際計算。",
    rate_tooltip: "固定以第6個月費率計算：0.7元/材/天。",
    reset: "重設",
    reset_done: "已恢復預設值。",
    save_failed: "無法儲存設定",
};

static JP: Labels = Labels {
    app_title: "MOMO 電子商取引利益計算",
    section_price: "価格とコスト設定",
    section_logistics: "物流と寸法設定",
    section_fees: "プラットフォーム手数料",
    field_selling_price: "販売価格 (税込)",
    field_cost_margin: "コストマージン %",
    field_shipping_fee: "配送料",
    field_dimensions: "寸法 (縦 x 横 x 高さ cm)",
    field_storage_days: "保管日数",
    field_platform_fee_rate: "サービス手数料率 %",
    results_title: "計算結果",
    net_profit: "純利益",
    profit_margin: "純利益率",
    total_cost_ratio: "総コスト比率",
    cost_structure: "コスト構造分析",
    breakdown: "費用詳細",
    cost_price: "進価コスト",
    sales_bonus: "販売奨励金",
    platform_fee: "プラットフォーム利用料",
    marketing: "マーケティング協賛金",
    warehousing: "倉庫保管料",
    shipping: "配送料",
    total_cost: "総コスト",
    tsai: "才数 (Tsai)",
    storage_rate: "保管料率",
    billable_days: "請求日数",
    tsai_tooltip: "才数計算：(縦x横x高さ)/27826。0.5未満は0.5、0.5~1は1、1超は実数。",
    rate_tooltip: "6ヶ月目の料率で固定：0.7元/才/日。",
    reset: "リセット",
    reset_done: "デフォルト値に戻しました。",
    save_failed: "設定を保存できませんでした",
};

/// Currency display: whole units, thousands separators, sign in front
/// of the symbol ("-$1,234").
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let mut digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{tail},{grouped}")
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{digits},{grouped}")
    };

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Percent display with one decimal, e.g. "64.7%".
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Tsai display: up to 3 decimals with trailing zeros trimmed ("0.5", "2.3").
pub fn format_tsai(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(647.0), "$647");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(-353.0), "-$353");
        assert_eq!(format_currency(-12345.0), "-$12,345");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(64.7), "64.7%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-12.34), "-12.3%");
    }

    #[test]
    fn tsai_trims_trailing_zeros() {
        assert_eq!(format_tsai(0.5), "0.5");
        assert_eq!(format_tsai(1.0), "1");
        assert_eq!(format_tsai(2.3), "2.3");
        assert_eq!(format_tsai(4.492), "4.492");
    }

    #[test]
    fn toggle_flips_between_the_two_locales() {
        assert_eq!(Language::Tc.toggled(), Language::Jp);
        assert_eq!(Language::Jp.toggled(), Language::Tc);
        assert_eq!(Language::Tc.toggled().toggled(), Language::Tc);
    }
}
