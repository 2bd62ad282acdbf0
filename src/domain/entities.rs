use serde::{Deserialize, Serialize};

/// Everything the calculator needs to produce a full cost breakdown.
/// All fields are plain numbers; the form layer turns unparsable text
/// into 0 before these ever reach [`crate::domain::compute`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Listed price, tax included.
    pub selling_price: f64,
    /// Markup margin in percent (e.g. 25 means 25%), used to derive cost price.
    pub cost_margin_percent: f64,
    /// Flat shipping fee entered by the seller, passed through unchanged.
    pub manual_shipping_fee: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub storage_days: f64,
    /// Platform service fee rate in percent, floored at 0.5 during calculation.
    pub platform_fee_rate_percent: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            selling_price: 1000.0,
            cost_margin_percent: 25.0,
            manual_shipping_fee: 60.0,
            length: 10.0,
            width: 10.0,
            height: 10.0,
            storage_days: 30.0,
            platform_fee_rate_percent: 0.5,
        }
    }
}

/// Full derivation for one set of inputs. Currency components are
/// integer-valued after rounding; recomputed wholesale on every input change.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub cost_price: f64,
    pub sales_bonus: f64,
    pub platform_fee: f64,
    pub marketing_sponsorship: f64,
    pub warehousing_fee: f64,
    pub shipping_fee: f64,
    pub total_cost: f64,
    /// Selling price minus total cost; may be negative.
    pub net_profit: f64,
    /// Percent of selling price, 0 when selling price is not positive.
    pub net_profit_margin: f64,
    pub total_cost_ratio: f64,
    /// Volumetric billing unit derived from the package dimensions.
    pub tsai: f64,
    /// Storage rate actually applied, per tsai per day.
    pub daily_storage_rate: f64,
    /// Days the storage fee was charged for.
    pub billable_days: f64,
}

/// The six cost line items, in their fixed display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CostComponent {
    CostPrice,
    SalesBonus,
    PlatformFee,
    Marketing,
    Warehousing,
    Shipping,
}

impl CostComponent {
    pub const ALL: [CostComponent; 6] = [
        CostComponent::CostPrice,
        CostComponent::SalesBonus,
        CostComponent::PlatformFee,
        CostComponent::Marketing,
        CostComponent::Warehousing,
        CostComponent::Shipping,
    ];

    /// Fixed chart color per component, shared by segments and legend.
    pub fn color(&self) -> &'static str {
        match self {
            CostComponent::CostPrice => "#3B82F6",
            CostComponent::SalesBonus => "#10B981",
            CostComponent::PlatformFee => "#F59E0B",
            CostComponent::Marketing => "#8B5CF6",
            CostComponent::Warehousing => "#EF4444",
            CostComponent::Shipping => "#6B7280",
        }
    }

    pub fn value(&self, result: &CalculationResult) -> f64 {
        match self {
            CostComponent::CostPrice => result.cost_price,
            CostComponent::SalesBonus => result.sales_bonus,
            CostComponent::PlatformFee => result.platform_fee,
            CostComponent::Marketing => result.marketing_sponsorship,
            CostComponent::Warehousing => result.warehousing_fee,
            CostComponent::Shipping => result.shipping_fee,
        }
    }
}
