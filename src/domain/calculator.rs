use super::entities::{CalculationResult, CalculatorInputs};

/// Divisor turning a cm^3 volume into the tsai billing unit.
const TSAI_DIVISOR: f64 = 27826.0;

/// Fixed commission-style bonus on the selling price.
const SALES_BONUS_RATE: f64 = 0.03;

/// The platform never charges less than 0.5%.
const PLATFORM_RATE_FLOOR_PERCENT: f64 = 0.5;

/// Warehouse rate per tsai per day. Fixed at the 6th-month tier
/// (month 1 starts at 0.2 and climbs 0.1 per month); the tier schedule
/// itself is not implemented, only this flat rate applies.
const DAILY_STORAGE_RATE: f64 = 0.7;

/// Converts package dimensions (cm) into the tsai billing unit.
///
/// raw = (l * w * h) / 27826, then: below 0.5 the warehouse charges the
/// 0.5 minimum, between 0.5 and 1.0 it bills a whole unit, above 1.0 it
/// bills the actual value kept to 3 decimals.
pub fn tsai(length: f64, width: f64, height: f64) -> f64 {
    let raw = (length * width * height) / TSAI_DIVISOR;
    if raw < 0.5 {
        0.5
    } else if raw <= 1.0 {
        1.0
    } else {
        (raw * 1000.0).round() / 1000.0
    }
}

/// Rounds a currency amount to the nearest whole unit, halves away from zero.
///
/// Amounts are snapped to cent precision first so that binary noise from
/// rate products (e.g. 0.35 * 30 = 10.499999999999998) still lands on the
/// 10.5 boundary and rounds to 11 rather than 10.
pub fn round_currency(value: f64) -> f64 {
    ((value * 100.0).round() / 100.0).round()
}

/// Marketing sponsorship rate for a given cost margin bracket.
fn marketing_rate(cost_margin_percent: f64) -> f64 {
    if (20.0..=30.0).contains(&cost_margin_percent) {
        0.003
    } else if (31.0..=40.0).contains(&cost_margin_percent) {
        0.004
    } else {
        0.0
    }
}

/// Derives the full cost breakdown and profit summary for one set of inputs.
///
/// Pure and total: no side effects, no failure modes, safe for arbitrary
/// (including zero or negative) numbers. Every intermediate currency value
/// is rounded immediately, so later sums consume already-rounded amounts.
pub fn compute(inputs: &CalculatorInputs) -> CalculationResult {
    let cost_price = round_currency(inputs.selling_price * (inputs.cost_margin_percent / 100.0));

    let sales_bonus = round_currency(inputs.selling_price * SALES_BONUS_RATE);

    let effective_platform_rate =
        inputs.platform_fee_rate_percent.max(PLATFORM_RATE_FLOOR_PERCENT) / 100.0;
    let platform_fee = round_currency(cost_price * effective_platform_rate);

    let marketing_sponsorship = round_currency(cost_price * marketing_rate(inputs.cost_margin_percent));

    let tsai = tsai(inputs.length, inputs.width, inputs.height);
    // No free-day exemption: every stored day is billable.
    let billable_days = inputs.storage_days;
    let warehousing_fee = round_currency(tsai * DAILY_STORAGE_RATE * billable_days);

    let shipping_fee = inputs.manual_shipping_fee;

    let total_cost = cost_price
        + sales_bonus
        + platform_fee
        + marketing_sponsorship
        + warehousing_fee
        + shipping_fee;
    let net_profit = inputs.selling_price - total_cost;

    let (net_profit_margin, total_cost_ratio) = if inputs.selling_price > 0.0 {
        (
            (net_profit / inputs.selling_price) * 100.0,
            (total_cost / inputs.selling_price) * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    CalculationResult {
        cost_price,
        sales_bonus,
        platform_fee,
        marketing_sponsorship,
        warehousing_fee,
        shipping_fee,
        total_cost,
        net_profit,
        net_profit_margin,
        total_cost_ratio,
        tsai,
        daily_storage_rate: DAILY_STORAGE_RATE,
        billable_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn tsai_floors_small_volumes_at_half_unit() {
        assert_close(tsai(1.0, 1.0, 1.0), 0.5);
        assert_close(tsai(0.0, 0.0, 0.0), 0.5);
        assert_close(tsai(10.0, 10.0, 10.0), 0.5);
    }

    #[test]
    fn tsai_bills_whole_unit_between_half_and_one() {
        // 13913 / 27826 is exactly 0.5, the bottom of the band.
        assert_close(tsai(13913.0, 1.0, 1.0), 1.0);
        // 30^3 / 27826 ~= 0.9703
        assert_close(tsai(30.0, 30.0, 30.0), 1.0);
        assert_close(tsai(27826.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn tsai_above_one_keeps_three_decimals() {
        // 40^3 / 27826 = 2.30000718...
        assert_close(tsai(40.0, 40.0, 40.0), 2.3);
        // 50^3 / 27826 = 4.49220152...
        assert_close(tsai(50.0, 50.0, 50.0), 4.492);
    }

    #[test]
    fn currency_rounding_is_half_away_from_zero() {
        assert_close(round_currency(10.5), 11.0);
        assert_close(round_currency(1.5), 2.0);
        assert_close(round_currency(2.5), 3.0);
        assert_close(round_currency(0.4), 0.0);
        assert_close(round_currency(0.75), 1.0);
        // Product dust must not flip the tie downwards.
        assert_close(round_currency(0.5 * 0.7 * 30.0), 11.0);
    }

    #[test]
    fn default_inputs_match_worked_example() {
        let result = compute(&CalculatorInputs::default());

        assert_close(result.tsai, 0.5);
        assert_close(result.cost_price, 250.0);
        assert_close(result.sales_bonus, 30.0);
        assert_close(result.platform_fee, 1.0);
        assert_close(result.marketing_sponsorship, 1.0);
        assert_close(result.warehousing_fee, 11.0);
        assert_close(result.shipping_fee, 60.0);
        assert_close(result.total_cost, 353.0);
        assert_close(result.net_profit, 647.0);
        assert_close(result.net_profit_margin, 64.7);
        assert_close(result.total_cost_ratio, 35.3);
        assert_close(result.daily_storage_rate, 0.7);
        assert_close(result.billable_days, 30.0);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let inputs = CalculatorInputs {
            selling_price: 2499.0,
            cost_margin_percent: 33.0,
            manual_shipping_fee: 85.0,
            length: 42.0,
            width: 31.0,
            height: 18.5,
            storage_days: 90.0,
            platform_fee_rate_percent: 2.0,
        };
        assert_eq!(compute(&inputs), compute(&inputs));
    }

    #[test]
    fn price_driven_components_grow_with_selling_price() {
        let mut inputs = CalculatorInputs {
            platform_fee_rate_percent: 2.0,
            ..CalculatorInputs::default()
        };

        let mut previous = compute(&inputs);
        for price in [2000.0, 4000.0, 8000.0] {
            inputs.selling_price = price;
            let next = compute(&inputs);
            assert!(next.cost_price > previous.cost_price);
            assert!(next.sales_bonus > previous.sales_bonus);
            assert!(next.platform_fee > previous.platform_fee);
            previous = next;
        }
    }

    #[test]
    fn marketing_tier_boundaries() {
        let sponsorship = |margin: f64| {
            let inputs = CalculatorInputs {
                selling_price: 10000.0,
                cost_margin_percent: margin,
                ..CalculatorInputs::default()
            };
            compute(&inputs).marketing_sponsorship
        };

        assert_close(sponsorship(19.0), 0.0);
        assert_close(sponsorship(20.0), 6.0); // 2000 * 0.003
        assert_close(sponsorship(30.0), 9.0); // 3000 * 0.003
        assert_close(sponsorship(31.0), 12.0); // 3100 * 0.004, rounded from 12.4
        assert_close(sponsorship(40.0), 16.0); // 4000 * 0.004
        assert_close(sponsorship(41.0), 0.0);
    }

    #[test]
    fn platform_rate_is_floored_at_half_percent() {
        let inputs = CalculatorInputs {
            selling_price: 100000.0,
            cost_margin_percent: 50.0,
            platform_fee_rate_percent: 0.1,
            ..CalculatorInputs::default()
        };
        // 50000 at the 0.5% floor, not at the requested 0.1%.
        assert_close(compute(&inputs).platform_fee, 250.0);
    }

    #[test]
    fn zero_selling_price_guards_the_ratios() {
        let inputs = CalculatorInputs {
            selling_price: 0.0,
            ..CalculatorInputs::default()
        };
        let result = compute(&inputs);
        assert_close(result.net_profit_margin, 0.0);
        assert_close(result.total_cost_ratio, 0.0);
        assert!(result.net_profit.is_finite());
    }

    #[test]
    fn degenerate_inputs_stay_finite() {
        let inputs = CalculatorInputs {
            selling_price: -500.0,
            cost_margin_percent: -20.0,
            manual_shipping_fee: -10.0,
            length: -5.0,
            width: 0.0,
            height: 3.0,
            storage_days: -7.0,
            platform_fee_rate_percent: -1.0,
        };
        let result = compute(&inputs);
        assert!(result.total_cost.is_finite());
        assert!(result.net_profit.is_finite());
        assert_close(result.tsai, 0.5);
        assert_close(result.net_profit_margin, 0.0);
    }
}
