use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{compute, AppState, CalculatorInputs, CostComponent},
    ui::components::{
        breakdown_table::{BreakdownMeta, BreakdownRow, BreakdownTable},
        cost_chart::{ChartSegment, CostChart},
        kpi_card::{KpiCard, KpiTone},
        number_input::NumberInput,
    },
    ui::{
        i18n::{format_currency, format_percent, format_tsai},
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let language = state.with(|st| st.language);
    let labels = language.labels();
    let inputs = state.with(|st| st.inputs);

    let result = compute(&inputs);

    // Every field edit writes straight into the shared inputs and lets the
    // page recompute wholesale on the next render.
    let set = |apply: fn(&mut CalculatorInputs, f64)| {
        let mut state = state.clone();
        move |value: f64| {
            state.with_mut(|st| apply(&mut st.inputs, value));
            let _ = persist_user_state(&state);
        }
    };

    let effective_platform_rate = inputs.platform_fee_rate_percent.max(0.5);
    let formula_for = |component: CostComponent| -> Option<String> {
        match component {
            CostComponent::CostPrice => Some(format!(
                "{} × {}%",
                format_currency(inputs.selling_price),
                inputs.cost_margin_percent
            )),
            CostComponent::SalesBonus => {
                Some(format!("{} × 3%", format_currency(inputs.selling_price)))
            }
            CostComponent::PlatformFee => Some(format!(
                "{} × {effective_platform_rate}%",
                format_currency(result.cost_price)
            )),
            CostComponent::Marketing if result.marketing_sponsorship > 0.0 => {
                let rate = if (20.0..=30.0).contains(&inputs.cost_margin_percent) {
                    "0.3%"
                } else {
                    "0.4%"
                };
                Some(format!("{} × {rate}", format_currency(result.cost_price)))
            }
            CostComponent::Warehousing => Some(format!(
                "{} × {} × {}",
                format_tsai(result.tsai),
                result.daily_storage_rate,
                result.billable_days
            )),
            _ => None,
        }
    };

    let rows: Vec<BreakdownRow> = CostComponent::ALL
        .iter()
        .map(|component| BreakdownRow {
            label: labels.component(*component).to_string(),
            formula: formula_for(*component),
            value: component.value(&result),
            color: component.color(),
        })
        .collect();

    // Zero or negative line items carry no share of the bar.
    let segments: Vec<ChartSegment> = if result.total_cost > 0.0 {
        CostComponent::ALL
            .iter()
            .filter(|component| component.value(&result) > 0.0)
            .map(|component| ChartSegment {
                label: labels.component(*component).to_string(),
                value: component.value(&result),
                share_percent: component.value(&result) / result.total_cost * 100.0,
                color: component.color(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let meta = vec![
        BreakdownMeta {
            label: labels.tsai.to_string(),
            value: format_tsai(result.tsai),
            tooltip: Some(labels.tsai_tooltip.to_string()),
        },
        BreakdownMeta {
            label: labels.storage_rate.to_string(),
            value: result.daily_storage_rate.to_string(),
            tooltip: Some(labels.rate_tooltip.to_string()),
        },
        BreakdownMeta {
            label: labels.billable_days.to_string(),
            value: format!("{:.0}", result.billable_days),
            tooltip: None,
        },
    ];

    rsx! {
        div { class: "grid gap-8 lg:grid-cols-12",
            // Left column: the three input sections.
            div { class: "space-y-6 lg:col-span-7",
                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "📈 {labels.section_price}" }
                    div { class: "grid gap-4 sm:grid-cols-2",
                        NumberInput {
                            label: labels.field_selling_price.to_string(),
                            value: inputs.selling_price,
                            suffix: "$",
                            on_change: set(|inputs, v| inputs.selling_price = v),
                        }
                        NumberInput {
                            label: labels.field_cost_margin.to_string(),
                            value: inputs.cost_margin_percent,
                            suffix: "%",
                            on_change: set(|inputs, v| inputs.cost_margin_percent = v),
                        }
                    }
                }

                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "🚚 {labels.section_logistics}" }
                    div { class: "space-y-4",
                        NumberInput {
                            label: labels.field_shipping_fee.to_string(),
                            value: inputs.manual_shipping_fee,
                            suffix: "$",
                            on_change: set(|inputs, v| inputs.manual_shipping_fee = v),
                        }
                        div {
                            label { class: "{theme::LABEL}", "{labels.field_dimensions}" }
                            div { class: "mt-1 grid grid-cols-3 gap-2",
                                NumberInput {
                                    label: "L".to_string(),
                                    value: inputs.length,
                                    suffix: "cm",
                                    on_change: set(|inputs, v| inputs.length = v),
                                }
                                NumberInput {
                                    label: "W".to_string(),
                                    value: inputs.width,
                                    suffix: "cm",
                                    on_change: set(|inputs, v| inputs.width = v),
                                }
                                NumberInput {
                                    label: "H".to_string(),
                                    value: inputs.height,
                                    suffix: "cm",
                                    on_change: set(|inputs, v| inputs.height = v),
                                }
                            }
                            p { class: "{theme::SUB_LABEL}", "{labels.tsai_tooltip}" }
                        }
                        NumberInput {
                            label: labels.field_storage_days.to_string(),
                            value: inputs.storage_days,
                            suffix: "d",
                            sub_label: Some(labels.rate_tooltip.to_string()),
                            on_change: set(|inputs, v| inputs.storage_days = v),
                        }
                    }
                }

                section { class: "{theme::PANEL}",
                    h2 { class: "{theme::SECTION_TITLE}", "📦 {labels.section_fees}" }
                    div { class: "grid gap-4 sm:grid-cols-2",
                        NumberInput {
                            label: labels.field_platform_fee_rate.to_string(),
                            value: inputs.platform_fee_rate_percent,
                            suffix: "%",
                            step: Some(0.1),
                            on_change: set(|inputs, v| inputs.platform_fee_rate_percent = v),
                        }
                    }
                }
            }

            // Right column: summary, chart and the breakdown list.
            div { class: "space-y-6 lg:col-span-5",
                section { class: "grid gap-4 sm:grid-cols-3",
                    KpiCard {
                        title: labels.net_profit.to_string(),
                        value: format_currency(result.net_profit),
                        description: None,
                        tone: KpiTone::from_sign(result.net_profit),
                    }
                    KpiCard {
                        title: labels.profit_margin.to_string(),
                        value: format_percent(result.net_profit_margin),
                        description: None,
                        tone: KpiTone::from_sign(result.net_profit_margin),
                    }
                    KpiCard {
                        title: labels.total_cost_ratio.to_string(),
                        value: format_percent(result.total_cost_ratio),
                        description: None,
                        tone: KpiTone::Neutral,
                    }
                }

                CostChart {
                    title: labels.cost_structure.to_string(),
                    segments,
                }

                BreakdownTable {
                    title: labels.breakdown.to_string(),
                    rows,
                    total_label: labels.total_cost.to_string(),
                    total: result.total_cost,
                    meta,
                }
            }
        }
    }
}
