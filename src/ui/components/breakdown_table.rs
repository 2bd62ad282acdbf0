use dioxus::prelude::*;

use crate::ui::{i18n::format_currency, theme};

/// One cost line item, already localized by the page.
#[derive(Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub formula: Option<String>,
    pub value: f64,
    pub color: &'static str,
}

/// Small print under the table: tsai, rate and billable days.
#[derive(Clone, PartialEq)]
pub struct BreakdownMeta {
    pub label: String,
    pub value: String,
    pub tooltip: Option<String>,
}

#[component]
pub fn BreakdownTable(
    title: String,
    rows: Vec<BreakdownRow>,
    total_label: String,
    total: f64,
    meta: Vec<BreakdownMeta>,
) -> Element {
    rsx! {
        div { class: "{theme::PANEL}",
            h2 { class: "text-sm font-semibold text-slate-200", "{title}" }
            ul { class: "mt-4 divide-y divide-slate-800",
                for row in rows {
                    li { class: "flex items-center justify-between gap-4 py-2.5",
                        div { class: "flex items-center gap-3",
                            span {
                                class: "h-2.5 w-2.5 rounded-full",
                                style: "background-color: {row.color}",
                            }
                            div {
                                p { class: "text-sm text-slate-200", "{row.label}" }
                                if let Some(formula) = row.formula {
                                    p { class: "text-xs text-slate-500", "{formula}" }
                                }
                            }
                        }
                        span { class: "text-sm font-medium text-slate-100", {format_currency(row.value)} }
                    }
                }
            }
            div { class: "mt-2 flex items-center justify-between border-t border-slate-700 pt-3",
                span { class: "text-sm font-semibold text-slate-200", "{total_label}" }
                span { class: "text-base font-semibold text-slate-50", {format_currency(total)} }
            }
            dl { class: "mt-4 space-y-1",
                for entry in meta {
                    div {
                        class: "flex items-center justify-between text-xs text-slate-500",
                        title: entry.tooltip.unwrap_or_default(),
                        dt { "{entry.label}" }
                        dd { class: "text-slate-400", "{entry.value}" }
                    }
                }
            }
        }
    }
}
