use dioxus::prelude::*;

use crate::ui::{i18n::format_currency, theme};

/// One slice of the cost-structure bar. The page drops anything with a
/// non-positive value before it gets here, so shares always add up to 100.
#[derive(Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    pub share_percent: f64,
    pub color: &'static str,
}

/// Proportional horizontal bar of the cost structure with a legend
/// underneath. Stands in for a pie chart without pulling in a plotting
/// stack for six numbers.
#[component]
pub fn CostChart(title: String, segments: Vec<ChartSegment>) -> Element {
    if segments.is_empty() {
        return rsx! {
            div { class: "{theme::PANEL}",
                h2 { class: "text-sm font-semibold text-slate-200", "{title}" }
                p { class: "mt-4 text-xs text-slate-500", "—" }
            }
        };
    }

    rsx! {
        div { class: "{theme::PANEL}",
            h2 { class: "text-sm font-semibold text-slate-200", "{title}" }
            div { class: "mt-4 flex h-4 w-full overflow-hidden rounded-full bg-slate-800",
                for segment in segments.iter().cloned() {
                    div {
                        style: "width: {segment.share_percent}%; background-color: {segment.color}",
                        title: "{segment.label}",
                    }
                }
            }
            ul { class: "mt-4 space-y-2",
                for segment in segments {
                    li { class: "flex items-center justify-between text-xs",
                        div { class: "flex items-center gap-2",
                            span {
                                class: "h-2.5 w-2.5 rounded-full",
                                style: "background-color: {segment.color}",
                            }
                            span { class: "text-slate-300", "{segment.label}" }
                        }
                        span { class: "text-slate-400",
                            {format!("{} · {:.1}%", format_currency(segment.value), segment.share_percent)}
                        }
                    }
                }
            }
        }
    }
}
