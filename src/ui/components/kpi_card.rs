use dioxus::prelude::*;

use crate::ui::theme;

/// Tone applied to the headline value of a card.
#[derive(Clone, Copy, PartialEq)]
pub enum KpiTone {
    Neutral,
    Positive,
    Negative,
}

impl KpiTone {
    /// Color by sign: losses read red, gains read green.
    pub fn from_sign(value: f64) -> Self {
        if value < 0.0 {
            KpiTone::Negative
        } else {
            KpiTone::Positive
        }
    }
}

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, tone: KpiTone) -> Element {
    let value_class = match tone {
        KpiTone::Neutral => "mt-2 text-2xl font-semibold text-slate-100",
        KpiTone::Positive => "mt-2 text-2xl font-semibold text-emerald-300",
        KpiTone::Negative => "mt-2 text-2xl font-semibold text-rose-300",
    };

    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            h3 { class: "text-xs font-semibold uppercase tracking-wide text-slate-500", "{title}" }
            p { class: "{value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs text-slate-500", "{desc}" }
            }
        }
    }
}
