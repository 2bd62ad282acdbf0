use dioxus::prelude::*;

use crate::ui::theme;

/// Turns whatever the user typed into a number, defaulting to 0 for
/// anything unparsable. The calculator is total over arbitrary numbers,
/// so this is the only sanitising the form layer does.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Labelled numeric field with an optional unit suffix. Reports the
/// parsed value on every keystroke.
#[component]
pub fn NumberInput(
    label: String,
    value: f64,
    suffix: &'static str,
    sub_label: Option<String>,
    step: Option<f64>,
    on_change: EventHandler<f64>,
) -> Element {
    let step_attr = step.unwrap_or(1.0).to_string();
    // Trim "10" instead of "10.0" so the field reads like a plain number.
    let display = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    };

    rsx! {
        div {
            label { class: "{theme::LABEL}", "{label}" }
            div { class: "relative",
                input {
                    class: "{theme::INPUT} pr-10",
                    r#type: "number",
                    inputmode: "decimal",
                    step: step_attr,
                    value: display,
                    oninput: move |evt| on_change.call(parse_or_zero(&evt.value())),
                }
                span { class: "{theme::INPUT_SUFFIX}", "{suffix}" }
            }
            if let Some(sub) = sub_label {
                p { class: "{theme::SUB_LABEL}", "{sub}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_or_zero;

    #[test]
    fn unparsable_text_becomes_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("1,000"), 0.0);
        assert_eq!(parse_or_zero(" 42.5 "), 42.5);
        assert_eq!(parse_or_zero("-3"), -3.0);
    }
}
