use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, CalculatorInputs},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    ui::theme,
    util::version,
};

/// Page chrome: localized title, language toggle and a reset button.
/// Everything inside renders from the shared [`AppState`] signal.
#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let language = state.with(|st| st.language);
    let labels = language.labels();

    let on_toggle_language = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| st.language = st.language.toggled());
            let _ = persist_user_state(&state);
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.inputs = CalculatorInputs::default());
            match persist_user_state(&state) {
                Ok(()) => push_toast(toasts.clone(), ToastKind::Info, labels.reset_done),
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("{}: {err}", labels.save_failed),
                ),
            }
        }
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "rounded-lg bg-indigo-600 px-2 py-1 text-lg", "🧮" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{labels.app_title}" }
                            p { class: "text-xs text-slate-500", {version::version_label()} }
                        }
                    }
                    nav { class: "flex items-center gap-2 text-sm",
                        button {
                            class: "{theme::BTN_GHOST}",
                            onclick: on_reset,
                            "{labels.reset}"
                        }
                        button {
                            class: "{theme::BTN_GHOST}",
                            onclick: on_toggle_language,
                            "🌐 {language.toggle_label()}"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}
