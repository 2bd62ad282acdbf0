use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::CalculatorPage,
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state, PersistSaveError},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current language and inputs to disk. Failures are logged and
/// reported back so the shell can surface them.
pub fn persist_user_state(state: &Signal<AppState>) -> Result<(), PersistSaveError> {
    let snapshot = state.with(|st| st.to_persisted());
    let saved = save_persisted_state(&snapshot);
    if let Err(err) = &saved {
        println!("Failed to persist user state: {err}");
    }
    saved
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}
