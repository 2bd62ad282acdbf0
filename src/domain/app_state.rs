use serde::{Deserialize, Serialize};

use super::entities::CalculatorInputs;
use crate::ui::i18n::Language;

/// UI state shared through context: the selected language and the current
/// form inputs. The calculator itself never reads this; pages snapshot the
/// inputs and call [`crate::domain::compute`] with them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub language: Language,
    pub inputs: CalculatorInputs,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.language = persisted.language;
        self.inputs = persisted.inputs;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            language: self.language,
            inputs: self.inputs,
        }
    }
}

/// Slice of [`AppState`] written to disk between sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub inputs: CalculatorInputs,
}
