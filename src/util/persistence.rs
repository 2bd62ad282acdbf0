use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "MomoProfitCalculator";
const APP_NAME: &str = "MomoProfitCalculator";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("state.json"))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    let path = data_file()?;
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use crate::domain::PersistedState;
    use crate::ui::i18n::Language;

    #[test]
    fn persisted_state_round_trips_through_json() {
        let mut state = PersistedState::default();
        state.language = Language::Jp;
        state.inputs.selling_price = 2500.0;
        state.inputs.storage_days = 45.0;

        let json = serde_json::to_string(&state).unwrap();
        let back: PersistedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, Language::Jp);
        assert_eq!(back.inputs, state.inputs);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(back.language, Language::Tc);
        assert_eq!(back.inputs.selling_price, 1000.0);
    }
}
