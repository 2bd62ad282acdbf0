//! Pure calculation logic for the profit breakdown lives here.

pub mod app_state;
pub mod calculator;
pub mod entities;

pub use app_state::{AppState, PersistedState};
pub use calculator::{compute, round_currency, tsai};
pub use entities::{CalculationResult, CalculatorInputs, CostComponent};
