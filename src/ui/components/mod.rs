pub mod breakdown_table;
pub mod cost_chart;
pub mod kpi_card;
pub mod number_input;
pub mod toast;
