pub mod components;
pub mod i18n;
pub mod pages;
pub mod shell;
pub mod theme;
