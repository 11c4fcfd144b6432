//! Модуль приложения - состояние и логика

mod actions;
mod event_handler;
mod state;

pub use state::App;
// DialogResult используется внутри модуля actions
