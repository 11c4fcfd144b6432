//! Commu Desk - настольный клиент для community SNS бэкенда
//!
//! Общая библиотека для GUI и CLI версий.
//!
//! # Модули
//! - `api` - HTTP клиент (bootstrap сессии, создание/поиск коммьюнити)
//! - `form` - состояние формы создания коммьюнити и валидация
//! - `session` - контекст сессии (user_id, CSRF токен)
//! - `config` - адрес API (переменная окружения / файл конфигурации)
//! - `model` - типы JSON ответов сервера
//! - `i18n` - интернационализация (японский, английский)
//! - `utils` - вспомогательные функции

pub mod api;
pub mod config;
pub mod form;
pub mod i18n;
pub mod model;
pub mod session;
pub mod utils;
