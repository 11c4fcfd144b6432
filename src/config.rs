//! Конфигурация приложения - базовый адрес API
//!
//! Приоритет: переменная окружения `COMMU_API_URL`, затем файл
//! конфигурации, затем localhost по умолчанию.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Переменная окружения с адресом API
pub const ENV_API_URL: &str = "COMMU_API_URL";

/// Адрес API по умолчанию (dev-сервер Flask)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Конфигурация приложения
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Базовый адрес API (без завершающего '/')
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Загрузить конфигурацию: окружение → файл → значение по умолчанию
    pub fn load() -> Self {
        Self::load_from(std::env::var(ENV_API_URL).ok().as_deref())
    }

    /// Та же логика с явно переданным значением переменной окружения
    /// (тесты не трогают глобальное окружение процесса)
    fn load_from(env_url: Option<&str>) -> Self {
        if let Some(url) = env_url {
            if !url.trim().is_empty() {
                return Self {
                    api_url: normalize_url(url),
                };
            }
        }

        if let Ok(contents) = fs::read_to_string(config_file_path()) {
            if let Ok(mut config) = serde_json::from_str::<AppConfig>(&contents) {
                config.api_url = normalize_url(&config.api_url);
                return config;
            }
        }

        Self::default()
    }

    /// Сохранить конфигурацию в файл
    pub fn save(&self) -> std::io::Result<()> {
        let path = config_file_path();

        // Создаём директорию если нужно
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)
    }
}

/// Убрать завершающие '/' и пробелы из адреса
pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Получить путь к файлу конфигурации
fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("commu_desk")
        .join("config.json")
}
