//! Модуль интернационализации (i18n)
//!
//! Поддерживаемые языки: японский (язык оригинального интерфейса),
//! английский. Тексты ошибок валидации намеренно совпадают в обоих
//! языках - сервер и форма исторически используют английские сообщения.

mod translations;

pub use translations::*;

/// Поддерживаемые языки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Japanese,
    English,
}

impl Language {
    /// Название языка на этом языке
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }

    /// Флаг/эмодзи для языка
    pub fn flag(&self) -> &'static str {
        match self {
            Language::Japanese => "🇯🇵",
            Language::English => "🇬🇧",
        }
    }

    /// Короткий код языка
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Все доступные языки
    pub fn all() -> &'static [Language] {
        &[Language::Japanese, Language::English]
    }
}

/// Структура с переводами всех строк интерфейса
#[derive(Debug, Clone)]
pub struct Translations {
    // === Главный экран ===
    pub app_title: &'static str,
    pub communities_title: &'static str,
    pub create_new_community: &'static str,
    pub refresh: &'static str,
    pub search_label: &'static str,
    pub search_hint: &'static str,
    pub search_button: &'static str,
    pub no_communities: &'static str,
    pub loading_communities: &'static str,
    pub created_by: &'static str,
    pub rules_heading: &'static str,

    // === Сессия ===
    pub logged_in_as: &'static str,
    pub not_logged_in: &'static str,

    // === Модальное окно создания ===
    pub modal_title: &'static str,
    pub modal_description: &'static str,
    pub label_name: &'static str,
    pub label_description: &'static str,
    pub label_icon: &'static str,
    pub label_rules: &'static str,
    pub rules_hint: &'static str,
    pub choose_icon: &'static str,
    pub no_icon_selected: &'static str,
    pub create_community: &'static str,
    pub cancel: &'static str,

    // === Ошибки валидации (одинаковы во всех языках) ===
    pub err_name_required: &'static str,
    pub err_description_required: &'static str,
    pub err_icon_required: &'static str,
    pub err_rules_required: &'static str,

    // === Ошибки отправки ===
    pub err_create_generic: &'static str,
    pub err_csrf_missing: &'static str,

    // === Статус и лог ===
    pub status: &'static str,
    pub log: &'static str,
    pub clear: &'static str,
    pub log_empty: &'static str,
    pub status_creating: &'static str,
    pub status_created: &'static str,
    pub status_loading: &'static str,
    pub log_session_user: &'static str,
    pub log_session_anonymous: &'static str,
    pub log_csrf_saved: &'static str,
    pub log_csrf_failed: &'static str,
    pub log_login_check_failed: &'static str,
    pub log_created: &'static str,
    pub log_create_failed: &'static str,
    pub log_communities_loaded: &'static str,
    pub log_communities_failed: &'static str,
    pub log_icon_selected: &'static str,
    pub log_icon_error: &'static str,
}

impl Translations {
    /// Получить переводы для указанного языка
    pub fn for_language(lang: Language) -> &'static Translations {
        match lang {
            Language::Japanese => &translations::JA,
            Language::English => &translations::EN,
        }
    }
}

/// Глобальный доступ к переводам (для удобства)
pub fn t(lang: Language) -> &'static Translations {
    Translations::for_language(lang)
}
