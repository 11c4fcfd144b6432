//! Состояние приложения

use commu_desk::api::{ApiClient, ApiEvent};
use commu_desk::config::AppConfig;
use commu_desk::form::{CommunityForm, FieldErrors};
use commu_desk::i18n::{t, Language, Translations};
use commu_desk::model::Community;
use commu_desk::session::SessionContext;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Тип результата файлового диалога
pub enum DialogResult {
    IconFile(PathBuf),
}

/// Главная структура приложения
pub struct App {
    // Язык интерфейса
    pub language: Language,

    // === Конфигурация и API ===
    pub config: AppConfig,
    pub api: ApiClient,

    // === Сессия (заполняется bootstrap запросами при старте) ===
    pub session: SessionContext,

    // === Модальное окно создания ===
    pub modal_open: bool,
    /// Значения полей живут дольше окна: закрытие их не сбрасывает
    pub form: CommunityForm,
    /// Ошибки валидации последней попытки отправки
    pub field_errors: FieldErrors,
    /// Общая ошибка отправки (баннер в модальном окне)
    pub general_error: Option<String>,

    // === Список коммьюнити ===
    pub communities: Vec<Community>,
    pub communities_loading: bool,
    pub search_input: String,

    // === Общее состояние ===
    pub status_message: String,
    pub log_messages: Vec<String>,

    // === Runtime ===
    pub runtime: tokio::runtime::Runtime,
    pub event_tx: mpsc::UnboundedSender<ApiEvent>,
    pub event_rx: Option<mpsc::UnboundedReceiver<ApiEvent>>,

    // === Файловые диалоги (асинхронные) ===
    pub dialog_tx: mpsc::UnboundedSender<DialogResult>,
    pub dialog_rx: Option<mpsc::UnboundedReceiver<DialogResult>>,
}

impl App {
    pub fn new() -> Self {
        let config = AppConfig::load();
        let api = ApiClient::new(&config.api_url).unwrap();

        // Канал событий API и канал результатов файловых диалогов
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (dialog_tx, dialog_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            language: Language::default(),
            config,
            api,
            session: SessionContext::default(),
            modal_open: false,
            form: CommunityForm::default(),
            field_errors: FieldErrors::new(),
            general_error: None,
            communities: Vec::new(),
            communities_loading: false,
            search_input: String::new(),
            status_message: String::new(),
            log_messages: Vec::new(),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            event_tx,
            event_rx: Some(event_rx),
            dialog_tx,
            dialog_rx: Some(dialog_rx),
        };

        // Bootstrap сессии и первоначальная загрузка списка -
        // ровно один раз за время жизни приложения
        app.bootstrap_session();
        app.refresh_communities();

        app
    }

    /// Добавить сообщение в лог
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_messages.push(message.into());
    }

    /// Получить переводы для текущего языка
    pub fn t(&self) -> &'static Translations {
        t(self.language)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
