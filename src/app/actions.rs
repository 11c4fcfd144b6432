//! Действия приложения

use super::state::{App, DialogResult};
use commu_desk::api::ApiEvent;
use commu_desk::form::{prepare_submission, IconFile, SubmitBlocked};
use std::path::PathBuf;

impl App {
    // === Bootstrap сессии ===

    /// Запустить оба bootstrap запроса (check_login и get_csrf_token)
    ///
    /// Запросы независимы: каждый доставляет свой результат отдельным
    /// событием, частичный сбой не мешает второму запросу.
    pub fn bootstrap_session(&mut self) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = match api.check_login().await {
                Ok(user) => ApiEvent::LoginChecked(user),
                Err(e) => ApiEvent::LoginCheckFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = match api.fetch_csrf_token().await {
                Ok(token) => ApiEvent::CsrfFetched(token),
                Err(e) => ApiEvent::CsrfFetchFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    // === Модальное окно ===

    /// Открыть окно создания (введённые ранее значения сохраняются)
    pub fn open_create_modal(&mut self) {
        self.modal_open = true;
    }

    /// Закрыть окно без отправки (ввод сохраняется)
    pub fn close_create_modal(&mut self) {
        self.modal_open = false;
    }

    /// Выбрать файл иконки через диалог (асинхронно)
    pub fn pick_icon_dialog(&mut self) {
        let tx = self.dialog_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Community icon")
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
            {
                let _ = tx.send(DialogResult::IconFile(path));
            }
        });
    }

    /// Обработать результаты файловых диалогов
    pub fn process_dialog_results(&mut self) {
        // Собираем все результаты сначала, чтобы освободить borrow
        let results: Vec<_> = if let Some(ref mut rx) = self.dialog_rx {
            let mut res = Vec::new();
            while let Ok(result) = rx.try_recv() {
                res.push(result);
            }
            res
        } else {
            return;
        };

        for result in results {
            match result {
                DialogResult::IconFile(path) => self.set_icon_from_path(path),
            }
        }
    }

    /// Прочитать файл иконки и положить в форму
    pub fn set_icon_from_path(&mut self, path: PathBuf) {
        let t = self.t();
        match IconFile::load(&path) {
            Ok(icon) => {
                self.log(format!("{} {}", t.log_icon_selected, icon.name));
                self.form.icon = Some(icon);
            }
            Err(e) => {
                log::error!("failed to read icon {}: {}", path.display(), e);
                self.log(format!("{} {}", t.log_icon_error, e));
            }
        }
    }

    // === Отправка формы ===

    /// Попытка создать коммьюнити: валидация → CSRF шлюз → POST
    pub fn submit_create(&mut self) {
        let t = self.t();
        self.general_error = None;

        let submission = match prepare_submission(&self.form, &self.session, t) {
            Ok(submission) => submission,
            Err(SubmitBlocked::Invalid(errors)) => {
                // Пустые поля: показываем ошибки, сетевой запрос не делаем
                self.field_errors = errors;
                return;
            }
            Err(SubmitBlocked::MissingCsrfToken) => {
                log::error!("submit aborted: csrf token is missing");
                self.field_errors.clear();
                self.general_error = Some(t.err_csrf_missing.to_string());
                self.log(t.err_csrf_missing);
                return;
            }
        };

        self.field_errors.clear();
        self.status_message = t.status_creating.to_string();

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = match api
                .create_community(&submission.community, &submission.csrf_token)
                .await
            {
                Ok(()) => ApiEvent::CommunityCreated(submission.community.name.clone()),
                Err(e) => ApiEvent::CreateFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    // === Список коммьюнити ===

    /// Перезагрузить весь список
    pub fn refresh_communities(&mut self) {
        let t = self.t();
        self.communities_loading = true;
        self.status_message = t.status_loading.to_string();

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = match api.list_communities().await {
                Ok(list) => ApiEvent::CommunitiesLoaded(list),
                Err(e) => ApiEvent::CommunitiesFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    /// Поиск по имени (пустая строка вернёт весь список)
    pub fn search_communities(&mut self) {
        let t = self.t();
        let query = self.search_input.trim().to_string();
        self.communities_loading = true;
        self.status_message = t.status_loading.to_string();

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = match api.search_communities(&query).await {
                Ok(list) => ApiEvent::CommunitiesLoaded(list),
                Err(e) => ApiEvent::CommunitiesFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }
}
