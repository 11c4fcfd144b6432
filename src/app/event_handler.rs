//! Обработка событий API слоя

use super::state::App;
use commu_desk::api::ApiEvent;
use commu_desk::model::Community;
use commu_desk::utils::truncate_string;

impl App {
    /// Обработать все ожидающие события
    pub fn process_events(&mut self) {
        // Собираем все события в вектор
        let events: Vec<ApiEvent> = {
            let Some(rx) = &mut self.event_rx else { return };
            let mut events = Vec::new();
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
            events
        };

        // Обрабатываем события
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::LoginChecked(user) => self.on_login_checked(user),
            ApiEvent::LoginCheckFailed(err) => self.on_login_check_failed(err),
            ApiEvent::CsrfFetched(token) => self.on_csrf_fetched(token),
            ApiEvent::CsrfFetchFailed(err) => self.on_csrf_fetch_failed(err),
            ApiEvent::CommunityCreated(name) => self.on_community_created(name),
            ApiEvent::CreateFailed(err) => self.on_create_failed(err),
            ApiEvent::CommunitiesLoaded(list) => self.on_communities_loaded(list),
            ApiEvent::CommunitiesFailed(err) => self.on_communities_failed(err),
        }
    }

    // === Bootstrap сессии ===

    fn on_login_checked(&mut self, user: Option<String>) {
        let t = self.t();
        match &user {
            Some(id) => self.log(format!("{} {}", t.log_session_user, id)),
            None => self.log(t.log_session_anonymous),
        }
        self.session.user_id = user;
    }

    fn on_login_check_failed(&mut self, err: String) {
        // Тихая деградация: только лог, user_id остаётся пустым
        log::error!("check_login failed: {}", err);
        let t = self.t();
        self.log(format!("{} {}", t.log_login_check_failed, err));
    }

    fn on_csrf_fetched(&mut self, token: Option<String>) {
        let t = self.t();
        if token.is_some() {
            self.log(t.log_csrf_saved);
        } else {
            log::warn!("get_csrf_token returned no token");
            self.log(format!("{} HTTP 200", t.log_csrf_failed));
        }
        self.session.csrf_token = token;
    }

    fn on_csrf_fetch_failed(&mut self, err: String) {
        // Только лог: попытка отправки позже упрётся в CSRF шлюз
        log::error!("get_csrf_token failed: {}", err);
        let t = self.t();
        self.log(format!("{} {}", t.log_csrf_failed, err));
    }

    // === Создание коммьюнити ===

    fn on_community_created(&mut self, name: String) {
        let t = self.t();
        self.modal_open = false;
        self.form.clear();
        self.field_errors.clear();
        self.general_error = None;
        self.status_message = t.status_created.to_string();
        self.log(format!("✅ {} {}", t.log_created, name));

        // Точечная перезагрузка списка вместо перезагрузки всей страницы
        self.refresh_communities();
    }

    fn on_create_failed(&mut self, err: String) {
        // Окно остаётся открытым, ввод сохраняется для повтора
        let t = self.t();
        self.general_error = Some(err.clone());
        self.status_message = t.err_create_generic.to_string();
        self.log(format!("❌ {} {}", t.log_create_failed, err));
    }

    // === Список коммьюнити ===

    fn on_communities_loaded(&mut self, list: Vec<Community>) {
        let t = self.t();
        self.communities_loading = false;
        self.status_message = format!("{} {}", t.log_communities_loaded, list.len());
        self.communities = list;
    }

    fn on_communities_failed(&mut self, err: String) {
        log::error!("failed to load communities: {}", err);
        let t = self.t();
        self.communities_loading = false;
        self.status_message = format!("{} {}", t.log_communities_failed, truncate_string(&err, 60));
        self.log(format!("❌ {} {}", t.log_communities_failed, err));
    }
}
