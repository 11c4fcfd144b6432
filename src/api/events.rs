//! События API слоя для GUI

use crate::model::Community;

/// Результаты асинхронных запросов, доставляемые в UI поток
#[derive(Debug, Clone)]
pub enum ApiEvent {
    // === Bootstrap сессии ===
    /// Ответ check_login (user_id если залогинен)
    LoginChecked(Option<String>),
    /// Запрос check_login не удался
    LoginCheckFailed(String),
    /// Ответ get_csrf_token (токен если сервер его выдал)
    CsrfFetched(Option<String>),
    /// Запрос get_csrf_token не удался
    CsrfFetchFailed(String),

    // === Создание коммьюнити ===
    /// Коммьюнити создана (имя)
    CommunityCreated(String),
    /// Создание не удалось (сообщение для пользователя)
    CreateFailed(String),

    // === Список коммьюнити ===
    /// Список загружен
    CommunitiesLoaded(Vec<Community>),
    /// Загрузка списка не удалась
    CommunitiesFailed(String),
}
