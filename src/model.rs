//! Типы JSON ответов бэкенда

use serde::{Deserialize, Serialize};

/// Коммьюнити в формате `GET /api/get_communities`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Community {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Иконка в base64 (может отсутствовать)
    #[serde(default)]
    pub icon: Option<String>,
    pub rules: String,
    /// Дата создания в ISO 8601
    pub created_at: String,
    pub creator: Creator,
}

/// Создатель коммьюнити
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Creator {
    pub id: i64,
    pub username: String,
}

/// Ответ `GET /check_login`
///
/// Без сессии сервер отвечает 401 и не включает поле `user` -
/// тело парсится в любом случае, смотрим только на `user`.
#[derive(Debug, Deserialize)]
pub struct CheckLoginResponse {
    #[serde(default)]
    pub user: Option<String>,
}

/// Ответ `GET /get_csrf_token`
#[derive(Debug, Deserialize)]
pub struct CsrfTokenResponse {
    #[serde(default)]
    pub csrf_token: Option<String>,
}

/// Тело ошибки бэкенда (`{"error": ...}` или `{"message": ...}`)
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Сообщение из тела ошибки, если есть
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
