//! Контекст сессии, полученный при старте приложения
//!
//! Заполняется двумя независимыми запросами (`check_login` и
//! `get_csrf_token`). Частичный сбой допустим: отсутствующее поле
//! остаётся `None`, обновления и истечения срока нет.

/// Идентификатор пользователя и CSRF токен текущей сессии
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    /// user_id залогиненного пользователя (None = не залогинен)
    pub user_id: Option<String>,
    /// CSRF токен для мутирующих запросов
    pub csrf_token: Option<String>,
}

impl SessionContext {
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn has_csrf_token(&self) -> bool {
        self.csrf_token.is_some()
    }
}
