//! HTTP клиент community бэкенда

use crate::form::NewCommunity;
use crate::model::{CheckLoginResponse, Community, CsrfTokenResponse, ErrorResponse};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Заголовок с CSRF токеном для мутирующих запросов
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Ошибки API слоя
#[derive(Debug, Error)]
pub enum ApiError {
    /// Транспортная ошибка или невалидный ответ
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Сервер ответил не-2xx статусом
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Клиент community API
///
/// Cookie jar живёт столько же, сколько клиент: сессионная кука
/// бэкенда автоматически уходит с каждым запросом (аналог
/// `credentials: 'include'`). Клоны разделяют соединения и cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Создать клиент для указанного базового адреса API
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /check_login` - user_id текущей сессии
    ///
    /// 401 (нет сессии) - тоже валидный ответ: тело парсится в любом
    /// случае, поле `user` тогда просто отсутствует.
    pub async fn check_login(&self) -> Result<Option<String>, ApiError> {
        let response = self.http.get(self.endpoint("check_login")).send().await?;
        let data: CheckLoginResponse = response.json().await?;

        Ok(data.user)
    }

    /// `GET /get_csrf_token` - CSRF токен для мутирующих запросов
    ///
    /// Сервер дополнительно кладёт токен в cookie, но источником
    /// истины служит JSON тело.
    pub async fn fetch_csrf_token(&self) -> Result<Option<String>, ApiError> {
        let response = self.http.get(self.endpoint("get_csrf_token")).send().await?;
        let data: CsrfTokenResponse = response.json().await?;

        Ok(data.csrf_token)
    }

    /// `POST /api/create_communities` - multipart форма из четырёх
    /// частей (name, description, rules, icon) с CSRF заголовком
    pub async fn create_community(
        &self,
        community: &NewCommunity,
        csrf_token: &str,
    ) -> Result<(), ApiError> {
        let icon = multipart::Part::bytes(community.icon.data.clone())
            .file_name(community.icon.name.clone())
            .mime_str(community.icon.mime_type())?;

        let body = multipart::Form::new()
            .text("name", community.name.clone())
            .text("description", community.description.clone())
            .text("rules", community.rules.clone())
            .part("icon", icon);

        let response = self
            .http
            .post(self.endpoint("api/create_communities"))
            .header(CSRF_HEADER, csrf_token)
            .multipart(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(Self::server_error(status.as_u16(), response).await)
    }

    /// `GET /api/get_communities` - все коммьюнити
    pub async fn list_communities(&self) -> Result<Vec<Community>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("api/get_communities"))
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// `GET /api/search_communities?q=...` - поиск по имени
    /// (пустой запрос возвращает все коммьюнити)
    pub async fn search_communities(&self, query: &str) -> Result<Vec<Community>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("api/search_communities"))
            .query(&[("q", query)])
            .send()
            .await?;

        Self::parse_json(response).await
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        Ok(response.json().await?)
    }

    /// Достать сообщение из тела ошибки, иначе показать статус
    async fn server_error(status: u16, response: reqwest::Response) -> ApiError {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("HTTP {}", status));

        ApiError::Server { status, message }
    }
}
