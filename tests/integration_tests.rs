//! Интеграционные тесты для commu_desk

use commu_desk::api::{ApiClient, ApiEvent};
use commu_desk::form::{
    prepare_submission, CommunityForm, Field, IconFile, SubmitBlocked,
};
use commu_desk::i18n::{t, Language};
use commu_desk::session::SessionContext;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Тестовая иконка без чтения с диска
fn test_icon() -> IconFile {
    IconFile {
        path: PathBuf::from("icon.png"),
        name: "icon.png".to_string(),
        data: b"fake png data".to_vec(),
    }
}

/// Полностью заполненная форма
fn filled_form() -> CommunityForm {
    CommunityForm {
        name: "Cats".to_string(),
        description: "A place for cat lovers".to_string(),
        rules: "Be nice".to_string(),
        icon: Some(test_icon()),
    }
}

/// Сессия с CSRF токеном
fn session_with_csrf() -> SessionContext {
    SessionContext {
        user_id: Some("taro".to_string()),
        csrf_token: Some("abc123".to_string()),
    }
}

// === Валидация ===

/// Тест: все поля пустые - по ошибке на каждое поле
#[test]
fn test_validate_all_fields_empty() {
    let form = CommunityForm::default();
    let errors = form.validate(t(Language::Japanese));

    assert_eq!(errors.len(), 4);
    for field in Field::all() {
        assert!(errors.contains_key(field), "missing error for {:?}", field);
    }
}

/// Тест: пустое только имя - ровно одна ошибка с точным текстом
#[test]
fn test_validate_missing_name_only() {
    let mut form = filled_form();
    form.name = String::new();

    let errors = form.validate(t(Language::English));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(&Field::Name).map(String::as_str),
        Some("Community name is required")
    );
}

/// Тест: поля из одних пробелов считаются пустыми
#[test]
fn test_validate_whitespace_only() {
    let mut form = filled_form();
    form.description = "   \n\t".to_string();

    let errors = form.validate(t(Language::English));

    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&Field::Description));
}

/// Тест: валидная форма не даёт ошибок
#[test]
fn test_validate_filled_form() {
    let errors = filled_form().validate(t(Language::Japanese));
    assert!(errors.is_empty());
}

// === Шлюз отправки ===

/// Тест: без CSRF токена POST не готовится даже для валидной формы
#[test]
fn test_submit_blocked_without_csrf() {
    let form = filled_form();
    let session = SessionContext::default();

    let result = prepare_submission(&form, &session, t(Language::English));

    assert!(matches!(result, Err(SubmitBlocked::MissingCsrfToken)));
}

/// Тест: валидация срабатывает раньше проверки CSRF токена
#[test]
fn test_submit_validation_before_csrf_guard() {
    let form = CommunityForm::default();
    let session = SessionContext::default();

    match prepare_submission(&form, &session, t(Language::English)) {
        Err(SubmitBlocked::Invalid(errors)) => assert_eq!(errors.len(), 4),
        other => panic!("expected validation errors, got {:?}", other),
    }
}

/// Тест: успешная подготовка - четыре части и токен из сессии
#[test]
fn test_prepare_submission_trims_fields() {
    let mut form = filled_form();
    form.name = "  Cats  ".to_string();

    let submission =
        prepare_submission(&form, &session_with_csrf(), t(Language::English)).unwrap();

    assert_eq!(submission.community.name, "Cats");
    assert_eq!(submission.community.description, "A place for cat lovers");
    assert_eq!(submission.community.rules, "Be nice");
    assert_eq!(submission.community.icon.name, "icon.png");
    assert_eq!(submission.csrf_token, "abc123");
}

/// Тест: имена multipart частей
#[test]
fn test_field_keys() {
    let keys: Vec<&str> = Field::all().iter().map(|f| f.key()).collect();
    assert_eq!(keys, vec!["name", "description", "icon", "rules"]);
}

// === Иконка ===

/// Тест: MIME тип по расширению
#[test]
fn test_icon_mime_type() {
    let mut icon = test_icon();
    assert_eq!(icon.mime_type(), "image/png");

    icon.path = PathBuf::from("photo.JPG");
    assert_eq!(icon.mime_type(), "image/jpeg");

    icon.path = PathBuf::from("unknown.bin");
    assert_eq!(icon.mime_type(), "application/octet-stream");
}

/// Тест: чтение файла иконки с диска
#[test]
fn test_icon_file_load() {
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("icon.png");
    std::fs::write(&path, b"png bytes").unwrap();

    let icon = IconFile::load(&path).unwrap();

    assert_eq!(icon.name, "icon.png");
    assert_eq!(icon.size(), 9);
    assert_eq!(icon.data, b"png bytes");
}

// === HTTP фикстура ===

/// Мини HTTP сервер на один запрос: отвечает заготовленным ответом
/// и возвращает сырой текст принятого запроса
async fn oneshot_server(response: String) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Читаем заголовки до пустой строки
        let mut raw: Vec<u8> = Vec::new();
        let mut buf = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break raw.len();
            }
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = find_subsequence(&raw, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        // Дочитываем тело по Content-Length
        let headers = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while raw.len() < header_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&raw).to_string()
    });

    (format!("http://{}", addr), handle)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}

// === HTTP клиент ===

/// Тест: create_community шлёт один POST с CSRF заголовком и
/// multipart телом из четырёх частей
#[tokio::test]
async fn test_create_community_sends_multipart() {
    let (base_url, handle) = oneshot_server(http_response("201 Created", "{}")).await;

    let api = ApiClient::new(&base_url).unwrap();
    let submission =
        prepare_submission(&filled_form(), &session_with_csrf(), t(Language::English)).unwrap();

    api.create_community(&submission.community, &submission.csrf_token)
        .await
        .unwrap();

    let request = handle.await.unwrap();
    let lower = request.to_lowercase();

    assert!(lower.contains("post /api/create_communities http/1.1"));
    assert!(lower.contains("x-csrftoken: abc123"));
    assert!(lower.contains("multipart/form-data"));

    // Все четыре части с правильными значениями
    assert!(request.contains(r#"name="name""#));
    assert!(request.contains("Cats"));
    assert!(request.contains(r#"name="description""#));
    assert!(request.contains("A place for cat lovers"));
    assert!(request.contains(r#"name="rules""#));
    assert!(request.contains("Be nice"));
    assert!(request.contains(r#"name="icon"; filename="icon.png""#));
    assert!(lower.contains("content-type: image/png"));
    assert!(request.contains("fake png data"));
}

/// Тест: не-2xx ответ превращается в ошибку с сообщением сервера,
/// сетевой вызов при этом один
#[tokio::test]
async fn test_create_community_server_error() {
    let body = r#"{"error":"Community name already exists"}"#;
    let (base_url, handle) = oneshot_server(http_response("400 Bad Request", body)).await;

    let api = ApiClient::new(&base_url).unwrap();
    let submission =
        prepare_submission(&filled_form(), &session_with_csrf(), t(Language::English)).unwrap();

    let err = api
        .create_community(&submission.community, &submission.csrf_token)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Community name already exists");

    let request = handle.await.unwrap();
    assert!(request.to_lowercase().contains("post /api/create_communities"));
}

/// Тест: check_login с активной сессией возвращает user_id
#[tokio::test]
async fn test_check_login_logged_in() {
    let body = r#"{"message":"User is logged in","user":"taro"}"#;
    let (base_url, handle) = oneshot_server(http_response("200 OK", body)).await;

    let api = ApiClient::new(&base_url).unwrap();
    let user = api.check_login().await.unwrap();

    assert_eq!(user.as_deref(), Some("taro"));
    assert!(handle.await.unwrap().to_lowercase().contains("get /check_login"));
}

/// Тест: 401 без сессии - не ошибка, просто нет user_id
#[tokio::test]
async fn test_check_login_anonymous() {
    let body = r#"{"message":"User is not logged in"}"#;
    let (base_url, handle) = oneshot_server(http_response("401 Unauthorized", body)).await;

    let api = ApiClient::new(&base_url).unwrap();
    let user = api.check_login().await.unwrap();

    assert_eq!(user, None);
    handle.await.unwrap();
}

/// Тест: get_csrf_token достаёт токен из JSON тела
#[tokio::test]
async fn test_fetch_csrf_token() {
    let body = r#"{"csrf_token":"abc123"}"#;
    let (base_url, handle) = oneshot_server(http_response("200 OK", body)).await;

    let api = ApiClient::new(&base_url).unwrap();
    let token = api.fetch_csrf_token().await.unwrap();

    assert_eq!(token.as_deref(), Some("abc123"));
    assert!(handle
        .await
        .unwrap()
        .to_lowercase()
        .contains("get /get_csrf_token"));
}

/// Тест: list_communities парсит ответ бэкенда
#[tokio::test]
async fn test_list_communities() {
    let body = r#"[{
        "id": 1,
        "name": "Cats",
        "description": "A place for cat lovers",
        "icon": null,
        "rules": "Be nice",
        "created_at": "2024-12-01T10:00:00",
        "creator": {"id": 7, "username": "taro"}
    }]"#;
    let (base_url, handle) = oneshot_server(http_response("200 OK", body)).await;

    let api = ApiClient::new(&base_url).unwrap();
    let communities = api.list_communities().await.unwrap();

    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0].name, "Cats");
    assert_eq!(communities[0].creator.username, "taro");
    assert!(communities[0].icon.is_none());

    assert!(handle
        .await
        .unwrap()
        .to_lowercase()
        .contains("get /api/get_communities"));
}

/// Тест: search_communities передаёт запрос параметром q
#[tokio::test]
async fn test_search_communities_query() {
    let (base_url, handle) = oneshot_server(http_response("200 OK", "[]")).await;

    let api = ApiClient::new(&base_url).unwrap();
    let communities = api.search_communities("cat").await.unwrap();

    assert!(communities.is_empty());

    let request = handle.await.unwrap().to_lowercase();
    assert!(request.contains("get /api/search_communities?q=cat"));
}

/// Тест: базовый адрес с завершающим '/' нормализуется
#[tokio::test]
async fn test_base_url_normalization() {
    let (base_url, handle) = oneshot_server(http_response("200 OK", "[]")).await;

    let api = ApiClient::new(&format!("{}/", base_url)).unwrap();
    api.list_communities().await.unwrap();

    let request = handle.await.unwrap().to_lowercase();
    assert!(request.contains("get /api/get_communities http/1.1"));
}

// === События ===

/// Async тест: события bootstrap доставляются в порядке отправки
#[tokio::test]
async fn test_api_events_channel() {
    let (tx, mut rx) = mpsc::unbounded_channel();

    tx.send(ApiEvent::LoginChecked(Some("taro".to_string())))
        .unwrap();
    tx.send(ApiEvent::CsrfFetched(Some("abc123".to_string())))
        .unwrap();
    tx.send(ApiEvent::CommunityCreated("Cats".to_string()))
        .unwrap();

    let event1 = rx.recv().await.unwrap();
    assert!(matches!(event1, ApiEvent::LoginChecked(Some(_))));

    let event2 = rx.recv().await.unwrap();
    assert!(matches!(event2, ApiEvent::CsrfFetched(Some(_))));

    let event3 = rx.recv().await.unwrap();
    assert!(matches!(event3, ApiEvent::CommunityCreated(name) if name == "Cats"));
}

/// Тест: неудачный bootstrap CSRF оставляет сессию без токена и
/// блокирует последующую отправку
#[test]
fn test_failed_csrf_bootstrap_blocks_submit() {
    // Сбой запроса: токен так и не появился
    let mut session = SessionContext::default();
    session.user_id = Some("taro".to_string());
    assert!(!session.has_csrf_token());

    let result = prepare_submission(&filled_form(), &session, t(Language::English));
    assert!(matches!(result, Err(SubmitBlocked::MissingCsrfToken)));
}
