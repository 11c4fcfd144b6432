//! Состояние формы создания коммьюнити и валидация
//!
//! Валидация пересчитывает все ошибки целиком при каждой попытке
//! отправки (не на каждое нажатие клавиши). Сетевой запрос выполняется
//! только когда [`prepare_submission`] вернул `Ok`.

use crate::i18n::Translations;
use crate::session::SessionContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Поле формы
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Icon,
    Rules,
}

impl Field {
    /// Все поля формы
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Description, Field::Icon, Field::Rules]
    }

    /// Имя части multipart запроса
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Icon => "icon",
            Field::Rules => "rules",
        }
    }
}

/// Ошибки валидации: поле → сообщение для пользователя
pub type FieldErrors = HashMap<Field, String>;

/// Выбранный файл иконки
///
/// Содержимое читается один раз при выборе файла, чтобы сабмит
/// не зависел от диска.
#[derive(Clone, Debug)]
pub struct IconFile {
    pub path: PathBuf,
    /// Имя файла для multipart части и отображения
    pub name: String,
    pub data: Vec<u8>,
}

impl IconFile {
    /// Прочитать файл иконки с диска
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "icon".to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            data,
        })
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// MIME тип по расширению файла
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

/// Четыре поля формы "Create New Community"
///
/// Значения живут дольше, чем открытое окно: закрытие диалога
/// их не сбрасывает, сброс происходит после успешного создания.
#[derive(Clone, Debug, Default)]
pub struct CommunityForm {
    pub name: String,
    pub description: String,
    pub rules: String,
    pub icon: Option<IconFile>,
}

impl CommunityForm {
    /// Полная перепроверка: текстовые поля не пустые после trim,
    /// иконка выбрана
    pub fn validate(&self, t: &Translations) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, t.err_name_required.to_string());
        }
        if self.description.trim().is_empty() {
            errors.insert(Field::Description, t.err_description_required.to_string());
        }
        if self.icon.is_none() {
            errors.insert(Field::Icon, t.err_icon_required.to_string());
        }
        if self.rules.trim().is_empty() {
            errors.insert(Field::Rules, t.err_rules_required.to_string());
        }

        errors
    }

    /// Сбросить форму (после успешного создания)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Данные новой коммьюнити - четыре части multipart запроса
#[derive(Clone, Debug)]
pub struct NewCommunity {
    pub name: String,
    pub description: String,
    pub rules: String,
    pub icon: IconFile,
}

/// Проверенная форма вместе с CSRF токеном
#[derive(Clone, Debug)]
pub struct Submission {
    pub community: NewCommunity,
    pub csrf_token: String,
}

/// Причина, по которой POST не выполняется
#[derive(Clone, Debug)]
pub enum SubmitBlocked {
    /// Есть пустые поля - показать ошибки под полями
    Invalid(FieldErrors),
    /// CSRF токен не был получен при старте
    MissingCsrfToken,
}

/// Шлюз отправки: сначала валидация полей, затем проверка CSRF токена
pub fn prepare_submission(
    form: &CommunityForm,
    session: &SessionContext,
    t: &Translations,
) -> Result<Submission, SubmitBlocked> {
    let errors = form.validate(t);
    if !errors.is_empty() {
        return Err(SubmitBlocked::Invalid(errors));
    }

    // Иконка гарантирована валидацией, ветка else срабатывает
    // только при отсутствии токена
    let (Some(icon), Some(csrf_token)) = (form.icon.clone(), session.csrf_token.clone()) else {
        return Err(SubmitBlocked::MissingCsrfToken);
    };

    Ok(Submission {
        community: NewCommunity {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            rules: form.rules.trim().to_string(),
            icon,
        },
        csrf_token,
    })
}
