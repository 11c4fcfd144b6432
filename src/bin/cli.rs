//! Commu CLI - консольный клиент community бэкенда

use clap::{Parser, Subcommand};
use commu_desk::api::ApiClient;
use commu_desk::config::AppConfig;
use commu_desk::form::{prepare_submission, CommunityForm, IconFile, SubmitBlocked};
use commu_desk::i18n::{t, Language};
use commu_desk::session::SessionContext;
use commu_desk::utils::truncate_string;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commu_cli")]
#[command(author = "commu")]
#[command(version = "1.0")]
#[command(about = "Консольный клиент community бэкенда", long_about = None)]
struct Cli {
    /// Базовый адрес API (по умолчанию COMMU_API_URL или файл конфигурации)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Создать коммьюнити
    Create {
        /// Название
        #[arg(short, long)]
        name: String,

        /// Описание
        #[arg(short, long)]
        description: String,

        /// Правила
        #[arg(short, long)]
        rules: String,

        /// Путь к файлу иконки
        #[arg(short, long)]
        icon: PathBuf,
    },

    /// Показать все коммьюнити
    List,

    /// Поиск коммьюнити по имени
    Search {
        /// Поисковый запрос
        query: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let api_url = cli.api_url.unwrap_or_else(|| AppConfig::load().api_url);
    let api = match ApiClient::new(&api_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Ошибка создания HTTP клиента: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Create {
            name,
            description,
            rules,
            icon,
        } => create_community(api, name, description, rules, icon).await,
        Commands::List => list_communities(api).await,
        Commands::Search { query } => search_communities(api, &query).await,
    }
}

async fn create_community(
    api: ApiClient,
    name: String,
    description: String,
    rules: String,
    icon_path: PathBuf,
) {
    let icon = match IconFile::load(&icon_path) {
        Ok(icon) => icon,
        Err(e) => {
            eprintln!("Ошибка чтения иконки '{}': {}", icon_path.display(), e);
            std::process::exit(1);
        }
    };

    let form = CommunityForm {
        name,
        description,
        rules,
        icon: Some(icon),
    };

    // Без активной сессии сервер отклонит POST - предупреждаем заранее
    if let Ok(None) = api.check_login().await {
        println!("⚠ Нет активной сессии - сервер может отклонить запрос");
    }

    // CSRF токен обязателен для мутирующего запроса
    let csrf_token = match api.fetch_csrf_token().await {
        Ok(Some(token)) => token,
        Ok(None) => {
            eprintln!("Сервер не выдал CSRF токен");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Ошибка получения CSRF токена: {}", e);
            std::process::exit(1);
        }
    };

    let session = SessionContext {
        user_id: None,
        csrf_token: Some(csrf_token),
    };

    let submission = match prepare_submission(&form, &session, t(Language::English)) {
        Ok(submission) => submission,
        Err(SubmitBlocked::Invalid(errors)) => {
            for (field, message) in &errors {
                eprintln!("❌ {}: {}", field.key(), message);
            }
            std::process::exit(1);
        }
        Err(SubmitBlocked::MissingCsrfToken) => {
            eprintln!("CSRF токен отсутствует");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Создание коммьюнити '{}' на {}",
        submission.community.name,
        api.base_url()
    );

    match api
        .create_community(&submission.community, &submission.csrf_token)
        .await
    {
        Ok(()) => println!("✅ Коммьюнити '{}' создана", submission.community.name),
        Err(e) => {
            eprintln!("❌ Ошибка создания: {}", e);
            std::process::exit(1);
        }
    }
}

async fn list_communities(api: ApiClient) {
    match api.list_communities().await {
        Ok(communities) => print_communities(&communities),
        Err(e) => {
            eprintln!("❌ Ошибка загрузки списка: {}", e);
            std::process::exit(1);
        }
    }
}

async fn search_communities(api: ApiClient, query: &str) {
    match api.search_communities(query).await {
        Ok(communities) => {
            if communities.is_empty() {
                println!("Ничего не найдено по запросу '{}'", query);
            } else {
                print_communities(&communities);
            }
        }
        Err(e) => {
            eprintln!("❌ Ошибка поиска: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_communities(communities: &[commu_desk::model::Community]) {
    if communities.is_empty() {
        println!("Коммьюнити пока нет");
        return;
    }

    println!("Всего: {}", communities.len());
    println!();

    for community in communities {
        println!(
            "• {} (id {}, создатель: {})",
            community.name, community.id, community.creator.username
        );
        println!("  {}", truncate_string(&community.description, 100));
    }
}
