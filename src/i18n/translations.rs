//! Таблицы переводов интерфейса

use super::Translations;

/// Японский (язык оригинального интерфейса)
pub static JA: Translations = Translations {
    app_title: "Commu Desk - コミュニティ管理",
    communities_title: "コミュニティ一覧",
    create_new_community: "Create New Community",
    refresh: "🔄 更新",
    search_label: "検索:",
    search_hint: "コミュニティ名で検索",
    search_button: "🔍 検索",
    no_communities: "コミュニティはまだありません",
    loading_communities: "読み込み中...",
    created_by: "作成者:",
    rules_heading: "ルール:",

    logged_in_as: "ログイン中:",
    not_logged_in: "未ログイン",

    modal_title: "新しいコミュニティを作成",
    modal_description: "新しいコミュニティを作成します。必要な情報を設定してください",
    label_name: "タイトル",
    label_description: "説明",
    label_icon: "アイコン",
    label_rules: "ルール",
    rules_hint: "守ってほしいルールを入力してね",
    choose_icon: "📁 ファイルを選択",
    no_icon_selected: "ファイルが選択されていません",
    create_community: "Create Community",
    cancel: "キャンセル",

    err_name_required: "Community name is required",
    err_description_required: "Community description is required",
    err_icon_required: "Community icon is required",
    err_rules_required: "Community rules are required",

    err_create_generic: "コミュニティ作成中にエラーが発生しました",
    err_csrf_missing: "CSRFトークンが取得できていません。しばらくしてから再試行してください",

    status: "状態",
    log: "ログ",
    clear: "クリア",
    log_empty: "ログは空です",
    status_creating: "コミュニティを作成しています...",
    status_created: "コミュニティを作成しました",
    status_loading: "コミュニティを読み込んでいます...",
    log_session_user: "ユーザーIDを取得しました:",
    log_session_anonymous: "ログインセッションがありません",
    log_csrf_saved: "CSRFトークンを保存しました",
    log_csrf_failed: "CSRFトークンの取得に失敗しました:",
    log_login_check_failed: "ユーザーIDの取得に失敗しました:",
    log_created: "コミュニティを作成しました:",
    log_create_failed: "コミュニティの作成に失敗しました:",
    log_communities_loaded: "コミュニティを読み込みました:",
    log_communities_failed: "コミュニティの読み込みに失敗しました:",
    log_icon_selected: "アイコンを選択しました:",
    log_icon_error: "アイコンの読み込みに失敗しました:",
};

/// Английский
pub static EN: Translations = Translations {
    app_title: "Commu Desk - Community manager",
    communities_title: "Communities",
    create_new_community: "Create New Community",
    refresh: "🔄 Refresh",
    search_label: "Search:",
    search_hint: "Search by community name",
    search_button: "🔍 Search",
    no_communities: "No communities yet",
    loading_communities: "Loading...",
    created_by: "Created by:",
    rules_heading: "Rules:",

    logged_in_as: "Logged in as:",
    not_logged_in: "Not logged in",

    modal_title: "Create a new community",
    modal_description: "Set up the details for your new community",
    label_name: "Name",
    label_description: "Description",
    label_icon: "Icon",
    label_rules: "Rules",
    rules_hint: "Describe the rules members should follow",
    choose_icon: "📁 Choose file",
    no_icon_selected: "No file selected",
    create_community: "Create Community",
    cancel: "Cancel",

    err_name_required: "Community name is required",
    err_description_required: "Community description is required",
    err_icon_required: "Community icon is required",
    err_rules_required: "Community rules are required",

    err_create_generic: "Something went wrong while creating the community",
    err_csrf_missing: "CSRF token is not available yet, try again in a moment",

    status: "Status",
    log: "Log",
    clear: "Clear",
    log_empty: "Log is empty",
    status_creating: "Creating community...",
    status_created: "Community created",
    status_loading: "Loading communities...",
    log_session_user: "Logged-in user:",
    log_session_anonymous: "No login session",
    log_csrf_saved: "CSRF token saved",
    log_csrf_failed: "Failed to fetch CSRF token:",
    log_login_check_failed: "Failed to fetch user id:",
    log_created: "Community created:",
    log_create_failed: "Failed to create community:",
    log_communities_loaded: "Communities loaded:",
    log_communities_failed: "Failed to load communities:",
    log_icon_selected: "Icon selected:",
    log_icon_error: "Failed to read icon file:",
};
