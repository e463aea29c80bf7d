// Integration tests for users-ui
// HTTP tests run against an in-process axum server on 127.0.0.1.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use users_ui::api::{HttpUserApi, UserApi};
use users_ui::{ApiError, NewUser, User, UserId, UserStore};

#[derive(Clone, Default)]
struct Backend {
    users: Arc<Mutex<Vec<User>>>,
    gets: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn list_users(State(b): State<Backend>) -> Json<Vec<User>> {
    b.gets.fetch_add(1, Ordering::SeqCst);
    Json(b.users.lock().clone())
}

async fn create_user(
    State(b): State<Backend>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<User>) {
    b.bodies.lock().push(body.clone());
    let input: NewUser = serde_json::from_value(body).unwrap_or_default();
    let mut users = b.users.lock();
    // Server normalizes emails to lowercase.
    let user = User {
        id: Some(UserId::Text(format!("u{}", users.len() + 1))),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email.to_lowercase(),
    };
    users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

async fn spawn_backend(seed: Vec<User>) -> (String, Backend) {
    let backend = Backend::default();
    *backend.users.lock() = seed;
    let router = Router::new()
        .route("/users", get(list_users).post(create_user))
        .with_state(backend.clone());
    (serve(router).await, backend)
}

fn draft(first: &str, last: &str, email: &str) -> NewUser {
    NewUser {
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
    }
}

// 1) Plain client calls
#[tokio::test]
async fn client_lists_and_creates_users() {
    let (url, backend) = spawn_backend(vec![User::new(1, "Ana", "Li", "a@x.com")]).await;
    let api = HttpUserApi::new(format!("{url}/"));

    let users = api.list_users().await.expect("list");
    assert_eq!(users, vec![User::new(1, "Ana", "Li", "a@x.com")]);

    let created = api
        .create_user(&draft("Bo", "Wu", "B@X.com"))
        .await
        .expect("create");
    assert_eq!(created.id, Some(UserId::Text("u2".into())));
    assert_eq!(created.email, "b@x.com");

    // Body carries exactly the three draft fields.
    let bodies = backend.bodies.lock().clone();
    assert_eq!(
        bodies,
        vec![serde_json::json!({"first_name":"Bo","last_name":"Wu","email":"B@X.com"})]
    );
}

// 2) Store over HTTP: mount read, then add appends the server copy
#[tokio::test]
async fn store_reads_then_appends_server_copy() {
    let (url, backend) = spawn_backend(vec![User::new(1, "Ana", "Li", "a@x.com")]).await;
    let store = UserStore::new(Arc::new(HttpUserApi::new(url)));

    assert_eq!(store.read_users().await.expect("read"), 1);
    let created = store
        .add_user(&draft("Bo", "Wu", "B@X.com"))
        .await
        .expect("add");

    let users = store.users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], User::new(1, "Ana", "Li", "a@x.com"));
    assert_eq!(users[1], created);
    assert_eq!(users[1].email, "b@x.com");
    assert_eq!(backend.gets.load(Ordering::SeqCst), 1);
}

// 3) Server error on create leaves the list alone and reports the status
#[tokio::test]
async fn server_error_is_returned_not_raised() {
    let router = Router::new().route(
        "/users",
        get(|| async { Json(vec![User::new(1, "Ana", "Li", "a@x.com")]) })
            .post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = serve(router).await;
    let store = UserStore::new(Arc::new(HttpUserApi::new(url)));
    store.read_users().await.expect("read");

    let err = store
        .add_user(&draft("Bo", "Wu", "b@x.com"))
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(store.users(), vec![User::new(1, "Ana", "Li", "a@x.com")]);
}

// 4) Connection refused is a transport error and leaves state untouched
#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let store = UserStore::new(Arc::new(HttpUserApi::new(format!("http://{addr}"))));
    let err = store
        .add_user(&draft("Bo", "Wu", "b@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
    assert!(store.read_users().await.is_err());
    assert!(store.is_empty());
    assert_eq!(store.in_flight(), 0);
}

// 5) A 200 with the wrong body shape is a decode error
#[tokio::test]
async fn malformed_body_is_decode_error() {
    let router = Router::new().route("/users", get(|| async { "not json" }));
    let url = serve(router).await;
    let api = HttpUserApi::new(url);

    let err = api.list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

// 6) Sparse records: a null field or a negative id does not reject the list
#[tokio::test]
async fn sparse_records_still_load() {
    let router = Router::new().route(
        "/users",
        get(|| async {
            (
                [("content-type", "application/json")],
                r#"[{"id":1,"first_name":"Ana","last_name":null,"email":"a@x.com"},
                    {"id":-1,"first_name":"Bo","last_name":"Wu"}]"#,
            )
        }),
    );
    let url = serve(router).await;
    let store = UserStore::new(Arc::new(HttpUserApi::new(url)));

    assert_eq!(store.read_users().await.expect("read"), 2);
    assert_eq!(
        store.users(),
        vec![
            User::new(1, "Ana", "", "a@x.com"),
            User::new(-1, "Bo", "Wu", ""),
        ]
    );
}

// 7) Theme file is created on first load and read back afterwards
#[test]
fn theme_load_or_init_creates_file() {
    use std::time::{SystemTime, UNIX_EPOCH};
    use users_ui::app::Theme;

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let name = format!("users_ui_theme_{}_{}.conf", std::process::id(), nonce);
    let path = std::env::temp_dir().join(name);
    let _ = std::fs::remove_file(&path);

    let created = Theme::load_or_init(&path);
    assert!(path.exists());
    assert_eq!(created, Theme::mocha());

    std::fs::write(&path, "text = #102030\n").unwrap();
    let loaded = Theme::load_or_init(&path);
    assert_eq!(loaded.text, ratatui::style::Color::Rgb(0x10, 0x20, 0x30));
    assert_eq!(loaded.border, Theme::mocha().border);

    let _ = std::fs::remove_file(&path);
}
