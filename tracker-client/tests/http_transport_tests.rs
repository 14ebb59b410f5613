use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};
use tracker_client::{ApiClient, ClientError, Config, HttpTransport, SessionController};
use tracker_core::Section;
use tracker_types::LoginRequest;
use warp::Filter;
use warp::http::StatusCode;
use warp::reply::Reply;

const SESSION_COOKIE: &str = "session=test-session";

type Recorded = Arc<Mutex<Vec<(String, Value)>>>;

fn error_reply(status: StatusCode, message: &str) -> warp::reply::Response {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
        .into_response()
}

/// Minimal stand-in for the tracker API: one account, a cookie session and one game.
async fn spawn_fake_api() -> (SocketAddr, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));

    let login = warp::path!("api" / "auth" / "login")
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: Value| {
            if body["username"] == "alice" && body["password"] == "secret1" {
                warp::reply::with_header(
                    warp::reply::json(&json!({
                        "success": true,
                        "user_id": 1,
                        "username": "alice",
                        "player_id": 7,
                        "player_name": "alice"
                    })),
                    "set-cookie",
                    format!("{}; Path=/; HttpOnly", SESSION_COOKIE),
                )
                .into_response()
            } else {
                error_reply(StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
        });

    let me = warp::path!("api" / "auth" / "me")
        .and(warp::get())
        .and(warp::cookie::optional::<String>("session"))
        .map(|session: Option<String>| match session.as_deref() {
            Some("test-session") => warp::reply::json(&json!({
                "id": 1,
                "username": "alice",
                "email": "a@x.com",
                "player_id": 7,
                "player_name": "alice"
            }))
            .into_response(),
            _ => error_reply(StatusCode::UNAUTHORIZED, "Not logged in"),
        });

    let broken = warp::path!("api" / "games" / "BOOM")
        .and(warp::get())
        .map(|| {
            warp::reply::with_status("internal failure", StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        });

    let game = warp::path!("api" / "games" / String)
        .and(warp::get())
        .map(|code: String| {
            warp::reply::json(&json!({
                "id": 1,
                "code": code,
                "status": "active",
                "players": [{"id": 3, "name": "bob"}, {"id": 7, "name": "alice"}]
            }))
            .into_response()
        });

    let results = warp::path!("api" / "games" / String / "results")
        .and(warp::get())
        .map(|_code: String| {
            warp::reply::json(&json!([
                {"id": 1, "winner_name": "bob", "loser_name": "alice", "created_at": "2024-03-01T18:30:05"}
            ]))
            .into_response()
        });

    let record = {
        let recorded = recorded.clone();
        warp::path!("api" / "games" / String / "result")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |code: String, body: Value| {
                recorded.lock().unwrap().push((code, body));
                warp::reply::json(&json!({"success": true, "resultIds": [1]})).into_response()
            })
    };

    let routes = login
        .or(me)
        .unify()
        .or(broken)
        .unify()
        .or(results)
        .unify()
        .or(record)
        .unify()
        .or(game)
        .unify();

    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, recorded)
}

fn transport_for(addr: SocketAddr) -> HttpTransport {
    let config = Config {
        api_url: format!("http://{}", addr),
        ..Config::default()
    };
    HttpTransport::new(&config).unwrap()
}

#[tokio::test]
async fn test_session_cookie_is_kept_between_calls() {
    let (addr, _recorded) = spawn_fake_api().await;
    let api = ApiClient::new(transport_for(addr));

    // No cookie yet
    let before = api.me().await;
    assert!(matches!(
        before,
        Err(ClientError::Request { status: 401, ref message }) if message == "Not logged in"
    ));

    let user = api
        .login(&LoginRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.player_id, Some(7));

    let me = api.me().await.unwrap();
    assert_eq!(me.username, "alice");
    assert_eq!(me.email.as_deref(), Some("a@x.com"));
}

#[tokio::test]
async fn test_error_message_from_body() {
    let (addr, _recorded) = spawn_fake_api().await;
    let api = ApiClient::new(transport_for(addr));

    let result = api
        .login(&LoginRequest {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    match result {
        Err(ClientError::Request { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid username or password");
        }
        other => panic!("Expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_json_body_uses_default_message() {
    let (addr, _recorded) = spawn_fake_api().await;
    let api = ApiClient::new(transport_for(addr));

    match api.game("BOOM").await {
        Err(ClientError::Request { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "API call failed");
        }
        other => panic!("Expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind and drop a listener to get a port nothing is listening on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = ApiClient::new(transport_for(SocketAddr::from(([127, 0, 0, 1], port))));

    assert!(matches!(api.me().await, Err(ClientError::Transport(_))));
}

#[tokio::test]
async fn test_controller_end_to_end_over_http() {
    let (addr, recorded) = spawn_fake_api().await;
    let mut controller = SessionController::new(transport_for(addr), Duration::from_secs(5));

    controller.check_auth_status().await;
    assert_eq!(controller.section(), Section::Auth);

    let forms = controller.forms_mut();
    forms.login_username = "alice".to_string();
    forms.login_password = "secret1".to_string();
    controller.login().await.unwrap();
    assert_eq!(controller.section(), Section::GameManagement);

    controller.forms_mut().set_game_code("wxyz");
    // The fake server has no join route
    assert!(controller.join_game().await.is_err());

    controller.load_game_details("WXYZ").await.unwrap();
    controller.select_winner(Some(3)).unwrap();
    controller.record_result().await.unwrap();

    let recorded = recorded.lock().unwrap().clone();
    assert_eq!(recorded, vec![("WXYZ".to_string(), json!({"winnerId": 3}))]);

    let game = controller.view_model().game.unwrap();
    assert_eq!(game.roster, vec!["bob", "alice"]);
    assert!(matches!(game.results, tracker_core::ResultsView::Lines(ref lines) if lines.len() == 1));
}
