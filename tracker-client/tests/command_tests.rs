
use reqwest::Method;
use serde_json::json;
use test_helpers::*;
use tracker_client::{ClientError, Command, SessionController, handle_command};
use tracker_core::{Section, ValidationError};

async fn run(
    controller: &mut SessionController<MockTransport>,
    line: &str,
) -> Result<(), ClientError> {
    let command = Command::parse(line).unwrap();
    handle_command(controller, command).await
}

#[tokio::test]
async fn test_login_join_winner_record_session() {
    let (mut controller, transport) = create_controller();
    transport.respond(Method::POST, "/auth/login", user_json("alice", Some(7)));
    transport.respond(
        Method::POST,
        "/games/AB1D/join",
        json!({"success": true, "gameId": 1}),
    );
    transport.respond(Method::POST, "/games/AB1D/result", json!({"success": true}));
    mock_game(&transport, "AB1D", &[(7, "alice"), (3, "bob")]);

    run(&mut controller, "login alice secret1").await.unwrap();
    assert_eq!(controller.section(), Section::GameManagement);

    run(&mut controller, "join ab1d").await.unwrap();
    assert_eq!(controller.section(), Section::ActiveGame);
    assert_eq!(controller.session().game_code(), Some("AB1D"));

    run(&mut controller, "winner 3").await.unwrap();
    assert_eq!(controller.forms().winner, Some(3));

    run(&mut controller, "record").await.unwrap();
    assert_eq!(controller.forms().winner, None);

    let requests = transport.requests();
    let calls: Vec<(Method, &str)> = requests
        .iter()
        .map(|r| (r.method.clone(), r.path.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Method::POST, "/auth/login"),
            (Method::POST, "/games/AB1D/join"),
            (Method::GET, "/games/AB1D"),
            (Method::GET, "/games/AB1D/results"),
            (Method::POST, "/games/AB1D/result"),
            (Method::GET, "/games/AB1D/results"),
        ]
    );
    assert_eq!(
        requests[0].body,
        Some(json!({"username": "alice", "password": "secret1"}))
    );
    assert_eq!(requests[1].body, Some(json!({"playerId": 7})));
    assert_eq!(requests[4].body, Some(json!({"winnerId": 3})));
}

#[tokio::test]
async fn test_register_fills_registration_form() {
    let (mut controller, transport) = create_controller();
    transport.respond(Method::POST, "/auth/register", user_json("bob", None));

    run(&mut controller, "register bob b@x.com secret1").await.unwrap();

    assert_eq!(controller.forms().register_email, "b@x.com");
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({"username": "bob", "email": "b@x.com", "password": "secret1"}))
    );
    assert_eq!(controller.section(), Section::PlayerSetup);
}

#[tokio::test]
async fn test_missing_arguments_reach_validation() {
    let (mut controller, transport) = signed_in_controller("alice", 7).await;

    assert!(matches!(
        run(&mut controller, "login alice").await,
        Err(ClientError::Validation(ValidationError::MissingCredentials))
    ));
    assert!(matches!(
        run(&mut controller, "join abc").await,
        Err(ClientError::Validation(ValidationError::InvalidGameCode))
    ));
    assert!(matches!(
        run(&mut controller, "record").await,
        Err(ClientError::Validation(ValidationError::NoWinnerSelected))
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_new_player_keeps_full_name() {
    let (mut controller, transport) = create_controller();
    transport.respond(Method::POST, "/players", json!({"id": 9, "name": "Mei Ling"}));

    run(&mut controller, "new-player  Mei Ling ").await.unwrap();

    assert_eq!(transport.requests()[0].body, Some(json!({"name": "Mei Ling"})));
    assert_eq!(controller.session().player.as_ref().unwrap().id, 9);
}

#[tokio::test]
async fn test_games_leaves_active_game() {
    let (mut controller, _transport) = joined_controller("WXYZ", &[(7, "alice")]).await;

    run(&mut controller, "games").await.unwrap();

    assert_eq!(controller.section(), Section::GameManagement);
    assert!(controller.session().game.is_none());
}
