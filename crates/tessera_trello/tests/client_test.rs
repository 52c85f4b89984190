//! Tests for request shaping and response decoding in the Trello client.
//!
//! A mock server stands in for the Trello API; matchers pin down the paths
//! and query parameters each operation must produce, and canned bodies
//! exercise the deserialization.

use serde_json::json;
use tessera_error::TesseraErrorKind;
use tessera_trello::{NewCard, TrelloClient, TrelloConfig};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> TrelloConfig {
    TrelloConfig {
        api_key: "test-key".into(),
        token: "test-token".into(),
        board_id: "board-1".into(),
        ..TrelloConfig::default()
    }
}

fn client_for(server: &MockServer) -> TrelloClient {
    TrelloClient::with_base_url(test_config(), server.uri()).expect("client should build")
}

fn card_json(id: &str, name: &str, list_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "desc": "",
        "idList": list_id,
        "idBoard": "board-1",
        "closed": false,
        "due": null,
        "labels": [],
        "url": format!("https://trello.com/c/{id}"),
        "dateLastActivity": "2026-08-20T09:30:00.000Z"
    })
}

#[tokio::test]
async fn test_get_board_sends_credentials_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/board-1"))
        .and(query_param("key", "test-key"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "board-1",
            "name": "Sprint board",
            "desc": "Where the work lives",
            "closed": false,
            "url": "https://trello.com/b/board-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let board = client_for(&server).get_board().await.expect("board");
    assert_eq!(board.id, "board-1");
    assert_eq!(board.name, "Sprint board");
    assert!(!board.closed);
}

#[tokio::test]
async fn test_get_lists_decodes_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/board-1/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "list-1", "name": "To Do", "closed": false, "idBoard": "board-1", "pos": 1024.0},
            {"id": "list-2", "name": "Done", "closed": false, "idBoard": "board-1", "pos": 2048.0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let lists = client_for(&server).get_lists().await.expect("lists");
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "To Do");
    assert_eq!(lists[1].id, "list-2");
    assert_eq!(lists[0].pos, Some(1024.0));
}

#[tokio::test]
async fn test_get_cards_by_list_decodes_card_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/list-9/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "card-3",
            "name": "Write the report",
            "desc": "Quarterly numbers",
            "idList": "list-9",
            "idBoard": "board-1",
            "closed": false,
            "due": "2026-09-01T12:00:00.000Z",
            "labels": [{"id": "lab-1", "name": "urgent", "color": "red"}],
            "url": "https://trello.com/c/card-3",
            "dateLastActivity": "2026-08-20T09:30:00.000Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let cards = client_for(&server)
        .get_cards_by_list("list-9")
        .await
        .expect("cards");
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.id, "card-3");
    assert_eq!(card.id_list, "list-9");
    assert_eq!(card.labels[0].color.as_deref(), Some("red"));
    let due = card.due.expect("due date");
    assert_eq!(due.to_rfc3339(), "2026-09-01T12:00:00+00:00");
}

#[tokio::test]
async fn test_get_my_cards_hits_the_member_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/members/me/cards"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([card_json("card-7", "Mine", "list-1")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let cards = client_for(&server).get_my_cards().await.expect("cards");
    assert_eq!(cards[0].id, "card-7");
}

#[tokio::test]
async fn test_get_recent_activity_passes_the_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/board-1/actions"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "act-1",
            "type": "createCard",
            "date": "2026-08-21T10:00:00.000Z",
            "data": {"card": {"id": "card-3"}},
            "memberCreator": {"id": "mem-1", "fullName": "Ada"}
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let actions = client_for(&server)
        .get_recent_activity(Some(25))
        .await
        .expect("actions");
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type, "createCard");
    assert_eq!(actions[0].data["card"]["id"], "card-3");
}

#[tokio::test]
async fn test_get_recent_activity_omits_limit_when_unset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/board-1/actions"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let actions = client_for(&server)
        .get_recent_activity(None)
        .await
        .expect("actions");
    assert!(actions.is_empty());
}

#[tokio::test]
async fn test_add_card_shapes_the_create_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cards"))
        .and(query_param("idList", "list-9"))
        .and(query_param("name", "Write the report"))
        .and(query_param("desc", "Quarterly numbers"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(card_json("card-new", "Write the report", "list-9")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let new_card = NewCard {
        id_list: "list-9".into(),
        name: "Write the report".into(),
        desc: Some("Quarterly numbers".into()),
        ..NewCard::default()
    };
    let card = client_for(&server).add_card(&new_card).await.expect("card");
    assert_eq!(card.id, "card-new");
}

#[tokio::test]
async fn test_add_card_omits_unset_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cards"))
        .and(query_param("idList", "list-9"))
        .and(query_param_is_missing("desc"))
        .and(query_param_is_missing("due"))
        .and(query_param_is_missing("pos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(card_json("card-new", "Bare", "list-9")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let new_card = NewCard {
        id_list: "list-9".into(),
        name: "Bare".into(),
        ..NewCard::default()
    };
    client_for(&server).add_card(&new_card).await.expect("card");
}

#[tokio::test]
async fn test_update_card_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/cards/card-3"))
        .and(query_param("name", "Renamed"))
        .and(query_param_is_missing("desc"))
        .and(query_param_is_missing("closed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(card_json("card-3", "Renamed", "list-9")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let update = tessera_trello::CardUpdate {
        name: Some("Renamed".into()),
        ..Default::default()
    };
    let card = client_for(&server)
        .update_card("card-3", &update)
        .await
        .expect("card");
    assert_eq!(card.name, "Renamed");
}

#[tokio::test]
async fn test_move_card_changes_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/cards/card-3"))
        .and(query_param("idList", "list-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(card_json("card-3", "Moved", "list-2")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let card = client_for(&server)
        .move_card("card-3", "list-2")
        .await
        .expect("card");
    assert_eq!(card.id_list, "list-2");
}

#[tokio::test]
async fn test_archive_card_closes_it() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/cards/card-3"))
        .and(query_param("closed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "card-3",
            "name": "Done deal",
            "idList": "list-9",
            "closed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let card = client_for(&server)
        .archive_card("card-3")
        .await
        .expect("card");
    assert!(card.closed);
}

#[tokio::test]
async fn test_add_list_targets_the_configured_board() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lists"))
        .and(query_param("idBoard", "board-1"))
        .and(query_param("name", "Backlog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "list-new",
            "name": "Backlog",
            "closed": false,
            "idBoard": "board-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client_for(&server).add_list("Backlog").await.expect("list");
    assert_eq!(list.id, "list-new");
    assert_eq!(list.id_board.as_deref(), Some("board-1"));
}

#[tokio::test]
async fn test_archive_list_uses_the_closed_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/lists/list-9/closed"))
        .and(query_param("value", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "list-9",
            "name": "Old list",
            "closed": true,
            "idBoard": "board-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client_for(&server)
        .archive_list("list-9")
        .await
        .expect("list");
    assert!(list.closed);
}

#[tokio::test]
async fn test_malformed_body_surfaces_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/board-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[not json"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_board()
        .await
        .expect_err("decode should fail");
    assert!(
        matches!(error.kind(), TesseraErrorKind::Json(_)),
        "expected Json error, got {error}"
    );
}
