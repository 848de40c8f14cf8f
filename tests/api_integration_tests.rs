//! End-to-end tests for the API client against a local mock server.
//!
//! The client is blocking, so every call runs on tokio's blocking pool while
//! the mock server is driven by the async runtime.

use chrono::NaiveDate;
use nba_cli::config::Config;
use nba_cli::data_fetcher::NbaClient;
use nba_cli::error::AppError;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn create_test_client(api_domain: &str, timeout_seconds: u64) -> NbaClient {
    let config = Config {
        api_domain: api_domain.to_string(),
        http_timeout_seconds: timeout_seconds,
        ..Config::default()
    };
    NbaClient::new(&config, API_KEY).unwrap()
}

/// Runs `f` with a fresh client on the blocking pool.
async fn with_client<T, F>(api_domain: String, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&NbaClient) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&create_test_client(&api_domain, 5)))
        .await
        .unwrap()
}

fn team_json(id: u64, abbr: &str, city: &str, name: &str, conf: &str, div: &str) -> Value {
    json!({
        "id": id,
        "conference": conf,
        "division": div,
        "city": city,
        "name": name,
        "full_name": format!("{city} {name}"),
        "abbreviation": abbr
    })
}

fn player_json(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "position": "G",
        "height": "6-2",
        "weight": "185",
        "jersey_number": "30",
        "college": "Davidson",
        "country": "USA",
        "draft_year": 2009,
        "draft_round": 1,
        "draft_number": 7,
        "team": team_json(10, "GSW", "Golden State", "Warriors", "West", "Pacific")
    })
}

fn page(data: Vec<Value>, next_cursor: Option<&str>) -> Value {
    match next_cursor {
        Some(cursor) => json!({"data": data, "meta": {"next_cursor": cursor, "per_page": 2}}),
        None => json!({"data": data, "meta": {"per_page": 2}}),
    }
}

#[tokio::test]
async fn test_fetch_all_follows_cursor_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![json!({"id": 3})], None)))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![json!({"id": 1}), json!({"id": 2})], Some("abc"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = with_client(mock_server.uri(), |client| {
        client
            .fetch_all("/teams", Vec::new())
            .map(|raw| raw.map(|value| value["id"].as_u64()))
            .collect::<Result<Vec<_>, _>>()
    })
    .await
    .unwrap();

    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
}

#[tokio::test]
async fn test_fetch_all_sends_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(header("Authorization", API_KEY))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = with_client(mock_server.uri(), |client| {
        client.fetch_all("/teams", Vec::new()).count()
    })
    .await;

    assert_eq!(result, 0);
}

#[tokio::test]
async fn test_missing_data_and_meta_yield_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = with_client(mock_server.uri(), |client| {
        client
            .fetch_all("/teams", Vec::new())
            .collect::<Result<Vec<_>, _>>()
    })
    .await
    .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_status_errors_are_classified() {
    let cases: [(u16, fn(&AppError) -> bool); 4] = [
        (401, |e| matches!(e, AppError::Unauthorized { .. })),
        (429, |e| matches!(e, AppError::RateLimited { .. })),
        (503, |e| matches!(e, AppError::ServerError { status: 503, .. })),
        (404, |e| matches!(e, AppError::HttpStatus { status: 404, .. })),
    ];

    for (status, is_expected) in cases {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let err = with_client(mock_server.uri(), |client| client.get_teams(None, None))
            .await
            .unwrap_err();

        assert!(is_expected(&err), "status {status} mapped to {err:?}");
    }
}

#[tokio::test]
async fn test_error_on_second_page_discards_first_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("cursor", "next"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![player_json(1, "Stephen", "Curry")], Some("next"))),
        )
        .mount(&mock_server)
        .await;

    let result = with_client(mock_server.uri(), |client| {
        client.search_players("curry", false, 1)
    })
    .await;

    assert!(matches!(result, Err(AppError::ServerError { status: 500, .. })));
}

#[tokio::test]
async fn test_stream_stops_after_first_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (first, second, requests) = with_client(mock_server.uri(), |client| {
        let mut pages = client.fetch_all("/teams", Vec::new());
        let first = pages.next();
        let second = pages.next();
        (first, second, pages.pages_fetched())
    })
    .await;

    assert!(matches!(first, Some(Err(AppError::Unauthorized { .. }))));
    assert!(second.is_none());
    assert_eq!(requests, 1);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = with_client(mock_server.uri(), |client| client.get_teams(None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ApiMalformedJson { .. }));
}

#[tokio::test]
async fn test_array_body_is_not_an_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let err = with_client(mock_server.uri(), |client| client.get_teams(None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unexpected(_)), "got {err:?}");
}

#[tokio::test]
async fn test_search_players_across_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("search", "Smith"))
        .and(query_param("per_page", "10"))
        .and(query_param("cursor", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![player_json(3, "Josh", "Smith")], None)),
        )
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("search", "Smith"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [player_json(1, "Dennis", "Smith"), player_json(2, "Jabari", "Smith")],
            "meta": {"next_cursor": 20}
        })))
        .mount(&mock_server)
        .await;

    let players = with_client(mock_server.uri(), |client| {
        client.search_players("Smith", false, 10)
    })
    .await
    .unwrap();

    let ids: Vec<u64> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(players[0].full_name(), "Dennis Smith");
    assert_eq!(players[0].draft_summary(), "2009 (R1 #7)");
    assert_eq!(
        players[0].team.as_ref().map(|t| t.abbreviation.as_str()),
        Some("GSW")
    );
}

#[tokio::test]
async fn test_search_active_players_uses_active_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/active"))
        .and(query_param("search", "curry"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![player_json(115, "Stephen", "Curry")], None)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let players = with_client(mock_server.uri(), |client| {
        client.search_players("curry", true, 25)
    })
    .await
    .unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].last_name, "Curry");
}

#[tokio::test]
async fn test_get_games_for_date_sends_date_filter() {
    let mock_server = MockServer::start().await;

    let game = json!({
        "id": 15907925,
        "date": "2024-01-15",
        "datetime": "2024-01-15T00:30:00.000Z",
        "season": 2023,
        "status": "Final",
        "period": 4,
        "time": "Final",
        "postseason": false,
        "home_team_score": 122,
        "visitor_team_score": 117,
        "home_team": team_json(14, "LAL", "Los Angeles", "Lakers", "West", "Pacific"),
        "visitor_team": team_json(2, "BOS", "Boston", "Celtics", "East", "Atlantic")
    });

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("dates[]", "2024-01-15"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![game], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let games = with_client(mock_server.uri(), |client| {
        client.get_games_for_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    })
    .await
    .unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, 15907925);
    assert_eq!(games[0].home_team.abbreviation, "LAL");
    assert_eq!(games[0].score_line(), "117 - 122");
    assert!(games[0].datetime.is_some());
}

#[tokio::test]
async fn test_get_teams_is_memoized_per_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param("conference", "West"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![team_json(14, "LAL", "Los Angeles", "Lakers", "West", "Pacific")],
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (first, second) = with_client(mock_server.uri(), |client| {
        let first = client.get_teams(Some("West"), None);
        let second = client.get_teams(Some("West"), None);
        (first, second)
    })
    .await;

    let first = first.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first, second.unwrap());
}

#[tokio::test]
async fn test_get_teams_does_not_cache_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![team_json(1, "ATL", "Atlanta", "Hawks", "East", "Southeast")],
            None,
        )))
        .mount(&mock_server)
        .await;

    let (first, second) = with_client(mock_server.uri(), |client| {
        (client.get_teams(None, None), client.get_teams(None, None))
    })
    .await;

    assert!(first.is_err());
    assert_eq!(second.unwrap()[0].abbreviation, "ATL");
}

#[tokio::test]
async fn test_invalid_record_aborts_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                team_json(1, "ATL", "Atlanta", "Hawks", "East", "Southeast"),
                json!({"name": "No id"}),
            ],
            None,
        )))
        .mount(&mock_server)
        .await;

    let err = with_client(mock_server.uri(), |client| client.get_teams(None, None))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidRecord { kind: "team", .. }));
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![], None))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let err = tokio::task::spawn_blocking(move || {
        create_test_client(&uri, 1).get_teams(None, None)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, AppError::NetworkTimeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop a listener to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = with_client(format!("http://127.0.0.1:{port}"), |client| {
        client.get_teams(None, None)
    })
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NetworkConnection { .. }), "got {err:?}");
    assert!(err.is_network_error());
}
