//! HTTP tests for the REST endpoints, backed by the in-memory store.

use actix_web::{http::StatusCode, test, web::Data, App};
use basketball_league_web::{
    api::{self, ClientSettings},
    InMemoryStore, JsonFileStore, League, LeagueData,
};
use serde_json::{json, Value};

/// Initialized test service over an in-memory league with the given teams registered.
macro_rules! league_app {
    ($($team:expr),* $(,)?) => {{
        let teams: Vec<&str> = vec![$($team),*];
        let league = League::new(InMemoryStore::with_data(LeagueData::with_teams(teams)));
        test::init_service(
            App::new()
                .app_data(Data::new(league))
                .app_data(Data::new(ClientSettings {
                    backend_url: "http://api.example".into(),
                }))
                .configure(api::configure),
        )
        .await
    }};
}

fn match_request(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/api/match").set_json(body)
}

fn table_request() -> test::TestRequest {
    test::TestRequest::get().uri("/api/table")
}

#[actix_web::test]
async fn table_reflects_submitted_match() {
    let app = league_app!("A", "B");
    let req = match_request(json!({ "team1": "A", "team2": "B", "score1": 100, "score2": 90 }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    let table: Value = test::call_and_read_body_json(&app, table_request().to_request()).await;
    assert_eq!(
        table,
        json!([
            { "name": "A", "P": 1, "W": 1, "L": 0, "PS": 100, "PC": 90, "DIFF": 10, "Str": 1, "PTS": 2 },
            { "name": "B", "P": 1, "W": 0, "L": 1, "PS": 90, "PC": 100, "DIFF": -10, "Str": -1, "PTS": 1 }
        ])
    );
}

#[actix_web::test]
async fn match_validation_errors_are_400() {
    let app = league_app!("A", "B");
    let cases = [
        json!({ "team1": "A", "team2": "A", "score1": 100, "score2": 90 }),
        json!({ "team1": "A", "team2": "Z", "score1": 100, "score2": 90 }),
        json!({ "team1": "A", "team2": "B", "score1": "100", "score2": 90 }),
        json!({ "team1": "A", "team2": "B", "score1": 100 }),
        json!({ "team1": "", "team2": "B", "score1": 1, "score2": 0 }),
        json!({ "team1": "A", "team2": "B", "score1": -1, "score2": 0 }),
    ];
    for body in cases {
        let resp = test::call_service(&app, match_request(body.clone()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let resp: Value = test::read_body_json(resp).await;
        assert!(resp["error"].is_string(), "{body} -> {resp}");
    }

    let req = match_request(json!({ "team1": "A", "team2": "Z", "score1": 1, "score2": 0 }));
    let resp: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(resp, json!({ "error": "One or both teams do not exist" }));

    let table: Value = test::call_and_read_body_json(&app, table_request().to_request()).await;
    assert!(table.as_array().unwrap().iter().all(|t| t["P"] == 0));
}

#[actix_web::test]
async fn add_team_and_list_teams() {
    let app = league_app!("A");

    let req = test::TestRequest::post()
        .uri("/api/team")
        .set_json(json!({ "team": "B" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "success": true, "teams": ["A", "B"] }));

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let teams: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(teams, json!(["A", "B"]));
}

#[actix_web::test]
async fn add_team_errors_are_400() {
    let app = league_app!("A");
    let cases = [
        (json!({ "team": "A" }), "Team already exists"),
        (json!({ "team": 42 }), "Invalid team name"),
        (json!({}), "Invalid team name"),
        (json!({ "team": "" }), "Invalid team name"),
    ];
    for (body, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/team")
            .set_json(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let resp: Value = test::read_body_json(resp).await;
        assert_eq!(resp, json!({ "error": message }), "{body}");
    }
}

#[actix_web::test]
async fn reset_clears_matches_but_keeps_teams() {
    let app = league_app!("A", "B");
    let req = match_request(json!({ "team1": "A", "team2": "B", "score1": 70, "score2": 72 }));
    test::call_service(&app, req.to_request()).await;

    let req = test::TestRequest::delete().uri("/api/reset").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["cleared"], json!(1));
    assert!(body["message"].is_string());

    let table: Value = test::call_and_read_body_json(&app, table_request().to_request()).await;
    assert_eq!(
        table,
        json!([
            { "name": "A", "P": 0, "W": 0, "L": 0, "PS": 0, "PC": 0, "DIFF": 0, "Str": 0, "PTS": 0 },
            { "name": "B", "P": 0, "W": 0, "L": 0, "PS": 0, "PC": 0, "DIFF": 0, "Str": 0, "PTS": 0 }
        ])
    );
    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let teams: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(teams, json!(["A", "B"]));
}

#[actix_web::test]
async fn table_csv_download() {
    let app = league_app!("A", "B");
    let req = match_request(json!({ "team1": "A", "team2": "B", "score1": 80, "score2": 80 }));
    test::call_service(&app, req.to_request()).await;

    let req = test::TestRequest::get().uri("/api/table.csv").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    assert_eq!(
        body,
        "name,P,W,L,PS,PC,DIFF,Str,PTS\nB,1,1,0,80,80,0,1,2\nA,1,0,1,80,80,0,-1,1\n"
    );
}

#[actix_web::test]
async fn health_index_and_client_config() {
    let app = league_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "ok": true, "service": "basketball-league-web" }));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/config.js").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "window.BACKEND_URL = \"http://api.example\";\n");
}

#[actix_web::test]
async fn file_backed_league_serves_writes_and_reads() {
    let path = std::env::temp_dir().join(format!("league-{}.json", uuid::Uuid::new_v4()));
    let app = test::init_service(
        App::new()
            .app_data(Data::new(League::new(JsonFileStore::new(&path))))
            .app_data(Data::new(ClientSettings::default()))
            .configure(api::configure),
    )
    .await;

    for team in ["A", "B"] {
        let req = test::TestRequest::post()
            .uri("/api/team")
            .set_json(json!({ "team": team }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let req = match_request(json!({ "team1": "B", "team2": "A", "score1": 64, "score2": 61 }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let table: Value = test::call_and_read_body_json(&app, table_request().to_request()).await;
    assert_eq!(table[0]["name"], "B");
    assert_eq!(table[0]["PTS"], 2);

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        saved,
        json!({ "teams": ["A", "B"], "matches": [["B", "A", 64, 61]] })
    );
    std::fs::remove_file(&path).unwrap();
}
