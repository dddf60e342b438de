//! HTTP surface: REST endpoints for the table, teams, matches and reset, plus the static client.
//!
//! Mount with `App::new().app_data(..).configure(api::configure)`; handlers expect
//! `Data<League>` and `Data<ClientSettings>` to be registered.

use actix_files::Files;
use actix_web::{
    delete, error::InternalError, get, post,
    web::{self, Data, Json},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};

use crate::league::League;
use crate::logic::table_to_csv;
use crate::models::{LeagueError, MatchRecord};

/// Settings served to the browser client through `/config.js`.
#[derive(Clone, Debug, Default)]
pub struct ClientSettings {
    pub backend_url: String,
}

type LeagueState = Data<League>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// `team` is kept untyped so a missing or non-string value reports "Invalid team name"
/// instead of a generic body error.
#[derive(Deserialize)]
struct AddTeamBody {
    #[serde(default)]
    team: serde_json::Value,
}

#[derive(Serialize)]
struct AddTeamResponse {
    success: bool,
    teams: Vec<String>,
}

#[derive(Deserialize)]
struct AddMatchBody {
    team1: String,
    team2: String,
    score1: u32,
    score2: u32,
}

#[derive(Serialize)]
struct SuccessResponse {
    success: bool,
}

#[derive(Serialize)]
struct ResetResponse {
    success: bool,
    message: &'static str,
    cleared: usize,
}

/// Map a league error to an HTTP response with a `{error}` body.
fn error_response(e: &LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        log::error!("{}", e);
        HttpResponse::InternalServerError().json(body)
    }
}

/// Run a league operation on the blocking thread pool; store calls do file I/O and the
/// write path waits on the league's write lock.
async fn run_blocking<T, F>(state: &LeagueState, op: F) -> Result<T, LeagueError>
where
    F: FnOnce(&League) -> Result<T, LeagueError> + Send + 'static,
    T: Send + 'static,
{
    let league = state.clone();
    web::block(move || op(league.get_ref()))
        .await
        .map_err(|e| LeagueError::Storage(format!("blocking task failed: {}", e)))?
}

/// Malformed JSON, missing fields and wrong types all become 400 "Invalid input".
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": LeagueError::InvalidInput.to_string() }));
        InternalError::from_response(err, response).into()
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "basketball-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Standings, sorted by points, differential, points scored.
#[get("/api/table")]
async fn api_table(state: LeagueState) -> HttpResponse {
    match run_blocking(&state, |league| league.table()).await {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(e) => error_response(&e),
    }
}

/// Standings as a CSV download.
#[get("/api/table.csv")]
async fn api_table_csv(state: LeagueState) -> HttpResponse {
    let table = match run_blocking(&state, |league| league.table()).await {
        Ok(table) => table,
        Err(e) => return error_response(&e),
    };
    match table_to_csv(&table) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"standings.csv\""))
            .body(bytes),
        Err(e) => error_response(&LeagueError::Storage(e.to_string())),
    }
}

#[get("/api/teams")]
async fn api_teams(state: LeagueState) -> HttpResponse {
    match run_blocking(&state, |league| league.teams()).await {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(e) => error_response(&e),
    }
}

/// Register a team (400 on missing, non-string, empty or duplicate name).
#[post("/api/team")]
async fn api_add_team(state: LeagueState, body: Json<AddTeamBody>) -> HttpResponse {
    let Some(name) = body.team.as_str().map(str::to_string) else {
        return error_response(&LeagueError::InvalidTeamName);
    };
    match run_blocking(&state, move |league| league.add_team(&name)).await {
        Ok(teams) => HttpResponse::Ok().json(AddTeamResponse {
            success: true,
            teams,
        }),
        Err(e) => error_response(&e),
    }
}

/// Record a match result between two registered, distinct teams.
#[post("/api/match")]
async fn api_add_match(state: LeagueState, body: Json<AddMatchBody>) -> HttpResponse {
    let AddMatchBody {
        team1,
        team2,
        score1,
        score2,
    } = body.into_inner();
    let record = match MatchRecord::new(team1, team2, score1, score2) {
        Ok(record) => record,
        Err(e) => return error_response(&e),
    };
    match run_blocking(&state, move |league| league.add_match(record)).await {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse { success: true }),
        Err(e) => error_response(&e),
    }
}

/// Clear match history; registered teams stay.
#[delete("/api/reset")]
async fn api_reset(state: LeagueState) -> HttpResponse {
    match run_blocking(&state, |league| league.reset_matches()).await {
        Ok(cleared) => HttpResponse::Ok().json(ResetResponse {
            success: true,
            message: "Match history cleared",
            cleared,
        }),
        Err(e) => error_response(&e),
    }
}

/// Client-side configuration as a script, loaded by the page before `app.js`.
#[get("/config.js")]
async fn client_config(settings: Data<ClientSettings>) -> HttpResponse {
    let backend_url =
        serde_json::to_string(&settings.backend_url).unwrap_or_else(|_| "\"\"".to_string());
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(format!("window.BACKEND_URL = {};\n", backend_url))
}

async fn serve_index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Register every route and the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(serve_index))
        .service(api_health)
        .service(favicon)
        .service(client_config)
        .service(api_table)
        .service(api_table_csv)
        .service(api_teams)
        .service(api_add_team)
        .service(api_add_match)
        .service(api_reset)
        .service(Files::new("/static", "static"));
}
