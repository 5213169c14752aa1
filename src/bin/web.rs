//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use cricket_team_web::{make_teams, Roster, RosterError, RosterId, MIN_SELECTED_PLAYERS};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-roster entry: roster data + last activity time (for auto-cleanup).
struct RosterEntry {
    roster: Roster,
    last_activity: Instant,
}

/// In-memory state: many rosters by ID (sessioned). Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<RosterId, RosterEntry>>>;

/// Inactivity threshold: rosters not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Pause before a team assignment is published (the page shows a spinner meanwhile).
const MAKE_TEAMS_DELAY: Duration = Duration::from_millis(500);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: roster id (e.g. /api/rosters/{id})
#[derive(Deserialize)]
struct RosterPath {
    id: RosterId,
}

/// Path segments: roster id and player id (e.g. /api/rosters/{id}/players/{player_id})
#[derive(Deserialize)]
struct RosterPlayerPath {
    id: RosterId,
    player_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cricket-team-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new roster with the default players (client stores id for subsequent requests).
#[post("/api/rosters")]
async fn api_create_roster(state: AppState) -> HttpResponse {
    let roster = Roster::new();
    let id = roster.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        RosterEntry {
            roster,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().roster)
}

/// Get a roster by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/rosters/{id}")]
async fn api_get_roster(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.roster)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    }
}

/// Toggle a player's selection flag. An unknown player id is a no-op and
/// still returns the (unchanged) roster.
#[post("/api/rosters/{id}/players/{player_id}/toggle")]
async fn api_toggle_player(state: AppState, path: Path<RosterPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster.toggle_selection(path.player_id);
    HttpResponse::Ok().json(&entry.roster)
}

/// Make teams from the current selection (needs at least 4 selected players).
/// Too-small selections are rejected before the pause so the error is immediate;
/// valid requests publish the new assignment after MAKE_TEAMS_DELAY.
#[post("/api/rosters/{id}/teams")]
async fn api_make_teams(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let entry = match g.get_mut(&path.id) {
            Some(e) => e,
            None => {
                return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" }))
            }
        };
        entry.last_activity = Instant::now();
        if !entry.roster.can_make_teams() {
            let e = RosterError::NotEnoughPlayersSelected {
                required: MIN_SELECTED_PLAYERS,
                selected: entry.roster.selected_count(),
            };
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    }

    // Guard dropped above; the selection may change during the pause, so
    // make_teams validates again on the fresh state.
    actix_web::rt::time::sleep(MAKE_TEAMS_DELAY).await;

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    let r = &mut entry.roster;
    match make_teams(r) {
        Ok(()) => HttpResponse::Ok().json(r),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<RosterId, RosterEntry>::new()));

    // Background task: every 30 minutes, remove rosters inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive roster(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_roster)
            .service(api_get_roster)
            .service(api_toggle_player)
            .service(api_make_teams)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
