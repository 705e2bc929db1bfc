//! Axum HTTP server: stateless JSON endpoints over the planner core.
//!
//! The bot and the dashboard call these instead of linking the crate. Every
//! handler is a synchronous computation on its own request; the shared
//! [`PlannerContext`] only holds read-only rules.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/catalog` | Primary and secondary loot tables |
//! | POST | `/optimize` | Bag plans, loss and loot estimate for a heist setup |
//! | POST | `/payout` | Net total and per-player gains for finished bags |
//! | POST | `/shares/validate` | Check a custom share split |
//! | POST | `/compare` | Predicted vs real gains |
//! | POST | `/cooldown` | Next-heist and hard-mode windows |
//! | POST | `/lifecycle` | Validate a heist status change |

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::allocator::optimize_bags;
use crate::constants::{MAX_AMOUNT, MAX_PLAYERS, PRIMARY_TARGETS, SECONDARY_TARGETS};
use crate::cooldown::{CooldownRules, HardModeWindow};
use crate::error::PlannerError;
use crate::lifecycle::HeistStatus;
use crate::payout::{
    estimate_total_loot, plan_payout, primary_value, recoverable_value, theoretical_total_loot,
    PayoutRules,
};
use crate::report::{compare_gains, loot_loss};
use crate::shares::{default_shares, shares_for_crew, validate_custom_shares};
use crate::types::{BagPlan, LootQuantities, PrimaryKind};

/// Read-only rules shared by all handlers.
#[derive(Clone, Debug, Default)]
pub struct PlannerContext {
    pub rules: PayoutRules,
    pub cooldown: CooldownRules,
}

pub type AppState = Arc<PlannerContext>;

type ApiResult = Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)>;

pub fn create_router(ctx: Arc<PlannerContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/catalog", get(handle_get_catalog))
        .route("/optimize", post(handle_optimize))
        .route("/payout", post(handle_payout))
        .route("/shares/validate", post(handle_validate_shares))
        .route("/compare", post(handle_compare))
        .route("/cooldown", post(handle_cooldown))
        .route("/lifecycle", post(handle_lifecycle))
        .layer(cors)
        .with_state(ctx)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct OptimizeRequest {
    primary: PrimaryKind,
    quantities: LootQuantities,
    players: usize,
    /// Defaults to `players == 1`.
    solo: Option<bool>,
    #[serde(default)]
    office_paintings: u32,
    #[serde(default)]
    hard_mode: bool,
    /// Observed average safe value, if the caller tracks one.
    safe_average: Option<u64>,
}

#[derive(Deserialize)]
struct PayoutRequest {
    primary: PrimaryKind,
    #[serde(default)]
    hard_mode: bool,
    bags: Vec<BagPlan>,
    participants: usize,
    safe_value: Option<u64>,
    custom_shares: Option<Vec<u32>>,
    #[serde(default)]
    elite_completed: bool,
}

#[derive(Deserialize)]
struct SharesRequest {
    shares: Vec<u32>,
}

#[derive(Deserialize)]
struct CompareRequest {
    predicted: Vec<u64>,
    real: Vec<u64>,
}

#[derive(Deserialize)]
struct CooldownRequest {
    elapsed_secs: u64,
    players: usize,
}

#[derive(Deserialize)]
struct LifecycleRequest {
    from: HeistStatus,
    to: HeistStatus,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn bad_request(err: PlannerError) -> (StatusCode, Json<serde_json::Value>) {
    warn!(error = %err, "rejected request");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn check_players(players: usize) -> Result<usize, PlannerError> {
    if (1..=MAX_PLAYERS).contains(&players) {
        Ok(players)
    } else {
        Err(PlannerError::PlayerCount(players))
    }
}

fn check_amount(field: &'static str, value: u64) -> Result<u64, PlannerError> {
    if value <= MAX_AMOUNT {
        Ok(value)
    } else {
        Err(PlannerError::AmountOutOfRange { field, value })
    }
}

fn check_bags(bags: &[BagPlan]) -> Result<(), PlannerError> {
    if bags.len() > MAX_PLAYERS {
        return Err(PlannerError::BagCount(bags.len()));
    }
    for bag in bags {
        check_amount("total_value", bag.total_value)?;
    }
    Ok(())
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_catalog() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "primary": &PRIMARY_TARGETS[..],
        "secondary": &SECONDARY_TARGETS[..],
        "max_players": MAX_PLAYERS,
    }))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_optimize(
    State(ctx): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> ApiResult {
    let players = check_players(req.players).map_err(bad_request)?;
    let solo = req.solo.unwrap_or(players == 1);
    let rules = &ctx.rules;

    let bags = optimize_bags(&req.quantities, players, solo, req.office_paintings);
    let loss = loot_loss(&req.quantities, &bags, solo, req.office_paintings);
    if let Some(avg) = req.safe_average {
        check_amount("safe_average", avg).map_err(bad_request)?;
    }
    let safe_value = rules.resolve_safe_value(req.safe_average);

    Ok(Json(serde_json::json!({
        "bags": bags,
        "loss": loss,
        "primary_value": primary_value(req.primary, req.hard_mode, rules),
        "secondary_value": recoverable_value(&bags),
        "safe_value": safe_value,
        "estimated_total": estimate_total_loot(req.primary, &bags, req.hard_mode, safe_value, rules),
        "theoretical_total": theoretical_total_loot(
            req.primary,
            &req.quantities,
            req.hard_mode,
            safe_value,
            rules,
        ),
        "default_shares": default_shares(players),
    })))
}

async fn handle_payout(State(ctx): State<AppState>, Json(req): Json<PayoutRequest>) -> ApiResult {
    let participants = check_players(req.participants).map_err(bad_request)?;
    check_bags(&req.bags).map_err(bad_request)?;
    if let Some(safe) = req.safe_value {
        check_amount("safe_value", safe).map_err(bad_request)?;
    }
    let shares = shares_for_crew(req.custom_shares.as_deref(), participants)
        .map_err(|e| bad_request(e.into()))?;
    let safe_value = req
        .safe_value
        .unwrap_or_else(|| ctx.rules.resolve_safe_value(None));

    let payout = plan_payout(
        req.primary,
        req.hard_mode,
        &req.bags,
        safe_value,
        shares.as_slice(),
        req.elite_completed,
        &ctx.rules,
    );

    Ok(Json(serde_json::json!({
        "payout": payout,
        "shares": shares,
    })))
}

async fn handle_validate_shares(Json(req): Json<SharesRequest>) -> ApiResult {
    let shares = validate_custom_shares(&req.shares).map_err(|e| bad_request(e.into()))?;
    Ok(Json(serde_json::json!({ "valid": true, "shares": shares })))
}

async fn handle_compare(Json(req): Json<CompareRequest>) -> ApiResult {
    if req.predicted.len() > MAX_PLAYERS || req.real.len() > MAX_PLAYERS {
        let count = req.predicted.len().max(req.real.len());
        return Err(bad_request(PlannerError::PlayerCount(count)));
    }
    for &value in req.predicted.iter().chain(&req.real) {
        check_amount("gain", value).map_err(bad_request)?;
    }
    Ok(Json(serde_json::json!(compare_gains(
        &req.predicted,
        &req.real
    ))))
}

async fn handle_cooldown(
    State(ctx): State<AppState>,
    Json(req): Json<CooldownRequest>,
) -> ApiResult {
    let players = check_players(req.players).map_err(bad_request)?;
    let elapsed = Duration::from_secs(req.elapsed_secs);

    let next_heist_in = ctx
        .cooldown
        .next_heist_in(elapsed, players)
        .map(|d| d.as_secs());
    let hard_mode = match ctx.cooldown.hard_mode_window(elapsed, players) {
        HardModeWindow::Locked { opens_in } => {
            serde_json::json!({ "state": "locked", "secs": opens_in.as_secs() })
        }
        HardModeWindow::Open { closes_in } => {
            serde_json::json!({ "state": "open", "secs": closes_in.as_secs() })
        }
        HardModeWindow::Expired => serde_json::json!({ "state": "expired" }),
    };

    Ok(Json(serde_json::json!({
        "next_heist_in_secs": next_heist_in,
        "hard_mode": hard_mode,
    })))
}

async fn handle_lifecycle(Json(req): Json<LifecycleRequest>) -> ApiResult {
    let status = req
        .from
        .transition(req.to)
        .map_err(|e| bad_request(e.into()))?;
    Ok(Json(serde_json::json!({
        "status": status,
        "recomputes_allocation": status.recomputes_allocation(),
    })))
}
