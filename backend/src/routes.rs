use std::sync::Arc;
use rocket::{State, get, post, form::Form, http::Status, serde::json::Json};
use tracing::{debug, info, instrument};
use shared::{models::*, tally::Tally, validation::validate_choice, Catalog};
use crate::{
    chaos::Chaos,
    config::GatewayConfig,
    error::ApiError,
    service::VotingService,
    utils::join_leaderboard,
};

pub struct AppState {
    pub catalog: Catalog,
    pub voting: Arc<dyn VotingService>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_service(Tally::<String>::new())
    }

    pub fn with_service(service: impl VotingService + 'static) -> Self {
        Self {
            catalog: Catalog::new(),
            voting: Arc::new(service),
        }
    }

    pub fn with_config(config: &GatewayConfig) -> Self {
        if config.chaos.is_enabled() {
            info!("Wrapping the tally engine in chaos middleware");
            Self::with_service(Chaos::new(Tally::<String>::new(), config.chaos.clone()))
        } else {
            Self::new()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

async fn cast_vote(state: &AppState, choice: Option<&str>) -> Result<Json<VoteResponse>, ApiError> {
    let emoji = validate_choice(choice, &state.catalog)?;
    let votes = state.voting.vote(&emoji.shortcode).await?;
    debug!("Recorded vote for {}", emoji.shortcode);

    Ok(Json(VoteResponse {
        shortcode: emoji.shortcode.clone(),
        votes,
    }))
}

#[get("/list")]
pub async fn list_emoji(state: &State<AppState>) -> Json<Vec<Emoji>> {
    Json(state.catalog.list().to_vec())
}

#[get("/emoji/<shortcode>")]
pub async fn find_emoji(state: &State<AppState>, shortcode: &str) -> Result<Json<Emoji>, ApiError> {
    state.catalog.find_by_shortcode(shortcode)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[instrument(skip(state))]
#[get("/vote?<choice>")]
pub async fn vote_emoji(state: &State<AppState>, choice: Option<String>) -> Result<Json<VoteResponse>, ApiError> {
    cast_vote(state, choice.as_deref()).await
}

#[instrument(skip(state, form))]
#[post("/vote", data = "<form>")]
pub async fn vote_emoji_form(state: &State<AppState>, form: Form<VoteForm>) -> Result<Json<VoteResponse>, ApiError> {
    cast_vote(state, form.choice.as_deref()).await
}

#[instrument(skip(state))]
#[get("/leaderboard")]
pub async fn leaderboard(state: &State<AppState>) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let results = state.voting.results().await?;
    join_leaderboard(results, &state.catalog).map(Json)
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
