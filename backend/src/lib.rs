pub mod routes;
pub mod service;
pub mod chaos;
pub mod config;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub use shared::{models::*, error::*};
pub use shared::tally::{Standing, Tally};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable},
    cors::CORS,
    routes::{all_options, find_emoji, leaderboard, list_emoji, vote_emoji, vote_emoji_form, AppState},
};

/// Assembles the gateway around `state`; shared by the binary and the tests.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(state)
        .mount(
            "/api",
            routes![
                list_emoji,
                find_emoji,
                vote_emoji,
                vote_emoji_form,
                leaderboard,
                all_options
            ],
        )
        .register("/", catchers![bad_request, not_found, unprocessable, internal_error])
}
