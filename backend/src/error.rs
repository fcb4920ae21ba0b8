use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;
use tracing::error;
use crate::service::VotingError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    InvalidChoice(#[from] ValidationError),
    #[error(transparent)]
    Voting(#[from] VotingError),
    #[error("Ranked emoji [{0}] is missing from the catalog")]
    MissingFromCatalog(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::InvalidChoice(_) => Status::BadRequest,
            ApiError::Voting(_) => Status::InternalServerError,
            ApiError::MissingFromCatalog(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        error!("Error serving request [{} {}]: {}", req.method(), req.uri(), self);

        rocket::Response::build_from(Json(ErrorResponse::new(self.to_string())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
