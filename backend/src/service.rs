use shared::tally::{Standing, Tally};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VotingError {
    #[error("Vote for [{shortcode}] was rejected")]
    Rejected { shortcode: String },
}

/// The gateway's view of the tally engine.
///
/// Handlers only ever talk to this trait, so middleware such as
/// [`Chaos`](crate::chaos::Chaos) can sit between them and the engine.
#[rocket::async_trait]
pub trait VotingService: Send + Sync {
    async fn vote(&self, shortcode: &str) -> Result<u64, VotingError>;

    async fn results(&self) -> Result<Vec<Standing<String>>, VotingError>;
}

#[rocket::async_trait]
impl VotingService for Tally<String> {
    async fn vote(&self, shortcode: &str) -> Result<u64, VotingError> {
        let total = Tally::vote(self, shortcode.to_string());
        debug!("Voted for [{}], which now has a total of [{}] votes", shortcode, total);
        Ok(total)
    }

    async fn results(&self) -> Result<Vec<Standing<String>>, VotingError> {
        Ok(Tally::results(self))
    }
}
