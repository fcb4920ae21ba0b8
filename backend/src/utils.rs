use shared::{Catalog, LeaderboardEntry, Standing};
use crate::error::ApiError;

/// Decorates ranked tallies with catalog display data, keeping rank order.
pub fn join_leaderboard(results: Vec<Standing<String>>, catalog: &Catalog) -> Result<Vec<LeaderboardEntry>, ApiError> {
    results.into_iter()
        .map(|standing| {
            catalog.find_by_shortcode(&standing.choice)
                .map(|emoji| LeaderboardEntry::new(emoji, standing.votes))
                .ok_or(ApiError::MissingFromCatalog(standing.choice))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_keeps_rank_order() {
        let catalog = Catalog::new();
        let results = vec![
            Standing { choice: ":wave:".to_string(), votes: 2 },
            Standing { choice: ":ghost:".to_string(), votes: 1 },
        ];
        let entries = join_leaderboard(results, &catalog).unwrap();
        assert_eq!(entries, vec![
            LeaderboardEntry { shortcode: ":wave:".into(), unicode: "👋".into(), votes: 2 },
            LeaderboardEntry { shortcode: ":ghost:".into(), unicode: "👻".into(), votes: 1 },
        ]);
    }

    #[test]
    fn test_join_fails_on_unknown_code() {
        let catalog = Catalog::new();
        let results = vec![Standing { choice: ":unicorn:".to_string(), votes: 1 }];
        assert!(matches!(
            join_leaderboard(results, &catalog),
            Err(ApiError::MissingFromCatalog(code)) if code == ":unicorn:"
        ));
    }
}
