use crate::catalog::Catalog;
use crate::models::Emoji;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Emoji choice [] is mandatory")]
    MissingChoice,
    #[error("Chosen emoji shortcode [{0}] doesn't exist")]
    UnknownChoice(String),
}

/// Resolves a requested shortcode to its catalog entry.
pub fn validate_choice<'a>(choice: Option<&str>, catalog: &'a Catalog) -> Result<&'a Emoji, ValidationError> {
    let choice = match choice.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => return Err(ValidationError::MissingChoice),
    };

    catalog.find_by_shortcode(choice)
        .ok_or_else(|| ValidationError::UnknownChoice(choice.to_string()))
}
