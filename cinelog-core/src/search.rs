//! Menu search bar validation

use crate::error::{CoreError, Result};
use cinelog_model::ImdbId;

/// Resolve the menu search bar input to the film page it should open.
///
/// Only IMDb title ids are accepted; anything else is rejected with
/// `invalid imdb id`.
pub fn resolve_search(input: &str) -> Result<String> {
    let id = parse_search(input)?;
    Ok(id.film_path())
}

pub fn parse_search(input: &str) -> Result<ImdbId> {
    ImdbId::new(input.trim()).map_err(|_| CoreError::InvalidSearch {
        input: input.to_string(),
    })
}
