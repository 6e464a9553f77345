use relaton_models::Link;

use crate::error::{Result, SerializeError};

/// Pick the URL for a reference's `target`: the first `src` link, else the
/// first link of any type.
pub fn get_suitable_target(links: &[Link]) -> Result<String> {
    links
        .iter()
        .find(|link| link.is_type("src"))
        .or_else(|| links.first())
        .map(|link| link.content.clone())
        .ok_or_else(|| SerializeError::NotFound("no suitable target".to_string()))
}
