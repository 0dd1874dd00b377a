//! Item search.
//!
//! Take, drop and examine all need to turn a word the player typed into one of
//! the items actually within reach. Callers send the world, the search text and
//! a [`SearchScope`]; they get back the item's canonical name, or the reason
//! nothing matched.

use crate::item::ItemHolder;
use crate::world::GameWorld;

use deadline_data::LocationId;
use thiserror::Error;

/// Where to look for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only items lying in the given location.
    Location(LocationId),
    /// Only items the player carries.
    Inventory,
    /// The given location first, then the inventory.
    Nearby(LocationId),
}

/// Possible reasons for a failed item search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no item in scope with name matching user input '{0}'")]
    NoMatchingName(String),
    #[error("found no location with the supplied id ({0})")]
    InvalidLocation(LocationId),
}

/// Find an item whose name matches `pattern` within `scope` and return its canonical name.
///
/// The pattern goes through the alias table first, then is compared
/// case-insensitively against item names, with spaces read as underscores.
/// # Errors
/// - `SearchError::InvalidLocation` if the scope names a location that doesn't exist
/// - `SearchError::NoMatchingName` if nothing in scope matches
pub fn find_item_match(world: &GameWorld, pattern: &str, scope: SearchScope) -> Result<String, SearchError> {
    let Some(item) = world.resolve_item_name(pattern) else {
        return Err(SearchError::NoMatchingName(pattern.to_string()));
    };
    let name = item.name.as_str();

    let in_location = |id: LocationId| -> Result<bool, SearchError> {
        world
            .lookup(id)
            .map(|location| location.contains_item(name))
            .map_err(|_| SearchError::InvalidLocation(id))
    };

    let found = match scope {
        SearchScope::Location(id) => in_location(id)?,
        SearchScope::Inventory => world.player.contains_item(name),
        SearchScope::Nearby(id) => in_location(id)? || world.player.contains_item(name),
    };

    if found {
        Ok(name.to_string())
    } else {
        Err(SearchError::NoMatchingName(pattern.to_string()))
    }
}
