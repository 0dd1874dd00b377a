//! Item catalog entries and the [`ItemHolder`] trait shared by anything that can hold them.
//!
//! The catalog never changes after load. Which holder currently owns an item is
//! tracked by name in the holder's own set (a location's `items_present` or the
//! player's inventory).

use deadline_data::{ItemDef, ItemId, LocationId};

/// Something in the world that can be picked up, carried, examined or delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable id, used by locks to name their key.
    pub id: ItemId,
    /// Unique display name; also the key holders store.
    pub name: String,
    pub description: String,
    /// `false` for scenery that can be seen and examined but never carried.
    pub can_take: bool,
    /// Where dropping this item pays out `target_points`.
    pub target_position: LocationId,
    pub target_points: u32,
}
impl Item {
    /// Returns true if dropping the item at `location_id` earns its reward.
    pub fn scores_at(&self, location_id: LocationId) -> bool {
        self.target_position == location_id
    }
}
impl From<&ItemDef> for Item {
    fn from(def: &ItemDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            can_take: def.can_take,
            target_position: def.target_position,
            target_points: def.target_points,
        }
    }
}

/// Methods common to locations and the player, which both own item sets.
pub trait ItemHolder {
    fn add_item(&mut self, item_name: &str);
    /// Removes the item, returning whether it was held.
    fn remove_item(&mut self, item_name: &str) -> bool;
    fn contains_item(&self, item_name: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def() -> ItemDef {
        ItemDef {
            id: "item-mug".into(),
            name: "lucky_mug".into(),
            description: "A chipped mug.".into(),
            can_take: true,
            target_position: 1,
            target_points: 40,
        }
    }

    #[test]
    fn item_from_def_copies_fields() {
        let item = Item::from(&def());
        assert_eq!(item.id, "item-mug");
        assert_eq!(item.name, "lucky_mug");
        assert!(item.can_take);
        assert_eq!(item.target_points, 40);
    }

    #[test]
    fn scores_only_at_target_position() {
        let item = Item::from(&def());
        assert!(item.scores_at(1));
        assert!(!item.scores_at(2));
    }
}
