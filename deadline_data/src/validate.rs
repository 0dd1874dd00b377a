use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// Every problem found is reported, so a content author can fix them in one pass.
///
/// ```
/// use deadline_data::{GameDef, ItemDef, LocationDef, RulesDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: String::new(),
///         start_location: 1,
///         rules: RulesDef { home: 1, required_items: vec!["mug".into()], secret_item: None },
///     },
///     locations: vec![LocationDef {
///         id: 1,
///         name: "Start".into(),
///         brief_description: "A room.".into(),
///         long_description: "A plain room.".into(),
///         commands: Default::default(),
///         items: vec!["mug".into()],
///         locked: false,
///         key_id: None,
///     }],
///     items: vec![ItemDef {
///         id: "item-mug".into(),
///         name: "mug".into(),
///         description: "A mug.".into(),
///         can_take: true,
///         target_position: 1,
///         target_points: 10,
///     }],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut location_ids = HashSet::new();
    for location in &world.locations {
        if !location_ids.insert(location.id) {
            errors.push(ValidationError::DuplicateId {
                kind: "location",
                id: location.id.to_string(),
            });
        }
    }

    let mut item_ids = HashSet::new();
    let mut item_names = HashSet::new();
    for item in &world.items {
        if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "item",
                id: item.id.clone(),
            });
        }
        if !item_names.insert(item.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateId {
                kind: "item name",
                id: item.name.clone(),
            });
        }
    }

    let ids = IdSets {
        locations: &location_ids,
        items: &item_ids,
        item_names: &item_names,
    };

    check_location(
        world.game.start_location,
        &ids,
        "game start location".to_string(),
        &mut errors,
    );
    validate_rules(&world.game.rules, &ids, &mut errors);

    // item name (lowercased) -> location ids it is placed in
    let mut placements: HashMap<String, Vec<LocationId>> = HashMap::new();
    for location in &world.locations {
        validate_location(location, &ids, &mut errors);
        for name in &location.items {
            placements.entry(name.to_lowercase()).or_default().push(location.id);
        }
    }

    for item in &world.items {
        let context = format!("item '{}'", item.id);
        if item.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} has an empty name"),
            });
        }
        check_location(
            item.target_position,
            &ids,
            format!("{context} target position"),
            &mut errors,
        );
        match placements.get(&item.name.to_lowercase()).map(Vec::len) {
            None | Some(0) => errors.push(ValidationError::InvalidValue {
                context: format!("{context} is not placed in any location"),
            }),
            Some(1) => {},
            Some(_) => errors.push(ValidationError::InvalidValue {
                context: format!("{context} is placed in more than one location"),
            }),
        }
    }

    errors
}

struct IdSets<'a> {
    locations: &'a HashSet<LocationId>,
    items: &'a HashSet<&'a str>,
    item_names: &'a HashSet<String>,
}

fn check_location(id: LocationId, ids: &IdSets<'_>, context: String, errors: &mut Vec<ValidationError>) {
    if !ids.locations.contains(&id) {
        errors.push(ValidationError::MissingReference {
            kind: "location",
            id: id.to_string(),
            context,
        });
    }
}

fn check_item_name(name: &str, ids: &IdSets<'_>, context: String, errors: &mut Vec<ValidationError>) {
    if !ids.item_names.contains(&name.to_lowercase()) {
        errors.push(ValidationError::MissingReference {
            kind: "item",
            id: name.to_string(),
            context,
        });
    }
}

fn validate_rules(rules: &RulesDef, ids: &IdSets<'_>, errors: &mut Vec<ValidationError>) {
    check_location(rules.home, ids, "rules home location".to_string(), errors);
    if rules.required_items.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "rules list no required items".to_string(),
        });
    }
    for name in &rules.required_items {
        check_item_name(name, ids, "rules required items".to_string(), errors);
    }
    if let Some(secret) = &rules.secret_item {
        check_item_name(secret, ids, "rules secret item".to_string(), errors);
        if rules.required_items.iter().any(|r| r.eq_ignore_ascii_case(secret)) {
            errors.push(ValidationError::InvalidValue {
                context: format!("secret item '{secret}' is also a required item"),
            });
        }
    }
}

fn validate_location(location: &LocationDef, ids: &IdSets<'_>, errors: &mut Vec<ValidationError>) {
    let context = format!("location {}", location.id);
    if location.id == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "location ids start at 1".to_string(),
        });
    }
    for (field, text) in [
        ("name", &location.name),
        ("brief description", &location.brief_description),
        ("long description", &location.long_description),
    ] {
        if text.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} has an empty {field}"),
            });
        }
    }
    for (key, command) in &location.commands {
        if key.trim().is_empty() || key.trim() != key || key.to_lowercase() != *key {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} command '{key}' is not a canonical lowercase string"),
            });
        }
        if let CommandDef::MoveTo(to) = command {
            check_location(*to, ids, format!("{context} command '{key}'"), errors);
        }
    }
    match (&location.key_id, location.locked) {
        (Some(key), _) => {
            if !ids.items.contains(key.as_str()) {
                errors.push(ValidationError::MissingReference {
                    kind: "item",
                    id: key.clone(),
                    context: format!("{context} key"),
                });
            }
        },
        (None, true) => errors.push(ValidationError::InvalidValue {
            context: format!("{context} is locked but has no key"),
        }),
        (None, false) => {},
    }
    for name in &location.items {
        check_item_name(name, ids, format!("{context} items"), errors);
    }
}
