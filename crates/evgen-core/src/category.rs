//! Event categories, selected by the first letter of the class name.
//!
//! Every event operates on one scope object. The naming convention encodes
//! that scope in the leading letter: `A`ctor, `M`ap and `G`ame events.

use std::fmt;

use crate::error::{EvgenError, Result};
use crate::name::EventName;

/// The scope an event class operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Events processed by a single actor.
    Actor,
    /// Events processed by the loaded map.
    MapData,
    /// Events processed by the global game state.
    GameInfo,
}

/// Leading letter, scope class name and include path of each category.
static BINDINGS: [(char, Category, &str, &str); 3] = [
    ('A', Category::Actor, "Actor", "actor/actor.hpp"),
    ('M', Category::MapData, "MapData", "map/mapdata.hpp"),
    ('G', Category::GameInfo, "GameInfo", "core/gameinfo.hpp"),
];

impl Category {
    /// All supported categories in dispatch order.
    pub const ALL: [Category; 3] = [Category::Actor, Category::MapData, Category::GameInfo];

    /// Resolve a category from its leading letter. Matching is case-sensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        BINDINGS
            .iter()
            .find(|(l, ..)| *l == letter)
            .map(|(_, category, ..)| *category)
    }

    /// Resolve the category encoded in the first letter of `name`.
    pub fn from_class_name(name: &EventName) -> Result<Self> {
        Self::from_letter(name.first_char())
            .ok_or_else(|| EvgenError::UnsupportedCategory(name.class_name().to_string()))
    }

    fn binding(self) -> &'static (char, Category, &'static str, &'static str) {
        // BINDINGS covers every variant
        match self {
            Self::Actor => &BINDINGS[0],
            Self::MapData => &BINDINGS[1],
            Self::GameInfo => &BINDINGS[2],
        }
    }

    /// The letter a class name must start with to land in this category.
    pub fn letter(self) -> char {
        self.binding().0
    }

    /// C++ class the event is parameterised over, substituted for `Scope`.
    pub fn scope_name(self) -> &'static str {
        self.binding().2
    }

    /// Header declaring the scope class, substituted for `origin`.
    pub fn include_path(self) -> &'static str {
        self.binding().3
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(name: &str) -> Result<Category> {
        Category::from_class_name(&EventName::parse(name).unwrap())
    }

    #[test]
    fn test_actor() {
        let category = resolve("ActorSpawned").unwrap();
        assert_eq!(category, Category::Actor);
        assert_eq!(category.scope_name(), "Actor");
        assert_eq!(category.include_path(), "actor/actor.hpp");
    }

    #[test]
    fn test_map() {
        let category = resolve("MapLoaded").unwrap();
        assert_eq!(category, Category::MapData);
        assert_eq!(category.scope_name(), "MapData");
        assert_eq!(category.include_path(), "map/mapdata.hpp");
    }

    #[test]
    fn test_game() {
        let category = resolve("GameSaved").unwrap();
        assert_eq!(category, Category::GameInfo);
        assert_eq!(category.scope_name(), "GameInfo");
        assert_eq!(category.include_path(), "core/gameinfo.hpp");
    }

    #[test]
    fn test_unsupported_letter() {
        let err = resolve("PlayerJoined").unwrap_err();
        assert!(matches!(err, EvgenError::UnsupportedCategory(ref n) if n == "PlayerJoined"));
        assert!(err.to_string().contains("naming convention"));
    }

    #[test]
    fn test_lowercase_letters_rejected() {
        for name in ["actorSpawned", "mapLoaded", "gameSaved"] {
            assert!(resolve(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_letters_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_letter(category.letter()), Some(category));
        }
    }
}
