//! Card types and supertypes as bit-flag sets.
//!
//! The declaration order of each enum is also the order used when building
//! a type line.

use serde::Serialize;

/// A card type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardType {
    Artifact,
    Creature,
    Enchantment,
    Instant,
    Land,
    Planeswalker,
    Sorcery,
    Tribal,
}

impl CardType {
    pub const ALL: [CardType; 8] = [
        CardType::Artifact,
        CardType::Creature,
        CardType::Enchantment,
        CardType::Instant,
        CardType::Land,
        CardType::Planeswalker,
        CardType::Sorcery,
        CardType::Tribal,
    ];

    /// Uppercase name used in metanames and localization keys.
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Artifact => "ARTIFACT",
            CardType::Creature => "CREATURE",
            CardType::Enchantment => "ENCHANTMENT",
            CardType::Instant => "INSTANT",
            CardType::Land => "LAND",
            CardType::Planeswalker => "PLANESWALKER",
            CardType::Sorcery => "SORCERY",
            CardType::Tribal => "TRIBAL",
        }
    }

    /// Case-insensitive lookup of a metaname.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A card supertype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuperType {
    Basic,
    Legendary,
    Ongoing,
    Snow,
    World,
}

impl SuperType {
    pub const ALL: [SuperType; 5] = [
        SuperType::Basic,
        SuperType::Legendary,
        SuperType::Ongoing,
        SuperType::Snow,
        SuperType::World,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SuperType::Basic => "BASIC",
            SuperType::Legendary => "LEGENDARY",
            SuperType::Ongoing => "ONGOING",
            SuperType::Snow => "SNOW",
            SuperType::World => "WORLD",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeFlags(u16);

impl TypeFlags {
    pub const NONE: Self = Self(0);

    pub const fn contains(self, ty: CardType) -> bool {
        self.0 & ty.bit() != 0
    }

    pub const fn with(self, ty: CardType) -> Self {
        Self(self.0 | ty.bit())
    }

    pub const fn without(self, ty: CardType) -> Self {
        Self(self.0 & !ty.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, ty: CardType) {
        *self = self.with(ty);
    }

    pub fn remove(&mut self, ty: CardType) {
        *self = self.without(ty);
    }

    /// Iterate the set types in declaration order.
    pub fn iter(self) -> impl Iterator<Item = CardType> {
        CardType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl std::ops::BitOr for TypeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<CardType> for TypeFlags {
    fn from(ty: CardType) -> Self {
        Self::NONE.with(ty)
    }
}

impl FromIterator<CardType> for TypeFlags {
    fn from_iter<T: IntoIterator<Item = CardType>>(iter: T) -> Self {
        iter.into_iter().fold(Self::NONE, |set, ty| set.with(ty))
    }
}

impl Serialize for TypeFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Set of card supertypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuperTypeFlags(u8);

impl SuperTypeFlags {
    pub const NONE: Self = Self(0);

    pub const fn contains(self, ty: SuperType) -> bool {
        self.0 & ty.bit() != 0
    }

    pub const fn with(self, ty: SuperType) -> Self {
        Self(self.0 | ty.bit())
    }

    pub fn insert(&mut self, ty: SuperType) {
        *self = self.with(ty);
    }

    pub fn iter(self) -> impl Iterator<Item = SuperType> {
        SuperType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl std::ops::BitOr for SuperTypeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<SuperType> for SuperTypeFlags {
    fn from(ty: SuperType) -> Self {
        Self::NONE.with(ty)
    }
}

impl FromIterator<SuperType> for SuperTypeFlags {
    fn from_iter<T: IntoIterator<Item = SuperType>>(iter: T) -> Self {
        iter.into_iter().fold(Self::NONE, |set, ty| set.with(ty))
    }
}

impl Serialize for SuperTypeFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_flags_or_and_contains() {
        let flags = TypeFlags::from(CardType::Artifact) | TypeFlags::from(CardType::Creature);
        assert!(flags.contains(CardType::Artifact));
        assert!(flags.contains(CardType::Creature));
        assert!(!flags.contains(CardType::Land));
    }

    #[test]
    fn test_remove_type() {
        let mut flags: TypeFlags = [CardType::Planeswalker, CardType::Enchantment]
            .into_iter()
            .collect();
        flags.remove(CardType::Enchantment);
        assert!(flags.contains(CardType::Planeswalker));
        assert!(!flags.contains(CardType::Enchantment));
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(CardType::from_name("creature"), Some(CardType::Creature));
        assert_eq!(CardType::from_name("Planeswalker"), Some(CardType::Planeswalker));
        assert_eq!(SuperType::from_name("basic"), Some(SuperType::Basic));
        assert_eq!(CardType::from_name("Battle"), None);
    }

    #[test]
    fn test_iter_in_declaration_order() {
        let flags: TypeFlags = [CardType::Tribal, CardType::Artifact].into_iter().collect();
        let order: Vec<_> = flags.iter().collect();
        assert_eq!(order, vec![CardType::Artifact, CardType::Tribal]);
    }
}
