//! Entity trait: identity-based equality shared by all domain entities.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity iff they are of the same concrete type
/// and carry the same identifier. The type half of that contract is static
/// here: `same_identity` and [`identity_eq`] are generic over a single
/// entity type, and each entity type carries its own id newtype, so a
/// cross-type comparison does not compile.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison: true iff both values carry the same identifier.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Hash derived solely from the identifier, consistent with
    /// `same_identity`.
    fn identity_hash(&self) -> u64 {
        use core::hash::{Hash, Hasher};

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.id().hash(&mut hasher);
        hasher.finish()
    }
}

/// Identity comparison over optional references.
///
/// False unless both sides are present and carry the same identifier; two
/// absent values are not considered equal. Negate for the `!=` reading.
pub fn identity_eq<E: Entity>(first: Option<&E>, second: Option<&E>) -> bool {
    match (first, second) {
        (Some(first), Some(second)) => first.same_identity(second),
        _ => false,
    }
}
