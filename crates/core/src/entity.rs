//! Entity trait: identity that survives attribute changes.

/// Minimal interface for domain objects with identity.
///
/// Two entities with the same id are the same entity, whatever their current
/// attribute values. Accounts are identified by account number and staff by
/// employee id; shapes carry no identity and do not implement this.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
