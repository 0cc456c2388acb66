//! Domain Layer - Core Entity Trait

/// Anything stored in the task list with a stable identity
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Largest id in a slice of entities, if any
pub(crate) fn max_id<T>(entities: &[T]) -> Option<T::Id>
where
    T: Entity,
    T::Id: Ord,
{
    entities.iter().map(Entity::id).max()
}
