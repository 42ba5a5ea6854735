//! The `Mount` capability shared by docks and the boat.

use crate::core::{AvatarId, MountId};

use super::holder::Holder;

/// Something avatars can stand on.
///
/// Implementors only expose their `Holder`; capacity and membership
/// queries come from the provided methods.
pub trait Mount {
    /// Which mount this is.
    fn mount_id(&self) -> MountId;

    /// The avatars held by this mount.
    fn holder(&self) -> &Holder;

    /// Mutable access to the held avatars.
    fn holder_mut(&mut self) -> &mut Holder;

    // === Provided Methods ===

    fn max_capacity(&self) -> usize {
        self.holder().max_capacity()
    }

    fn len(&self) -> usize {
        self.holder().len()
    }

    fn is_empty(&self) -> bool {
        self.holder().is_empty()
    }

    fn is_full(&self) -> bool {
        self.holder().is_full()
    }

    fn contains(&self, avatar: AvatarId) -> bool {
        self.holder().contains(avatar)
    }

    /// Held avatars in ascending ID order.
    fn passengers(&self) -> Vec<AvatarId> {
        self.holder().to_vec()
    }
}
