//! Docks on either bank of the river.

use serde::{Deserialize, Serialize};

use crate::core::{MountId, Side};

use super::holder::Holder;
use super::mount::Mount;

/// A dock bound to one side of the river.
///
/// Its capacity is the total avatar count, so it never refuses anyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dock {
    side: Side,
    holder: Holder,
}

impl Dock {
    /// Create an empty dock with room for `capacity` avatars.
    #[must_use]
    pub fn new(side: Side, capacity: usize) -> Self {
        Self {
            side,
            holder: Holder::new(capacity),
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }
}

impl Mount for Dock {
    fn mount_id(&self) -> MountId {
        MountId::Dock(self.side)
    }

    fn holder(&self) -> &Holder {
        &self.holder
    }

    fn holder_mut(&mut self) -> &mut Holder {
        &mut self.holder
    }
}
