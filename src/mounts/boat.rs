//! The boat: a mount that moves between the docks.

use serde::{Deserialize, Serialize};

use crate::core::{MountId, Side};

use super::holder::Holder;
use super::mount::Mount;

/// Where the boat is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoatLocation {
    /// Moored at a dock.
    Docked(Side),
    /// Crossing the river.
    InTransit { from: Side, to: Side },
}

/// Whether the boat is moored or crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoatStatus {
    Docked,
    Sailing,
}

/// The boat.
///
/// Carries at most `max_capacity` avatars and needs at least `min_crew`
/// aboard to leave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    holder: Holder,
    min_crew: usize,
    location: BoatLocation,
}

impl Boat {
    /// Create an empty boat docked at `side`.
    #[must_use]
    pub fn new(capacity: usize, min_crew: usize, side: Side) -> Self {
        assert!(min_crew <= capacity, "Minimum crew cannot exceed capacity");

        Self {
            holder: Holder::new(capacity),
            min_crew,
            location: BoatLocation::Docked(side),
        }
    }

    #[must_use]
    pub fn min_crew(&self) -> usize {
        self.min_crew
    }

    #[must_use]
    pub fn location(&self) -> BoatLocation {
        self.location
    }

    #[must_use]
    pub fn status(&self) -> BoatStatus {
        match self.location {
            BoatLocation::Docked(_) => BoatStatus::Docked,
            BoatLocation::InTransit { .. } => BoatStatus::Sailing,
        }
    }

    /// The side the boat is moored at, `None` while sailing.
    #[must_use]
    pub fn docked_side(&self) -> Option<Side> {
        match self.location {
            BoatLocation::Docked(side) => Some(side),
            BoatLocation::InTransit { .. } => None,
        }
    }

    #[must_use]
    pub fn is_docked_at(&self, side: Side) -> bool {
        self.location == BoatLocation::Docked(side)
    }

    /// Whether enough avatars are aboard to row.
    #[must_use]
    pub fn has_crew(&self) -> bool {
        self.len() >= self.min_crew
    }

    /// Leave the dock for the opposite side.
    ///
    /// Returns the destination, or `None` if already sailing.
    pub(crate) fn set_sail(&mut self) -> Option<Side> {
        let from = self.docked_side()?;
        let to = from.opposite();
        self.location = BoatLocation::InTransit { from, to };
        Some(to)
    }

    /// Moor at the side the boat was heading to.
    ///
    /// Returns that side, or `None` if the boat was not sailing.
    pub(crate) fn arrive(&mut self) -> Option<Side> {
        match self.location {
            BoatLocation::InTransit { to, .. } => {
                self.location = BoatLocation::Docked(to);
                Some(to)
            }
            BoatLocation::Docked(_) => None,
        }
    }
}

impl Mount for Boat {
    fn mount_id(&self) -> MountId {
        MountId::Boat
    }

    fn holder(&self) -> &Holder {
        &self.holder
    }

    fn holder_mut(&mut self) -> &mut Holder {
        &mut self.holder
    }
}
