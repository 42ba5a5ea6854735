//! Mounts: the things avatars stand on.
//!
//! Docks and the boat share one capability, the `Mount` trait, implemented
//! over a composed `Holder` (a capacity-bounded set of avatars).
//!
//! ## Key Types
//!
//! - `Holder`: avatar set with a maximum capacity
//! - `Mount`: shared capacity and membership queries
//! - `Dock`: a mount fixed to one side of the river
//! - `Boat`: a mount that sails between the sides

pub mod holder;
pub mod mount;
pub mod dock;
pub mod boat;

pub use holder::Holder;
pub use mount::Mount;
pub use dock::Dock;
pub use boat::{Boat, BoatLocation, BoatStatus};
