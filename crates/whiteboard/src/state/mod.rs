//! Identifiers and map geometry shared by actions, oracles and the queue.
//!
//! Units are never referenced directly: actions hold a [`UnitId`] key that is
//! resolved through [`crate::env::UnitOracle`] whenever the live unit matters.
mod common;
mod route;

pub use common::{ActionId, Hex, SideId, UnitId};
pub use route::{EmptyRoute, Route};
