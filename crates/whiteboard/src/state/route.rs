use std::fmt;

use super::Hex;

/// Precomputed path handed over by the pathfinding collaborator.
///
/// The first step is the hex the unit starts from and the last step is its
/// destination. A single-step route describes a unit that stays in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Hex>", into = "Vec<Hex>"))]
pub struct Route {
    steps: Vec<Hex>,
}

impl Route {
    /// Builds a route from its ordered steps.
    ///
    /// Returns `None` for an empty step list.
    pub fn new(steps: Vec<Hex>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    /// A route that does not move: used by attacks from the current hex.
    pub fn stationary(hex: Hex) -> Self {
        Self { steps: vec![hex] }
    }

    pub fn steps(&self) -> &[Hex] {
        &self.steps
    }

    pub fn source(&self) -> Hex {
        self.steps[0]
    }

    pub fn destination(&self) -> Hex {
        self.steps[self.steps.len() - 1]
    }

    /// Number of hexes entered along the route.
    pub fn len(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.steps.contains(&hex)
    }

    /// Index of `hex` along the route, if it lies on it.
    pub fn step_index(&self, hex: Hex) -> Option<usize> {
        self.steps.iter().position(|&step| step == hex)
    }

    /// Drops the already travelled prefix so the route starts at `hex`.
    ///
    /// Returns `false` and leaves the route untouched if `hex` is not on it.
    pub fn advance_to(&mut self, hex: Hex) -> bool {
        match self.step_index(hex) {
            Some(index) => {
                self.steps.drain(..index);
                true
            }
            None => false,
        }
    }
}

/// A route needs at least its starting hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("route has no steps")]
pub struct EmptyRoute;

impl TryFrom<Vec<Hex>> for Route {
    type Error = EmptyRoute;

    fn try_from(steps: Vec<Hex>) -> Result<Self, Self::Error> {
        Self::new(steps).ok_or(EmptyRoute)
    }
}

impl From<Route> for Vec<Hex> {
    fn from(route: Route) -> Self {
        route.steps
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} steps)", self.source(), self.destination(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_route() -> Route {
        Route::new(vec![Hex::new(0, 0), Hex::new(0, 1), Hex::new(0, 2)]).unwrap()
    }

    #[test]
    fn empty_steps_are_rejected() {
        assert!(Route::new(Vec::new()).is_none());
    }

    #[test]
    fn endpoints_and_length() {
        let route = straight_route();
        assert_eq!(route.source(), Hex::new(0, 0));
        assert_eq!(route.destination(), Hex::new(0, 2));
        assert_eq!(route.len(), 2);
        assert!(!route.is_empty());
        assert!(Route::stationary(Hex::new(4, 4)).is_empty());
    }

    #[test]
    fn advance_trims_travelled_prefix() {
        let mut route = straight_route();

        assert!(route.advance_to(Hex::new(0, 1)));
        assert_eq!(route.source(), Hex::new(0, 1));
        assert_eq!(route.len(), 1);

        assert!(!route.advance_to(Hex::new(9, 9)));
        assert_eq!(route.source(), Hex::new(0, 1));
    }
}
