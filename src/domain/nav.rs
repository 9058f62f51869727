use std::fmt;

/// In-app destinations the success screen can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    OrdersPanel,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::OrdersPanel => "/account/orders",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Host-side navigation. Implementations must tolerate repeated calls with
/// the same route; the skip action and the redirect timer can race.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
