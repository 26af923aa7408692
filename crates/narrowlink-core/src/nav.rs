//! Route table for the app's screens.
//!
//! Screen-lifecycle code asks for "the initial state of route X". The table
//! is an explicit value handed to whoever needs it, and asking for a route
//! it doesn't know is a programming mistake reported as [`RouteError`],
//! separate from links that simply don't resolve.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::narrow::Narrow;

/// Route that shows a conversation for a narrow.
pub const CHAT_ROUTE: &str = "chat";

const STANDARD_ROUTES: &[&str] = &[
    "loading",
    "welcome",
    "account",
    "realm",
    "login",
    "main",
    CHAT_ROUTE,
    "search",
    "settings",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("bad route: {0}")]
    UnknownRoute(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub key: String,
    pub route_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrow: Option<Narrow>,
}

/// A stack of routes; `index` is the one on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub index: usize,
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeSet<String>,
}

impl RouteTable {
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// The routes the app ships with.
    pub fn standard() -> Self {
        Self::new(STANDARD_ROUTES.iter().copied())
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    /// Fresh single-screen state showing `route`.
    pub fn state_for_route(&self, route: &str) -> Result<NavState, RouteError> {
        if !self.contains(route) {
            return Err(RouteError::UnknownRoute(route.to_string()));
        }
        Ok(NavState {
            index: 0,
            routes: vec![Route {
                key: format!("{route}-0"),
                route_name: route.to_string(),
                narrow: None,
            }],
        })
    }
}

impl NavState {
    pub fn current(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }

    /// Pushes a chat screen for `narrow` on top of the current one.
    pub fn navigate_to_narrow(&self, table: &RouteTable, narrow: Narrow) -> Result<NavState, RouteError> {
        if !table.contains(CHAT_ROUTE) {
            return Err(RouteError::UnknownRoute(CHAT_ROUTE.to_string()));
        }
        let mut routes = self.routes[..(self.index + 1).min(self.routes.len())].to_vec();
        routes.push(Route {
            key: format!("{CHAT_ROUTE}-{}", routes.len()),
            route_name: CHAT_ROUTE.to_string(),
            narrow: Some(narrow),
        });
        Ok(NavState {
            index: routes.len() - 1,
            routes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrow::stream_narrow;

    #[test]
    fn known_route_gives_single_screen() {
        let state = RouteTable::standard().state_for_route("main").unwrap();
        assert_eq!(state.index, 0);
        assert_eq!(state.routes.len(), 1);
        assert_eq!(state.current().unwrap().route_name, "main");
    }

    #[test]
    fn unknown_route_is_an_error() {
        assert_eq!(
            RouteTable::standard().state_for_route("mian"),
            Err(RouteError::UnknownRoute("mian".to_string()))
        );
        assert!(RouteTable::default().state_for_route("main").is_err());
    }

    #[test]
    fn navigate_to_narrow_pushes_chat() {
        let table = RouteTable::standard();
        let state = table.state_for_route("main").unwrap();
        let next = state
            .navigate_to_narrow(&table, stream_narrow("general"))
            .unwrap();
        assert_eq!(next.index, 1);
        assert_eq!(next.routes[0].route_name, "main");
        let chat = next.current().unwrap();
        assert_eq!(chat.route_name, CHAT_ROUTE);
        assert_eq!(chat.narrow, Some(stream_narrow("general")));
        assert_eq!(chat.key, "chat-1");
    }

    #[test]
    fn navigate_requires_chat_route() {
        let table = RouteTable::new(["main"]);
        let state = table.state_for_route("main").unwrap();
        assert!(matches!(
            state.navigate_to_narrow(&table, stream_narrow("general")),
            Err(RouteError::UnknownRoute(r)) if r == CHAT_ROUTE
        ));
    }
}
