//! Identity snapshot and the derived connection-status readout.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub handle: Option<String>,
}

/// What the identity collaborator tells the menu bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<CurrentUser>,
}

impl Session {
    #[must_use]
    pub fn signed_in(handle: Option<String>) -> Self {
        Self {
            authenticated: true,
            user: Some(CurrentUser { handle }),
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Non-empty handle of the current user, if any
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.handle.as_deref())
            .filter(|handle| !handle.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    ConnectedAs(String),
    Connected,
    NotConnected,
}

impl ConnectionStatus {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectionStatus::NotConnected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::ConnectedAs(handle) => write!(f, "${}", handle),
            ConnectionStatus::Connected => f.write_str("Connected"),
            ConnectionStatus::NotConnected => f.write_str("Not Connected"),
        }
    }
}

#[must_use]
pub fn connection_status(session: &Session) -> ConnectionStatus {
    if !session.authenticated || session.user.is_none() {
        return ConnectionStatus::NotConnected;
    }
    match session.handle() {
        Some(handle) => ConnectionStatus::ConnectedAs(handle.to_string()),
        None => ConnectionStatus::Connected,
    }
}
