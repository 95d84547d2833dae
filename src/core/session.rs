//! Session management - login, durable session storage, access control
//!
//! Authentication checks a fixed demo credential list (there is no real
//! auth backend). A successful login writes the user record to one session
//! file with no expiry; the session lasts until logout or manual removal.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
        }
    }
}

/// The authenticated user's identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    pub name: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Demo credential list checked at login
struct DemoUser {
    id: &'static str,
    username: &'static str,
    password: &'static str,
    role: UserRole,
    name: &'static str,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: "1",
        username: "admin",
        password: "admin123",
        role: UserRole::Admin,
        name: "Administrator",
    },
    DemoUser {
        id: "2",
        username: "user",
        password: "user123",
        role: UserRole::User,
        name: "Regular User",
    },
];

/// Simulated backend latency for the credential check
const LOGIN_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in. Run `naradai login` first")]
    NotLoggedIn,

    #[error("This command requires administrator access. Use `naradai dashboard` instead")]
    AdminRequired,

    #[error("Could not access session storage: {0}")]
    Storage(String),
}

/// Handle to the durable session file
pub struct Session {
    path: PathBuf,
}

impl Session {
    /// Session backed by the default per-user data directory
    pub fn open() -> Result<Self, SessionError> {
        let dirs = directories::ProjectDirs::from("", "", "naradai")
            .ok_or_else(|| SessionError::Storage("No home directory found".to_string()))?;
        Ok(Self {
            path: dirs.data_dir().join("session.json"),
        })
    }

    /// Session backed by an explicit file (used by tests)
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Check credentials against the demo list and persist the session.
    ///
    /// A mismatch yields the generic invalid-credentials error without
    /// revealing which half was wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<User, SessionError> {
        std::thread::sleep(LOGIN_DELAY);

        let found = DEMO_USERS
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(SessionError::InvalidCredentials)?;

        let user = User {
            id: found.id.to_string(),
            username: found.username.to_string(),
            role: found.role,
            name: found.name.to_string(),
        };
        self.save(&user)?;
        Ok(user)
    }

    /// Load the stored session, if any.
    ///
    /// A corrupted session file is discarded and treated as logged out.
    pub fn current(&self) -> Option<User> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(_) => {
                let _ = std::fs::remove_file(&self.path);
                None
            }
        }
    }

    /// Require a logged-in user
    pub fn require_login(&self) -> Result<User, SessionError> {
        self.current().ok_or(SessionError::NotLoggedIn)
    }

    /// Require a logged-in admin
    pub fn require_admin(&self) -> Result<User, SessionError> {
        let user = self.require_login()?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(SessionError::AdminRequired)
        }
    }

    /// Clear both the stored session and any in-memory copy the caller holds
    pub fn logout(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }

    fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(user).map_err(|e| SessionError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| SessionError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session() -> (tempfile::TempDir, Session) {
        let tmp = tempfile::TempDir::new().unwrap();
        let session = Session::at(tmp.path().join("session.json"));
        (tmp, session)
    }

    #[test]
    fn test_login_valid_admin() {
        let (_tmp, session) = temp_session();
        let user = session.login("admin", "admin123").unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Administrator");
        assert!(session.current().is_some());
    }

    #[test]
    fn test_login_invalid_credentials() {
        let (_tmp, session) = temp_session();
        let err = session.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_session_persists_across_handles() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("session.json");
        Session::at(path.clone()).login("user", "user123").unwrap();

        let reloaded = Session::at(path).current().unwrap();
        assert_eq!(reloaded.username, "user");
        assert_eq!(reloaded.role, UserRole::User);
    }

    #[test]
    fn test_corrupted_session_discarded() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = Session::at(path.clone());
        assert!(session.current().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_require_admin_rejects_user_role() {
        let (_tmp, session) = temp_session();
        session.login("user", "user123").unwrap();
        assert!(session.require_login().is_ok());
        assert!(matches!(
            session.require_admin().unwrap_err(),
            SessionError::AdminRequired
        ));
    }

    #[test]
    fn test_logout_clears_session() {
        let (_tmp, session) = temp_session();
        session.login("admin", "admin123").unwrap();
        session.logout().unwrap();
        assert!(session.current().is_none());
        // Logging out twice is fine
        session.logout().unwrap();
    }
}
