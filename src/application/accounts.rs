//! Account registration and session use cases

use crate::domain::{next_id, User, UserRole};
use crate::error::{JobdeckError, Result};
use crate::infrastructure::{JsonStore, UserRepository};
use chrono::Utc;

const SESSION_KEY: &str = "session";

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub company_name: Option<String>,
    pub role: UserRole,
}

/// Service for registering accounts
pub struct AccountService {
    users: UserRepository,
}

impl AccountService {
    /// Create a new account service
    pub fn new(store: JsonStore) -> Self {
        AccountService {
            users: UserRepository::new(store),
        }
    }

    /// Register a new account. Email uniqueness is checked here, not by
    /// the repository.
    pub fn register(&self, account: NewAccount) -> Result<User> {
        if self.users.find_by_email(&account.email)?.is_some() {
            return Err(JobdeckError::DuplicateEmail(account.email));
        }

        let user = User {
            id: next_id(),
            email: account.email,
            password: account.password,
            full_name: account.full_name,
            company_name: account.company_name,
            user_type: account.role,
            created_at: Utc::now(),
        };

        self.users.upsert(user.clone())?;
        Ok(user)
    }
}

/// Session management over one store instance.
///
/// The session is a full copy of the User record persisted under its own
/// key; it is not kept in sync with later account updates.
pub struct SessionService {
    store: JsonStore,
    users: UserRepository,
}

impl SessionService {
    /// Create a new session service
    pub fn new(store: JsonStore) -> Self {
        let users = UserRepository::new(store.clone());
        SessionService { store, users }
    }

    /// Authenticate by exact email and password match. Returns `None` for
    /// unknown email and wrong password alike; on success persists a copy
    /// of the user as the current session.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = self.users.find_by_email(email)? else {
            return Ok(None);
        };

        if user.password != password {
            return Ok(None);
        }

        self.store.save_json(SESSION_KEY, &user)?;
        Ok(Some(user))
    }

    /// The currently logged-in user, if any
    pub fn current(&self) -> Result<Option<User>> {
        self.store.load_json(SESSION_KEY)
    }

    /// Remove the session
    pub fn clear(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)
    }

    /// The current user, or a NotLoggedIn error
    pub fn require_login(&self) -> Result<User> {
        self.current()?.ok_or(JobdeckError::NotLoggedIn)
    }
}
