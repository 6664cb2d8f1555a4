//! Local accounts and the single active session.
//!
//! Duplicate registration and wrong credentials are ordinary outcomes,
//! reported through [`AuthOutcome`], never as errors.

use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::CollectionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Session, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Who is logged in, loaded once per command and passed down explicitly.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub user: Option<Session>,
}

impl SessionContext {
    pub fn load(pool: &DbPool) -> AppResult<Self> {
        Ok(Self {
            user: AuthLogic::current_user(pool)?,
        })
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|s| s.email.as_str())
    }

    /// Fail with [`AppError::NotAuthenticated`] when `required` and nobody
    /// is logged in.
    pub fn ensure(&self, required: bool) -> AppResult<()> {
        if required && self.user.is_none() {
            return Err(AppError::NotAuthenticated);
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Passwords are never stored in clear; the email acts as salt.
fn password_digest(email: &str, password: &str) -> String {
    blake3::hash(format!("{email}:{password}").as_bytes())
        .to_hex()
        .to_string()
}

pub struct AuthLogic;

impl AuthLogic {
    pub fn current_user(pool: &DbPool) -> AppResult<Option<Session>> {
        Ok(CollectionStore::<Session>::new(pool)
            .list()?
            .into_iter()
            .next())
    }

    fn start_session(pool: &DbPool, email: &str) -> AppResult<()> {
        let sessions = CollectionStore::<Session>::new(pool);
        sessions.delete_all()?;
        sessions.upsert(Session {
            email: email.to_string(),
        })
    }

    /// Create an account and log it in.
    pub fn register(pool: &DbPool, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Ok(AuthOutcome::fail("Email and password are required."));
        }

        let users = CollectionStore::<User>::new(pool);
        if users.get(&email)?.is_some() {
            return Ok(AuthOutcome::fail("This email is already registered."));
        }

        users.upsert(User {
            email: email.clone(),
            password_digest: Some(password_digest(&email, password)),
        })?;
        Self::start_session(pool, &email)?;

        audit_or_warn(&pool.conn, "register", &email, "User registered");
        Ok(AuthOutcome::ok("Registration completed!"))
    }

    pub fn login(pool: &DbPool, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let email = normalize_email(email);
        let digest = password_digest(&email, password);

        let matches = CollectionStore::<User>::new(pool)
            .get(&email)?
            .is_some_and(|u| u.password_digest.as_deref() == Some(digest.as_str()));

        if !matches {
            return Ok(AuthOutcome::fail("Wrong email or password."));
        }

        Self::start_session(pool, &email)?;
        audit_or_warn(&pool.conn, "login", &email, "Session started");
        Ok(AuthOutcome::ok("Logged in!"))
    }

    /// Returns false when there was no session to close.
    pub fn logout(pool: &DbPool) -> AppResult<bool> {
        let closed = CollectionStore::<Session>::new(pool).delete_all()? > 0;
        if closed {
            audit_or_warn(&pool.conn, "logout", "", "Session closed");
        }
        Ok(closed)
    }

    /// Whether a reset could be started for `email`, i.e. the account exists.
    /// Nothing is sent anywhere: there is no mail channel.
    pub fn reset_password(pool: &DbPool, email: &str) -> AppResult<bool> {
        let email = normalize_email(email);
        Ok(CollectionStore::<User>::new(pool).get(&email)?.is_some())
    }
}
