//! Login/registration gate for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate covers the whole app until a user is authenticated. It reads and
//! writes the single persisted record through [`SessionStore`] and reports
//! failures through a [`Notifier`]. While not authenticated the gate is shown
//! with either the login or the registration form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{SessionStore, User};
use crate::util::notify::Notifier;
use crate::util::storage::KeyValueStore;

pub const REGISTERED_MESSAGE: &str = "Account created, you are signed in.";
const GUEST_NAME: &str = "Guest";
const EMAIL_PLACEHOLDER: &str = "-";

/// Login failure surfaced to the user. `Display` is the message shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("User not found. Please register.")]
    UserNotFound,
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

/// Which part of the gate is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Gate shown with the login form.
    #[default]
    LoginForm,
    /// Gate shown with the registration form.
    RegisterForm,
    /// Gate hidden, app usable.
    Authenticated,
}

/// Gate state and the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
}

/// Header/profile projection of the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    /// First character of the name, uppercased.
    pub avatar: String,
}

impl ProfileView {
    pub fn from_user(user: Option<&User>) -> Self {
        let name = user.map(|u| u.name.as_str()).filter(|n| !n.is_empty()).unwrap_or(GUEST_NAME);
        let email = user.map(|u| u.email.as_str()).filter(|e| !e.is_empty()).unwrap_or(EMAIL_PLACEHOLDER);
        let avatar = name.chars().next().map(|c| c.to_uppercase().collect::<String>()).unwrap_or_default();
        Self { name: name.to_owned(), email: email.to_owned(), avatar }
    }
}

/// Build the record to persist from raw registration fields.
///
/// Name and email are trimmed, the password is kept verbatim. Returns `None`
/// if any field ends up empty.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Option<User> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return None;
    }
    Some(User { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

impl AuthState {
    /// Initial state at load: authenticated if a readable record exists.
    pub fn load<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        match session.load() {
            Ok(Some(user)) => {
                log::info!("restored session for {}", user.email);
                Self { phase: AuthPhase::Authenticated, user: Some(user) }
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("ignoring unreadable stored user: {e}");
                Self::default()
            }
        }
    }

    pub fn is_gated(&self) -> bool {
        self.phase != AuthPhase::Authenticated
    }

    /// Switch the gate to the registration form.
    pub fn show_register(&mut self) {
        if self.is_gated() {
            self.phase = AuthPhase::RegisterForm;
        }
    }

    /// Switch the gate to the login form.
    pub fn show_login(&mut self) {
        if self.is_gated() {
            self.phase = AuthPhase::LoginForm;
        }
    }

    /// Handle the registration form. Empty fields are silently rejected.
    /// Returns whether the user is now registered and signed in.
    pub fn submit_registration<S: KeyValueStore>(
        &mut self,
        session: &SessionStore<S>,
        name: &str,
        email: &str,
        password: &str,
        notifier: &impl Notifier,
    ) -> bool {
        let Some(user) = validate_registration(name, email, password) else {
            return false;
        };
        if let Err(e) = session.save(&user) {
            log::warn!("failed to persist registered user: {e}");
            return false;
        }
        log::info!("registered {}", user.email);
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
        notifier.alert(REGISTERED_MESSAGE);
        true
    }

    /// Handle the login form against the persisted record.
    ///
    /// On failure the user is notified and the gate stays on the login form.
    pub fn submit_login<S: KeyValueStore>(
        &mut self,
        session: &SessionStore<S>,
        email: &str,
        password: &str,
        notifier: &impl Notifier,
    ) -> Result<(), AuthError> {
        let result = Self::check_credentials(session, email.trim(), password);
        match result {
            Ok(user) => {
                log::info!("signed in {}", user.email);
                self.phase = AuthPhase::Authenticated;
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                self.phase = AuthPhase::LoginForm;
                notifier.alert(&e.to_string());
                Err(e)
            }
        }
    }

    fn check_credentials<S: KeyValueStore>(
        session: &SessionStore<S>,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let stored = match session.load() {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::UserNotFound),
            Err(e) => {
                log::warn!("stored user unreadable during login: {e}");
                return Err(AuthError::UserNotFound);
            }
        };
        if stored.email == email && stored.password == password {
            Ok(stored)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Delete the persisted record and return to the initial gated state.
    /// The caller reloads the page afterwards.
    pub fn logout<S: KeyValueStore>(&mut self, session: &SessionStore<S>) {
        if let Err(e) = session.clear() {
            log::warn!("failed to delete stored user: {e}");
        }
        log::info!("signed out");
        *self = Self::default();
    }

    pub fn profile(&self) -> ProfileView {
        ProfileView::from_user(self.user.as_ref())
    }
}
