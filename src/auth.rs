//! Authentication collaborator boundary.
//!
//! The login flow itself (OAuth dance, prompts) lives outside this crate; all
//! the core ever receives is an opaque credential string on success. While a
//! session is unauthenticated the calendar core is simply never invoked.

use log::{error, info};

use crate::{CalError, Result};

/// Opaque credential token. The core stores it and never inspects it.
pub type Credential = String;

/// Source of a credential; the seam where a real login flow plugs in.
pub trait Authenticator {
    fn login(&self) -> Result<Credential>;
}

/// Authenticator backed by a token handed over out of band, e.g. a CLI flag
/// or the `MYCAL_TOKEN` environment variable.
pub struct TokenAuthenticator {
    token: Option<String>,
}

impl TokenAuthenticator {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Prefers an explicitly supplied token, falling back to `MYCAL_TOKEN`.
    pub fn from_env(token: Option<String>) -> Self {
        Self::new(token.or_else(|| std::env::var("MYCAL_TOKEN").ok()))
    }
}

impl Authenticator for TokenAuthenticator {
    fn login(&self) -> Result<Credential> {
        self.token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| CalError::AuthFailed {
                message: "no credential supplied".to_string(),
            })
    }
}

/// Tracks whether this session has logged in and the credential it received.
#[derive(Debug, Default)]
pub struct AuthState {
    token: Option<Credential>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Runs the collaborator's login. The credential is stored on success;
    /// on failure the state is left untouched and stays unauthenticated.
    pub fn handle_login(&mut self, authenticator: &dyn Authenticator) -> Result<()> {
        match authenticator.login() {
            Ok(token) => {
                info!("Login succeeded");
                self.token = Some(token);
                Ok(())
            }
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        }
    }
}
