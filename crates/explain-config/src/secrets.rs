//! Server-side secret resolution
//!
//! Secrets are looked up in the process environment. A `.env` file in the
//! working directory (or any parent) is loaded once, before the first lookup,
//! without overriding variables that are already set.

use std::sync::Once;

static DOTENV: Once = Once::new();

/// Load `.env` into the environment (only the first call does any work)
fn load_dotenv() {
    DOTENV.call_once(|| match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No .env file found"),
        Err(e) => log::warn!("Failed to load .env file: {}", e),
    });
}

/// Resolve a secret by environment variable name
///
/// Returns `None` when the variable is unset or blank, so callers can fail
/// fast with a configuration error instead of sending an empty credential.
pub fn resolve_secret(name: &str) -> Option<String> {
    load_dotenv();

    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            log::debug!("Resolved secret from env var {}", name);
            Some(value.trim().to_string())
        }
        Ok(_) => {
            log::debug!("Env var {} is set but blank", name);
            None
        }
        Err(_) => None,
    }
}
