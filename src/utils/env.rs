//! Execution profile handling.
//!
//! The profile comes from `CLOUDY_CLIP_EXECUTION_PROFILE` and selects which
//! `.env.<profile>` file is loaded at startup.

use std::env;

pub const EXECUTION_PROFILE_VAR: &str = "CLOUDY_CLIP_EXECUTION_PROFILE";

pub fn execution_profile() -> String {
    env::var(EXECUTION_PROFILE_VAR).unwrap_or_else(|_| "development".to_string())
}

pub fn is_development() -> bool {
    execution_profile() != "production"
}

/// Load `.env.<profile>` into the process environment if the file exists.
/// Development runs work without one; packaged builds ship theirs.
pub fn load_profile_env() {
    let env_file_name = format!(".env.{}", execution_profile());
    if dotenvy::from_filename(&env_file_name).is_err() {
        log::debug!(
            "no {} file found, using the process environment as-is",
            env_file_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_to_development() {
        if env::var(EXECUTION_PROFILE_VAR).is_err() {
            assert!(is_development());
        }
    }
}
