//! Credential check for the single configured account.

use crate::config::Config;
use subtle::ConstantTimeEq;

/// Exact, case-sensitive match against the configured username and password.
///
/// Both fields are always compared so the timing does not reveal which one
/// was wrong.
pub fn check_credentials(config: &Config, username: &str, password: &str) -> bool {
    let user_ok = username.as_bytes().ct_eq(config.username.as_bytes());
    let pass_ok = password.as_bytes().ct_eq(config.password.as_bytes());
    bool::from(user_ok & pass_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::local("admin", "password123")
    }

    #[test]
    fn test_exact_match() {
        assert!(check_credentials(&config(), "admin", "password123"));
    }

    #[test]
    fn test_wrong_password() {
        assert!(!check_credentials(&config(), "admin", "password124"));
        assert!(!check_credentials(&config(), "admin", ""));
    }

    #[test]
    fn test_wrong_username() {
        assert!(!check_credentials(&config(), "root", "password123"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!check_credentials(&config(), "Admin", "password123"));
        assert!(!check_credentials(&config(), "admin", "PASSWORD123"));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        assert!(!check_credentials(&config(), "admin", "password"));
        assert!(!check_credentials(&config(), "admin", "password1234"));
        assert!(!check_credentials(&config(), "adm", "password123"));
    }
}
