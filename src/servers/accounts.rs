use crate::messages::bb::AuthenticationStatus;
use std::collections::HashMap;

/// Decides the outcome of an `Authenticate` request.
#[derive(Debug, Clone, Default)]
pub enum AuthPolicy {
    /// Every login succeeds. Used when no accounts are configured.
    #[default]
    AcceptAll,
    /// username -> password
    Accounts(HashMap<String, String>),
}

impl AuthPolicy {
    pub fn from_accounts<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let map: HashMap<String, String> = accounts.into_iter().collect();
        if map.is_empty() {
            Self::AcceptAll
        } else {
            Self::Accounts(map)
        }
    }

    pub fn check(&self, username: &str, password: &str) -> AuthenticationStatus {
        match self {
            Self::AcceptAll => AuthenticationStatus::Success,
            Self::Accounts(map) => match map.get(username) {
                None => AuthenticationStatus::UnknownUser,
                Some(expected) if expected == password => AuthenticationStatus::Success,
                Some(_) => AuthenticationStatus::Error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        assert_eq!(
            AuthPolicy::AcceptAll.check("anyone", ""),
            AuthenticationStatus::Success
        );
    }

    #[test]
    fn test_accounts_policy() {
        let policy = AuthPolicy::from_accounts([("alice".to_string(), "pw".to_string())]);
        assert_eq!(policy.check("alice", "pw"), AuthenticationStatus::Success);
        assert_eq!(policy.check("alice", "nope"), AuthenticationStatus::Error);
        assert_eq!(policy.check("bob", "pw"), AuthenticationStatus::UnknownUser);
    }

    #[test]
    fn test_empty_accounts_accept_all() {
        let policy = AuthPolicy::from_accounts(Vec::new());
        assert!(matches!(policy, AuthPolicy::AcceptAll));
    }
}
