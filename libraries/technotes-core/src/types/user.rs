/// User domain types
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Stored user account, including the password hash
///
/// Never serialized into responses; convert to [`PublicUser`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across the collection
    pub username: String,

    /// bcrypt hash of the password
    pub password: String,

    /// Role labels, in the order they were given
    pub roles: Vec<String>,

    /// Whether the account is enabled
    pub active: bool,
}

impl User {
    /// Build the stored record for a freshly created user
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            password: new_user.password,
            roles: new_user.roles,
            active: true,
        }
    }
}

/// User as returned by read operations (no password field)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique user identifier
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Role labels
    pub roles: Vec<String>,
    /// Whether the account is enabled
    pub active: bool,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            roles: user.roles,
            active: user.active,
        }
    }
}

/// Data for inserting a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login name, checked for uniqueness before insert
    pub username: String,

    /// Already hashed password
    pub password: String,

    /// Role labels; never empty
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_users_are_active() {
        let user = User::from_new(
            UserId::new("u1"),
            NewUser {
                username: "alice".to_string(),
                password: "hash".to_string(),
                roles: vec!["Employee".to_string()],
            },
        );

        assert!(user.active);
        assert_eq!(user.roles, vec!["Employee".to_string()]);
    }

    #[test]
    fn public_user_has_no_password_field() {
        let user = User {
            id: UserId::new("u1"),
            username: "alice".to_string(),
            password: "$2b$10$secret".to_string(),
            roles: vec!["Manager".to_string()],
            active: false,
        };

        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["active"], false);
    }
}
