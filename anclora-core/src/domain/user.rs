//! User domain model

use serde::{Deserialize, Serialize};

/// An account record: the owner side of every domain table's `user_id`
/// reference. An email resolves to at most one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
}

impl User {
    pub fn new(id: i32, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(7, "test@example.com");
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "test@example.com");
    }
}
