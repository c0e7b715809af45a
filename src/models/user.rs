use chrono::NaiveDateTime;
use serde::Serialize;

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct User {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) email: String,
    /// Assigned by the store at insertion time
    pub(crate) created_at: Option<NaiveDateTime>,
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewUser {
    pub(crate) name: String,
    pub(crate) email: String,
}

/// Placeholder user shown while running without a database.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct DemoUser {
    pub(crate) id: i32,
    pub(crate) name: &'static str,
    pub(crate) email: &'static str,
}

pub(crate) const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        id: 1,
        name: "Demo User 1",
        email: "demo1@example.com",
    },
    DemoUser {
        id: 2,
        name: "Demo User 2",
        email: "demo2@example.com",
    },
];
