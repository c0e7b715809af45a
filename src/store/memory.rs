//! In-memory store used by tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User};

#[derive(Debug)]
pub(crate) struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    reachable: AtomicBool,
}

impl MemoryUserStore {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            reachable: AtomicBool::new(true),
        }
    }

    /// A store that refuses every operation.
    pub(crate) fn unreachable() -> Self {
        let store = Self::new();
        store.set_reachable(false);
        store
    }

    pub(crate) fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub(crate) async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    fn ensure_reachable(&self) -> Result<(), StoreError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unreachable("connection refused".into()))
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        self.ensure_reachable()
    }

    async fn check_connectivity(&self) -> Result<(), StoreError> {
        self.ensure_reachable()
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.ensure_reachable()?;
        let mut users = self.users.lock().await.clone();
        users.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(users)
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.ensure_reachable()?;
        let mut users = self.users.lock().await;

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateKey(format!(
                "Key (email)=({}) already exists.",
                new_user.email
            )));
        }

        let id = users.len() as i32 + 1;
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            created_at: Some(timestamp(id)),
        };
        users.push(user.clone());
        Ok(user)
    }
}

// one second apart so ordering by creation time is deterministic
fn timestamp(id: i32) -> NaiveDateTime {
    DateTime::from_timestamp(1_700_000_000 + i64::from(id), 0)
        .unwrap()
        .naive_utc()
}
