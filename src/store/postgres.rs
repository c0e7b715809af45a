use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryOrder,
};
use std::time::Duration;

use entity::prelude::Users;
use entity::users;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User};

/// PostgreSQL-backed store.
///
/// Connections are not pooled: every operation opens its own connection and closes it when done.
#[derive(Debug, Clone)]
pub(crate) struct PgUserStore {
    database_url: String,
    connect_timeout: Duration,
}

impl PgUserStore {
    pub(crate) fn new(database_url: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            database_url: database_url.into(),
            connect_timeout,
        }
    }

    async fn connect(&self) -> Result<DatabaseConnection, StoreError> {
        let mut options = ConnectOptions::new(self.database_url.clone());
        options
            .max_connections(1)
            .min_connections(0)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(false);

        Database::connect(options).await.map_err(|e| {
            tracing::error!("Database connection failed: {}", e);
            StoreError::Unreachable(e.to_string())
        })
    }
}

async fn release(db: DatabaseConnection) {
    if let Err(e) = db.close().await {
        tracing::debug!("Closing database connection failed: {:?}", e);
    }
}

/// Run `op` on a fresh connection, closing it afterwards whatever the outcome.
async fn with_connection<T, F, Fut>(store: &PgUserStore, op: F) -> Result<T, StoreError>
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: std::future::Future<Output = (DatabaseConnection, Result<T, DbErr>)>,
{
    let db = store.connect().await?;
    let (db, result) = op(db).await;
    release(db).await;
    result.map_err(StoreError::from)
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        with_connection(self, |db| async move {
            let result = db.execute_unprepared(users::CREATE_TABLE_SQL).await;
            (db, result.map(|_| ()))
        })
        .await
    }

    async fn check_connectivity(&self) -> Result<(), StoreError> {
        with_connection(self, |db| async move {
            let result = db.execute_unprepared("SELECT 1").await;
            (db, result.map(|_| ()))
        })
        .await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let models = with_connection(self, |db| async move {
            let result = Users::find()
                .order_by_desc(users::Column::CreatedAt)
                .order_by_desc(users::Column::Id)
                .all(&db)
                .await;
            (db, result)
        })
        .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let model = with_connection(self, |db| async move {
            let result = users::ActiveModel {
                name: ActiveValue::Set(new_user.name),
                email: ActiveValue::Set(new_user.email),
                ..Default::default()
            }
            .insert(&db)
            .await;
            (db, result)
        })
        .await?;

        Ok(model.into())
    }
}
