use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::domain::reset_token::ResetToken;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserChanges, UserRepository,
};
use crate::shared::api::AppError;
use crate::shared::query::{apply_list_query, FieldKind, ListQuery, Page, QueryField};
use crate::shared::storage::StorageFault;

use super::sea_orm_entity::users::{self, ActiveModel, Column, Entity};

/// Filterable and sortable fields of `/api/v1/users`.
pub const USER_FIELDS: [QueryField<Column>; 4] = [
    QueryField::new("name", Column::Name, FieldKind::Text),
    QueryField::new("email", Column::Email, FieldKind::Text),
    QueryField::new("role", Column::Role, FieldKind::Text),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::Timestamp),
];

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, user: NewUser) -> Result<User, StorageFault> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            role: Set(user.role.as_str().to_string()),
            password_hash: Set(user.password_hash),
            reset_password_token: Set(None),
            reset_password_expire: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await?;
        to_domain(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StorageFault> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageFault> {
        Entity::find()
            .filter(Column::Email.eq(email.trim()))
            .one(&*self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, StorageFault> {
        Entity::find()
            .filter(Column::ResetPasswordToken.eq(token_hash))
            .filter(Column::ResetPasswordExpire.gt(now.fixed_offset()))
            .one(&*self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<User>, AppError> {
        let select = apply_list_query(Entity::find(), query, &USER_FIELDS)?;

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(StorageFault::from)?;

        let models = select
            .offset(query.offset())
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(StorageFault::from)?;

        let items = models
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>, StorageFault> {
        let model = ActiveModel {
            name: Set(changes.name),
            email: Set(changes.email.trim().to_string()),
            role: Set(changes.role.as_str().to_string()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?;

        updated.into_iter().next().map(to_domain).transpose()
    }

    async fn set_password(&self, id: Uuid, password_hash: String) -> Result<(), StorageFault> {
        let model = ActiveModel {
            password_hash: Set(password_hash),
            reset_password_token: Set(None),
            reset_password_expire: Set(None),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: Uuid,
        token: Option<ResetToken>,
    ) -> Result<(), StorageFault> {
        let (hash, expires) = match token {
            Some(t) => (Some(t.token_hash), Some(t.expires_at.fixed_offset())),
            None => (None, None),
        };

        let model = ActiveModel {
            reset_password_token: Set(hash),
            reset_password_expire: Set(expires),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageFault> {
        Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(())
    }
}

fn to_domain(model: users::Model) -> Result<User, StorageFault> {
    let role = model
        .role
        .parse::<Role>()
        .map_err(|e| StorageFault::Unavailable(format!("user {}: {}", model.id, e)))?;

    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        role,
        password_hash: model.password_hash,
        reset_password_token: model.reset_password_token,
        reset_password_expire: model.reset_password_expire.map(Into::into),
        created_at: model.created_at.into(),
    })
}
