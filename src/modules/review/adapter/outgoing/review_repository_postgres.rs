use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::bootcamp::adapter::outgoing::sea_orm_entity::bootcamps;
use crate::bootcamp::application::domain::entities::{BootcampRef, BootcampSummary};
use crate::review::application::domain::entities::Review;
use crate::review::application::domain::schema::ValidReview;
use crate::review::application::ports::outgoing::{NewReview, ReviewRepository};
use crate::shared::api::AppError;
use crate::shared::query::{apply_list_query, FieldKind, ListQuery, Page, QueryField};
use crate::shared::storage::StorageFault;

use super::sea_orm_entity::reviews::{self, ActiveModel, Column, Entity};

/// Filterable and sortable fields of `/api/v1/reviews`.
pub const REVIEW_FIELDS: [QueryField<Column>; 5] = [
    QueryField::new("title", Column::Title, FieldKind::Text),
    QueryField::new("rating", Column::Rating, FieldKind::Integer),
    QueryField::new("bootcamp", Column::BootcampId, FieldKind::Uuid),
    QueryField::new("user", Column::UserId, FieldKind::Uuid),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::Timestamp),
];

const AVERAGE_RATING: &str = "(SELECT AVG(rating)::float8 FROM reviews WHERE bootcamp_id = ?)";

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Runs after a committed write; a failure is logged, not returned, and
    /// the next write to the bootcamp repairs the value.
    async fn refresh_average_rating(&self, bootcamp_id: Uuid) {
        if let Err(e) = self.recompute_average_rating(bootcamp_id).await {
            tracing::error!(
                bootcamp_id = %bootcamp_id,
                error = %e,
                "Failed to recompute average rating"
            );
        }
    }

    async fn recompute_average_rating(&self, bootcamp_id: Uuid) -> Result<(), StorageFault> {
        bootcamps::Entity::update_many()
            .col_expr(
                bootcamps::Column::AverageRating,
                Expr::cust_with_values(AVERAGE_RATING, [bootcamp_id]),
            )
            .filter(bootcamps::Column::Id.eq(bootcamp_id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create(&self, review: NewReview) -> Result<Review, StorageFault> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            bootcamp_id: Set(review.bootcamp_id),
            user_id: Set(review.user),
            title: Set(review.fields.title),
            text: Set(review.fields.text),
            rating: Set(review.fields.rating),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await?;
        self.refresh_average_rating(inserted.bootcamp_id).await;

        let bootcamp = BootcampRef::Id(inserted.bootcamp_id);
        Ok(to_domain(inserted, bootcamp))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, StorageFault> {
        Ok(Entity::find_by_id(id)
            .find_also_related(bootcamps::Entity)
            .one(&*self.db)
            .await?
            .map(with_summary))
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Review>, AppError> {
        let select = apply_list_query(Entity::find(), query, &REVIEW_FIELDS)?;

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(StorageFault::from)?;

        let items = select
            .find_also_related(bootcamps::Entity)
            .offset(query.offset())
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(StorageFault::from)?
            .into_iter()
            .map(with_summary)
            .collect();

        Ok(Page {
            items,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn list_for_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<Review>, StorageFault> {
        Ok(Entity::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|m| to_domain(m, BootcampRef::Id(bootcamp_id)))
            .collect())
    }

    async fn update(&self, id: Uuid, fields: ValidReview) -> Result<Option<Review>, StorageFault> {
        let model = ActiveModel {
            title: Set(fields.title),
            text: Set(fields.text),
            rating: Set(fields.rating),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?;

        let Some(updated) = updated.into_iter().next() else {
            return Ok(None);
        };

        self.refresh_average_rating(updated.bootcamp_id).await;
        let bootcamp = BootcampRef::Id(updated.bootcamp_id);
        Ok(Some(to_domain(updated, bootcamp)))
    }

    async fn delete(&self, id: Uuid, bootcamp_id: Uuid) -> Result<(), StorageFault> {
        Entity::delete_by_id(id).exec(&*self.db).await?;
        self.refresh_average_rating(bootcamp_id).await;
        Ok(())
    }
}

fn with_summary((model, bootcamp): (reviews::Model, Option<bootcamps::Model>)) -> Review {
    let bootcamp = match bootcamp {
        Some(b) => BootcampRef::Summary(BootcampSummary {
            id: b.id,
            name: b.name,
            description: b.description,
        }),
        None => BootcampRef::Id(model.bootcamp_id),
    };
    to_domain(model, bootcamp)
}

fn to_domain(model: reviews::Model, bootcamp: BootcampRef) -> Review {
    Review {
        id: model.id,
        title: model.title,
        text: model.text,
        rating: model.rating,
        bootcamp,
        user: model.user_id,
        created_at: model.created_at.into(),
    }
}
