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
use crate::course::application::domain::entities::{Course, Skill};
use crate::course::application::domain::schema::ValidCourse;
use crate::course::application::ports::outgoing::{CourseRepository, NewCourse};
use crate::shared::api::AppError;
use crate::shared::query::{apply_list_query, FieldKind, ListQuery, Page, QueryField};
use crate::shared::storage::StorageFault;

use super::sea_orm_entity::courses::{self, ActiveModel, Column, Entity};

/// Filterable and sortable fields of `/api/v1/courses`.
pub const COURSE_FIELDS: [QueryField<Column>; 8] = [
    QueryField::new("title", Column::Title, FieldKind::Text),
    QueryField::new("weeks", Column::Weeks, FieldKind::Text),
    QueryField::new("tuition", Column::Tuition, FieldKind::Integer),
    QueryField::new("minimumSkill", Column::MinimumSkill, FieldKind::Text),
    QueryField::new("scholarshipAvailable", Column::ScholarshipAvailable, FieldKind::Boolean),
    QueryField::new("bootcamp", Column::BootcampId, FieldKind::Uuid),
    QueryField::new("user", Column::UserId, FieldKind::Uuid),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::Timestamp),
];

const AVERAGE_COST: &str =
    "(SELECT (CEIL(AVG(tuition) / 10.0) * 10)::int FROM courses WHERE bootcamp_id = ?)";

#[derive(Clone, Debug)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Runs after a committed write; a failure is logged, not returned, and
    /// the next write to the bootcamp repairs the value.
    async fn refresh_average_cost(&self, bootcamp_id: Uuid) {
        if let Err(e) = self.recompute_average_cost(bootcamp_id).await {
            tracing::error!(
                bootcamp_id = %bootcamp_id,
                error = %e,
                "Failed to recompute average cost"
            );
        }
    }

    async fn recompute_average_cost(&self, bootcamp_id: Uuid) -> Result<(), StorageFault> {
        bootcamps::Entity::update_many()
            .col_expr(
                bootcamps::Column::AverageCost,
                Expr::cust_with_values(AVERAGE_COST, [bootcamp_id]),
            )
            .filter(bootcamps::Column::Id.eq(bootcamp_id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create(&self, course: NewCourse) -> Result<Course, StorageFault> {
        let fields = course.fields;
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            bootcamp_id: Set(course.bootcamp_id),
            user_id: Set(course.user),
            title: Set(fields.title),
            description: Set(fields.description),
            weeks: Set(fields.weeks),
            tuition: Set(fields.tuition),
            minimum_skill: Set(fields.minimum_skill.as_str().to_string()),
            scholarship_available: Set(fields.scholarship_available),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await?;
        self.refresh_average_cost(inserted.bootcamp_id).await;

        let bootcamp = BootcampRef::Id(inserted.bootcamp_id);
        course_from_model(inserted, bootcamp)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, StorageFault> {
        Entity::find_by_id(id)
            .find_also_related(bootcamps::Entity)
            .one(&*self.db)
            .await?
            .map(with_summary)
            .transpose()
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Course>, AppError> {
        let select = apply_list_query(Entity::find(), query, &COURSE_FIELDS)?;

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(StorageFault::from)?;

        let rows = select
            .find_also_related(bootcamps::Entity)
            .offset(query.offset())
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(StorageFault::from)?;

        let items = rows
            .into_iter()
            .map(with_summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn list_for_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<Course>, StorageFault> {
        Entity::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|m| course_from_model(m, BootcampRef::Id(bootcamp_id)))
            .collect()
    }

    async fn update(&self, id: Uuid, fields: ValidCourse) -> Result<Option<Course>, StorageFault> {
        let model = ActiveModel {
            title: Set(fields.title),
            description: Set(fields.description),
            weeks: Set(fields.weeks),
            tuition: Set(fields.tuition),
            minimum_skill: Set(fields.minimum_skill.as_str().to_string()),
            scholarship_available: Set(fields.scholarship_available),
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

        self.refresh_average_cost(updated.bootcamp_id).await;
        let bootcamp = BootcampRef::Id(updated.bootcamp_id);
        course_from_model(updated, bootcamp).map(Some)
    }

    async fn delete(&self, id: Uuid, bootcamp_id: Uuid) -> Result<(), StorageFault> {
        Entity::delete_by_id(id).exec(&*self.db).await?;
        self.refresh_average_cost(bootcamp_id).await;
        Ok(())
    }
}

fn with_summary(
    (model, bootcamp): (courses::Model, Option<bootcamps::Model>),
) -> Result<Course, StorageFault> {
    let bootcamp = match bootcamp {
        Some(b) => BootcampRef::Summary(BootcampSummary {
            id: b.id,
            name: b.name,
            description: b.description,
        }),
        None => BootcampRef::Id(model.bootcamp_id),
    };
    course_from_model(model, bootcamp)
}

pub(crate) fn course_from_model(
    model: courses::Model,
    bootcamp: BootcampRef,
) -> Result<Course, StorageFault> {
    let minimum_skill = model
        .minimum_skill
        .parse::<Skill>()
        .map_err(|e| StorageFault::Unavailable(format!("course {}: {}", model.id, e)))?;

    Ok(Course {
        id: model.id,
        title: model.title,
        description: model.description,
        weeks: model.weeks,
        tuition: model.tuition,
        minimum_skill,
        scholarship_available: model.scholarship_available,
        bootcamp,
        user: model.user_id,
        created_at: model.created_at.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{bootcamp_model, course_model};
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn fields() -> ValidCourse {
        ValidCourse {
            title: "Front End Web Development".to_string(),
            description: "HTML, CSS and JavaScript".to_string(),
            weeks: "8".to_string(),
            tuition: 8000,
            minimum_skill: Skill::Beginner,
            scholarship_available: false,
        }
    }

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn repo(db: MockDatabase) -> CourseRepositoryPostgres {
        CourseRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_create_recomputes_average_cost() {
        let bootcamp_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(bootcamp_id, 8000)]])
            .append_exec_results(vec![exec_ok()]);
        let courses = repo(db);

        let course = courses
            .create(NewCourse {
                bootcamp_id,
                user: Uuid::new_v4(),
                fields: fields(),
            })
            .await
            .unwrap();

        assert_eq!(course.bootcamp, BootcampRef::Id(bootcamp_id));

        let log = Arc::try_unwrap(courses.db)
            .unwrap()
            .into_transaction_log();
        let recompute = format!("{:?}", log[1]);
        assert!(recompute.contains("bootcamps"), "{}", recompute);
        assert!(recompute.contains("AVG(tuition)"), "{}", recompute);
    }

    #[tokio::test]
    async fn test_create_still_answers_course_when_recompute_fails() {
        let bootcamp_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(bootcamp_id, 8000)]])
            .append_exec_errors(vec![DbErr::Custom("connection reset".to_string())]);

        let course = repo(db)
            .create(NewCourse {
                bootcamp_id,
                user: Uuid::new_v4(),
                fields: fields(),
            })
            .await
            .unwrap();

        assert_eq!(course.tuition, 8000);
    }

    #[tokio::test]
    async fn test_find_by_id_embeds_summary() {
        let bootcamp = bootcamp_model(Uuid::new_v4());
        let course = course_model(bootcamp.id, 8000);
        let id = course.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(course, Some(bootcamp.clone()))]]);

        let found = repo(db).find_by_id(id).await.unwrap().unwrap();

        match found.bootcamp {
            BootcampRef::Summary(summary) => assert_eq!(summary.name, bootcamp.name),
            other => panic!("expected summary, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_counts_then_pages() {
        let bootcamp = bootcamp_model(Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(1)),
            )])]])
            .append_query_results(vec![vec![(
                course_model(bootcamp.id, 8000),
                Some(bootcamp.clone()),
            )]]);

        let page = repo(db).list(&ListQuery::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].tuition, 8000);
    }

    #[tokio::test]
    async fn test_stored_skill_must_be_known() {
        let mut model = course_model(Uuid::new_v4(), 8000);
        model.minimum_skill = "expert".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]]);

        let err = repo(db)
            .list_for_bootcamp(Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, StorageFault::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_update_missing_course_skips_recompute() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<courses::Model>::new()]);

        let updated = repo(db).update(Uuid::new_v4(), fields()).await.unwrap();

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_recomputes_average_cost() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_ok(), exec_ok()]);

        let result = repo(db).delete(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(result.is_ok());
    }
}
