use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::bootcamp::application::domain::entities::{
    Bootcamp, BootcampRef, BootcampWithCourses, DEFAULT_PHOTO,
};
use crate::bootcamp::application::ports::outgoing::{
    BootcampChanges, BootcampRepository, NewBootcamp,
};
use crate::course::adapter::outgoing::course_repository_postgres::course_from_model;
use crate::course::adapter::outgoing::sea_orm_entity::courses;
use crate::course::application::domain::entities::Course;
use crate::geocoding::application::domain::entities::GeoLocation;
use crate::shared::api::AppError;
use crate::shared::query::{apply_list_query, FieldKind, ListQuery, Page, QueryField};
use crate::shared::storage::StorageFault;

use super::sea_orm_entity::bootcamps::{self, ActiveModel, Column, Entity};

/// Filterable and sortable fields of `/api/v1/bootcamps`.
pub const BOOTCAMP_FIELDS: [QueryField<Column>; 14] = [
    QueryField::new("name", Column::Name, FieldKind::Text),
    QueryField::new("slug", Column::Slug, FieldKind::Text),
    QueryField::new("careers", Column::Careers, FieldKind::Tags),
    QueryField::new("averageRating", Column::AverageRating, FieldKind::Float),
    QueryField::new("averageCost", Column::AverageCost, FieldKind::Integer),
    QueryField::new("housing", Column::Housing, FieldKind::Boolean),
    QueryField::new("jobAssistance", Column::JobAssistance, FieldKind::Boolean),
    QueryField::new("jobGuarantee", Column::JobGuarantee, FieldKind::Boolean),
    QueryField::new("acceptGi", Column::AcceptGi, FieldKind::Boolean),
    QueryField::new("location.city", Column::City, FieldKind::Text),
    QueryField::new("location.state", Column::State, FieldKind::Text),
    QueryField::new("location.zipcode", Column::Zipcode, FieldKind::Text),
    QueryField::new("user", Column::UserId, FieldKind::Uuid),
    QueryField::new("createdAt", Column::CreatedAt, FieldKind::Timestamp),
];

/// Central angle between the stored point and the centre, clamped so
/// rounding never pushes `acos` out of its domain.
const CENTRAL_ANGLE_WITHIN: &str = "acos(LEAST(1.0, GREATEST(-1.0, \
    sin(radians(?)) * sin(radians(latitude)) + \
    cos(radians(?)) * cos(radians(latitude)) * cos(radians(longitude) - radians(?))))) <= ?";

#[derive(Clone, Debug)]
pub struct BootcampRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BootcampRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn courses_of(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, Vec<Course>>, StorageFault> {
        let mut grouped: HashMap<Uuid, Vec<Course>> = HashMap::new();
        if ids.is_empty() {
            return Ok(grouped);
        }

        let models = courses::Entity::find()
            .filter(courses::Column::BootcampId.is_in(ids))
            .order_by_asc(courses::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        for model in models {
            let bootcamp_id = model.bootcamp_id;
            let course = course_from_model(model, BootcampRef::Id(bootcamp_id))?;
            grouped.entry(bootcamp_id).or_default().push(course);
        }

        Ok(grouped)
    }
}

#[async_trait]
impl BootcampRepository for BootcampRepositoryPostgres {
    async fn create(&self, bootcamp: NewBootcamp) -> Result<Bootcamp, StorageFault> {
        let location = bootcamp.location;
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(bootcamp.user),
            name: Set(bootcamp.name),
            slug: Set(bootcamp.slug),
            description: Set(bootcamp.description),
            website: Set(bootcamp.website),
            phone: Set(bootcamp.phone),
            email: Set(bootcamp.email),
            latitude: Set(Some(location.latitude)),
            longitude: Set(Some(location.longitude)),
            formatted_address: Set(Some(location.formatted_address)),
            street: Set(Some(location.street)),
            city: Set(Some(location.city)),
            state: Set(Some(location.state)),
            zipcode: Set(Some(location.zipcode)),
            country: Set(Some(location.country)),
            careers: Set(serde_json::json!(bootcamp.careers)),
            average_rating: Set(None),
            average_cost: Set(None),
            photo: Set(DEFAULT_PHOTO.to_string()),
            housing: Set(bootcamp.housing),
            job_assistance: Set(bootcamp.job_assistance),
            job_guarantee: Set(bootcamp.job_guarantee),
            accept_gi: Set(bootcamp.accept_gi),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await?;
        to_domain(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bootcamp>, StorageFault> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn exists_for_owner(&self, user_id: Uuid) -> Result<bool, StorageFault> {
        let owned = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .count(&*self.db)
            .await?;
        Ok(owned > 0)
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<BootcampWithCourses>, AppError> {
        let select = apply_list_query(Entity::find(), query, &BOOTCAMP_FIELDS)?;

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(StorageFault::from)?;

        let bootcamps = select
            .offset(query.offset())
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(StorageFault::from)?
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        let mut courses = self
            .courses_of(bootcamps.iter().map(|b| b.id).collect())
            .await?;

        let items = bootcamps
            .into_iter()
            .map(|bootcamp| BootcampWithCourses {
                courses: courses.remove(&bootcamp.id).unwrap_or_default(),
                bootcamp,
            })
            .collect();

        Ok(Page {
            items,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn within_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Vec<Bootcamp>, StorageFault> {
        Entity::find()
            .filter(Column::Latitude.is_not_null())
            .filter(Column::Longitude.is_not_null())
            .filter(Expr::cust_with_values(
                CENTRAL_ANGLE_WITHIN,
                [latitude, latitude, longitude, radius],
            ))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn update(
        &self,
        id: Uuid,
        changes: BootcampChanges,
    ) -> Result<Option<Bootcamp>, StorageFault> {
        let mut model = ActiveModel {
            name: Set(changes.name),
            slug: Set(changes.slug),
            description: Set(changes.description),
            website: Set(changes.website),
            phone: Set(changes.phone),
            email: Set(changes.email),
            careers: Set(serde_json::json!(changes.careers)),
            housing: Set(changes.housing),
            job_assistance: Set(changes.job_assistance),
            job_guarantee: Set(changes.job_guarantee),
            accept_gi: Set(changes.accept_gi),
            ..Default::default()
        };

        if let Some(location) = changes.location {
            model.latitude = Set(Some(location.latitude));
            model.longitude = Set(Some(location.longitude));
            model.formatted_address = Set(Some(location.formatted_address));
            model.street = Set(Some(location.street));
            model.city = Set(Some(location.city));
            model.state = Set(Some(location.state));
            model.zipcode = Set(Some(location.zipcode));
            model.country = Set(Some(location.country));
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?;

        updated.into_iter().next().map(to_domain).transpose()
    }

    async fn set_photo(&self, id: Uuid, photo: &str) -> Result<(), StorageFault> {
        let model = ActiveModel {
            photo: Set(photo.to_string()),
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

fn to_domain(model: bootcamps::Model) -> Result<Bootcamp, StorageFault> {
    let careers: Vec<String> = serde_json::from_value(model.careers)
        .map_err(|e| StorageFault::Unavailable(format!("bootcamp {} careers: {}", model.id, e)))?;

    let location = match (model.latitude, model.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoLocation {
            latitude,
            longitude,
            formatted_address: model.formatted_address.unwrap_or_default(),
            street: model.street.unwrap_or_default(),
            city: model.city.unwrap_or_default(),
            state: model.state.unwrap_or_default(),
            zipcode: model.zipcode.unwrap_or_default(),
            country: model.country.unwrap_or_default(),
        }),
        _ => None,
    };

    Ok(Bootcamp {
        id: model.id,
        user: model.user_id,
        name: model.name,
        slug: model.slug,
        description: model.description,
        website: model.website,
        phone: model.phone,
        email: model.email,
        location,
        careers,
        average_rating: model.average_rating,
        average_cost: model.average_cost,
        photo: model.photo,
        housing: model.housing,
        job_assistance: model.job_assistance,
        job_guarantee: model.job_guarantee,
        accept_gi: model.accept_gi,
        created_at: model.created_at.into(),
    })
}
