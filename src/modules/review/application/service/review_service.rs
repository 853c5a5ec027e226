use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::review::application::domain::entities::Review;
use crate::review::application::domain::schema::{validate_review, ReviewDraft};
use crate::review::application::ports::incoming::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, ListBootcampReviewsUseCase,
    ListReviewsUseCase, ReviewPatch, UpdateReviewUseCase,
};
use crate::review::application::ports::outgoing::{NewReview, ReviewRepository};
use crate::shared::api::{ApiError, AppError};
use crate::shared::query::{ListQuery, Page};

pub struct ReviewService<R, B>
where
    R: ReviewRepository,
    B: BootcampRepository,
{
    reviews: R,
    bootcamps: B,
}

impl<R, B> ReviewService<R, B>
where
    R: ReviewRepository,
    B: BootcampRepository,
{
    pub fn new(reviews: R, bootcamps: B) -> Self {
        Self { reviews, bootcamps }
    }

    /// Review the principal may change; `action` names the attempt.
    async fn owned(&self, principal: Principal, id: Uuid, action: &str) -> Result<Review, AppError> {
        let review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("No review with the id of {}", id)))?;

        if !principal.can_modify(review.user) {
            return Err(ApiError::unauthorized(format!("Not authorized to {} review", action)).into());
        }

        Ok(review)
    }
}

#[async_trait]
impl<R, B> ListReviewsUseCase for ReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, query: ListQuery) -> Result<Page<Review>, AppError> {
        self.reviews.list(&query).await
    }
}

#[async_trait]
impl<R, B> ListBootcampReviewsUseCase for ReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, bootcamp_id: Uuid) -> Result<Vec<Review>, AppError> {
        Ok(self.reviews.list_for_bootcamp(bootcamp_id).await?)
    }
}

#[async_trait]
impl<R, B> GetReviewUseCase for ReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Review, AppError> {
        self.reviews.find_by_id(id).await?.ok_or_else(|| {
            ApiError::not_found(format!("No review found with the id of {}", id)).into()
        })
    }
}

#[async_trait]
impl<R, B> CreateReviewUseCase for ReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        bootcamp_id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, AppError> {
        if self.bootcamps.find_by_id(bootcamp_id).await?.is_none() {
            return Err(
                ApiError::not_found(format!("No bootcamp with the id of {}", bootcamp_id)).into(),
            );
        }

        let fields = validate_review(draft)?;
        let review = self
            .reviews
            .create(NewReview {
                bootcamp_id,
                user: principal.user_id,
                fields,
            })
            .await?;

        info!(review_id = %review.id, bootcamp_id = %bootcamp_id, "Review created");
        Ok(review)
    }
}

#[async_trait]
impl<R, B> UpdateReviewUseCase for ReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, AppError> {
        let current = self.owned(principal, id, "update").await?;

        let fields = validate_review(ReviewDraft {
            title: patch.title.apply(Some(current.title)),
            text: patch.text.apply(Some(current.text)),
            rating: patch.rating.apply(Some(current.rating)),
        })?;

        let review = self
            .reviews
            .update(id, fields)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("No review with the id of {}", id)))?;

        info!(review_id = %id, "Review updated");
        Ok(review)
    }
}

#[async_trait]
impl<R, B> DeleteReviewUseCase for ReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, principal: Principal, id: Uuid) -> Result<(), AppError> {
        let review = self.owned(principal, id, "delete").await?;

        self.reviews
            .delete(id, review.bootcamp.bootcamp_id())
            .await?;
        info!(review_id = %id, "Review deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::bootcamp::application::ports::outgoing::bootcamp_repository::MockBootcampRepository;
    use crate::review::application::ports::outgoing::review_repository::MockReviewRepository;
    use crate::shared::patch::PatchField;
    use crate::shared::storage::StorageFault;
    use crate::tests::support::fixtures::{sample_bootcamp, sample_review};

    fn draft() -> ReviewDraft {
        ReviewDraft {
            title: Some("Learned a ton!".to_string()),
            text: Some("Great instructors".to_string()),
            rating: Some(9),
        }
    }

    fn existing_bootcamp() -> (MockBootcampRepository, Uuid) {
        let bootcamp = sample_bootcamp(Uuid::new_v4());
        let id = bootcamp.id;
        let mut bootcamps = MockBootcampRepository::new();
        bootcamps
            .expect_find_by_id()
            .returning(move |_| Ok(Some(bootcamp.clone())));
        (bootcamps, id)
    }

    fn reviews_with(stored: Review) -> MockReviewRepository {
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        reviews
    }

    #[tokio::test]
    async fn test_user_reviews_bootcamp() {
        let (bootcamps, bootcamp_id) = existing_bootcamp();
        let author = Uuid::new_v4();
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_create()
            .withf(move |r| r.user == author && r.bootcamp_id == bootcamp_id && r.fields.rating == 9)
            .times(1)
            .returning(move |_| Ok(sample_review(author, bootcamp_id)));

        let review = CreateReviewUseCase::execute(
            &ReviewService::new(reviews, bootcamps),
            Principal::new(author, Role::User),
            bootcamp_id,
            draft(),
        )
        .await
        .unwrap();

        assert_eq!(review.user, author);
    }

    #[tokio::test]
    async fn test_second_review_is_conflict() {
        let (bootcamps, bootcamp_id) = existing_bootcamp();
        let mut reviews = MockReviewRepository::new();
        reviews.expect_create().returning(|_| {
            Err(StorageFault::Duplicate(
                "reviews_bootcamp_id_user_id_key".to_string(),
            ))
        });

        let err = CreateReviewUseCase::execute(
            &ReviewService::new(reviews, bootcamps),
            Principal::new(Uuid::new_v4(), Role::User),
            bootcamp_id,
            draft(),
        )
        .await
        .unwrap_err();

        let value = err.normalize();
        assert_eq!(value.status.as_u16(), 409);
        assert_eq!(value.message, "Duplicate field value entered");
    }

    #[tokio::test]
    async fn test_review_of_missing_bootcamp() {
        let mut bootcamps = MockBootcampRepository::new();
        bootcamps.expect_find_by_id().returning(|_| Ok(None));
        let mut reviews = MockReviewRepository::new();
        reviews.expect_create().times(0);
        let bootcamp_id = Uuid::new_v4();

        let err = CreateReviewUseCase::execute(
            &ReviewService::new(reviews, bootcamps),
            Principal::new(Uuid::new_v4(), Role::User),
            bootcamp_id,
            draft(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.normalize().message,
            format!("No bootcamp with the id of {}", bootcamp_id)
        );
    }

    #[tokio::test]
    async fn test_get_missing_review() {
        let mut reviews = MockReviewRepository::new();
        reviews.expect_find_by_id().returning(|_| Ok(None));
        let id = Uuid::new_v4();

        let err = GetReviewUseCase::execute(
            &ReviewService::new(reviews, MockBootcampRepository::new()),
            id,
        )
        .await
        .unwrap_err();

        let value = err.normalize();
        assert_eq!(value.status.as_u16(), 404);
        assert_eq!(value.message, format!("No review found with the id of {}", id));
    }

    #[tokio::test]
    async fn test_author_updates_rating() {
        let author = Uuid::new_v4();
        let stored = sample_review(author, Uuid::new_v4());
        let id = stored.id;
        let mut reviews = reviews_with(stored.clone());
        reviews
            .expect_update()
            .withf(|_, f| f.rating == 3 && f.title == "Learned a ton!")
            .times(1)
            .returning(move |_, f| {
                Ok(Some(Review {
                    rating: f.rating,
                    ..stored.clone()
                }))
            });

        let review = UpdateReviewUseCase::execute(
            &ReviewService::new(reviews, MockBootcampRepository::new()),
            Principal::new(author, Role::User),
            id,
            ReviewPatch {
                rating: PatchField::Value(3),
                ..ReviewPatch::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(review.rating, 3);
    }

    #[tokio::test]
    async fn test_other_user_cannot_update() {
        let stored = sample_review(Uuid::new_v4(), Uuid::new_v4());
        let id = stored.id;
        let mut reviews = reviews_with(stored);
        reviews.expect_update().times(0);

        let err = UpdateReviewUseCase::execute(
            &ReviewService::new(reviews, MockBootcampRepository::new()),
            Principal::new(Uuid::new_v4(), Role::User),
            id,
            ReviewPatch::default(),
        )
        .await
        .unwrap_err();

        let value = err.normalize();
        assert_eq!(value.status.as_u16(), 401);
        assert_eq!(value.message, "Not authorized to update review");
    }

    #[tokio::test]
    async fn test_update_missing_review() {
        let mut reviews = MockReviewRepository::new();
        reviews.expect_find_by_id().returning(|_| Ok(None));
        let id = Uuid::new_v4();

        let err = UpdateReviewUseCase::execute(
            &ReviewService::new(reviews, MockBootcampRepository::new()),
            Principal::new(Uuid::new_v4(), Role::Admin),
            id,
            ReviewPatch::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.normalize().message,
            format!("No review with the id of {}", id)
        );
    }

    #[tokio::test]
    async fn test_admin_deletes_any_review() {
        let bootcamp_id = Uuid::new_v4();
        let stored = sample_review(Uuid::new_v4(), bootcamp_id);
        let id = stored.id;
        let mut reviews = reviews_with(stored);
        reviews
            .expect_delete()
            .withf(move |r, b| *r == id && *b == bootcamp_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let result = DeleteReviewUseCase::execute(
            &ReviewService::new(reviews, MockBootcampRepository::new()),
            Principal::new(Uuid::new_v4(), Role::Admin),
            id,
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_other_user_cannot_delete() {
        let stored = sample_review(Uuid::new_v4(), Uuid::new_v4());
        let id = stored.id;
        let mut reviews = reviews_with(stored);
        reviews.expect_delete().times(0);

        let err = DeleteReviewUseCase::execute(
            &ReviewService::new(reviews, MockBootcampRepository::new()),
            Principal::new(Uuid::new_v4(), Role::User),
            id,
        )
        .await
        .unwrap_err();

        assert_eq!(err.normalize().message, "Not authorized to delete review");
    }
}
