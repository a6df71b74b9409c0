//! User service
//!
//! Handles user registration, listings, and profile lookups.

use blog_core::entities::User;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreateUserRequest, PostSummaryResponse, UserDetailResponse, UserListItemResponse,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::logging::LogFailure;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user
    ///
    /// Only the identity invariants are checked here; the username length rule
    /// belongs to the request validator.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        User::validate_identity(&request.email, &request.username).log_failure("user", "create")?;

        let mut user = User::new(request.email, request.username);
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.bio = request.bio;
        user.avatar_url = request.avatar_url;
        user.is_admin = request.is_admin;

        self.ctx
            .user_repo()
            .create(&user)
            .await
            .log_failure("user", "create")?;

        info!(user_id = %user.id, "User created");
        Ok(UserResponse::from(&user))
    }

    /// All users, newest first, with post and comment counts
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<UserListItemResponse>> {
        let users = self
            .ctx
            .user_repo()
            .find_all_with_activity()
            .await
            .log_failure("user", "find_all")?;

        Ok(users.into_iter().map(UserListItemResponse::from).collect())
    }

    /// One user with post summaries and counts, or `None` when absent
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<UserDetailResponse>> {
        let Some(user) = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await
            .log_failure("user", "find_by_id")?
        else {
            debug!(user_id = %id, "User not found");
            return Ok(None);
        };

        let posts = self
            .ctx
            .post_repo()
            .find_summaries_by_author(id)
            .await
            .log_failure("user", "find_by_id")?;
        let activity = self
            .ctx
            .user_repo()
            .activity(id)
            .await
            .log_failure("user", "find_by_id")?;

        Ok(Some(UserDetailResponse {
            user: UserResponse::from(&user),
            posts: posts.into_iter().map(PostSummaryResponse::from).collect(),
            count: activity.into(),
        }))
    }

    /// Total number of users
    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        self.ctx.user_repo().count().await.log_failure("user", "count")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{context, create_post, create_user, user_request};
    use crate::services::ServiceError;
    use blog_core::DomainError;

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let ctx = context();
        let service = UserService::new(&ctx);
        service.create(user_request("alice")).await.unwrap();

        let mut dup = user_request("alice2");
        dup.email = "alice@example.com".to_string();
        let err = service.create(dup).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(err.client_message(), "Email or username already exists");
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let ctx = context();
        let service = UserService::new(&ctx);
        service.create(user_request("alice")).await.unwrap();

        let mut dup = user_request("bob");
        dup.username = "alice".to_string();
        let err = service.create(dup).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_distinct_users_both_succeed() {
        let ctx = context();
        let service = UserService::new(&ctx);
        service.create(user_request("alice")).await.unwrap();
        service.create(user_request("bob")).await.unwrap();
        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_defaults_to_non_admin() {
        let ctx = context();
        let user = create_user(&ctx, "alice").await;
        assert!(!user.is_admin);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_identity() {
        let ctx = context();
        let service = UserService::new(&ctx);

        let mut bad_email = user_request("alice");
        bad_email.email = "nope".to_string();
        assert_eq!(service.create(bad_email).await.unwrap_err().status_code(), 400);

        // Short names pass here; only blank names are rejected by the service
        let mut blank = user_request("alice");
        blank.username = "  ".to_string();
        assert_eq!(service.create(blank).await.unwrap_err().status_code(), 400);

        service.create(user_request("al")).await.unwrap();
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let ctx = context();
        let found = UserService::new(&ctx).find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_includes_posts_and_counts() {
        let ctx = context();
        let user = create_user(&ctx, "alice").await;
        create_post(&ctx, "first", user.id).await;
        create_post(&ctx, "second", user.id).await;

        let detail = UserService::new(&ctx)
            .find_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.posts.len(), 2);
        assert_eq!(detail.posts[0].slug, "second");
        assert_eq!(detail.count.posts, 2);
        assert_eq!(detail.count.comments, 0);
    }

    #[tokio::test]
    async fn test_find_all_newest_first_with_counts() {
        let ctx = context();
        let alice = create_user(&ctx, "alice").await;
        create_user(&ctx, "bob").await;
        create_post(&ctx, "hello", alice.id).await;

        let users = UserService::new(&ctx).find_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user.username, "bob");
        assert_eq!(users[1].count.posts, 1);
    }
}
