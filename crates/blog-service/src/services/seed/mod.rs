//! Seed service
//!
//! Wipes the store and loads the fixed demo data through the other services,
//! so every fixture goes through the same checks as API input. Not idempotent:
//! populating twice without a wipe fails on the first duplicate user.

mod fixtures;

use blog_core::traits::WipeSummary;
use chrono::{TimeZone, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, CreateTagRequest,
    CreateUserRequest, PostResponse, TagResponse, UserResponse,
};

use self::fixtures::{COMMENTS, POSTS, POST_TAGS, REPLY, TAGS, USERS};
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::logging::LogFailure;
use super::{CommentService, PostService, TagService, UserService};

/// Rows created by a populate run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub users: usize,
    pub tags: usize,
    pub posts: usize,
    pub post_tags: usize,
    pub comments: usize,
}

/// Seed service
pub struct SeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SeedService<'a> {
    /// Create a new SeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every row, children before parents, in one transaction
    #[instrument(skip(self))]
    pub async fn wipe(&self) -> ServiceResult<WipeSummary> {
        let summary = self.ctx.store().wipe_all().await.log_failure("seed", "wipe")?;
        info!(
            post_tags = summary.post_tags,
            comments = summary.comments,
            posts = summary.posts,
            tags = summary.tags,
            users = summary.users,
            "Store wiped"
        );
        Ok(summary)
    }

    /// Wipe, then populate
    #[instrument(skip(self))]
    pub async fn run(&self) -> ServiceResult<SeedSummary> {
        self.wipe().await?;
        self.populate().await
    }

    /// Load users, tags, posts, tag links, then comments and a reply
    #[instrument(skip(self))]
    pub async fn populate(&self) -> ServiceResult<SeedSummary> {
        let users = self.create_users().await?;
        let tags = self.create_tags().await?;
        let posts = self.create_posts(&users).await?;
        let post_tags = self.link_tags(&posts, &tags).await?;
        let comments = self.create_comments(&users, &posts).await?;

        let summary = SeedSummary {
            users: users.len(),
            tags: tags.len(),
            posts: posts.len(),
            post_tags,
            comments: comments.len(),
        };
        info!(?summary, "Seed data loaded");
        Ok(summary)
    }

    async fn create_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let service = UserService::new(self.ctx);
        let mut created = Vec::with_capacity(USERS.len());
        for fixture in &USERS {
            let user = service
                .create(CreateUserRequest {
                    email: fixture.email.to_string(),
                    username: fixture.username.to_string(),
                    first_name: Some(fixture.first_name.to_string()),
                    last_name: Some(fixture.last_name.to_string()),
                    bio: Some(fixture.bio.to_string()),
                    avatar_url: None,
                    is_admin: fixture.is_admin,
                })
                .await?;
            info!(
                username = %user.username,
                name = %format!("{} {}", fixture.first_name, fixture.last_name),
                "Seeded user"
            );
            created.push(user);
        }
        Ok(created)
    }

    async fn create_tags(&self) -> ServiceResult<Vec<TagResponse>> {
        let service = TagService::new(self.ctx);
        let mut created = Vec::with_capacity(TAGS.len());
        for fixture in &TAGS {
            let tag = service
                .create(CreateTagRequest {
                    name: fixture.name.to_string(),
                slug: fixture.slug.to_string(),
                    description: Some(fixture.description.to_string()),
                    color: Some(fixture.color.to_string()),
                })
                .await?;
            created.push(tag);
        }
        Ok(created)
    }

    async fn create_posts(&self, users: &[UserResponse]) -> ServiceResult<Vec<PostResponse>> {
        let service = PostService::new(self.ctx);
        let mut created = Vec::with_capacity(POSTS.len());
        for fixture in &POSTS {
            let published_at = fixture
                .published_on
                .and_then(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single());
            let request = CreatePostRequest {
                title: fixture.title.to_string(),
                slug: fixture.slug.to_string(),
                content: Some(fixture.content.to_string()),
                excerpt: Some(fixture.excerpt.to_string()),
                status: Some(fixture.status),
                author_id: users[fixture.author].id,
                view_count: Some(fixture.view_count),
                like_count: Some(fixture.like_count),
            };
            let post = service.create_with_published_at(request, published_at).await?;
            info!(slug = %post.slug, status = %post.status, "Seeded post");
            created.push(post);
        }
        Ok(created)
    }

    async fn link_tags(&self, posts: &[PostResponse], tags: &[TagResponse]) -> ServiceResult<usize> {
        let service = TagService::new(self.ctx);
        let mut linked = 0;
        for (post, tag_indexes) in POST_TAGS {
            for tag in tag_indexes {
                if service.link(posts[post].id, tags[tag].id).await?.changed {
                    linked += 1;
                }
            }
        }
        Ok(linked)
    }

    async fn create_comments(
        &self,
        users: &[UserResponse],
        posts: &[PostResponse],
    ) -> ServiceResult<Vec<CommentResponse>> {
        let service = CommentService::new(self.ctx);
        let mut created = Vec::with_capacity(COMMENTS.len() + 1);
        for fixture in &COMMENTS {
            let comment = service
                .create(
                    posts[fixture.post].id,
                    CreateCommentRequest {
                        content: fixture.content.to_string(),
                    author_id: users[fixture.author].id,
                        parent_id: None,
                    },
                )
                .await?;
            created.push(comment);
        }

        let parent = &created[REPLY.parent];
        let reply = service
            .create(
                parent.post_id,
                CreateCommentRequest {
                    content: REPLY.content.to_string(),
                    author_id: users[REPLY.author].id,
                    parent_id: Some(parent.id),
                },
            )
            .await?;
        created.push(reply);

        Ok(created)
    }
}
