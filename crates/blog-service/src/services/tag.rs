//! Tag service
//!
//! Handles tags and the post/tag links. Linking is idempotent: a pair that
//! already exists is left alone and reported as unchanged.

use blog_core::entities::{PostTag, Tag};
use blog_core::DomainError;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{CreateTagRequest, LinkTagResponse, TagListItemResponse, TagResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::logging::LogFailure;

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    /// Create a new TagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a tag
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create(&self, request: CreateTagRequest) -> ServiceResult<TagResponse> {
        let mut tag = Tag::new(request.name, request.slug, request.color);
        tag.description = request.description;

        self.ctx
            .tag_repo()
            .create(&tag)
            .await
            .log_failure("tag", "create")?;

        info!(tag_id = %tag.id, "Tag created");
        Ok(TagResponse::from(&tag))
    }

    /// All tags ordered by name, with post counts
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<TagListItemResponse>> {
        let tags = self
            .ctx
            .tag_repo()
            .find_all_with_counts()
            .await
            .log_failure("tag", "find_all")?;

        Ok(tags.into_iter().map(TagListItemResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<TagResponse>> {
        let tag = self
            .ctx
            .tag_repo()
            .find_by_id(id)
            .await
            .log_failure("tag", "find_by_id")?;

        Ok(tag.map(TagResponse::from))
    }

    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: &str) -> ServiceResult<Option<TagResponse>> {
        let tag = self
            .ctx
            .tag_repo()
            .find_by_slug(slug)
            .await
            .log_failure("tag", "find_by_slug")?;

        Ok(tag.map(TagResponse::from))
    }

    /// Total number of tags
    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        self.ctx.tag_repo().count().await.log_failure("tag", "count")
    }

    /// Attach a tag to a post. `changed` is false when the pair already existed.
    #[instrument(skip(self))]
    pub async fn link(&self, post_id: Uuid, tag_id: Uuid) -> ServiceResult<LinkTagResponse> {
        self.ensure_pair_exists(post_id, tag_id, "link").await?;

        let changed = self
            .ctx
            .tag_repo()
            .link(PostTag::new(post_id, tag_id))
            .await
            .log_failure("tag", "link")?;

        if changed {
            info!(post_id = %post_id, tag_id = %tag_id, "Tag linked");
        } else {
            debug!(post_id = %post_id, tag_id = %tag_id, "Tag already linked");
        }
        Ok(LinkTagResponse {
            post_id,
            tag_id,
            changed,
        })
    }

    /// Detach a tag from a post. `changed` is false when no link existed.
    #[instrument(skip(self))]
    pub async fn unlink(&self, post_id: Uuid, tag_id: Uuid) -> ServiceResult<LinkTagResponse> {
        self.ensure_pair_exists(post_id, tag_id, "unlink").await?;

        let changed = self
            .ctx
            .tag_repo()
            .unlink(PostTag::new(post_id, tag_id))
            .await
            .log_failure("tag", "unlink")?;

        if changed {
            info!(post_id = %post_id, tag_id = %tag_id, "Tag unlinked");
        }
        Ok(LinkTagResponse {
            post_id,
            tag_id,
            changed,
        })
    }

    /// Tags attached to a post, ordered by name
    #[instrument(skip(self))]
    pub async fn tags_for_post(&self, post_id: Uuid) -> ServiceResult<Vec<TagResponse>> {
        let tags = self
            .ctx
            .tag_repo()
            .find_by_post(post_id)
            .await
            .log_failure("tag", "tags_for_post")?;

        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    async fn ensure_pair_exists(
        &self,
        post_id: Uuid,
        tag_id: Uuid,
        operation: &'static str,
    ) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await
            .log_failure("tag", operation)?
            .ok_or(DomainError::PostNotFound(post_id))?;
        self.ctx
            .tag_repo()
            .find_by_id(tag_id)
            .await
            .log_failure("tag", operation)?
            .ok_or(DomainError::TagNotFound(tag_id))?;
        Ok(())
    }
}
