//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{
    AuthorSummary, Comment, Post, PostSummary, Tag, TagWithCount, User, UserActivity,
    UserWithActivity,
};

use super::responses::{
    AuthorProfileResponse, AuthorResponse, CommentResponse, PostCount, PostResponse,
    PostSummaryResponse, TagListItemResponse, TagResponse, UserActivityCount,
    UserListItemResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserActivity> for UserActivityCount {
    fn from(activity: UserActivity) -> Self {
        Self {
            posts: activity.posts,
            comments: activity.comments,
        }
    }
}

impl From<UserWithActivity> for UserListItemResponse {
    fn from(item: UserWithActivity) -> Self {
        Self {
            user: UserResponse::from(&item.user),
            count: item.activity.into(),
        }
    }
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

impl From<&User> for AuthorProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            status: post.status,
            author_id: post.author_id,
            view_count: post.view_count,
            like_count: post.like_count,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            slug: summary.slug,
            status: summary.status,
            created_at: summary.created_at,
        }
    }
}

// ============================================================================
// Tag Mappers
// ============================================================================

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
            description: tag.description.clone(),
            color: tag.color.clone(),
            created_at: tag.created_at,
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self::from(&tag)
    }
}

impl From<TagWithCount> for TagListItemResponse {
    fn from(item: TagWithCount) -> Self {
        Self {
            tag: TagResponse::from(&item.tag),
            count: PostCount {
                posts: item.post_count,
            },
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            author_id: comment.author_id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
