//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase JSON)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreatePostRequest, CreateTagRequest, CreateUserRequest,
    UpdatePostStatusRequest,
};

pub use responses::{
    AuthorProfileResponse, AuthorResponse, CommentCount, CommentResponse, CommentThreadResponse,
    LinkTagResponse, PostCount, PostDetailResponse, PostListItemResponse, PostResponse,
    PostSummaryResponse, StatsResponse, TagListItemResponse, TagResponse, UserActivityCount,
    UserDetailResponse, UserListItemResponse, UserResponse,
};
