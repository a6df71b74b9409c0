//! # blog-service
//!
//! Application layer containing the content services and DTOs.

pub mod dto;
pub mod services;

pub use blog_core::DomainError;
pub use services::{
    CommentService, PostService, SeedService, SeedSummary, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TagService, UserService,
};
