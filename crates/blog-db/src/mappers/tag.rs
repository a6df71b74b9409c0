//! Tag entity <-> model mapper

use blog_core::entities::{Tag, TagWithCount};

use crate::models::{TagModel, TagWithCountModel, TaggedPostModel};

/// Convert TagModel to Tag entity
impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            color: model.color,
            created_at: model.created_at,
        }
    }
}

impl From<TagWithCountModel> for TagWithCount {
    fn from(model: TagWithCountModel) -> Self {
        TagWithCount {
            tag: Tag::from(model.tag),
            post_count: model.post_count,
        }
    }
}

impl From<TaggedPostModel> for (uuid::Uuid, Tag) {
    fn from(model: TaggedPostModel) -> Self {
        (model.post_id, Tag::from(model.tag))
    }
}
