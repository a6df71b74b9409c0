//! User entity <-> model mapper

use blog_core::entities::{User, UserActivity, UserWithActivity};

use crate::models::{UserModel, UserWithActivityModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            avatar_url: model.avatar_url,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<UserWithActivityModel> for UserWithActivity {
    fn from(model: UserWithActivityModel) -> Self {
        UserWithActivity {
            user: User::from(model.user),
            activity: UserActivity {
                posts: model.post_count,
                comments: model.comment_count,
            },
        }
    }
}
