//! Fixed demo data loaded by the seed workflow

use blog_core::entities::PostStatus;

pub struct UserFixture {
    pub email: &'static str,
    pub username: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub bio: &'static str,
    pub is_admin: bool,
}

pub struct TagFixture {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub struct PostFixture {
    pub title: &'static str,
    pub slug: &'static str,
    pub content: &'static str,
    pub excerpt: &'static str,
    pub status: PostStatus,
    /// (year, month, day) of publication
    pub published_on: Option<(i32, u32, u32)>,
    pub author: usize,
    pub view_count: i32,
    pub like_count: i32,
}

pub struct CommentFixture {
    pub content: &'static str,
    pub author: usize,
    pub post: usize,
}

pub const USERS: [UserFixture; 3] = [
    UserFixture {
        email: "john@example.com",
        username: "john_doe",
        first_name: "John",
        last_name: "Doe",
        bio: "Software developer and tech enthusiast.",
        is_admin: true,
    },
    UserFixture {
        email: "jane@example.com",
        username: "jane_smith",
        first_name: "Jane",
        last_name: "Smith",
        bio: "Frontend developer who loves React and TypeScript.",
        is_admin: false,
    },
    UserFixture {
        email: "bob@example.com",
        username: "bob_wilson",
        first_name: "Bob",
        last_name: "Wilson",
        bio: "Backend engineer specializing in Node.js and databases.",
        is_admin: false,
    },
];

pub const TAGS: [TagFixture; 5] = [
    TagFixture {
        name: "Technology",
        slug: "technology",
        description: "Posts about technology and programming",
        color: "#3B82F6",
    },
    TagFixture {
        name: "Tutorial",
        slug: "tutorial",
        description: "Step-by-step guides and tutorials",
        color: "#10B981",
    },
    TagFixture {
        name: "JavaScript",
        slug: "javascript",
        description: "JavaScript programming language",
        color: "#F59E0B",
    },
    TagFixture {
        name: "React",
        slug: "react",
        description: "React.js library and ecosystem",
        color: "#06B6D4",
    },
    TagFixture {
        name: "Node.js",
        slug: "nodejs",
        description: "Node.js runtime and backend development",
        color: "#84CC16",
    },
];

pub const POSTS: [PostFixture; 4] = [
    PostFixture {
        title: "Getting Started with Elysia and Prisma",
        slug: "getting-started-elysia-prisma",
        content: "# Getting Started with Elysia and Prisma\n\n\
            Elysia is a fast and modern TypeScript framework built on Bun. When combined \
            with Prisma, it creates a powerful stack for building web applications.\n\n\
            ## Why Choose Elysia?\n\n\
            1. **Performance**: Built on Bun runtime for maximum speed\n\
            2. **Type Safety**: Full TypeScript support out of the box\n\
            3. **Developer Experience**: Clean and intuitive API design\n\
            4. **Modern**: Uses the latest JavaScript features\n\n\
            ## Setting Up Your Project\n\n\
            First, create a new Elysia project and install Prisma...",
        excerpt: "Learn how to set up a modern web application using Elysia framework and Prisma ORM.",
        status: PostStatus::Published,
        published_on: Some((2024, 1, 15)),
        author: 0,
        view_count: 245,
        like_count: 18,
    },
    PostFixture {
        title: "Advanced TypeScript Patterns for Backend Development",
        slug: "advanced-typescript-backend-patterns",
        content: "# Advanced TypeScript Patterns for Backend Development\n\n\
            TypeScript has evolved significantly, and with it, the patterns we use for \
            backend development have become more sophisticated...\n\n\
            ## Generic Utilities\n\n\
            ```typescript\n\
            type ApiResponse<T> = {\n  data: T;\n  success: boolean;\n  message?: string;\n};\n\
            ```\n\n\
            This pattern allows us to create consistent API responses across our application.",
        excerpt: "Explore advanced TypeScript patterns that make backend development more robust and maintainable.",
        status: PostStatus::Published,
        published_on: Some((2024, 1, 20)),
        author: 1,
        view_count: 189,
        like_count: 23,
    },
    PostFixture {
        title: "Building Scalable APIs with Modern Tools",
        slug: "building-scalable-apis-modern-tools",
        content: "# Building Scalable APIs with Modern Tools\n\n\
            Creating scalable APIs requires the right combination of tools, patterns, and \
            architectural decisions...",
        excerpt: "A comprehensive guide to building APIs that scale with your business needs.",
        status: PostStatus::Published,
        published_on: Some((2024, 1, 25)),
        author: 2,
        view_count: 156,
        like_count: 12,
    },
    PostFixture {
        title: "Database Migrations: A Rails-inspired Approach",
        slug: "database-migrations-rails-inspired",
        content: "# Database Migrations: A Rails-inspired Approach\n\n\
            One of the best features of Ruby on Rails is its migration system. Let's \
            explore how we can bring similar concepts to our Node.js applications...",
        excerpt: "Learn how to implement Rails-like database migrations in your Node.js projects.",
        status: PostStatus::Draft,
        published_on: None,
        author: 0,
        view_count: 0,
        like_count: 0,
    },
];

/// (post index, tag indexes)
pub const POST_TAGS: [(usize, [usize; 2]); 4] = [(0, [0, 1]), (1, [0, 2]), (2, [0, 4]), (3, [0, 1])];

pub const COMMENTS: [CommentFixture; 4] = [
    CommentFixture {
        content: "Great introduction! This helped me get started quickly with Elysia.",
        author: 1,
        post: 0,
    },
    CommentFixture {
        content: "Thanks for sharing this. The Prisma setup was exactly what I needed.",
        author: 2,
        post: 0,
    },
    CommentFixture {
        content: "These TypeScript patterns are really useful. I'll definitely be using the \
            ApiResponse type in my projects.",
        author: 0,
        post: 1,
    },
    CommentFixture {
        content: "Could you add more examples of generic utilities?",
        author: 2,
        post: 1,
    },
];

/// Reply to `COMMENTS[parent]`, on the same post
pub struct ReplyFixture {
    pub content: &'static str,
    pub author: usize,
    pub parent: usize,
}

pub const REPLY: ReplyFixture = ReplyFixture {
    content: "I'll consider adding more examples in a follow-up post. Thanks for the suggestion!",
    author: 1,
    parent: 3,
};
