//! SeaORM entity definitions.

pub mod blog_post;
