//! Domain entities and pure content helpers.

mod post;
pub mod slug;
pub mod tags;

pub use post::{NewPost, Post, PostUpdate};
