//! Loading and rendering of remote collections.
//!
//! A [`ListContainer`] owns one [`LoadState`], asks its [`CollectionSource`]
//! for items exactly once, and renders them through [`ItemDisplay`].

use shared::domain::Post;

pub mod config;
pub mod container;
pub mod display;
pub mod load_state;
pub mod source;

pub use config::{load_settings, Settings, SettingsError};
pub use container::{ListContainer, ListLabels, POST_LABELS};
pub use display::{display_section, ItemDisplay};
pub use load_state::{LoadEvent, LoadState};
pub use source::{CollectionSource, HttpCollectionSource};

pub type PostsContainer = ListContainer<HttpCollectionSource<Post>>;

/// Container for the blog post list at the configured endpoint.
pub fn posts_container(settings: &Settings) -> Result<PostsContainer, SettingsError> {
    let url = settings.posts_url()?;
    Ok(ListContainer::new(HttpCollectionSource::new(url), POST_LABELS))
}
