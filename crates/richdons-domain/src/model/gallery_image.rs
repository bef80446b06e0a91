use serde::{Deserialize, Serialize};

use richdons_types::GalleryCategory;

/// A photo in the gallery grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub title: String,
    pub category: GalleryCategory,
    /// Image path relative to the site assets
    pub src: String,
    pub alt: String,
    pub description: String,
}
