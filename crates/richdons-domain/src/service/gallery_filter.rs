//! Gallery category filtering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use richdons_types::{Error, GalleryCategory};

use crate::model::GalleryImage;

/// Active filter of the gallery grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryFilter {
    #[default]
    All,
    Category(GalleryCategory),
}

impl GalleryFilter {
    pub fn matches(&self, image: &GalleryImage) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(category) => image.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "All Photos",
            GalleryFilter::Category(category) => category.label(),
        }
    }
}

impl FromStr for GalleryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(GalleryFilter::All)
        } else {
            s.parse().map(GalleryFilter::Category)
        }
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryFilter::All => write!(f, "all"),
            GalleryFilter::Category(category) => write!(f, "{}", category),
        }
    }
}

/// Images matching the filter, in gallery order
pub fn filter_gallery(images: &[GalleryImage], filter: GalleryFilter) -> Vec<&GalleryImage> {
    images.iter().filter(|image| filter.matches(image)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use richdons_types::CategoryKind;

    fn image(id: u32, category: GalleryCategory) -> GalleryImage {
        GalleryImage {
            id,
            title: format!("photo {}", id),
            category,
            src: format!("./assets/images/{}.png", id),
            alt: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_filter_gallery() {
        let images = vec![
            image(1, GalleryCategory::Food),
            image(2, GalleryCategory::Events),
            image(3, GalleryCategory::Food),
        ];
        assert_eq!(filter_gallery(&images, GalleryFilter::All).len(), 3);

        let ids: Vec<_> = filter_gallery(&images, GalleryFilter::Category(GalleryCategory::Food))
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filter_gallery(&images, GalleryFilter::Category(GalleryCategory::Team)).is_empty());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(" ALL ".parse::<GalleryFilter>().unwrap(), GalleryFilter::All);
        assert_eq!(
            "setup".parse::<GalleryFilter>().unwrap(),
            GalleryFilter::Category(GalleryCategory::Setup)
        );
        assert!(matches!(
            "mains".parse::<GalleryFilter>(),
            Err(Error::InvalidCategory { kind: CategoryKind::GalleryCategory, .. })
        ));
        assert_eq!(GalleryFilter::All.label(), "All Photos");
        assert_eq!(GalleryFilter::Category(GalleryCategory::Team).to_string(), "team");
    }
}
