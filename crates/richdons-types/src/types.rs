//! Category types for catering quotes

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which category family a value belongs to (used in error reports)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    EventType,
    MenuTier,
    AddOnService,
    MenuCategory,
    GalleryCategory,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::EventType => write!(f, "event type"),
            CategoryKind::MenuTier => write!(f, "menu tier"),
            CategoryKind::AddOnService => write!(f, "add-on service"),
            CategoryKind::MenuCategory => write!(f, "menu category"),
            CategoryKind::GalleryCategory => write!(f, "gallery category"),
        }
    }
}

/// Kind of event being catered
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Wedding,
    Corporate,
    Party,
    Festival,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Party,
        EventType::Festival,
    ];

    /// Lowercase key used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Party => "party",
            EventType::Festival => "festival",
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Traditional Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Party => "Private Party",
            EventType::Festival => "Cultural Festival",
        }
    }
}

/// Quality level of the catering menu
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MenuTier {
    Basic,
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl MenuTier {
    pub const ALL: [MenuTier; 4] = [
        MenuTier::Basic,
        MenuTier::Standard,
        MenuTier::Premium,
        MenuTier::Luxury,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuTier::Basic => "basic",
            MenuTier::Standard => "standard",
            MenuTier::Premium => "premium",
            MenuTier::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuTier::Basic => "Basic Ghanaian Menu",
            MenuTier::Standard => "Standard Ghanaian Menu",
            MenuTier::Premium => "Premium Ghanaian Menu",
            MenuTier::Luxury => "Luxury Ghanaian Menu",
        }
    }
}

/// Optional flat-fee service added on top of the catering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOnService {
    Staffing,
    Decoration,
    Entertainment,
    Transportation,
    Photography,
}

impl AddOnService {
    pub const ALL: [AddOnService; 5] = [
        AddOnService::Staffing,
        AddOnService::Decoration,
        AddOnService::Entertainment,
        AddOnService::Transportation,
        AddOnService::Photography,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AddOnService::Staffing => "staffing",
            AddOnService::Decoration => "decoration",
            AddOnService::Entertainment => "entertainment",
            AddOnService::Transportation => "transportation",
            AddOnService::Photography => "photography",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddOnService::Staffing => "Professional Staffing",
            AddOnService::Decoration => "Ghanaian-themed Decoration",
            AddOnService::Entertainment => "Traditional Entertainment",
            AddOnService::Transportation => "Food Transportation",
            AddOnService::Photography => "Event Photography",
        }
    }
}

/// Dish category on the catering menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Mains,
    Sides,
    Beverages,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Mains,
        MenuCategory::Sides,
        MenuCategory::Beverages,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuCategory::Mains => "mains",
            MenuCategory::Sides => "sides",
            MenuCategory::Beverages => "beverages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Mains => "Main Dishes",
            MenuCategory::Sides => "Sides",
            MenuCategory::Beverages => "Beverages",
        }
    }
}

/// Subject of a photo in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Events,
    Food,
    Setup,
    Team,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [
        GalleryCategory::Events,
        GalleryCategory::Food,
        GalleryCategory::Setup,
        GalleryCategory::Team,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GalleryCategory::Events => "events",
            GalleryCategory::Food => "food",
            GalleryCategory::Setup => "setup",
            GalleryCategory::Team => "team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Events => "Events",
            GalleryCategory::Food => "Food",
            GalleryCategory::Setup => "Setup",
            GalleryCategory::Team => "Our Team",
        }
    }
}

/// Find the variant whose key matches `s`, ignoring case and surrounding whitespace
fn parse_key<T: Copy>(
    s: &str,
    variants: &[T],
    key: impl Fn(&T) -> &'static str,
    kind: CategoryKind,
) -> Result<T, Error> {
    let needle = s.trim();
    variants
        .iter()
        .copied()
        .find(|v| key(v).eq_ignore_ascii_case(needle))
        .ok_or_else(|| Error::invalid_category(kind, needle))
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &EventType::ALL, EventType::key, CategoryKind::EventType)
    }
}

impl FromStr for MenuTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &MenuTier::ALL, MenuTier::key, CategoryKind::MenuTier)
    }
}

impl FromStr for AddOnService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &AddOnService::ALL, AddOnService::key, CategoryKind::AddOnService)
    }
}

impl FromStr for MenuCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &MenuCategory::ALL, MenuCategory::key, CategoryKind::MenuCategory)
    }
}

impl FromStr for GalleryCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &GalleryCategory::ALL, GalleryCategory::key, CategoryKind::GalleryCategory)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for MenuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for AddOnService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_type() {
        assert_eq!("wedding".parse::<EventType>().unwrap(), EventType::Wedding);
        assert_eq!(" Festival ".parse::<EventType>().unwrap(), EventType::Festival);
    }

    #[test]
    fn test_parse_unknown_event_type() {
        let err = "gala".parse::<EventType>().unwrap_err();
        match err {
            Error::InvalidCategory { kind, value } => {
                assert_eq!(kind, CategoryKind::EventType);
                assert_eq!(value, "gala");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_menu_tier_and_add_on() {
        assert_eq!("LUXURY".parse::<MenuTier>().unwrap(), MenuTier::Luxury);
        assert_eq!(
            "photography".parse::<AddOnService>().unwrap(),
            AddOnService::Photography
        );
        assert!("".parse::<AddOnService>().is_err());
    }

    #[test]
    fn test_key_round_trip() {
        for t in EventType::ALL {
            assert_eq!(t.key().parse::<EventType>().unwrap(), t);
        }
        for m in MenuTier::ALL {
            assert_eq!(m.to_string().parse::<MenuTier>().unwrap(), m);
        }
        for c in MenuCategory::ALL {
            assert_eq!(c.key().parse::<MenuCategory>().unwrap(), c);
        }
    }

    #[test]
    fn test_parse_gallery_category() {
        assert_eq!("Team".parse::<GalleryCategory>().unwrap(), GalleryCategory::Team);
        assert_eq!(GalleryCategory::Team.label(), "Our Team");
        let err = "drinks".parse::<GalleryCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown gallery category: drinks");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(EventType::default(), EventType::Wedding);
        assert_eq!(MenuTier::default(), MenuTier::Standard);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&AddOnService::Transportation).unwrap();
        assert_eq!(json, "\"transportation\"");
    }

    #[test]
    fn test_error_message() {
        let err = Error::invalid_category(CategoryKind::MenuTier, "gold");
        assert_eq!(err.to_string(), "Unknown menu tier: gold");
    }
}
