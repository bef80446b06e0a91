//! Photos shown in the gallery section

use std::sync::LazyLock;

use richdons_domain::model::GalleryImage;
use richdons_types::GalleryCategory;

fn photo(
    id: u32,
    file: &str,
    alt: &str,
    category: GalleryCategory,
    title: &str,
    description: &str,
) -> GalleryImage {
    GalleryImage {
        id,
        title: title.to_string(),
        category,
        src: format!("./assets/images/{}", file),
        alt: alt.to_string(),
        description: description.to_string(),
    }
}

/// Gallery photos in display order
pub static GALLERY_IMAGES: LazyLock<Vec<GalleryImage>> = LazyLock::new(|| {
    use GalleryCategory::*;
    vec![
        photo(1, "burger-one.png", "Jollof Rice Special", Food, "Signature Jollof Rice",
            "Our famous jollof rice with perfectly seasoned chicken"),
        photo(2, "login-graphic.png", "Wedding Setup", Events, "Elegant Wedding Setup",
            "Beautiful wedding catering setup with traditional elements"),
        photo(3, "pizza-one.png", "Kelewele", Food, "Spiced Kelewele",
            "Traditional spiced plantain cubes"),
        photo(4, "success.png", "Corporate Event", Events, "Corporate Catering",
            "Professional corporate event catering"),
        photo(5, "burger-two.png", "Banku and Tilapia", Food, "Banku & Grilled Tilapia",
            "Traditional banku served with perfectly grilled tilapia"),
        photo(6, "avatar.png", "Chef at Work", Team, "Our Expert Chef",
            "Master chef preparing authentic Ghanaian cuisine"),
        photo(7, "salad.png", "Fresh Salad", Food, "Garden Fresh Salad",
            "Crisp vegetables with traditional dressing"),
        photo(8, "splash-icon.png", "Table Setup", Setup, "Elegant Table Setting",
            "Professional table setup for special occasions"),
        photo(9, "buritto.png", "Red Red", Food, "Red Red Stew",
            "Black-eyed peas stew with fried plantain"),
        photo(10, "empty-state.png", "Kitchen Setup", Setup, "Professional Kitchen",
            "State-of-the-art kitchen facilities"),
        photo(11, "mozarella-sticks.png", "Palm Nut Soup", Food, "Palm Nut Soup",
            "Rich and flavorful traditional palm nut soup"),
        photo(12, "icon.png", "Cooking Class", Events, "Cooking Workshop",
            "Interactive cooking class with participants"),
    ]
});
