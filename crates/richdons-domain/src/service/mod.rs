//! Domain services

pub mod estimator;
pub mod gallery_filter;
pub mod menu_filter;
pub mod selection;

pub use estimator::{clamp_guest_count, compute_breakdown, guest_count_from_f64};
pub use gallery_filter::{filter_gallery, GalleryFilter};
pub use menu_filter::{filter_menu, MenuFilter};
pub use selection::{QuoteSession, SelectionEvent, SelectionState};
