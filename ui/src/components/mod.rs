//! Reusable UI components

pub mod animated_section;
pub mod button;
pub mod chat_widget;
pub mod footer;
pub mod header;
pub mod image_uploader;
pub mod loading;

pub use animated_section::AnimatedSection;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use chat_widget::ChatWidget;
pub use footer::Footer;
pub use header::Header;
pub use image_uploader::ImageUploader;
pub use loading::{LoadingDots, LoadingSpinner};
