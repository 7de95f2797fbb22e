//! Page components for Panorama.

mod intro;
mod research;
mod route;
mod showcase;
mod wardrobe;

pub use intro::Intro;
pub use research::Research;
pub use route::JourneyRoute;
pub use showcase::{Showcase, ShowcasePanel};
pub use wardrobe::Wardrobe;
