//! Theme for Panorama: lilac glass over a moving gradient.

mod styles;

pub use styles::GLOBAL_STYLES;
