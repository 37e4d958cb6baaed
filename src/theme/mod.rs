//! Visual theme for Rendezvous.

mod styles;

pub use styles::GLOBAL_STYLES;
