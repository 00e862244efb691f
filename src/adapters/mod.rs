// Adapters layer: concrete implementations of the domain ports.

pub mod assets;

pub use assets::LocalAssets;
