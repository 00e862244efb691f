pub mod resolver;
pub mod tables;
pub mod view;

pub use crate::domain::model::{ClipShape, ContentMode, CountryCode, FlagStyle, WHITE_FLAG};
pub use crate::domain::ports::FlagImageSource;
pub use crate::utils::error::Result;
