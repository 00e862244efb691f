pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalAssets;
pub use config::FlagKitConfig;
pub use crate::core::resolver::{
    country_code_from_currency_code, country_code_from_flag_emoji, country_code_from_phone_code,
    flag_emoji_for_country_code, flag_emoji_for_currency_code, flag_emoji_for_phone_code,
    is_flag_emoji,
};
pub use crate::core::view::FlagView;
pub use domain::model::{ClipShape, ContentMode, CountryCode, FlagStyle, WHITE_FLAG};
pub use domain::ports::FlagImageSource;
pub use utils::error::{FlagKitError, Result};
