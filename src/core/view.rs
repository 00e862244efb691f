use crate::core::resolver::flag_emoji_for_country_code;
use crate::domain::model::{ClipShape, ContentMode, FlagStyle};
use crate::domain::ports::FlagImageSource;
use crate::utils::error::Result;
use serde::Serialize;

/// Everything a UI layer needs to draw one flag: which image, how to clip
/// it and how to scale it. Drawing itself is left to the host toolkit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagView {
    country_code: String,
    style: FlagStyle,
    content_mode: ContentMode,
}

impl FlagView {
    /// Stores `country_code` uppercased. Unknown codes are accepted; they
    /// simply have no image and show the white flag as emoji.
    pub fn new(country_code: &str) -> Self {
        Self {
            country_code: country_code.trim().to_ascii_uppercase(),
            style: FlagStyle::default(),
            content_mode: ContentMode::default(),
        }
    }

    pub fn with_style(mut self, style: FlagStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_content_mode(mut self, content_mode: ContentMode) -> Self {
        self.content_mode = content_mode;
        self
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn style(&self) -> FlagStyle {
        self.style
    }

    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    pub fn asset_name(&self) -> String {
        self.country_code.to_ascii_lowercase()
    }

    pub fn emoji(&self) -> String {
        flag_emoji_for_country_code(&self.country_code)
    }

    /// Clip geometry for a `width` x `height` frame.
    ///
    /// A rounded radius is clamped to half the shorter side, past which the
    /// corners would overlap.
    pub fn clip_shape(&self, width: f32, height: f32) -> ClipShape {
        let max_radius = width.min(height).max(0.0) / 2.0;
        match self.style {
            FlagStyle::Default => ClipShape::None,
            FlagStyle::Circle => ClipShape::Circle { radius: max_radius },
            FlagStyle::Rounded(radius) => ClipShape::RoundedRect {
                corner_radius: radius.clamp(0.0, max_radius),
            },
        }
    }

    /// Image bytes for this flag from `source`, `None` if it has no asset.
    pub fn image_data(&self, source: &dyn FlagImageSource, ext: &str) -> Result<Option<Vec<u8>>> {
        source.image_data(&self.asset_name(), ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MemorySource(HashMap<String, Vec<u8>>);

    impl FlagImageSource for MemorySource {
        fn image_data(&self, name: &str, ext: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.0.get(&format!("{}.{}", name, ext)).cloned())
        }
    }

    #[test]
    fn test_new_uppercases_and_defaults() {
        let view = FlagView::new("ro");
        assert_eq!(view.country_code(), "RO");
        assert_eq!(view.asset_name(), "ro");
        assert_eq!(view.style(), FlagStyle::Default);
        assert_eq!(view.content_mode(), ContentMode::Fill);
        assert_eq!(view.emoji(), "🇷🇴");
    }

    #[test]
    fn test_builders() {
        let view = FlagView::new("US")
            .with_style(FlagStyle::Circle)
            .with_content_mode(ContentMode::Fit);
        assert_eq!(view.style(), FlagStyle::Circle);
        assert_eq!(view.content_mode(), ContentMode::Fit);
    }

    #[test]
    fn test_clip_shape() {
        let view = FlagView::new("US");
        assert_eq!(view.clip_shape(50.0, 30.0), ClipShape::None);

        let circle = view.clone().with_style(FlagStyle::Circle);
        assert_eq!(circle.clip_shape(50.0, 30.0), ClipShape::Circle { radius: 15.0 });

        let rounded = view.clone().with_style(FlagStyle::Rounded(8.0));
        assert_eq!(
            rounded.clip_shape(50.0, 30.0),
            ClipShape::RoundedRect { corner_radius: 8.0 }
        );

        let too_round = view.with_style(FlagStyle::Rounded(100.0));
        assert_eq!(
            too_round.clip_shape(50.0, 30.0),
            ClipShape::RoundedRect { corner_radius: 15.0 }
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_white_flag() {
        let view = FlagView::new("");
        assert_eq!(view.emoji(), crate::domain::model::WHITE_FLAG);
    }

    #[test]
    fn test_non_ascii_code_matches_resolver() {
        let view = FlagView::new("ß");
        assert_eq!(view.country_code(), "ß");
        assert_eq!(view.asset_name(), "ß");
        assert_eq!(view.emoji(), crate::domain::model::WHITE_FLAG);
        assert_eq!(view.emoji(), flag_emoji_for_country_code("ß"));
    }

    #[test]
    fn test_image_data_uses_lowercase_asset_name() {
        let mut images = HashMap::new();
        images.insert("us.png".to_string(), vec![0x89, b'P', b'N', b'G']);
        let source = MemorySource(images);

        let data = FlagView::new("US").image_data(&source, "png").unwrap();
        assert_eq!(data, Some(vec![0x89, b'P', b'N', b'G']));

        let missing = FlagView::new("FR").image_data(&source, "png").unwrap();
        assert!(missing.is_none());
    }
}
