use anyhow::Result;
use flagkit::utils::validation::Validate;
use flagkit::{
    ClipShape, ContentMode, FlagImageSource, FlagKitConfig, FlagStyle, FlagView, LocalAssets,
};
use std::fs;
use tempfile::TempDir;

fn flag_dir() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("us.png"), b"\x89PNG us")?;
    fs::write(temp_dir.path().join("cz.png"), b"\x89PNG cz")?;
    fs::write(temp_dir.path().join("cz.svg"), b"<svg/>")?;
    Ok(temp_dir)
}

#[test]
fn test_config_file_drives_asset_loading() -> Result<()> {
    let temp_dir = flag_dir()?;
    let assets_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let config_content = format!(
        r#"
[assets]
path = "{}"
extension = "svg"

[display]
style = "circle"
content_mode = "fit"
"#,
        assets_path
    );
    let config_path = temp_dir.path().join("flagkit.toml");
    fs::write(&config_path, config_content)?;

    let config = FlagKitConfig::from_file(&config_path)?;
    config.validate()?;

    let assets = LocalAssets::new(config.assets_path());
    let view = FlagView::new("cz")
        .with_style(config.display.style)
        .with_content_mode(config.display.content_mode);

    assert_eq!(view.content_mode(), ContentMode::Fit);
    assert_eq!(view.image_data(&assets, config.extension())?, Some(b"<svg/>".to_vec()));
    assert_eq!(view.clip_shape(30.0, 20.0), ClipShape::Circle { radius: 10.0 });
    Ok(())
}

#[test]
fn test_missing_asset_is_none_not_error() -> Result<()> {
    let temp_dir = flag_dir()?;
    let assets = LocalAssets::new(temp_dir.path());

    assert!(assets.image_data_for_country_code("FR", "png")?.is_none());
    assert!(assets.image_data_for_country_code("", "png")?.is_none());
    assert!(assets.image_data("../us", "png")?.is_none());
    Ok(())
}

#[test]
fn test_available_country_codes() -> Result<()> {
    let temp_dir = flag_dir()?;
    let assets = LocalAssets::new(temp_dir.path());

    assert_eq!(assets.available_country_codes("png")?, vec!["CZ", "US"]);
    assert_eq!(assets.available_country_codes("svg")?, vec!["CZ"]);
    Ok(())
}

#[test]
fn test_rounded_view_over_assets() -> Result<()> {
    let temp_dir = flag_dir()?;
    let assets = LocalAssets::new(temp_dir.path());

    let view = FlagView::new("US").with_style(FlagStyle::Rounded(4.0));
    assert_eq!(view.asset_name(), "us");
    assert_eq!(view.image_data(&assets, "png")?, Some(b"\x89PNG us".to_vec()));
    assert_eq!(
        view.clip_shape(50.0, 50.0),
        ClipShape::RoundedRect { corner_radius: 4.0 }
    );
    Ok(())
}
