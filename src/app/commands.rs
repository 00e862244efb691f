use crate::adapters::LocalAssets;
use crate::config::{CodeKind, Command, EmojiSource, FlagKitConfig, OutputFormat};
use crate::core::resolver;
use crate::core::view::FlagView;
use crate::domain::model::{ClipShape, CountryCode};
use crate::utils::error::{FlagKitError, Result};
use crate::utils::validation;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CodeEntry<'a> {
    code: &'a str,
    country: &'a str,
    emoji: String,
}

#[derive(Debug, Serialize)]
struct ViewReport<'a> {
    view: &'a FlagView,
    asset_name: String,
    emoji: String,
    width: usize,
    height: usize,
    clip: ClipShape,
}

/// Runs one CLI command, writing its result to `out`.
pub fn execute(command: &Command, config: &FlagKitConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Emoji { source, code } => {
            let emoji = match source {
                EmojiSource::Country => resolver::flag_emoji_for_country_code(code),
                EmojiSource::Currency => resolver::flag_emoji_for_currency_code(code),
                EmojiSource::Phone => resolver::flag_emoji_for_phone_code(code),
            };
            writeln!(out, "{}", emoji)?;
        }
        Command::Resolve { kind, code } => {
            let country = resolve(*kind, code).ok_or_else(|| FlagKitError::NotFound {
                kind: kind.as_str().to_string(),
                code: code.clone(),
            })?;
            writeln!(out, "{}", country)?;
        }
        Command::View {
            country,
            style,
            content_mode,
            width,
            height,
        } => {
            let view = FlagView::new(country)
                .with_style(style.unwrap_or(config.display.style))
                .with_content_mode(content_mode.unwrap_or(config.display.content_mode));
            let width = width.unwrap_or(config.display.width);
            let height = height.unwrap_or(config.display.height);
            validation::validate_positive_number("width", width, 1)?;
            validation::validate_positive_number("height", height, 1)?;
            let report = ViewReport {
                view: &view,
                asset_name: view.asset_name(),
                emoji: view.emoji(),
                width,
                height,
                clip: view.clip_shape(width as f32, height as f32),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        Command::Asset {
            country,
            ext,
            output,
        } => {
            let code = CountryCode::parse(country)?;
            let ext = ext.as_deref().unwrap_or(config.extension());
            validation::validate_file_token("ext", ext)?;
            let assets = LocalAssets::new(config.assets_path());
            let view = FlagView::new(code.as_str());

            let data = view
                .image_data(&assets, ext)?
                .ok_or_else(|| FlagKitError::AssetNotFound {
                    name: format!("{}.{}", view.asset_name(), ext),
                })?;

            match output {
                Some(path) => {
                    std::fs::write(path, &data)?;
                    tracing::info!(path = %path.display(), bytes = data.len(), "copied flag asset");
                    writeln!(out, "Wrote {} bytes to {}", data.len(), path.display())?;
                }
                None => {
                    writeln!(out, "{}.{}: {} bytes", view.asset_name(), ext, data.len())?;
                }
            }
        }
        Command::List { kind, format } => list(*kind, *format, out)?,
    }

    Ok(())
}

fn resolve(kind: CodeKind, code: &str) -> Option<&'static str> {
    match kind {
        CodeKind::Phone => resolver::country_code_from_phone_code(code),
        CodeKind::Currency => resolver::country_code_from_currency_code(code),
    }
}

fn list(kind: CodeKind, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let table = match kind {
        CodeKind::Phone => resolver::phone_codes(),
        CodeKind::Currency => resolver::currency_codes(),
    };
    let entries: Vec<CodeEntry> = table
        .iter()
        .map(|(code, country)| CodeEntry {
            code,
            country,
            emoji: resolver::flag_emoji_for_country_code(country),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            for entry in &entries {
                writeln!(out, "{:<6} {}  {}", entry.code, entry.country, entry.emoji)?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for entry in &entries {
                writer.serialize(entry)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }

    tracing::debug!(kind = kind.as_str(), count = entries.len(), "listed codes");
    Ok(())
}
