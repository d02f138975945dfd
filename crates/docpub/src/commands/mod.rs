//! CLI command implementations.

pub(crate) mod inspect;
pub(crate) mod publish;

pub(crate) use inspect::InspectArgs;
pub(crate) use publish::PublishArgs;

use docpub_config::{Config, ConfigError};
use docpub_gdocs::request::RgbColor;
use docpub_gdocs::{PublishConfig, Theme};

/// Build the publisher configuration from loaded settings.
pub(crate) fn publish_config(config: &Config) -> Result<PublishConfig, ConfigError> {
    let theme = Theme::default()
        .base_font_size(config.style.base_font_size)
        .accent_color(RgbColor::from_rgb8(config.style.accent_rgb()?));

    Ok(PublishConfig {
        insert_index: config.publish.insert_index,
        theme,
    })
}
