use std::env;

/// Environment variable holding a comma-separated list of image file extensions.
pub const IMAGE_FORMATS_VAR: &str = "CHAT_LINKIFY_IMAGE_FORMATS";

/// Attachments with these extensions render inline as images.
pub const DEFAULT_IMAGE_FORMATS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lower-case extensions, no leading dot.
    pub image_formats: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_formats: DEFAULT_IMAGE_FORMATS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CHAT_LINKIFY_IMAGE_FORMATS contains an invalid extension: {0:?}")]
    InvalidImageFormat(String),
    #[error("CHAT_LINKIFY_IMAGE_FORMATS is set but lists no extensions")]
    NoImageFormats,
}

/// Load configuration from environment. Unset variables fall back to defaults.
pub fn load() -> Result<Config, ConfigError> {
    match env::var(IMAGE_FORMATS_VAR) {
        Ok(raw) => Ok(Config {
            image_formats: parse_image_formats(&raw)?,
        }),
        Err(_) => Ok(Config::default()),
    }
}

/// Parse "png, .JPG,webp" into `["png", "jpg", "webp"]`.
pub fn parse_image_formats(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut formats = Vec::new();
    for entry in raw.split(',') {
        let trimmed = entry.trim();
        let ext = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if ext.is_empty() {
            continue;
        }
        if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidImageFormat(trimmed.to_string()));
        }
        formats.push(ext.to_ascii_lowercase());
    }
    if formats.is_empty() {
        return Err(ConfigError::NoImageFormats);
    }
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formats() {
        assert_eq!(
            Config::default().image_formats,
            vec!["jpg", "jpeg", "png", "gif"]
        );
    }

    #[test]
    fn parse_trims_dots_and_case() {
        assert_eq!(
            parse_image_formats(".PNG, webp").unwrap(),
            vec!["png", "webp"]
        );
    }

    #[test]
    fn parse_skips_empty_entries() {
        assert_eq!(parse_image_formats("gif,,jpg,").unwrap(), vec!["gif", "jpg"]);
    }

    #[test]
    fn parse_rejects_invalid_entry() {
        assert_eq!(
            parse_image_formats("png, p*g"),
            Err(ConfigError::InvalidImageFormat("p*g".to_string()))
        );
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert_eq!(parse_image_formats(" , "), Err(ConfigError::NoImageFormats));
    }

    #[test]
    fn error_message_names_variable() {
        let msg = ConfigError::NoImageFormats.to_string();
        assert!(msg.contains(IMAGE_FORMATS_VAR));
    }
}
