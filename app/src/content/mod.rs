//! Everything the landing page is rendered from: the site configuration, the
//! theme and the hero backgrounds.
//!
//! The server loads a [`Site`] once at start-up and shares it read-only with
//! every request; the client receives the same value through
//! [`crate::pages::home::get_site`] when it hydrates.

pub(crate) mod config;
#[cfg(feature = "ssr")]
pub mod errors;

pub use config::{
    Author, DisplayMode, Header, Manifest, Platform, SiteConfig, SocialLinks,
    MANIFEST_SHORT_NAME_MAX_LEN,
};
#[cfg(feature = "ssr")]
pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};

use crate::theme::{Backgrounds, Theme};

pub const SITE_FILE_NAME: &str = "site.yml";
pub const THEME_FILE_NAME: &str = "theme.yml";
pub const BACKGROUNDS_FILE_NAME: &str = "backgrounds.yml";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub theme: Theme,
    pub backgrounds: Backgrounds,
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        use std::path::{Path, PathBuf};

        use crate::components::HERO_PLATFORMS;

        impl Site {
            /// Load and check the three content files found in `dir`. Any
            /// missing field or token fails the whole load.
            pub fn load(dir: &Path) -> Result<Self> {
                let config_path = dir.join(SITE_FILE_NAME);
                let config: SiteConfig = read_yaml(&config_path)?;
                config.check().map_err(|error| Error::Invalid {
                    error,
                    path: config_path.clone(),
                })?;
                for platform in HERO_PLATFORMS {
                    if config.social_link(platform).is_none() {
                        log::warn!(
                            "No {} link in {:?}, its icon will not be displayed",
                            platform.label(),
                            config_path,
                        );
                    }
                }

                let theme_path = dir.join(THEME_FILE_NAME);
                let theme: Theme = read_yaml(&theme_path)?;
                reject_markup(&theme, &theme_path)?;
                let backgrounds_path = dir.join(BACKGROUNDS_FILE_NAME);
                let backgrounds: Backgrounds = read_yaml(&backgrounds_path)?;
                reject_markup(&backgrounds, &backgrounds_path)?;

                let site = Self { config, theme, backgrounds };
                log::info!("Loaded \"{}\" from {:?}", site.config.title, dir);
                Ok(site)
            }
        }

        /// Theme tokens and backgrounds end up verbatim in the hero's `<style>`
        /// element, none of them may contain a `<`.
        fn reject_markup<T: Serialize>(value: &T, path: &Path) -> Result<()> {
            let value = serde_yml::to_value(value).map_err(|error| Error::Deserialize {
                error: error.to_string(),
                path: PathBuf::from(path),
            })?;
            match find_markup(&value, String::new()) {
                Some(token) => Err(Error::Invalid {
                    error: format!("`{}' contains markup", token),
                    path: PathBuf::from(path),
                }),
                None => Ok(()),
            }
        }

        /// Dotted path of the first string containing a `<`.
        fn find_markup(value: &serde_yml::Value, token: String) -> Option<String> {
            match value {
                serde_yml::Value::String(s) if s.contains('<') => Some(token),
                serde_yml::Value::Mapping(mapping) => mapping.iter().find_map(|(key, value)| {
                    let key = key.as_str().unwrap_or_default();
                    let token = if token.is_empty() {
                        String::from(key)
                    } else {
                        format!("{token}.{key}")
                    };
                    find_markup(value, token)
                }),
                _ => None,
            }
        }

        fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
            let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
                error,
                path: PathBuf::from(path),
            })?;
            serde_yml::from_str(&contents).map_err(|error| Error::Deserialize {
                error: error.to_string(),
                path: PathBuf::from(path),
            })
        }
    }
}
