use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Longest `manifest.shortName` launchers display without truncating it.
pub const MANIFEST_SHORT_NAME_MAX_LEN: usize = 12;

/// Site metadata and author identity, loaded once from `site.yml`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    /// Appended to the title of every page but the landing one.
    pub short_title: String,
    pub description: String,
    pub url: String,
    pub path_prefix: String,
    /// Preview image file name, relative to `url` + `path_prefix`.
    pub image: String,
    pub language: String,
    pub author: Author,
    pub header: Header,
    /// Hero subheading.
    pub tagline: String,
    pub manifest: Manifest,
    pub social_links: SocialLinks,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub twitter_handle: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: DisplayMode,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
    MinimalUi,
    Browser,
}

/// Platforms an author can link to. Any other key in `socialLinks` is rejected
/// when the configuration is parsed.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    #[serde(rename = "twitter")]
    Twitter,
    #[serde(rename = "linkedIn")]
    LinkedIn,
    #[serde(rename = "github")]
    Github,
    #[serde(rename = "facebook")]
    Facebook,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::Github => "GitHub",
            Platform::Facebook => "Facebook",
        }
    }
}

pub type SocialLinks = BTreeMap<Platform, String>;

impl SiteConfig {
    /// Absolute URL of the site root, `path_prefix` included, without a
    /// trailing slash.
    pub fn base_url(&self) -> String {
        let url = self.url.trim_end_matches('/');
        let prefix = self.path_prefix.trim_matches('/');
        if prefix.is_empty() {
            String::from(url)
        } else {
            format!("{url}/{prefix}")
        }
    }

    pub fn image_url(&self) -> String {
        format!("{}/{}", self.base_url(), self.image.trim_start_matches('/'))
    }

    pub fn social_link(&self, platform: Platform) -> Option<&str> {
        self.social_links.get(&platform).map(String::as_str)
    }

    /// Check the invariants serde cannot express. Returns the first violation.
    pub fn check(&self) -> std::result::Result<(), String> {
        if !is_absolute_url(&self.url) {
            return Err(format!("url `{}' is not an absolute http(s) URL", self.url));
        }
        let short_name_len = self.manifest.short_name.chars().count();
        if short_name_len > MANIFEST_SHORT_NAME_MAX_LEN {
            return Err(format!(
                "manifest.shortName `{}' is {} characters long, the maximum is {}",
                self.manifest.short_name, short_name_len, MANIFEST_SHORT_NAME_MAX_LEN,
            ));
        }
        for (platform, url) in self.social_links.iter() {
            if !is_absolute_url(url) {
                return Err(format!(
                    "socialLinks.{:?} `{}' is not an absolute http(s) URL",
                    platform, url
                ));
            }
        }
        Ok(())
    }
}

fn is_absolute_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match url::Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn site_config() -> SiteConfig {
        SiteConfig {
            title: String::from("Ada Example - Web Engineer"),
            short_title: String::from("Ada Example"),
            description: String::from("Ada writes software in Lyon."),
            url: String::from("https://ada.example.org/"),
            path_prefix: String::new(),
            image: String::from("preview.png"),
            language: String::from("en"),
            author: Author {
                name: String::from("Ada Example"),
                twitter_handle: String::from("adaexample"),
            },
            header: Header {
                title: String::from("Ada Example"),
                subtitle: String::from("Web engineer"),
            },
            tagline: String::from("A Software Engineer in Lyon, France"),
            manifest: Manifest {
                name: String::from("Ada Example - Web Engineer"),
                short_name: String::from("AdaExample"),
                start_url: String::from("/"),
                background_color: String::from("white"),
                theme_color: String::from("#666"),
                display: DisplayMode::Standalone,
            },
            social_links: SocialLinks::from([
                (Platform::Twitter, String::from("https://twitter.com/adaexample")),
                (Platform::LinkedIn, String::from("https://www.linkedin.com/in/adaexample/")),
                (Platform::Github, String::from("https://github.com/adaexample")),
            ]),
        }
    }

    #[test]
    fn check_accepts_a_complete_config() {
        assert_eq!(Ok(()), site_config().check());
    }

    #[test]
    fn check_rejects_long_manifest_short_name() {
        let mut config = site_config();
        config.manifest.short_name = String::from("AdaExampleDotOrg");
        let error = config.check().unwrap_err();
        assert!(error.contains("manifest.shortName"), "{error}");
    }

    #[test]
    fn check_rejects_relative_social_links() {
        let mut config = site_config();
        config
            .social_links
            .insert(Platform::Github, String::from("github.com/adaexample"));
        let error = config.check().unwrap_err();
        assert!(error.contains("Github"), "{error}");
    }

    #[test]
    fn check_rejects_malformed_social_links() {
        for url in ["https://exa<mple>.org", "http://[::1", "https://a%zz", "https://:@"] {
            let mut config = site_config();
            config.social_links.insert(Platform::Twitter, String::from(url));
            assert!(config.check().is_err(), "{url} was accepted");
        }
    }

    #[test]
    fn absolute_urls() {
        assert!(is_absolute_url("https://github.com/adaexample"));
        assert!(is_absolute_url("http://localhost:3000"));
        assert!(!is_absolute_url("https://"));
        assert!(!is_absolute_url("ftp://example.org"));
        assert!(!is_absolute_url("https://exa mple.org"));
        assert!(!is_absolute_url("https://exa<mple>.org"));
        assert!(!is_absolute_url("http://[::1"));
        assert!(!is_absolute_url("https://a%zz"));
        assert!(!is_absolute_url("https://:@"));
        assert!(!is_absolute_url("/in/adaexample"));
    }

    #[test]
    fn urls_honor_the_path_prefix() {
        let mut config = site_config();
        assert_eq!("https://ada.example.org", config.base_url());
        assert_eq!("https://ada.example.org/preview.png", config.image_url());
        config.path_prefix = String::from("/folio/");
        assert_eq!("https://ada.example.org/folio/preview.png", config.image_url());
    }
}
