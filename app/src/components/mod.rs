mod hero;
mod icons;

pub use hero::{hero_social_links, Hero, HERO_PLATFORMS};
pub use icons::{ArrowDownIcon, SocialIcon, ICON_SIZE};

use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Title};
use leptos_router::components::A;

use crate::content::{Header, SiteConfig};

/// `<title>` of a page: the site title on the landing page, the page name
/// followed by the short title everywhere else.
pub fn page_title(config: &SiteConfig, page: Option<&str>) -> String {
    match page {
        Some(page) if !page.is_empty() => format!("{} - {}", page, config.short_title),
        _ => config.title.clone(),
    }
}

/// Document head metadata derived from the site configuration.
#[component]
pub fn Head(config: SiteConfig, #[prop(optional, into)] page: Option<String>) -> impl IntoView {
    let title = page_title(&config, page.as_deref());
    let twitter_creator = format!("@{}", config.author.twitter_handle);
    view! {
        <Html {..} lang=config.language.clone() />
        <Title text=title.clone() />
        <Meta name="description" content=config.description.clone() />
        <Meta name="theme-color" content=config.manifest.theme_color.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=config.description.clone() />
        <Meta property="og:url" content=config.base_url() />
        <Meta property="og:image" content=config.image_url() />
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:creator" content=twitter_creator />
        <Link rel="canonical" href=config.base_url() />
    }
}

#[component]
pub fn NavBar(header: Header) -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">{header.title}</A></li>
                <li><small>{header.subtitle}</small></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer(author: String) -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#top"><small>{"\u{2191}"}" Copyright "{"\u{24d2}"}" "{author}" "{"\u{2191}"}</small></a>
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::config::tests::site_config;

    #[test]
    fn landing_page_uses_the_full_title() {
        let config = site_config();
        assert_eq!("Ada Example - Web Engineer", page_title(&config, None));
        assert_eq!("Ada Example - Web Engineer", page_title(&config, Some("")));
        assert_eq!("Resume - Ada Example", page_title(&config, Some("Resume")));
    }
}
