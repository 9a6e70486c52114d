use leptos::prelude::*;

use crate::components::icons::{ArrowDownIcon, SocialIcon};
use crate::content::{Platform, SiteConfig};
use crate::theme::{hero_stylesheet, Backgrounds, Theme};

/// Platforms linked from the hero, in display order.
pub const HERO_PLATFORMS: [Platform; 3] = [Platform::Twitter, Platform::LinkedIn, Platform::Github];

/// The hero's social links: one per platform of [`HERO_PLATFORMS`] that the
/// configuration has a link for. Missing platforms are skipped.
pub fn hero_social_links(config: &SiteConfig) -> Vec<(Platform, String)> {
    HERO_PLATFORMS
        .into_iter()
        .filter_map(|platform| {
            config
                .social_link(platform)
                .map(|url| (platform, String::from(url)))
        })
        .collect()
}

fn scroll_handler<E: 'static>(scroll_to_content: Callback<()>) -> impl Fn(E) + Send + Sync + 'static {
    move |_| scroll_to_content.run(())
}

/// Full viewport landing banner.
///
/// Rendering is pure: the markup and the stylesheet only depend on the props.
/// The one interaction is the scroll button, which runs `scroll_to_content`
/// once per click; what scrolling means is up to the caller.
#[component]
pub fn Hero(
    #[prop(into)] scroll_to_content: Callback<()>,
    backgrounds: Backgrounds,
    theme: Theme,
    config: SiteConfig,
) -> impl IntoView {
    let stylesheet = hero_stylesheet(&theme, &backgrounds);
    let social_links = hero_social_links(&config)
        .into_iter()
        .map(|(platform, url)| {
            view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-container"
                    aria-label=platform.label()
                >
                    <SocialIcon platform=platform />
                </a>
            }
        })
        .collect_view();
    let SiteConfig { author, tagline, .. } = config;

    view! {
        <section class="hero">
            <h1>
                <strong>{author.name}</strong>
            </h1>
            <h2>{tagline}</h2>
            // The only handler bound in the hero: `scroll_handler` is what a
            // click on this button runs.
            <button
                class="scroll-button"
                aria-label="scroll"
                on:click=scroll_handler(scroll_to_content)
            >
                <ArrowDownIcon />
            </button>
            <div class="social-links">{social_links}</div>
        </section>
        <style inner_html=stylesheet></style>
    }
}
