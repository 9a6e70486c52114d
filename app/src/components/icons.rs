//! Inline SVG icons for the hero.

use leptos::prelude::*;

use crate::content::Platform;

/// Size, in pixels, shared by every social icon whatever the viewport.
pub const ICON_SIZE: u32 = 36;

const ARROW_DOWN_PATH: &str =
    "M224 480 32 288l45-45 115 115V32h64v326l115-115 45 45z";

#[component]
pub fn ArrowDownIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 448 512"
            width="1em"
            height="1em"
            aria-hidden="true"
        >
            <path d=ARROW_DOWN_PATH></path>
        </svg>
    }
}

/// Badge color and monogram of a platform.
fn badge(platform: Platform) -> (&'static str, &'static str) {
    match platform {
        Platform::Twitter => ("#00aced", "t"),
        Platform::LinkedIn => ("#007fb1", "in"),
        Platform::Github => ("#ffffff", "gh"),
        Platform::Facebook => ("#3b5998", "f"),
    }
}

/// A round platform badge, always drawn at [`ICON_SIZE`].
#[component]
pub fn SocialIcon(platform: Platform) -> impl IntoView {
    let (fill, monogram) = badge(platform);
    let ink = if platform == Platform::Github { "#24292e" } else { "#ffffff" };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="social-icon"
            viewBox="0 0 64 64"
            width=ICON_SIZE
            height=ICON_SIZE
            role="img"
        >
            <title>{platform.label()}</title>
            <circle cx="32" cy="32" r="31" fill=fill></circle>
            <text
                x="32"
                y="41"
                text-anchor="middle"
                font-family="sans-serif"
                font-size="26"
                font-weight="bold"
                fill=ink
            >
                {monogram}
            </text>
        </svg>
    }
}
