//! Design tokens and background images the landing page is styled from.
//!
//! Token groups mirror the paths the stylesheet dereferences (`hero.h1.size`,
//! `space.inset.l`, …). None of them has a default: a theme missing a token
//! does not parse.

mod style;
mod viewport;

pub use style::{
    hero_stylesheet, Animation, HeroStyle, Keyframe, BUTTON_ICON_MOVE,
};
pub use viewport::{ViewportTier, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Theme {
    pub hero: HeroTokens,
    pub text: TextTokens,
    pub space: SpaceTokens,
    pub header: HeaderTokens,
    pub color: ColorTokens,
    pub background: BackgroundTokens,
    pub font: FontTokens,
    pub time: TimeTokens,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct HeroTokens {
    pub background: String,
    pub h1: HeadingTokens,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadingTokens {
    pub size: String,
    pub color: String,
    pub line_height: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TextTokens {
    pub color: TextColors,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TextColors {
    pub primary: PrimaryTextColors,
    pub attention: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PrimaryTextColors {
    pub inverse: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SpaceTokens {
    pub inset: SpaceScale,
    pub stack: SpaceScale,
    pub xs: String,
    pub s: String,
    pub m: String,
    pub xl: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SpaceScale {
    pub l: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct HeaderTokens {
    pub height: HeaderHeights,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct HeaderHeights {
    pub homepage: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub neutral: NeutralColors,
    pub brand: BrandColors,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct NeutralColors {
    pub gray: GrayColors,
    pub white: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GrayColors {
    pub k: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BrandColors {
    pub primary: BrandPrimaryColors,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BrandPrimaryColors {
    pub active: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BackgroundTokens {
    pub color: BackgroundColors,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BackgroundColors {
    pub brand: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FontTokens {
    pub size: FontSizes,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FontSizes {
    pub m: String,
    pub l: String,
    pub xl: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TimeTokens {
    pub duration: Durations,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Durations {
    pub long: String,
}

/// Hero background image for each viewport tier.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Backgrounds {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl Backgrounds {
    pub fn for_tier(&self, tier: ViewportTier) -> &str {
        match tier {
            ViewportTier::Mobile => &self.mobile,
            ViewportTier::Tablet => &self.tablet,
            ViewportTier::Desktop => &self.desktop,
        }
    }
}
