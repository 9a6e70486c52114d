//! Style resolution for the hero banner.
//!
//! Everything here is a pure function of a [`Theme`] and [`Backgrounds`]: the
//! same inputs always give the same CSS, which is what lets the server render
//! the stylesheet and the client hydrate over it.

use std::fmt;

use super::{Backgrounds, Theme, ViewportTier};

/// Values of the hero that change with the viewport tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroStyle {
    pub background_image: String,
    pub heading_font_size: String,
    pub heading_max_width: Option<&'static str>,
    pub button_font_size: String,
}

impl HeroStyle {
    pub fn resolve(theme: &Theme, backgrounds: &Backgrounds, tier: ViewportTier) -> Self {
        let h1_size = &theme.hero.h1.size;
        let (heading_font_size, heading_max_width, button_font_size) = match tier {
            ViewportTier::Mobile => (h1_size.clone(), None, &theme.font.size.m),
            ViewportTier::Tablet => (
                format!("calc({h1_size} * 1.3)"),
                Some("90%"),
                &theme.font.size.l,
            ),
            ViewportTier::Desktop => (
                format!("calc({h1_size} * 1.5)"),
                Some("80%"),
                &theme.font.size.xl,
            ),
        };
        Self {
            background_image: css_url(backgrounds.for_tier(tier)),
            heading_font_size,
            heading_max_width,
            button_font_size: button_font_size.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframe {
    pub offset_percent: u8,
    pub transform: &'static str,
}

/// Vertical oscillation of the scroll button arrow.
pub const BUTTON_ICON_MOVE: [Keyframe; 3] = [
    Keyframe { offset_percent: 0, transform: "translateY(0)" },
    Keyframe { offset_percent: 50, transform: "translateY(-10px)" },
    Keyframe { offset_percent: 100, transform: "translateY(0)" },
];

/// A CSS animation looping forever. There is no state to manage: the browser
/// stops it when the element goes away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    pub name: &'static str,
    pub duration: String,
    pub keyframes: &'static [Keyframe],
}

impl Animation {
    pub fn button_icon(theme: &Theme) -> Self {
        Self {
            name: "buttonIconMove",
            duration: theme.time.duration.long.clone(),
            keyframes: &BUTTON_ICON_MOVE,
        }
    }

    fn declarations(&self) -> [(&'static str, String); 3] {
        [
            ("animation-duration", self.duration.clone()),
            ("animation-name", String::from(self.name)),
            ("animation-iteration-count", String::from("infinite")),
        ]
    }
}

impl fmt::Display for Animation {
    /// Writes the `@keyframes` block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for keyframe in self.keyframes {
            writeln!(
                f,
                "  {}% {{ transform: {}; }}",
                keyframe.offset_percent, keyframe.transform
            )?;
        }
        writeln!(f, "}}")
    }
}

struct Rule {
    selector: &'static str,
    declarations: Vec<(&'static str, String)>,
}

impl Rule {
    fn new(selector: &'static str) -> Self {
        Self { selector, declarations: vec![] }
    }

    fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    fn set_all(mut self, declarations: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{indent}{} {{", self.selector)?;
        for (property, value) in self.declarations.iter() {
            writeln!(f, "{indent}  {property}: {value};")?;
        }
        writeln!(f, "{indent}}}")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "")
    }
}

struct MediaBlock {
    query: String,
    rules: Vec<Rule>,
}

impl fmt::Display for MediaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.query)?;
        for rule in self.rules.iter() {
            rule.write_indented(f, "  ")?;
        }
        writeln!(f, "}}")
    }
}

/// The complete hero stylesheet: mobile rules, then the tablet and desktop
/// overrides in increasing breakpoint order, then the icon keyframes.
pub fn hero_stylesheet(theme: &Theme, backgrounds: &Backgrounds) -> String {
    let mobile = HeroStyle::resolve(theme, backgrounds, ViewportTier::Mobile);
    let animation = Animation::button_icon(theme);
    let h1 = &theme.hero.h1;
    let space = &theme.space;

    let base = [
        Rule::new(".hero")
            .set("align-items", "center")
            .set("background", theme.hero.background.as_str())
            .set("background-image", mobile.background_image.as_str())
            .set("background-size", "cover")
            .set("color", theme.text.color.primary.inverse.as_str())
            .set("display", "flex")
            .set("flex-flow", "column nowrap")
            .set("justify-content", "center")
            .set("min-height", "100vh")
            .set("height", "100px")
            .set("padding", space.inset.l.as_str())
            .set("padding-top", theme.header.height.homepage.as_str())
            .set("padding-bottom", "15rem"),
        Rule::new(".hero h1")
            .set("text-align", "center")
            .set("font-size", mobile.heading_font_size.as_str())
            .set("margin", space.stack.l.as_str())
            .set("color", h1.color.as_str())
            .set("line-height", h1.line_height.as_str()),
        Rule::new(".hero h1 strong").set("position", "relative"),
        Rule::new(".hero h1 strong::before, .hero h1 strong::after")
            .set("color", theme.text.color.attention.as_str())
            .set(
                "text-shadow",
                format!("0 0 {} {}", space.s, theme.color.neutral.gray.k),
            ),
        Rule::new(".hero h1 strong::before")
            .set("content", "'\u{203a}'")
            .set("margin", format!("0 {} 0 0", space.xs)),
        Rule::new(".hero h1 strong::after")
            .set("content", "'\u{2039}'")
            .set("margin", format!("0 0 0 {}", space.xs)),
        Rule::new(".hero h2")
            .set("text-align", "center")
            .set("font-size", h1.size.as_str())
            .set("margin", space.stack.l.as_str())
            .set("color", h1.color.as_str())
            .set("line-height", h1.line_height.as_str()),
        Rule::new(".hero .scroll-button")
            .set("background", theme.background.color.brand.as_str())
            .set("border", "0")
            .set("border-radius", "50%")
            .set("font-size", mobile.button_font_size.as_str())
            .set("padding", format!("{} {}", space.s, space.m))
            .set("cursor", "pointer")
            .set("width", space.xl.as_str())
            .set("height", space.xl.as_str()),
        Rule::new(".hero .scroll-button:focus")
            .set("outline-style", "none")
            .set("background", theme.color.brand.primary.active.as_str()),
        Rule::new(".hero .scroll-button svg")
            .set("position", "relative")
            .set("top", "5px")
            .set("fill", theme.color.neutral.white.as_str())
            .set("stroke-width", "40")
            .set("stroke", theme.color.neutral.white.as_str())
            .set_all(animation.declarations()),
        Rule::new(".hero .social-links")
            .set("display", "flex")
            .set("align-items", "center")
            .set("justify-content", "center")
            .set("margin-top", "1em"),
        Rule::new(".hero .social-links a")
            .set("width", format!("{}px", crate::components::ICON_SIZE))
            .set("height", format!("{}px", crate::components::ICON_SIZE))
            .set("margin", "0em 0.8em")
            .set("cursor", "pointer"),
    ];

    let overrides = ViewportTier::ALL.into_iter().filter_map(|tier| {
        let query = tier.media_query()?;
        let style = HeroStyle::resolve(theme, backgrounds, tier);
        let mut heading = Rule::new(".hero h1").set("font-size", style.heading_font_size);
        if let Some(max_width) = style.heading_max_width {
            heading = heading.set("max-width", max_width);
        }
        Some(MediaBlock {
            query,
            rules: vec![
                Rule::new(".hero").set("background-image", style.background_image),
                heading,
                Rule::new(".hero .scroll-button").set("font-size", style.button_font_size),
            ],
        })
    });

    let mut css = String::new();
    for rule in base.iter() {
        css.push_str(&rule.to_string());
    }
    for block in overrides {
        css.push_str(&block.to_string());
    }
    css.push_str(&animation.to_string());
    css
}

/// Quote an image reference for `url()`. The stylesheet is emitted raw inside
/// a `<style>` element, so markup delimiters are percent-encoded as well.
fn css_url(reference: &str) -> String {
    let mut encoded = String::with_capacity(reference.len());
    for c in reference.chars() {
        match c {
            '"' => encoded.push_str("%22"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '\\' => encoded.push_str("%5C"),
            '\n' => encoded.push_str("%0A"),
            '\r' => encoded.push_str("%0D"),
            _ => encoded.push(c),
        }
    }
    format!("url(\"{encoded}\")")
}
