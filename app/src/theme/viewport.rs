use serde::{Deserialize, Serialize};

/// Minimum viewport width, in CSS pixels, of the tablet tier.
pub const TABLET_MIN_WIDTH: u32 = 600;
/// Minimum viewport width, in CSS pixels, of the desktop tier.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewportTier {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportTier {
    /// Smallest tier first, the order media queries must be emitted in.
    pub const ALL: [ViewportTier; 3] = [
        ViewportTier::Mobile,
        ViewportTier::Tablet,
        ViewportTier::Desktop,
    ];

    pub fn from_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            ViewportTier::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            ViewportTier::Tablet
        } else {
            ViewportTier::Mobile
        }
    }

    /// `None` for mobile, which is styled by the rules outside any media query.
    pub fn min_width(self) -> Option<u32> {
        match self {
            ViewportTier::Mobile => None,
            ViewportTier::Tablet => Some(TABLET_MIN_WIDTH),
            ViewportTier::Desktop => Some(DESKTOP_MIN_WIDTH),
        }
    }

    pub fn media_query(self) -> Option<String> {
        self.min_width()
            .map(|width| format!("@media (min-width: {width}px)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_width() {
        assert_eq!(ViewportTier::Mobile, ViewportTier::from_width(0));
        assert_eq!(ViewportTier::Mobile, ViewportTier::from_width(TABLET_MIN_WIDTH - 1));
        assert_eq!(ViewportTier::Tablet, ViewportTier::from_width(TABLET_MIN_WIDTH));
        assert_eq!(ViewportTier::Tablet, ViewportTier::from_width(DESKTOP_MIN_WIDTH - 1));
        assert_eq!(ViewportTier::Desktop, ViewportTier::from_width(DESKTOP_MIN_WIDTH));
        assert_eq!(ViewportTier::Desktop, ViewportTier::from_width(u32::MAX));
    }

    #[test]
    fn tier_selection_is_monotonic() {
        let mut previous = ViewportTier::Mobile;
        for width in 0..=2 * DESKTOP_MIN_WIDTH {
            let tier = ViewportTier::from_width(width);
            assert!(tier >= previous, "tier went down at {width}px");
            previous = tier;
        }
    }

    #[test]
    fn breakpoints_agree_with_tier_selection() {
        for tier in ViewportTier::ALL {
            if let Some(width) = tier.min_width() {
                assert_eq!(tier, ViewportTier::from_width(width));
                assert!(ViewportTier::from_width(width - 1) < tier);
            }
        }
        assert_eq!(None, ViewportTier::Mobile.media_query());
        assert_eq!(
            Some(String::from("@media (min-width: 600px)")),
            ViewportTier::Tablet.media_query()
        );
    }
}
