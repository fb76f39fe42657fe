//! Badge surface seam and tier coloring
//!
//! A badge is one small borderless, always-on-top, click-through window
//! showing a rating number. Creating such a surface is the expensive part,
//! so the synchronizer keeps a pool and re-shows/hides surfaces instead of
//! recreating them every pick. The platform side lives behind [`BadgeHost`].

use picklens_types::{Color, badge_colors};

/// Background/foreground pair for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: Color,
    pub foreground: Color,
}

/// Style for a rating value.
///
/// Fixed step function over the 0-100 scale; the gold pair is reserved for
/// the best-in-pack highlight and overrides every bracket.
pub fn tier_style(rating: f32, is_best: bool) -> BadgeStyle {
    if is_best {
        return BadgeStyle {
            background: badge_colors::BEST_BG,
            foreground: badge_colors::BEST_FG,
        };
    }
    let background = match rating {
        r if r >= 90.0 => badge_colors::TIER_90_BG,
        r if r >= 75.0 => badge_colors::TIER_75_BG,
        r if r >= 65.0 => badge_colors::TIER_65_BG,
        r if r >= 58.0 => badge_colors::TIER_58_BG,
        r if r >= 52.0 => badge_colors::TIER_52_BG,
        r if r >= 45.0 => badge_colors::TIER_45_BG,
        r if r >= 30.0 => badge_colors::TIER_30_BG,
        _ => {
            return BadgeStyle {
                background: badge_colors::FLOOR_BG,
                foreground: badge_colors::FLOOR_FG,
            };
        }
    };
    BadgeStyle {
        background,
        foreground: badge_colors::WHITE,
    }
}

/// One visual badge surface owned by the synchronizer's pool.
pub trait BadgeSurface {
    /// Position the badge at absolute screen coordinates and display the
    /// label with the given style, making it visible if hidden.
    fn show(&mut self, x: i32, y: i32, label: &str, style: BadgeStyle);

    /// Withdraw the badge without destroying the underlying surface.
    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}

/// Windowing collaborator that can mint new badge surfaces.
pub trait BadgeHost {
    type Badge: BadgeSurface;
    type Error: std::fmt::Display;

    /// Create one hidden badge surface.
    fn create_badge(&mut self) -> Result<Self::Badge, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_overrides_every_bracket() {
        for rating in [0.0, 29.9, 55.0, 91.0] {
            assert_eq!(tier_style(rating, true).background, badge_colors::BEST_BG);
        }
    }

    #[test]
    fn bracket_boundaries_are_inclusive() {
        assert_eq!(tier_style(90.0, false).background, badge_colors::TIER_90_BG);
        assert_eq!(tier_style(89.9, false).background, badge_colors::TIER_75_BG);
        assert_eq!(tier_style(75.0, false).background, badge_colors::TIER_75_BG);
        assert_eq!(tier_style(65.0, false).background, badge_colors::TIER_65_BG);
        assert_eq!(tier_style(58.0, false).background, badge_colors::TIER_58_BG);
        assert_eq!(tier_style(52.0, false).background, badge_colors::TIER_52_BG);
        assert_eq!(tier_style(45.0, false).background, badge_colors::TIER_45_BG);
        assert_eq!(tier_style(30.0, false).background, badge_colors::TIER_30_BG);
        assert_eq!(tier_style(29.9, false).background, badge_colors::FLOOR_BG);
    }
}
