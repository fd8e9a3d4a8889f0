use std::{fmt, str::FromStr};

use thiserror::Error;

/// Distance below the top of the viewport at which a section counts as
/// active.
pub const TRACKER_OFFSET: f64 = 200.0;
/// Scroll depth after which the navigation bar switches to its solid style.
pub const NAV_SOLID_AFTER: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Page order, which is also the navigation order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Anchor id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Tracks which section the navigation should highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTracker {
    offset: f64,
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(TRACKER_OFFSET)
    }
}

impl SectionTracker {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluate on a scroll. The first extent containing
    /// `scroll_y + offset` wins; with no match the previous section stays
    /// active.
    pub fn update<'a, I>(&mut self, scroll_y: f64, extents: I) -> SectionId
    where
        I: IntoIterator<Item = &'a SectionExtent>,
    {
        let position = scroll_y + self.offset;
        if let Some(extent) = extents.into_iter().find(|e| e.contains(position)) {
            self.active = extent.id;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Vec<SectionExtent> {
        vec![
            SectionExtent::new(SectionId::Home, 0.0, 800.0),
            SectionExtent::new(SectionId::About, 800.0, 800.0),
        ]
    }

    #[test]
    fn test_boundary_is_inclusive_on_lower_bound() {
        let extents = two_sections();
        let mut tracker = SectionTracker::new(200.0);
        // 600 + 200 = 800, start of about
        assert_eq!(tracker.update(600.0, &extents), SectionId::About);
        // 550 + 200 = 750, still inside home
        assert_eq!(tracker.update(550.0, &extents), SectionId::Home);
        // 650 + 200 = 850, inside about
        assert_eq!(tracker.update(650.0, &extents), SectionId::About);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let extents = two_sections();
        let mut tracker = SectionTracker::new(200.0);
        assert_eq!(tracker.update(1000.0, &extents), SectionId::About);
        // 1400 + 200 = 1600 falls past the last section
        assert_eq!(tracker.update(1400.0, &extents), SectionId::About);
        assert_eq!(tracker.update(-500.0, &extents), SectionId::About);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let extents = vec![
            SectionExtent::new(SectionId::Projects, 0.0, 1000.0),
            SectionExtent::new(SectionId::Skills, 500.0, 1000.0),
        ];
        let mut tracker = SectionTracker::new(0.0);
        assert_eq!(tracker.update(700.0, &extents), SectionId::Projects);
        assert_eq!(tracker.update(1200.0, &extents), SectionId::Skills);
    }

    #[test]
    fn test_starts_at_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);
        let mut tracker = tracker;
        assert_eq!(tracker.update(0.0, &[]), SectionId::Home);
    }

    #[test]
    fn test_anchor_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
            assert_eq!(id.href(), format!("#{id}"));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }
}
