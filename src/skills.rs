use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Data,
    Cloud,
    Analytics,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Data,
        SkillCategory::Cloud,
        SkillCategory::Analytics,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SkillCategory::Data => "data",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Data => "Data Engineering",
            SkillCategory::Cloud => "Cloud & DevOps",
            SkillCategory::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategorySelection {
    /// Filter buttons in display order.
    pub fn options() -> impl Iterator<Item = CategorySelection> {
        std::iter::once(CategorySelection::All)
            .chain(SkillCategory::ALL.into_iter().map(CategorySelection::Only))
    }

    pub fn id(self) -> &'static str {
        match self {
            CategorySelection::All => "all",
            CategorySelection::Only(c) => c.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategorySelection::All => "All Skills",
            CategorySelection::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown skill category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategorySelection {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategorySelection::options()
            .find(|opt| opt.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillItem {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: &'static str,
}

/// Ordered subset of `items` matching `selection`. The source is never
/// reordered or mutated.
pub fn filter_skills(items: &[SkillItem], selection: CategorySelection) -> Vec<SkillItem> {
    items
        .iter()
        .filter(|item| selection.matches(item.category))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    #[test]
    fn test_all_is_identity() {
        assert_eq!(filter_skills(SKILLS, CategorySelection::All), SKILLS.to_vec());
        assert!(filter_skills(&[], CategorySelection::All).is_empty());
    }

    #[test]
    fn test_category_subset_keeps_order() {
        for category in SkillCategory::ALL {
            let filtered = filter_skills(SKILLS, CategorySelection::Only(category));
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|s| s.category == category));

            // filtered must be a subsequence of the source
            let mut source = SKILLS.iter();
            for item in &filtered {
                assert!(source.any(|s| s == item), "{} out of order", item.name);
            }
        }
    }

    #[test]
    fn test_categories_partition_source() {
        let total = SkillCategory::ALL
            .into_iter()
            .map(|c| filter_skills(SKILLS, CategorySelection::Only(c)).len())
            .sum::<usize>();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!(
            "all".parse::<CategorySelection>(),
            Ok(CategorySelection::All)
        );
        assert_eq!(
            "cloud".parse::<CategorySelection>(),
            Ok(CategorySelection::Only(SkillCategory::Cloud))
        );
        assert!("frontend".parse::<CategorySelection>().is_err());
        let ids = CategorySelection::options()
            .map(|o| o.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["all", "data", "cloud", "analytics"]);
    }
}
