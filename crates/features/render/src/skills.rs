use crate::icon::Icon;
use folio_domain::content::SkillGroup;
use folio_domain::taxonomy::SkillCategory;

/// Tab order on the skills page.
pub const TAB_ORDER: [SkillCategory; 4] =
    [SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Tools, SkillCategory::Other];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCard {
    pub title: String,
    pub description: Option<String>,
    pub icon: Icon,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTab {
    pub category: SkillCategory,
    pub label: &'static str,
    pub cards: Vec<SkillCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBoard {
    pub tabs: Vec<SkillTab>,
}

impl SkillBoard {
    /// Groups skill groups into the fixed tabs, keeping their relative order.
    pub fn new(groups: &[SkillGroup]) -> Self {
        let tabs = TAB_ORDER
            .iter()
            .map(|&category| SkillTab {
                category,
                label: category.label(),
                cards: groups.iter().filter(|g| g.category == category).map(skill_card).collect(),
            })
            .collect();
        Self { tabs }
    }

    pub fn tab(&self, category: SkillCategory) -> Option<&SkillTab> {
        self.tabs.iter().find(|tab| tab.category == category)
    }

    pub fn card_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.cards.len()).sum()
    }
}

pub fn skill_card(group: &SkillGroup) -> SkillCard {
    SkillCard {
        title: group.title.clone(),
        description: Some(group.description.clone()).filter(|d| !d.trim().is_empty()),
        icon: Icon::from_key(group.icon.as_deref()),
        skills: group.skills.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(title: &str, category: SkillCategory) -> SkillGroup {
        SkillGroup { title: title.into(), category, ..SkillGroup::default() }
    }

    #[test]
    fn tabs_follow_fixed_order_and_missing_categories_are_empty() {
        let board = SkillBoard::new(&[
            group("Backend", SkillCategory::Backend),
            group("Frontend", SkillCategory::Frontend),
        ]);

        let order: Vec<_> = board.tabs.iter().map(|t| t.category).collect();
        assert_eq!(order, TAB_ORDER);
        assert_eq!(board.tab(SkillCategory::Frontend).map(|t| t.cards.len()), Some(1));
        assert_eq!(board.tab(SkillCategory::Backend).map(|t| t.cards.len()), Some(1));
        assert!(board.tab(SkillCategory::Tools).is_some_and(|t| t.cards.is_empty()));
        assert!(board.tab(SkillCategory::Other).is_some_and(|t| t.cards.is_empty()));
        assert_eq!(board.card_count(), 2);
    }

    #[test]
    fn cards_elide_empty_descriptions_and_default_icons() {
        let card = skill_card(&SkillGroup { icon: Some("Teleport".into()), ..group("X", SkillCategory::Other) });
        assert_eq!(card.description, None);
        assert_eq!(card.icon, Icon::Code);
    }
}
