use crate::domain::category::Category;
use crate::domain::coach::Coach;
use crate::utils::error::{MenuError, Result};

pub const DAYS_PER_WEEK: usize = 5;
pub const MAX_CATEGORY_REPEATS: usize = 2;

/// Stable handle for a coach inside one recommendation, assigned in
/// construction order. Handles from one recommendation are meaningless in
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoachId(usize);

/// The result of one weekly recommendation run: the coaches it was made for,
/// the five selected categories, and one menu sequence per coach growing in
/// lockstep with the categories.
#[derive(Debug)]
pub struct Recommendation {
    coaches: Vec<Coach>,
    weekly_categories: Vec<Category>,
    weekly_menus: Vec<Vec<String>>,
}

impl Recommendation {
    /// Takes ownership of the coach list; order is preserved and fixed.
    pub fn new(coaches: Vec<Coach>) -> Self {
        let weekly_menus = vec![Vec::new(); coaches.len()];
        Self {
            coaches,
            weekly_categories: Vec::new(),
            weekly_menus,
        }
    }

    pub fn coach_ids(&self) -> Vec<CoachId> {
        (0..self.coaches.len()).map(CoachId).collect()
    }

    pub fn coach(&self, id: CoachId) -> Option<&Coach> {
        self.coaches.get(id.0)
    }

    pub fn add_category(&mut self, category: Category) -> Result<()> {
        if self.category_count(category) >= MAX_CATEGORY_REPEATS {
            return Err(MenuError::CategoryLimitExceeded {
                category: category.display_name().to_string(),
            });
        }
        self.weekly_categories.push(category);
        Ok(())
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.weekly_categories
            .iter()
            .filter(|selected| **selected == category)
            .count()
    }

    /// Appends to the coach's weekly sequence and records the menu into the
    /// coach's own history. An unknown handle skips the write silently.
    pub fn add_menu_for_coach(&mut self, id: CoachId, menu: &str) -> Result<()> {
        if id.0 >= self.coaches.len() {
            return Ok(());
        }
        self.weekly_menus[id.0].push(menu.to_string());
        self.coaches[id.0].record_recommended(menu)
    }

    pub fn weekly_categories(&self) -> Vec<Category> {
        self.weekly_categories.clone()
    }

    /// Unknown handles yield an empty sequence.
    pub fn menus_for_coach(&self, id: CoachId) -> Vec<String> {
        self.weekly_menus.get(id.0).cloned().unwrap_or_default()
    }

    pub fn coaches(&self) -> Vec<Coach> {
        self.coaches.clone()
    }

    pub fn is_complete(&self) -> bool {
        self.weekly_categories.len() == DAYS_PER_WEEK
    }
}
