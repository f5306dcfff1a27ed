use crate::utils::error::{MenuError, Result};
use crate::utils::validation;

/// A coach receiving one lunch recommendation per weekday. The name is fixed
/// at construction; banned menus may be replaced wholesale; the recommended
/// history is append-only and rejects duplicates.
#[derive(Debug, Clone)]
pub struct Coach {
    name: String,
    banned_menus: Vec<String>,
    recommended_menus: Vec<String>,
}

impl Coach {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::validate_coach_name(&name)?;
        Ok(Self {
            name,
            banned_menus: Vec::new(),
            recommended_menus: Vec::new(),
        })
    }

    /// Replaces the banned set entirely; it does not merge with a previous one.
    pub fn set_banned_menus(&mut self, menus: Vec<String>) -> Result<()> {
        validation::validate_banned_menu_count(menus.len())?;
        self.banned_menus = menus;
        Ok(())
    }

    pub fn can_eat(&self, menu: &str) -> bool {
        !self.banned_menus.iter().any(|banned| banned == menu)
    }

    pub fn has_eaten(&self, menu: &str) -> bool {
        self.recommended_menus.iter().any(|eaten| eaten == menu)
    }

    pub fn record_recommended(&mut self, menu: &str) -> Result<()> {
        if self.has_eaten(menu) {
            return Err(MenuError::AlreadyRecommended {
                menu: menu.to_string(),
            });
        }
        self.recommended_menus.push(menu.to_string());
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn banned_menus(&self) -> Vec<String> {
        self.banned_menus.clone()
    }

    pub fn recommended_menus(&self) -> Vec<String> {
        self.recommended_menus.clone()
    }
}
