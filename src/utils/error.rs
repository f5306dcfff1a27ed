use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("coach name must be 2 to 4 characters: {name:?}")]
    InvalidCoachName { name: String },

    #[error("at most 2 banned menus are allowed, got {count}")]
    TooManyBannedMenus { count: usize },

    #[error("menu was already recommended to this coach: {menu}")]
    AlreadyRecommended { menu: String },

    #[error("category already selected twice this week: {category}")]
    CategoryLimitExceeded { category: String },

    #[error("category number must be between 1 and 5, got {number}")]
    InvalidCategoryNumber { number: i32 },

    #[error("no coach names were entered")]
    EmptyCoachNames,

    #[error("between 2 and 5 coaches are required, got {count}")]
    CoachCountOutOfRange { count: usize },

    #[error("input ended before the conversation finished")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl MenuError {
    /// Console-facing message, worded the way the prompts are.
    pub fn user_message(&self) -> String {
        match self {
            MenuError::InvalidCoachName { .. } => {
                "[ERROR] 코치의 이름은 최소 2글자, 최대 4글자여야 합니다.".to_string()
            }
            MenuError::TooManyBannedMenus { .. } => {
                "[ERROR] 못 먹는 메뉴는 최대 2개까지 입력할 수 있습니다.".to_string()
            }
            MenuError::AlreadyRecommended { .. } => "[ERROR] 이미 추천된 메뉴입니다.".to_string(),
            MenuError::CategoryLimitExceeded { .. } => {
                "[ERROR] 같은 카테고리는 최대 2회까지만 선택할 수 있습니다.".to_string()
            }
            MenuError::InvalidCategoryNumber { .. } => {
                "[ERROR] 잘못된 카테고리 번호입니다.".to_string()
            }
            MenuError::EmptyCoachNames => "[ERROR] 코치 이름을 입력해주세요.".to_string(),
            MenuError::CoachCountOutOfRange { .. } => {
                "[ERROR] 코치는 최소 2명 이상, 최대 5명까지 입력해야 합니다.".to_string()
            }
            other => format!("[ERROR] {}", other),
        }
    }

    /// Whether the input flow may recover by re-prompting instead of aborting.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            MenuError::InvalidCoachName { .. }
                | MenuError::TooManyBannedMenus { .. }
                | MenuError::EmptyCoachNames
                | MenuError::CoachCountOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_prefixed() {
        let error = MenuError::InvalidCoachName {
            name: "구".to_string(),
        };
        assert!(error.user_message().starts_with("[ERROR]"));
    }

    #[test]
    fn validation_errors_are_user_correctable() {
        assert!(MenuError::EmptyCoachNames.is_user_correctable());
        assert!(MenuError::CoachCountOutOfRange { count: 1 }.is_user_correctable());
        assert!(!MenuError::InputClosed.is_user_correctable());
        assert!(!MenuError::AlreadyRecommended {
            menu: "김밥".to_string()
        }
        .is_user_correctable());
    }
}
