use crate::utils::error::{MenuError, Result};

pub const MIN_COACH_NAME_CHARS: usize = 2;
pub const MAX_COACH_NAME_CHARS: usize = 4;
pub const MIN_COACH_COUNT: usize = 2;
pub const MAX_COACH_COUNT: usize = 5;
pub const MAX_BANNED_MENUS: usize = 2;

const INPUT_DELIMITER: char = ',';

/// Name length is counted in characters, not bytes; coach names are Korean.
pub fn validate_coach_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if length < MIN_COACH_NAME_CHARS || length > MAX_COACH_NAME_CHARS {
        return Err(MenuError::InvalidCoachName {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_coach_count(count: usize) -> Result<()> {
    if count < MIN_COACH_COUNT || count > MAX_COACH_COUNT {
        return Err(MenuError::CoachCountOutOfRange { count });
    }
    Ok(())
}

pub fn validate_banned_menu_count(count: usize) -> Result<()> {
    if count > MAX_BANNED_MENUS {
        return Err(MenuError::TooManyBannedMenus { count });
    }
    Ok(())
}

pub fn split_comma_separated(input: &str) -> Vec<String> {
    input
        .split(INPUT_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one line of coach-name input: comma separated, 2 to 5 names,
/// each 2 to 4 characters.
pub fn parse_coach_names(input: &str) -> Result<Vec<String>> {
    if input.trim().is_empty() {
        return Err(MenuError::EmptyCoachNames);
    }

    let names = split_comma_separated(input);
    for name in &names {
        validate_coach_name(name)?;
    }
    validate_coach_count(names.len())?;

    Ok(names)
}

/// Parses one line of banned-menu input. A blank line means the coach can
/// eat everything.
pub fn parse_banned_menus(input: &str) -> Result<Vec<String>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let menus = split_comma_separated(input);
    validate_banned_menu_count(menus.len())?;

    Ok(menus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coach_names() {
        assert_eq!(
            parse_coach_names("구구, 제임스").unwrap(),
            vec!["구구".to_string(), "제임스".to_string()]
        );
        assert!(matches!(
            parse_coach_names(""),
            Err(MenuError::EmptyCoachNames)
        ));
        assert!(matches!(
            parse_coach_names("   "),
            Err(MenuError::EmptyCoachNames)
        ));
        assert!(matches!(
            parse_coach_names("구구"),
            Err(MenuError::CoachCountOutOfRange { count: 1 })
        ));
        assert!(matches!(
            parse_coach_names("하나,둘셋,넷넷,다섯,여섯,일곱"),
            Err(MenuError::CoachCountOutOfRange { count: 6 })
        ));
        assert!(matches!(
            parse_coach_names("구구, 구"),
            Err(MenuError::InvalidCoachName { .. })
        ));
    }

    #[test]
    fn test_parse_coach_names_trims_segments() {
        assert_eq!(
            parse_coach_names(" 구구 ,, 제임스 ").unwrap(),
            vec!["구구".to_string(), "제임스".to_string()]
        );
    }

    #[test]
    fn test_parse_banned_menus() {
        assert_eq!(parse_banned_menus("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_banned_menus("  ").unwrap(), Vec::<String>::new());
        assert_eq!(
            parse_banned_menus("김밥, 떡볶이").unwrap(),
            vec!["김밥".to_string(), "떡볶이".to_string()]
        );
        assert!(matches!(
            parse_banned_menus("김밥,떡볶이,우동"),
            Err(MenuError::TooManyBannedMenus { count: 3 })
        ));
    }

    #[test]
    fn test_validate_coach_name_counts_chars_not_bytes() {
        // "구구" is 6 bytes but 2 characters.
        assert!(validate_coach_name("구구").is_ok());
        assert!(validate_coach_name("네글자임").is_ok());
        assert!(validate_coach_name("구").is_err());
        assert!(validate_coach_name("다섯글자임").is_err());
    }
}
