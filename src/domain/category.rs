use crate::utils::error::{MenuError, Result};

pub const CATEGORY_COUNT: usize = 5;
pub const MENUS_PER_CATEGORY: usize = 9;

/// Lunch categories, numbered 1 to 5 in the order users pick them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Japanese,
    Korean,
    Chinese,
    Asian,
    Western,
}

const JAPANESE_MENUS: [&str; MENUS_PER_CATEGORY] = [
    "규동",
    "우동",
    "미소시루",
    "스시",
    "가츠동",
    "오니기리",
    "하이라이스",
    "라멘",
    "오코노미야끼",
];

const KOREAN_MENUS: [&str; MENUS_PER_CATEGORY] = [
    "김밥",
    "김치찌개",
    "쌈밥",
    "된장찌개",
    "비빔밥",
    "칼국수",
    "불고기",
    "떡볶이",
    "제육볶음",
];

const CHINESE_MENUS: [&str; MENUS_PER_CATEGORY] = [
    "깐풍기",
    "볶음면",
    "동파육",
    "짜장면",
    "짬뽕",
    "마파두부",
    "탕수육",
    "토마토 달걀볶음",
    "고추잡채",
];

const ASIAN_MENUS: [&str; MENUS_PER_CATEGORY] = [
    "팟타이",
    "카오 팟",
    "나시고렝",
    "파인애플 볶음밥",
    "쌀국수",
    "똠얌꿍",
    "반미",
    "월남쌈",
    "분짜",
];

const WESTERN_MENUS: [&str; MENUS_PER_CATEGORY] = [
    "라자냐",
    "그라탱",
    "뇨끼",
    "끼슈",
    "프렌치 토스트",
    "바게트",
    "스파게티",
    "피자",
    "파니니",
];

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Japanese,
        Category::Korean,
        Category::Chinese,
        Category::Asian,
        Category::Western,
    ];

    pub fn from_number(number: i32) -> Result<Category> {
        match number {
            1 => Ok(Category::Japanese),
            2 => Ok(Category::Korean),
            3 => Ok(Category::Chinese),
            4 => Ok(Category::Asian),
            5 => Ok(Category::Western),
            _ => Err(MenuError::InvalidCategoryNumber { number }),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Japanese => "일식",
            Category::Korean => "한식",
            Category::Chinese => "중식",
            Category::Asian => "아시안",
            Category::Western => "양식",
        }
    }

    /// Fresh copy of the category's menu list; the catalog itself is never
    /// reachable through the return value.
    pub fn menu_items(&self) -> Vec<String> {
        let menus = match self {
            Category::Japanese => &JAPANESE_MENUS,
            Category::Korean => &KOREAN_MENUS,
            Category::Chinese => &CHINESE_MENUS,
            Category::Asian => &ASIAN_MENUS,
            Category::Western => &WESTERN_MENUS,
        };
        menus.iter().map(|menu| menu.to_string()).collect()
    }
}
