use serde::Serialize;

use crate::config::OutputFormat;
use crate::domain::recommendation::Recommendation;
use crate::utils::error::Result;

const DAY_NAMES: [&str; 5] = ["월요일", "화요일", "수요일", "목요일", "금요일"];

#[derive(Debug, Serialize)]
pub struct CoachReport {
    pub name: String,
    pub menus: Vec<String>,
}

/// Serializable view of a finished recommendation for `--format json`.
#[derive(Debug, Serialize)]
pub struct RecommendationReport {
    pub categories: Vec<String>,
    pub coaches: Vec<CoachReport>,
}

impl RecommendationReport {
    pub fn from_recommendation(recommendation: &Recommendation) -> Self {
        let categories = recommendation
            .weekly_categories()
            .iter()
            .map(|category| category.display_name().to_string())
            .collect();

        let coaches = recommendation
            .coach_ids()
            .into_iter()
            .filter_map(|id| {
                let coach = recommendation.coach(id)?;
                Some(CoachReport {
                    name: coach.name().to_string(),
                    menus: recommendation.menus_for_coach(id),
                })
            })
            .collect();

        Self {
            categories,
            coaches,
        }
    }
}

pub struct OutputView;

impl OutputView {
    pub fn print_start(&self) {
        println!("점심 메뉴 추천을 시작합니다.");
        println!();
    }

    pub fn print_result(
        &self,
        recommendation: &Recommendation,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Table => {
                self.print_table(recommendation);
                Ok(())
            }
            OutputFormat::Json => self.print_json(recommendation),
        }
    }

    fn print_table(&self, recommendation: &Recommendation) {
        println!("메뉴 추천 결과입니다.");
        println!("{}", header_row());
        println!("{}", category_row(recommendation));
        for row in coach_rows(recommendation) {
            println!("{}", row);
        }
        println!();
        println!("추천을 완료했습니다.");
    }

    fn print_json(&self, recommendation: &Recommendation) -> Result<()> {
        let report = RecommendationReport::from_recommendation(recommendation);
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}

fn header_row() -> String {
    let mut row = String::from("[ 구분");
    for day in DAY_NAMES {
        row.push_str(" | ");
        row.push_str(day);
    }
    row.push_str(" ]");
    row
}

fn category_row(recommendation: &Recommendation) -> String {
    let mut row = String::from("[ 카테고리 |");
    for category in recommendation.weekly_categories() {
        row.push_str(&format!(" {} |", category.display_name()));
    }
    row
}

fn coach_rows(recommendation: &Recommendation) -> Vec<String> {
    recommendation
        .coach_ids()
        .into_iter()
        .filter_map(|id| {
            let coach = recommendation.coach(id)?;
            let mut row = format!("[ {} |", coach.name());
            for menu in recommendation.menus_for_coach(id) {
                row.push_str(&format!(" {} |", menu));
            }
            Some(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::coach::Coach;
    use pretty_assertions::assert_eq;

    fn sample_recommendation() -> Recommendation {
        let coaches = vec![Coach::new("구구").unwrap(), Coach::new("제임스").unwrap()];
        let mut recommendation = Recommendation::new(coaches);
        recommendation.add_category(Category::Japanese).unwrap();
        recommendation.add_category(Category::Korean).unwrap();

        let ids = recommendation.coach_ids();
        recommendation.add_menu_for_coach(ids[0], "규동").unwrap();
        recommendation.add_menu_for_coach(ids[1], "우동").unwrap();
        recommendation.add_menu_for_coach(ids[0], "김밥").unwrap();
        recommendation.add_menu_for_coach(ids[1], "불고기").unwrap();
        recommendation
    }

    #[test]
    fn header_matches_console_format() {
        assert_eq!(
            header_row(),
            "[ 구분 | 월요일 | 화요일 | 수요일 | 목요일 | 금요일 ]"
        );
    }

    #[test]
    fn category_row_lists_display_names() {
        let recommendation = sample_recommendation();
        assert_eq!(category_row(&recommendation), "[ 카테고리 | 일식 | 한식 |");
    }

    #[test]
    fn coach_rows_list_menus_in_day_order() {
        let recommendation = sample_recommendation();
        let rows = coach_rows(&recommendation);
        assert_eq!(rows[0], "[ 구구 | 규동 | 김밥 |");
        assert_eq!(rows[1], "[ 제임스 | 우동 | 불고기 |");
    }

    #[test]
    fn report_mirrors_the_recommendation() {
        let recommendation = sample_recommendation();
        let report = RecommendationReport::from_recommendation(&recommendation);

        assert_eq!(report.categories, vec!["일식", "한식"]);
        assert_eq!(report.coaches.len(), 2);
        assert_eq!(report.coaches[0].name, "구구");
        assert_eq!(report.coaches[0].menus, vec!["규동", "김밥"]);
    }

    #[test]
    fn report_serializes_to_json() {
        let recommendation = sample_recommendation();
        let report = RecommendationReport::from_recommendation(&recommendation);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"categories\""));
        assert!(json.contains("일식"));
        assert!(json.contains("제임스"));
    }
}
