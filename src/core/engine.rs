use crate::core::{Category, Coach, RandomSource, Recommendation};
use crate::domain::recommendation::{DAYS_PER_WEEK, MAX_CATEGORY_REPEATS};
use crate::utils::error::Result;

const MIN_CATEGORY_NUMBER: i32 = 1;
const MAX_CATEGORY_NUMBER: i32 = 5;

/// Produces a complete weekly recommendation by rejection sampling: draw a
/// candidate, test it against the constraints, redraw until it fits. The
/// fixed domain (5 categories, 9 menus each, at most 2 banned menus and 4
/// prior days per coach) guarantees an eligible candidate always exists.
pub struct RecommendationEngine<R: RandomSource> {
    random: R,
}

impl<R: RandomSource> RecommendationEngine<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    pub fn recommend(&mut self, coaches: Vec<Coach>) -> Result<Recommendation> {
        let mut recommendation = Recommendation::new(coaches);

        for day in 0..DAYS_PER_WEEK {
            let category = self.select_category(&recommendation)?;
            recommendation.add_category(category)?;
            tracing::debug!(
                "Day {} category: {}",
                day + 1,
                category.display_name()
            );

            for id in recommendation.coach_ids() {
                let Some(coach) = recommendation.coach(id) else {
                    continue;
                };
                let menu = self.select_menu_for(coach, category);
                recommendation.add_menu_for_coach(id, &menu)?;
            }
        }

        Ok(recommendation)
    }

    fn select_category(&mut self, recommendation: &Recommendation) -> Result<Category> {
        loop {
            let number = self
                .random
                .pick_in_range(MIN_CATEGORY_NUMBER, MAX_CATEGORY_NUMBER);
            let category = Category::from_number(number)?;

            if recommendation.category_count(category) < MAX_CATEGORY_REPEATS {
                return Ok(category);
            }
        }
    }

    fn select_menu_for(&mut self, coach: &Coach, category: Category) -> String {
        let menus = category.menu_items();

        loop {
            let mut shuffled = menus.clone();
            self.random.shuffle(&mut shuffled);
            let candidate = &shuffled[0];

            if coach.can_eat(candidate) && !coach.has_eaten(candidate) {
                return candidate.clone();
            }
        }
    }
}
