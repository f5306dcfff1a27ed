use crate::app::input::InputView;
use crate::app::output::OutputView;
use crate::config::CliConfig;
use crate::core::engine::RecommendationEngine;
use crate::domain::coach::Coach;
use crate::domain::ports::{LineReader, RandomSource};
use crate::utils::error::Result;

/// Wires the console views to the selection engine: gather coaches, run one
/// recommendation, render it.
pub struct Controller<R: LineReader, S: RandomSource> {
    input: InputView<R>,
    output: OutputView,
    engine: RecommendationEngine<S>,
    config: CliConfig,
}

impl<R: LineReader, S: RandomSource> Controller<R, S> {
    pub fn new(reader: R, random: S, config: CliConfig) -> Self {
        Self {
            input: InputView::new(reader),
            output: OutputView,
            engine: RecommendationEngine::new(random),
            config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.output.print_start();

        let coaches = self.create_coaches().await?;
        tracing::info!("Recommending menus for {} coaches", coaches.len());

        let recommendation = self.engine.recommend(coaches)?;
        self.output.print_result(&recommendation, self.config.format)
    }

    /// The views already validated the raw input; entity construction
    /// re-enforces the same bounds.
    async fn create_coaches(&mut self) -> Result<Vec<Coach>> {
        let names = self.input.read_coach_names().await?;
        let mut coaches = Vec::with_capacity(names.len());

        for name in names {
            let mut coach = Coach::new(name)?;
            let banned = self.input.read_banned_menus(coach.name()).await?;
            coach.set_banned_menus(banned)?;
            coaches.push(coach);
        }

        Ok(coaches)
    }
}
