use clap::Parser;
use lunch_menu::app::controller::Controller;
use lunch_menu::app::input::ConsoleReader;
use lunch_menu::utils::logger;
use lunch_menu::{CliConfig, SeededRandom, ThreadRandom};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lunch-menu CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let reader = ConsoleReader::new();

    let result = match config.seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source: {}", seed);
            Controller::new(reader, SeededRandom::from_seed(seed), config)
                .run()
                .await
        }
        None => Controller::new(reader, ThreadRandom, config).run().await,
    };

    if let Err(error) = result {
        tracing::error!("Recommendation run failed: {}", error);
        eprintln!("{}", error.user_message());
        std::process::exit(1);
    }

    Ok(())
}
