use anyhow::Context;
use clap::Parser;
use mathquizzler::cli::Cli;
use mathquizzler::logging::init_tracing;
use mathquizzler::ui::app::App;
use mathquizzler::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!(
            "Warning: logging disabled ({}): {}",
            config.logging.file_path().display(),
            err
        );
    }
    tracing::info!(
        table = config.defaults.table,
        questions = config.defaults.question_count,
        "Starting MathQuizzler"
    );

    let mut app = App::new(&config.defaults);
    runtime::run(&mut app).context("terminal UI failed")?;
    Ok(())
}
