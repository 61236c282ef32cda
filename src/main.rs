use clap::Parser;
use lifeterm::cli::Cli;
use lifeterm::logging::init_tracing;
use lifeterm::shutdown::ShutdownCoordinator;
use lifeterm::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    init_tracing();

    let shutdown = ShutdownCoordinator::new();
    shutdown.install()?;

    runtime::run(&config, shutdown.handle())
}
