use std::io::Write as _;

use clap::{CommandFactory as _, Parser as _};
use clap_complete::generate;

use apps_chart::utils::{logger, ui};
use apps_chart::{ChartGenerator, Cli, Commands, Config};

/// The main entry point for the CLI application.
fn main() {
    let args = Cli::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{}", ui::error(&format!("{:#}", err)));
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let apps_dir = match (args.command, args.apps_dir) {
        (Some(Commands::Completions { shell }), _) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            return Ok(());
        }
        (None, Some(apps_dir)) => apps_dir,
        // clap requires APPS_DIR whenever no subcommand is given
        (None, None) => unreachable!(),
    };

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.sort_platforms {
        config.sort_platforms = true;
    }
    tracing::debug!("Config: {:?}", config);

    let markdown = ChartGenerator::new(config).generate(&apps_dir)?;
    if markdown.is_empty() {
        eprintln!(
            "{}",
            ui::info(&format!("No apps found under {}", apps_dir.display()))
        );
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &markdown)?;
            eprintln!("{}", ui::success(&format!("Wrote {}", path.display())));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(markdown.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
