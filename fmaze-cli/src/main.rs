use std::{io, path::PathBuf, time::Duration};

use clap::Parser;
use fmaze_cli::{
    app::{self, AppError, RunOptions},
    logging,
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "fmaze")]
struct Args {
    #[clap(short, long, help = "Length of the maze side")]
    width: Option<i32>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Draw the maze while it grows")]
    animate: bool,
    #[clap(short, long, help = "Delay between animation frames in milliseconds")]
    delay: Option<u64>,
    #[clap(long, action, help = "Don't draw the solution")]
    no_solution: bool,
    #[clap(short, long, help = "Write the maze and its solution to a RON file")]
    export: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

impl Args {
    fn apply(&self, mut options: RunOptions) -> RunOptions {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(delay) = self.delay {
            options.frame_delay = Duration::from_millis(delay);
        }
        options.seed = self.seed;
        options.animate |= self.animate;
        options.show_solution &= !self.no_solution;
        options.export.clone_from(&self.export);
        options
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(logging::level_with_verbosity(
        Settings::default().get_log_level(),
        args.verbose,
    ));

    let settings_path = Settings::default_path()?;

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    logging::get_logger().set_min_level(logging::level_with_verbosity(
        settings.get_log_level(),
        args.verbose,
    ));
    better_panic::install();

    let options = args.apply(RunOptions::from_settings(&settings));
    log::debug!("Running with {:?}", options);

    app::run(&options, &settings.get_colors(), &mut io::stdout())?;

    Ok(())
}
