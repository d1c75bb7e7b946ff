use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::Print,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use fmaze::{gameboard::SerializableMaze, Generator, GeneratorError, Maze, MazeSpec};
use ron::ser::PrettyConfig;
use thiserror::Error;

use crate::{
    renderer::MazeImage,
    settings::{ColorScheme, Settings},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot read settings: {0}")]
    SettingsRead(#[from] toml::de::Error),
    #[error("Cannot write settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),
    #[error("Cannot export maze: {0}")]
    Export(#[from] ron::Error),
    #[error("Generation failed: {0}")]
    Generator(#[from] GeneratorError),
    #[error("No configuration directory on this system")]
    NoConfigDir,
}

/// One run of the program, settings merged with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub width: i32,
    pub seed: Option<u64>,
    pub animate: bool,
    pub frame_delay: Duration,
    pub show_solution: bool,
    pub export: Option<PathBuf>,
}

impl RunOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        RunOptions {
            width: settings.get_width(),
            seed: None,
            animate: settings.get_animate(),
            frame_delay: Duration::from_millis(settings.get_frame_delay_ms()),
            show_solution: settings.get_show_solution(),
            export: None,
        }
    }
}

/// Alternate screen with hidden cursor, restored on drop.
struct Screen<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Screen<'a, W> {
    fn enter(out: &'a mut W) -> io::Result<Self> {
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Screen { out })
    }
}

impl<W: Write> Drop for Screen<'_, W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
    }
}

fn generate(options: &RunOptions, colors: &ColorScheme, out: &mut impl Write) -> Result<Maze, AppError> {
    let generator = Generator::new(MazeSpec::new(options.width).with_seed(options.seed));
    if !options.animate {
        return Ok(generator.generate(|_| {})?);
    }

    let spec = generator.spec().clone();
    let (start, end) = (spec.start(), spec.end());

    let screen = Screen::enter(out)?;
    let mut frame_error = None;
    let maze = generator.generate(|growth| {
        if frame_error.is_some() {
            return;
        }

        let image = MazeImage::new(growth.board(), start, end).with_cursor(growth.cursor(), spec.width);
        let frame = image.queue_frame(screen.out, colors).and_then(|()| {
            let percent = growth.progress().percent() * 100.0;
            execute!(
                screen.out,
                MoveTo(0, image.size().1 as u16),
                Print(format!("{percent:>5.1} %")),
            )
        });
        match frame {
            Ok(()) => thread::sleep(options.frame_delay),
            Err(err) => frame_error = Some(err),
        }
    });
    drop(screen);

    if let Some(err) = frame_error {
        return Err(err.into());
    }
    Ok(maze?)
}

/// Generates, solves and prints one maze, exporting it when asked to.
pub fn run(options: &RunOptions, colors: &ColorScheme, out: &mut impl Write) -> Result<Maze, AppError> {
    let maze = generate(options, colors, out)?;

    let solution = maze.solve();
    if solution.is_none() {
        log::warn!("No path from {:?} to {:?}", maze.start, maze.end);
    }

    let mut image = MazeImage::from_maze(&maze);
    if options.show_solution {
        if let Some(path) = &solution {
            log::info!("Solution is {} locations long", path.len());
            image = image.with_solution(path, maze.width());
        }
    }
    image.print(out, colors)?;

    if let Some(path) = &options.export {
        let text = ron::ser::to_string_pretty(
            &SerializableMaze::new(&maze, solution),
            PrettyConfig::default(),
        )?;
        fs::write(path, text)?;
        log::info!("Maze exported to {}", path.display());
    }

    Ok(maze)
}
