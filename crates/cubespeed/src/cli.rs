use std::path::{Path, PathBuf};

use cubeprefs::Preferences;
use cubepuzzle::prelude::*;
use eyre::{Context, Result};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Cube puzzle command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a sequence of moves to a new puzzle and print its state as JSON.
    Play {
        /// Moves, such as `U R' F2`.
        #[arg(allow_hyphen_values = true)]
        moves: Vec<String>,

        /// Undo every move afterward.
        #[arg(short, long)]
        solve: bool,

        /// Preferences file to load.
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
    /// Print the number of faces with each color as JSON.
    Colors {
        /// Edge length of each sub-cube.
        #[arg(long)]
        edge: Option<f64>,
        /// Space between adjacent sub-cubes.
        #[arg(long)]
        margin: Option<f64>,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Preferences file to load.
        #[arg(long)]
        prefs: Option<PathBuf>,

        /// Also save the effective preferences to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Play {
            moves,
            solve,
            prefs,
        } => {
            let prefs = Preferences::load(prefs.as_deref());
            let summary = play(&prefs, &moves.join(" "), solve)?;
            write_json_output(&summary)
        }

        Subcommand::Colors { edge, margin } => {
            let defaults = CubeParams::default();
            let params = CubeParams::new(
                edge.unwrap_or(defaults.edge),
                margin.unwrap_or(defaults.margin),
            );
            let cube = PuzzleCube::new(params).context("error building puzzle")?;
            write_json_output(&color_counts(&cube))
        }

        Subcommand::Prefs { prefs, save } => {
            let prefs = Preferences::load(prefs.as_deref());
            if let Some(path) = save {
                save_prefs(&prefs, &path)?;
            }
            print!("{}", prefs.to_yaml()?);
            Ok(())
        }
    }
}

/// Presenter that logs each frame and counts them.
#[derive(Debug, Default)]
struct FrameLog {
    frames: u32,
}
impl FramePresenter for FrameLog {
    fn present_frame(&mut self, frame: &AnimationFrame<'_>) {
        self.frames += 1;
        log::trace!(
            "{} frame {}/{}: {} pieces",
            frame.twist,
            frame.frame,
            frame.frame_count,
            frame.pieces.len(),
        );
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct PlaySummary {
    /// Moves still in the history, in notation.
    history: String,
    move_count: usize,
    frames_presented: u32,
    solved: bool,
    faces: Vec<FaceSummary>,
}

#[derive(Serialize, Debug, PartialEq)]
struct FaceSummary {
    face: FaceId,
    /// Visible colors, ordered by grid index of the sub-cube showing each one.
    colors: Vec<Color>,
}

#[derive(Serialize, Debug, PartialEq)]
struct ColorCount {
    color: Color,
    css: &'static str,
    rgb: [u8; 3],
    count: usize,
}

fn play(prefs: &Preferences, moves: &str, solve: bool) -> Result<PlaySummary> {
    let mut session = PuzzleSession::with_animation(prefs.twist_animation());
    session
        .create_cube(prefs.cube_params())
        .context("error building puzzle")?;

    let mut presenter = FrameLog::default();
    session
        .rotate_notation(moves, &mut presenter)
        .context("error applying moves")?;
    if solve {
        session.solve(&mut presenter).context("error solving")?;
    }

    let cube = session.cube()?;
    Ok(PlaySummary {
        history: cube.history().to_string(),
        move_count: cube.history().len(),
        frames_presented: presenter.frames,
        solved: cube.is_solved(),
        faces: FaceId::iter()
            .map(|face| {
                let mut visible = cube.visible_colors(face);
                visible.sort();
                FaceSummary {
                    face,
                    colors: visible.into_iter().map(|(_, color)| color).collect(),
                }
            })
            .collect(),
    })
}

fn color_counts(cube: &PuzzleCube) -> Vec<ColorCount> {
    cube.color_counts()
        .into_iter()
        .map(|(color, count)| ColorCount {
            color,
            css: color.css_name(),
            rgb: color.rgb(),
            count,
        })
        .collect()
}

fn save_prefs(prefs: &Preferences, path: &Path) -> Result<()> {
    prefs
        .save(path)
        .wrap_err_with(|| format!("error saving preferences to {}", path.display()))
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
