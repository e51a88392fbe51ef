//! `tri-chess` command-line driver
//!
//! Plays a game from the starting position under the configured [`GameMode`]:
//! moves for human sides are read from stdin (`e2L0 e4L0`, optionally followed
//! by `q`, `r`, `b` or `n` for a promotion), the engine answers for its side.
//! `--self-play` hands both sides to the engine. Settings come from the config
//! file and can be overridden per flag.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tri_chess::core::{load_settings, EngineSettings};
use tri_chess::{ChessGame, Difficulty, PieceColor, PieceType, Position, TurnOutcome};
use tri_chess::{GameMode, ModeCoordinator, MoveOrigin};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Difficulty::Beginner,
            Level::Intermediate => Difficulty::Intermediate,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tri-chess", version, about = "Three-layer chess engine")]
struct Args {
    /// Strength of the White engine (defaults to the configured difficulty)
    #[arg(long, value_enum)]
    white: Option<Level>,

    /// Strength of the Black engine (defaults to the configured difficulty)
    #[arg(long, value_enum)]
    black: Option<Level>,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for reproducible beginner moves
    #[arg(long)]
    seed: Option<u64>,

    /// Write the finished game's history to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the legal moves of the starting position and exit
    #[arg(long)]
    list_moves: bool,

    /// Let the engine play both sides instead of the configured mode
    #[arg(long)]
    self_play: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.settings.as_deref());
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(max_plies) = args.max_plies {
        settings.max_plies = max_plies;
    }
    settings
        .validate()
        .context("settings rejected after applying command-line overrides")?;

    let mut game = ChessGame::new();
    if args.list_moves {
        for mv in game.legal_moves() {
            println!("{}", mv);
        }
        return Ok(());
    }

    let white = args.white.map_or(settings.difficulty, Difficulty::from);
    let black = args.black.map_or(settings.difficulty, Difficulty::from);
    if args.self_play {
        self_play(&mut game, &settings, white, black)?;
    } else {
        play_mode(&mut game, &settings, white, black)?;
    }

    if let Some(path) = args.export {
        let data = game.export_game()?;
        fs::write(&path, data).with_context(|| format!("writing {}", path.display()))?;
        info!("Game written to {}", path.display());
    }
    Ok(())
}

fn self_play(
    game: &mut ChessGame,
    settings: &EngineSettings,
    white: Difficulty,
    black: Difficulty,
) -> Result<()> {
    let mut white_engine = ModeCoordinator::new(
        GameMode::VsAi {
            ai_color: PieceColor::White,
        },
        settings.ai_config(white),
    );
    let mut black_engine = ModeCoordinator::new(
        GameMode::VsAi {
            ai_color: PieceColor::Black,
        },
        settings.ai_config(black),
    );
    info!("White: {} / Black: {}", white.description(), black.description());

    for ply in 1..=settings.max_plies {
        let engine = match game.current_turn() {
            PieceColor::White => &mut white_engine,
            PieceColor::Black => &mut black_engine,
        };
        match engine.advance(game)? {
            TurnOutcome::Moved(mv) => println!("{:>3}. {}", ply, mv),
            TurnOutcome::GameOver(_) | TurnOutcome::NoMove | TurnOutcome::Waiting => break,
        }
    }
    println!("{}", game.status());
    Ok(())
}

/// Play under `settings.mode`, reading human moves from stdin
fn play_mode(
    game: &mut ChessGame,
    settings: &EngineSettings,
    white: Difficulty,
    black: Difficulty,
) -> Result<()> {
    let difficulty = match settings.mode {
        GameMode::Online { .. } => {
            bail!("online mode needs a network peer; pick another mode or pass --self-play")
        }
        GameMode::LocalTwoPlayer => settings.difficulty,
        GameMode::VsAi { ai_color } => match ai_color {
            PieceColor::White => white,
            PieceColor::Black => black,
        },
    };
    let mut coordinator = ModeCoordinator::new(settings.mode, settings.ai_config(difficulty));
    info!("Mode: {:?}", settings.mode);

    let mut input = io::stdin().lock().lines();
    let mut ply = 0;
    while ply < settings.max_plies {
        if coordinator.is_ai_turn(game) {
            match coordinator.advance(game)? {
                TurnOutcome::Moved(mv) => {
                    ply += 1;
                    println!("{:>3}. {}", ply, mv);
                    continue;
                }
                TurnOutcome::GameOver(_) | TurnOutcome::NoMove | TurnOutcome::Waiting => break,
            }
        }
        if game.game_state().is_game_over() {
            break;
        }

        print!("{} to move: ", game.current_turn());
        io::stdout().flush()?;
        let Some(line) = input.next() else {
            break;
        };
        let line = line?;
        if line.trim() == "quit" {
            break;
        }
        let submitted = parse_move(&line).and_then(|(from, to, promotion)| {
            Ok(coordinator.submit_move(game, from, to, promotion, MoveOrigin::Human)?)
        });
        match submitted {
            Ok(mv) => {
                ply += 1;
                println!("{:>3}. {}", ply, mv);
            }
            Err(err) => println!("{}", err),
        }
    }
    println!("{}", game.status());
    Ok(())
}

/// `e2L0 e4L0` or `e7L2 e8L2 n`
fn parse_move(line: &str) -> Result<(Position, Position, Option<PieceType>)> {
    let mut words = line.split_whitespace();
    let (Some(from), Some(to)) = (words.next(), words.next()) else {
        bail!("expected a move like 'e2L0 e4L0'");
    };
    let promotion = match words.next() {
        None => None,
        Some("q") => Some(PieceType::Queen),
        Some("r") => Some(PieceType::Rook),
        Some("b") => Some(PieceType::Bishop),
        Some("n") => Some(PieceType::Knight),
        Some(other) => bail!("unknown promotion '{}'", other),
    };
    if words.next().is_some() {
        bail!("trailing input after the move");
    }
    Ok((from.parse()?, to.parse()?, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let (from, to, promotion) = parse_move("e2L0 e4L0").unwrap();
        assert_eq!(from, Position::new(4, 1, 0));
        assert_eq!(to, Position::new(4, 3, 0));
        assert_eq!(promotion, None);

        let (_, to, promotion) = parse_move("  d7L2   d8L2 n ").unwrap();
        assert_eq!(to, Position::new(3, 7, 2));
        assert_eq!(promotion, Some(PieceType::Knight));
    }

    #[test]
    fn test_parse_move_rejects_junk() {
        for line in ["", "e2L0", "e2L0 e4", "e2L0 e4L0 k", "e2L0 e4L0 q extra"] {
            assert!(parse_move(line).is_err(), "{line}");
        }
    }

    #[test]
    fn test_configured_mode_drives_human_input() {
        //! Human input is only accepted for the side the configured mode leaves to people
        let settings = EngineSettings {
            mode: GameMode::VsAi {
                ai_color: PieceColor::White,
            },
            seed: Some(7),
            ..EngineSettings::default()
        };
        let coordinator =
            ModeCoordinator::new(settings.mode, settings.ai_config(Difficulty::Beginner));
        let mut game = ChessGame::new();
        assert!(coordinator.is_ai_turn(&game));
        let (from, to, promotion) = parse_move("e2L0 e4L0").unwrap();
        assert!(coordinator
            .submit_move(&mut game, from, to, promotion, MoveOrigin::Human)
            .is_err());
    }

    #[test]
    fn test_online_mode_is_refused() {
        let settings = EngineSettings {
            mode: GameMode::Online {
                local_color: PieceColor::White,
            },
            ..EngineSettings::default()
        };
        let mut game = ChessGame::new();
        let err = play_mode(&mut game, &settings, Difficulty::Beginner, Difficulty::Beginner);
        assert!(err.is_err());
        assert_eq!(game, ChessGame::new());
    }
}
