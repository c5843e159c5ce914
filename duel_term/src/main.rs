mod keymap;
mod term_render;

use clap::Parser;
use console::{Key, Term};
use serde::Serialize;
use tetris_duel::{
    BoardId, Game, GameConfig, GameMode, GameState, GravityClock, GravityTick, GravityTimer,
    TetrisError,
};

use crate::keymap::{KeyAction, help_lines, map_key};
use crate::term_render::{AnsiTermStyle, GameView, PlainTermStyle, TermRender};

/// duel_term - two-player falling-block duel in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Play alone on one board
    #[arg(long)]
    single: bool,

    /// Seed for piece order and penalty holes
    #[arg(long)]
    seed: Option<u64>,

    /// Gravity interval at level 0, in milliseconds
    #[arg(long, default_value_t = 1000)]
    gravity_ms: u64,

    /// Do not award a point per row on hard drop
    #[arg(long)]
    no_drop_score: bool,

    /// Render without colors
    #[arg(long)]
    plain: bool,

    /// Print the final scores as JSON on exit
    #[arg(long)]
    summary_json: bool,

    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct BoardSummary {
    board: BoardId,
    score: u64,
    level: u32,
    lines: u32,
    game_over: bool,
}

#[derive(Serialize)]
struct Summary {
    winner: Option<BoardId>,
    boards: Vec<BoardSummary>,
}

impl From<&GameState> for Summary {
    fn from(state: &GameState) -> Self {
        Summary {
            winner: state.winner,
            boards: state
                .boards
                .iter()
                .map(|board| BoardSummary {
                    board: board.board,
                    score: board.status.score,
                    level: board.status.level,
                    lines: board.status.lines,
                    game_over: board.game_over,
                })
                .collect(),
        }
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 1)]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let render_term = Term::stdout();
    if !render_term.is_term() {
        return Err(TetrisError::SurfaceUnavailable("stdout is not a terminal".to_string()).into());
    }

    let mode = if args.single {
        GameMode::Single
    } else {
        GameMode::Duel
    };
    let config = GameConfig::new()
        .with_gravity_base_ms(args.gravity_ms)
        .with_hard_drop_scoring(!args.no_drop_score)
        .with_seed(args.seed);

    let (tick_tx, tick_rx) = flume::unbounded::<GravityTick>();
    let mut game = Game::new(
        mode,
        &config,
        |id: BoardId| -> tetris_duel::Result<Box<dyn GravityTimer>> {
            Ok(Box::new(GravityClock::new(id, tick_tx.clone())?))
        },
    )?;

    // Keyboard reader blocks on the terminal, keep it off the runtime
    let (key_tx, key_rx) = flume::unbounded::<Key>();
    std::thread::spawn(move || {
        let input_term = Term::stdout();
        while let Ok(key) = input_term.read_key() {
            if key_tx.send(key).is_err() {
                break;
            }
        }
    });

    let help = help_lines(mode);
    render_term.hide_cursor()?;
    render_term.clear_screen()?;
    render_game(&render_term, &game.get_state(), &help, args.plain)?;

    let mut quit = false;
    loop {
        tokio::select! {
            Ok(tick) = tick_rx.recv_async() => {
                game.gravity_tick(tick);
            }
            key = key_rx.recv_async() => {
                match key.map(|key| map_key(mode, &key)) {
                    Ok(Some(KeyAction::Board(id, command))) => {
                        tracing::debug!("Board '{}' command {:?}", id, command);
                        game.apply(id, command);
                    }
                    // Keyboard reader gone means no more input
                    Ok(Some(KeyAction::Quit)) | Err(_) => {
                        quit = true;
                    }
                    Ok(None) => {}
                }
            }
        }
        let over = game.update();
        render_game(&render_term, &game.get_state(), &help, args.plain)?;
        if over || quit {
            break;
        }
    }

    let state = game.get_state();
    if !quit {
        render_term.write_line("Game Over! Press any key")?;
        let _ = key_rx.recv_async().await;
    }
    render_term.show_cursor()?;

    match state.winner {
        Some(winner) => println!("Winner: {}", winner),
        None => println!("Game Over!"),
    }
    for board in &state.boards {
        println!(
            "{}: score {} level {} lines {}",
            board.board, board.status.score, board.status.level, board.status.lines
        );
    }
    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&Summary::from(&state))?);
    }
    Ok(())
}

fn render_game(term: &Term, state: &GameState, help: &[String], plain: bool) -> anyhow::Result<()> {
    let view = GameView::new(state, help.to_vec());
    let lines = if plain {
        view.render(&PlainTermStyle)
    } else {
        view.render(&AnsiTermStyle)
    };

    term.move_cursor_to(0, 0)?;
    for line in lines {
        term.write_line(&line)?;
    }
    term.flush()?;

    Ok(())
}
