//! Terminal falling-block game (default binary).
//!
//! One thread polls the keyboard and sends [`InputEvent`]s over a channel; the main
//! thread owns the game, applies queued actions, advances gravity once per frame and
//! renders through the framebuffer renderer.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use log::{info, warn};

use blockfall::config::{GameConfig, USAGE};
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{spawn_input_thread, InputEvent};
use blockfall::logging::init_log;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::INPUT_POLL_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = GameConfig::from_env().apply_args(&args)?;
    config.validate()?;
    if let Some(path) = &config.log_path {
        init_log(config.log_level, path)?;
    }

    let seed = config.seed_or_clock();
    info!(
        "starting {}x{} board at {} fps, seed {}",
        config.width, config.height, config.fps, seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = result?;
    info!("final score {}", score);
    println!("Final score: {}", score);
    Ok(())
}

/// Frame state owned by the main thread.
struct Frame {
    view: GameView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl Frame {
    fn draw(&mut self, term: &mut TerminalRenderer, game: &GameState) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut self.snap);
        self.view
            .render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
        term.draw(&self.fb)
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<u32> {
    let events = spawn_input_thread(Duration::from_millis(INPUT_POLL_MS))?;
    let mut game = GameState::new(config.width, config.height, seed);
    let mut frame = Frame {
        view: GameView::default(),
        snap: GameSnapshot::default(),
        fb: FrameBuffer::new(0, 0),
    };
    let frame_duration = config.frame_duration();

    while game.running() {
        let frame_start = Instant::now();

        if !drain_events(&events, &mut game, term)? {
            info!("quit requested");
            return Ok(game.score());
        }

        game.tick();
        frame.draw(term, &game)?;

        if let Some(rest) = frame_duration.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    info!("game over");
    frame.draw(term, &game)?;
    wait_for_key(&events, term, &mut frame, &game)?;
    Ok(game.score())
}

/// Apply every queued event. Returns `false` when the player asked to quit.
fn drain_events(
    events: &Receiver<InputEvent>,
    game: &mut GameState,
    term: &mut TerminalRenderer,
) -> Result<bool> {
    loop {
        match events.try_recv() {
            Ok(InputEvent::Action(action)) => game.apply_action(action),
            Ok(InputEvent::Quit) => return Ok(false),
            Ok(InputEvent::Resize(..)) => term.invalidate(),
            Ok(InputEvent::Error(e)) => return Err(anyhow!(e)),
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Err(anyhow!("input: thread stopped")),
        }
    }
}

/// Keep the final frame on screen until any key.
fn wait_for_key(
    events: &Receiver<InputEvent>,
    term: &mut TerminalRenderer,
    frame: &mut Frame,
    game: &GameState,
) -> Result<()> {
    loop {
        match events.recv() {
            Ok(InputEvent::Action(_)) | Ok(InputEvent::Quit) => return Ok(()),
            Ok(InputEvent::Resize(..)) => {
                term.invalidate();
                frame.draw(term, game)?;
            }
            Ok(InputEvent::Error(e)) => return Err(anyhow!(e)),
            Err(_) => {
                warn!("input thread closed while waiting on game over");
                return Ok(());
            }
        }
    }
}
