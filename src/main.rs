// What you SEE:
// • A 3x3 board. Left-click an empty cell to drop the current player's mark (X first).
// • Three in a row, or a full board, brings up the result box.
// • R starts a new game once the result is showing. ESC (or closing the window) quits.

use clap::Parser;
use tic_tac_toe::config::{Cli, Config};
use tic_tac_toe::draw::{rasterize, Drawer};
use tic_tac_toe::error::Error;
use tic_tac_toe::input::{Flow, InputMapper};
use tic_tac_toe::render::Renderer;
use tic_tac_toe::session::GameSession;
use tic_tac_toe::types::FrameBuffer;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;
    info!(?config, "starting");

    /* --- Window setup ---
       Visual: an empty window opens at the configured size. */
    let side = config.window_size();
    let mut drawer = Drawer::new("Tic Tac Toe", side, side, config.fps())?;

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(side, side, config.palette().background);

    let mapper = InputMapper::new(&config);
    let renderer = Renderer::new(&config);
    let mut session = GameSession::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        /* 1) Inputs: clicks place marks, R replays, ESC/close quits.
              Visual: nothing yet; state changes show up after step 3. */
        if mapper.dispatch_all(&mut session, drawer.poll_events()) == Flow::Quit {
            break;
        }

        /* 2) Describe the frame, then paint it.
              Visual: grid, marks and (when over) the result box land in `screen`. */
        let cmds = renderer.frame(&session);
        rasterize(&mut screen, &cmds);

        /* 3) Present (blocks until the next frame tick).
              Visual: the new frame appears in the window. */
        drawer.present(&screen)?;
    }

    info!("bye");
    Ok(())
}
