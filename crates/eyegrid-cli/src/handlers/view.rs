use crate::ui::{KeyboardSource, TerminalGuard, TerminalSink};
use anyhow::{Context, Result};
use eyegrid_runtime::{Config, PlaybackLoop, Session};
use is_terminal::IsTerminal;

pub fn handle(mut config: Config, delay_ms: Option<u64>, paused: bool) -> Result<()> {
    if let Some(delay_ms) = delay_ms {
        config.playback.delay_ms = delay_ms;
    }
    if paused {
        config.playback.autoplay = false;
    }

    // Load everything before touching the terminal so load errors stay readable
    let mut session = Session::load(&config)?;

    if !std::io::stdout().is_terminal() || !std::io::stdin().is_terminal() {
        anyhow::bail!("view requires an interactive terminal (try `eyegrid labels` or `eyegrid export`)");
    }

    let playback = PlaybackLoop::new(config.delay());
    let shape = session.navigation().shape();

    let _guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let mut sink = TerminalSink::new(shape, playback.delay())?;
    let mut source = KeyboardSource;

    tracing::info!(grid = %shape, autoplay = session.navigation().autoplay(), "viewer started");
    playback.run(&mut session, &mut source, &mut sink)?;
    Ok(())
}
