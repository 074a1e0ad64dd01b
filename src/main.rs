//! Flip-dot clock runner (default binary).
//!
//! Picks one mode (test pattern, text, clock) from the command line, opens
//! the serial port or the terminal, and runs it until done or until an
//! error ends it.

use std::time::Duration;

use anyhow::{Context, Result};

use flipdot_clock::config::{Mode, RunConfig, USAGE};
use flipdot_clock::core::Display;
use flipdot_clock::logger;
use flipdot_clock::types::CLOCK_REFRESH_MS;
use flipdot_clock::Output;

fn main() -> Result<()> {
    let Some(config) = RunConfig::from_env_and_args(std::env::args().skip(1))? else {
        eprint!("{USAGE}");
        return Ok(());
    };
    logger::init(config.log_level());

    if config.mode == Mode::Idle {
        log::info!("No mode selected. Exiting.");
        return Ok(());
    }

    let output = Output::open(&config).context("Failed to create display")?;
    let mut display = Display::new(output);

    let result = run(&mut display, &config);

    // Always release the port or terminal, even after a failure.
    let closed = display.close().context("Failed to close display");
    result.and(closed)
}

fn run(display: &mut Display<Output>, config: &RunConfig) -> Result<()> {
    match &config.mode {
        Mode::TestPattern => display
            .show_test_pattern()
            .context("Failed to run test pattern"),
        Mode::Text(text) => display
            .show_text(
                text,
                config.scroll_speed.interval(),
                config.text_loop,
                config.text_size,
            )
            .context("Failed to show text"),
        Mode::Clock => display
            .run_clock(Duration::from_millis(CLOCK_REFRESH_MS), || true)
            .context("Failed to show time"),
        Mode::Idle => Ok(()),
    }
}
