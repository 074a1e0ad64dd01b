//! Run configuration for the `flipdot-clock` binary.
//!
//! Command-line flags are layered over environment defaults:
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--serial-port <path>` | `FLIPDOT_SERIAL_PORT` | `/dev/ttyS0` |
//! | `--serial-baud <n>` | `FLIPDOT_SERIAL_BAUD` | 57600 |
//! | `--terminal` | `FLIPDOT_TERMINAL` | off |
//! | `--debug` | `FLIPDOT_DEBUG` | off |
//! | `--test` | | |
//! | `--clock` | | |
//! | `--text <s>` | | |
//! | `--text-loop` | | off |
//! | `--text-size <14x9\|5x8>` | | `14x9` |
//! | `--scroll-speed <1..=10>` | | 5 |
//!
//! Values may be given as `--flag value` or `--flag=value`.

use std::env;

use anyhow::{anyhow, bail, Context, Result};

use crate::core::ScrollSpeed;
use crate::serial::SerialConfig;
use crate::types::{SizeClass, MAX_SCROLL_SPEED, MIN_SCROLL_SPEED};

pub const USAGE: &str = "\
flipdot-clock: a small tool for displaying text or the time on a Alfa-Zeta XY5 14*28 flipdot display

Usage: flipdot-clock [OPTIONS]

  --serial-port <path>   The serial port connected to the displays (default /dev/ttyS0)
  --serial-baud <n>      The baud rate for the serial connection (default 57600)
  --terminal             Display output to terminal instead of serial port
  --test                 Display a test pattern and then exit
  --clock                Run the clock
  --text <text>          Display some text
  --text-loop            Loop text continuously
  --text-size <size>     Size of each character, one of 14x9 or 5x8 (default 14x9)
  --scroll-speed <n>     Text scroll speed, 1 is slow 10 is fast (default 5)
  --debug                Enable debug logging
  --help                 Show this message
";

/// What the binary should do, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    TestPattern,
    Text(String),
    Clock,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub serial: SerialConfig,
    pub terminal: bool,
    pub debug: bool,
    pub mode: Mode,
    pub text_loop: bool,
    pub text_size: SizeClass,
    pub scroll_speed: ScrollSpeed,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            terminal: false,
            debug: false,
            mode: Mode::Idle,
            text_loop: false,
            text_size: SizeClass::Large,
            scroll_speed: ScrollSpeed::default(),
        }
    }
}

impl RunConfig {
    /// Defaults overridden by `FLIPDOT_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            serial: SerialConfig::from_env(),
            terminal: env_flag("FLIPDOT_TERMINAL"),
            debug: env_flag("FLIPDOT_DEBUG"),
            ..Self::default()
        }
    }

    /// Parse command-line arguments (without the program name) on top of
    /// [`RunConfig::from_env`]. Returns `None` when help was requested.
    pub fn from_env_and_args<I>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_env().with_args(args)
    }

    /// Parse command-line arguments on top of `self`.
    pub fn with_args<I>(mut self, args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut test = false;
        let mut clock = false;
        let mut text: Option<String> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args.next().ok_or_else(|| anyhow!("{name} needs a value")),
                }
            };

            match flag.as_str() {
                "--serial-port" => self.serial.port = value("--serial-port")?,
                "--serial-baud" => {
                    let raw = value("--serial-baud")?;
                    self.serial.baud_rate = raw
                        .parse()
                        .with_context(|| format!("Invalid serial-baud value {raw}"))?;
                }
                "--terminal" => self.terminal = true,
                "--test" => test = true,
                "--clock" => clock = true,
                "--text" => text = Some(value("--text")?),
                "--text-loop" => self.text_loop = true,
                "--text-size" => {
                    let raw = value("--text-size")?;
                    self.text_size = SizeClass::from_str(&raw).ok_or_else(|| {
                        anyhow!("Invalid text-size value {raw}. Must be 14x9 or 5x8")
                    })?;
                }
                "--scroll-speed" => {
                    let raw = value("--scroll-speed")?;
                    self.scroll_speed = raw
                        .parse::<u8>()
                        .ok()
                        .and_then(ScrollSpeed::new)
                        .ok_or_else(|| {
                            anyhow!(
                                "Invalid scroll-speed value {raw}. \
                                 Must be {MIN_SCROLL_SPEED} to {MAX_SCROLL_SPEED}"
                            )
                        })?;
                }
                "--debug" => self.debug = true,
                "-h" | "--help" => return Ok(None),
                other => bail!("Unknown argument {other}"),
            }
        }

        self.mode = if test {
            Mode::TestPattern
        } else if let Some(text) = text.filter(|t| !t.is_empty()) {
            Mode::Text(text)
        } else if clock {
            Mode::Clock
        } else {
            Mode::Idle
        };
        Ok(Some(self))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
