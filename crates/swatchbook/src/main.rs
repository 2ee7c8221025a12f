//! Headless driver for the color picker.
//!
//! Reads commands from stdin, one per line, and prints the rendered view
//! tree after every change:
//!
//! ```text
//! preset <1-5>   select a preset swatch
//! edit <text>    replace the color text
//! copy           copy the color text to the clipboard
//! toggle         switch between light and dark mode
//! show           print the view tree
//! quit           exit
//! ```
//!
//! Flags: `--config <path>`, `--memory-clipboard`, `--ascii`.
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use swatchbook::config::{ConfigError, PickerConfig};
use swatchbook::platform::{ClipboardBackend, MemoryClipboard, SystemClipboard};
use swatchbook::widget::{ColorPickerWidget, PickerEvent};
use swatchbook_core::{
    ControlFlow, CoreError, EventLoop, LoopEvent, SharedTimerManager, TreeFormatOptions, TreeStyle,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: swatchbook [--config <path>] [--memory-clipboard] [--ascii]";

#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    EventLoop(#[from] CoreError),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    config: Option<PathBuf>,
    memory_clipboard: bool,
    ascii: bool,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, DriverError> {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| DriverError::Usage("--config needs a path".into()))?;
                    options.config = Some(PathBuf::from(path));
                }
                "--memory-clipboard" => options.memory_clipboard = true,
                "--ascii" => options.ascii = true,
                other => {
                    return Err(DriverError::Usage(format!("unknown argument '{other}'")));
                }
            }
        }
        Ok(options)
    }
}

/// A parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Picker(PickerEvent),
    Show,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        match word {
            "preset" => {
                let index = rest
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .ok_or_else(|| format!("expected a preset number, got '{}'", rest.trim()))?;
                Ok(Self::Picker(PickerEvent::SelectPreset(index)))
            }
            // Keep the text verbatim, spaces included.
            "edit" => Ok(Self::Picker(PickerEvent::EditColorText(rest.to_string()))),
            "copy" => Ok(Self::Picker(PickerEvent::CopyToClipboard)),
            "toggle" => Ok(Self::Picker(PickerEvent::ToggleTheme)),
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

/// Owns the widget and prints its view tree as events arrive.
struct Driver<W: Write> {
    picker: ColorPickerWidget,
    format: TreeFormatOptions,
    out: W,
}

impl<W: Write> Driver<W> {
    fn new(picker: ColorPickerWidget, format: TreeFormatOptions, out: W) -> Self {
        Self {
            picker,
            format,
            out,
        }
    }

    fn print_view(&mut self) {
        let text = self.picker.render().format(&self.format);
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            tracing::warn!("failed to write view: {err}");
        }
    }

    fn handle(&mut self, event: LoopEvent<Command>) -> ControlFlow {
        match event {
            LoopEvent::Timer { id } => {
                if self.picker.dispatch(PickerEvent::Timer { id }) {
                    self.print_view();
                }
            }
            LoopEvent::User(Command::Picker(event)) => {
                let described = format!("{event:?}");
                if self.picker.dispatch(event) {
                    self.print_view();
                } else {
                    tracing::warn!("ignored {described}");
                }
            }
            LoopEvent::User(Command::Show) => self.print_view(),
            LoopEvent::User(Command::Quit) | LoopEvent::Quit => return ControlFlow::Exit,
        }
        ControlFlow::Continue
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: Options) -> Result<(), DriverError> {
    let config = PickerConfig::discover(options.config.as_deref())?;

    let clipboard: Box<dyn ClipboardBackend> = if options.memory_clipboard {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(SystemClipboard::new())
    };

    let timers = Arc::new(SharedTimerManager::new());
    let event_loop = EventLoop::<Command>::new(timers.clone());
    let picker = ColorPickerWidget::with_config(config, timers, clipboard)?;

    let format = if options.ascii {
        TreeFormatOptions::default().with_style(TreeStyle::Ascii)
    } else {
        TreeFormatOptions::default()
    };
    let mut driver = Driver::new(picker, format, std::io::stdout());

    let proxy = event_loop.proxy();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match Command::parse(&line) {
                Ok(command) => {
                    if proxy.send(command).is_err() {
                        return;
                    }
                }
                Err(message) => tracing::warn!("{message}"),
            }
        }
        let _ = proxy.quit();
    });

    driver.print_view();
    event_loop.run(|event| driver.handle(event))?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let result = Options::parse(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
