use ansi_term::Style;
use clap::Parser;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use retro::display::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use retro::mach::{Event, Listing, Runtime};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod display;

use display::TerminalDisplay;

#[derive(Debug, Parser)]
#[command(name = "retro")]
#[command(about = "A line-numbered BASIC with text and pixel graphics", long_about = None)]
pub struct Config {
    /// Text grid width in characters
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Text grid height in characters
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Statements executed between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    pub cycles: usize,

    /// Draw the pixel surface after a command changes it
    #[arg(long)]
    pub graphics: bool,

    /// Ignore COLOR when styling terminal text
    #[arg(long)]
    pub no_color: bool,
}

pub fn main() {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
        return;
    }
    if let Err(error) = main_loop(&config, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: &Config, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    info!(?config, "starting");
    let command = Interface::new("RETRO")?;
    let mut display = TerminalDisplay::new(config)?;
    let mut runtime = Runtime::default();
    let mut print_ready = true;

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            debug!("interrupt");
            runtime.interrupt();
        }
        let event = runtime.execute(&mut display, config.cycles);
        if display.has_output() {
            print_ready = true;
        }
        display.flush()?;
        match event {
            Event::Running => {}
            Event::Stopped => {
                if config.graphics {
                    display.render_graphics()?;
                }
                if print_ready {
                    print_ready = false;
                    command.write_fmt(format_args!("{}\n", Style::new().bold().paint("READY.")))?;
                    display.mirror_line("READY.");
                }
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                display.mirror_line(&string);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
        }
    }
    Ok(())
}

/// Typing a line number then TAB brings back that line for editing.
struct LineCompleter {
    lines: BTreeMap<u16, String>,
}

impl LineCompleter {
    fn new(listing: &Listing) -> LineCompleter {
        let lines = listing
            .lines()
            .filter_map(|line| line.number().map(|number| (number, line.to_string())))
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let number = prompter.buffer().trim().parse::<u16>().ok()?;
        let line = self.lines.get(&number)?;
        let mut comp = Completion::simple(line.clone());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
