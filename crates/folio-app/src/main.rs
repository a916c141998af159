//! folio console entry point.
//!
//! Runs the portfolio terminal as a stdin/stdout REPL: each line is
//! submitted to the session, new transcript output is printed, and the
//! side effects that would hit a web page (scrolling, opening links)
//! are announced on the console instead. Pass a TOML config path as
//! the first argument to override the built-in profile.

mod render;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use folio_terminal::{CommandRegistry, HostServices, Session, register_builtins};
use folio_types::config::TerminalConfig;

/// Host that narrates side effects instead of performing them.
struct ConsoleHost;

impl HostServices for ConsoleHost {
    fn scroll_to_section(&mut self, section_id: &str, header_offset: i32) {
        println!("  >> page scrolls to #{section_id} (offset {header_offset}px)");
    }

    fn open_url(&mut self, url: &str) {
        println!("  >> new tab: {url}");
    }

    fn open_mail(&mut self, address: &str) {
        println!("  >> mail client: {address}");
    }

    fn show_resume(&mut self) {
        println!("  >> resume preview opens");
    }

    fn open_game(&mut self) {
        println!("  >> game hub opens, maximized");
    }
}

fn load_config() -> Result<TerminalConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            let cfg = TerminalConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config file {path}"))?;
            log::info!("loaded config from {path}");
            Ok(cfg)
        },
        None => Ok(TerminalConfig::default()),
    }
}

/// Print every transcript line newer than `last_seq`, returning the
/// new high-water mark. Sequence numbers survive `clear`, so this
/// never reprints old output.
fn print_new_lines(session: &Session, last_seq: &mut Option<u64>) {
    for line in session.transcript() {
        if last_seq.is_none_or(|seen| line.seq > seen) {
            println!("{}", render::format_line(line));
            *last_seq = Some(line.seq);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let auto_collapse_ms = config.auto_collapse_ms;

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let mut session = Session::new(config, registry);
    session.expand();
    let mut host = ConsoleHost;
    let mut last_seq = None;

    print_new_lines(&session, &mut last_seq);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("{} ", session.config().prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        session.submit(&line, &mut host);
        print_new_lines(&session, &mut last_seq);

        // No render loop here, so drive the timers far enough that any
        // post-command auto-collapse fires before the next prompt.
        session.tick(auto_collapse_ms);
        if !session.is_expanded() {
            println!("  (terminal collapsed)");
            session.expand();
            session.tick(auto_collapse_ms);
        }
    }

    session.shutdown();
    log::info!("session closed");
    Ok(())
}
