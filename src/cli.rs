// src/cli.rs
use std::io::{self, Write};

use thiserror::Error;

use crate::{
    config::options::AppOptions,
    contact::Record,
    error::StoreError,
    present::{ContactView, NoticeKind, Notifier, HEADERS},
    runner::{self, FetchOutcome},
    store::ContactStore,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Fetch(String),
    List,
    Help,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("fetch did not complete (see messages above)")]
    Failed,
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<(), CliError> {
    let mut opts = AppOptions::default();
    let cmd = parse_args(args, &mut opts)?;
    let mut out = io::stdout().lock();

    match cmd {
        Command::Help => {
            write!(out, "{}", include_str!("cli_help.txt"))?;
            Ok(())
        }
        Command::List => {
            let stored = ContactStore::new(&opts.store).load_all()?;
            let rows: Vec<Record> = stored.into_iter().map(|c| c.record).collect();
            write_table(&mut out, &rows)?;
            writeln!(out, "{} stored contact(s)", rows.len())?;
            Ok(())
        }
        Command::Fetch(url) => {
            let mut view = TerminalView::default();
            let mut notifier = TerminalNotifier;
            let outcome = runner::run_fetch(&url, &opts, &mut view, &mut notifier);
            if !view.rows.is_empty() {
                write_table(&mut out, &view.rows)?;
            }
            match outcome {
                FetchOutcome::Saved { .. } | FetchOutcome::Empty => Ok(()),
                _ => Err(CliError::Failed),
            }
        }
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(
    args: I,
    opts: &mut AppOptions,
) -> Result<Command, CliError> {
    let mut url: Option<String> = None;
    let mut list = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--db" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --db"))?;
                opts.store.set_path(&v);
            }
            "--list" => list = true,
            "-h" | "--help" => return Ok(Command::Help),
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(usage(&format!("Unknown arg: {}", a)));
            }
            _ => {
                if url.is_some() {
                    return Err(usage("Only one URL per run"));
                }
                url = Some(a.clone());
            }
        }
    }

    match (list, url) {
        (true, Some(_)) => Err(usage("--list takes no URL")),
        (true, None) => Ok(Command::List),
        (false, Some(u)) => Ok(Command::Fetch(u)),
        (false, None) => Err(usage("Missing URL (try --help)")),
    }
}

fn usage(msg: &str) -> CliError {
    CliError::Usage(s!(msg))
}

/* ---------- presentation adapters ---------- */

#[derive(Default)]
struct TerminalView {
    rows: Vec<Record>,
}

impl ContactView for TerminalView {
    fn clear(&mut self) {
        self.rows.clear();
    }
    fn append_row(&mut self, record: &Record) {
        self.rows.push(record.clone());
    }
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        match kind {
            NoticeKind::Info => println!("{title}: {message}"),
            NoticeKind::Warning => eprintln!("Warning: {title}: {message}"),
            NoticeKind::Error => eprintln!("Error: {title}: {message}"),
        }
    }
}

/// Left-aligned, padded three-column table with a header row.
pub fn write_table<W: Write>(out: &mut W, rows: &[Record]) -> io::Result<()> {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in rows {
        for (w, cell) in widths.iter_mut().zip(r.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |out: &mut W, cells: [&str; 3]| -> io::Result<()> {
        writeln!(
            out,
            "{:<w0$}  {:<w1$}  {}",
            cells[0], cells[1], cells[2],
            w0 = widths[0], w1 = widths[1],
        )
    };

    line(&mut *out, HEADERS)?;
    for r in rows {
        line(&mut *out, r.cells())?;
    }
    Ok(())
}
