//! Output formatting for suggestions and store statistics

use crate::dict::stats::StoreStats;
use crate::dict::types::{Suggestion, WordKind};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print ranked candidates, one per line: rank, word, weight
pub fn print_suggestions(suggestions: &[Suggestion], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_suggestions(&mut stdout, suggestions)
}

pub fn write_suggestions(out: &mut impl WriteColor, suggestions: &[Suggestion]) -> io::Result<()> {
    let width = suggestions.iter().map(|s| s.word.chars().count()).max().unwrap_or(0);

    for (rank, s) in suggestions.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{:>3}", rank + 1)?;
        out.reset()?;
        write!(out, "  ")?;

        let word_color = match s.kind {
            WordKind::Unigram => Color::Green,
            WordKind::Bigram => Color::Magenta,
        };
        out.set_color(ColorSpec::new().set_fg(Some(word_color)).set_bold(true))?;
        write!(out, "{}", s.word)?;
        out.reset()?;

        let pad = width - s.word.chars().count();
        writeln!(out, "{:pad$}  {}", "", s.weight, pad = pad)?;
    }
    Ok(())
}

/// Print whether a word is stored and with which frequency
pub fn print_lookup(word: &str, frequency: Option<u32>, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    write!(stdout, "{}", word)?;
    stdout.reset()?;
    write!(stdout, ": ")?;
    match frequency {
        Some(f) => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(stdout, "{}", f)?;
        }
        None => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(stdout, "not found")?;
        }
    }
    stdout.reset()
}

pub fn print_stats(stats: &StoreStats, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    let rows = [
        ("Words", stats.words),
        ("Nodes", stats.nodes),
        ("Roots", stats.roots),
        ("Continuations", stats.continuations),
        ("Longest word", stats.max_depth),
    ];
    for (label, value) in rows {
        write!(stdout, "{:<14}", label)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", value)?;
        stdout.reset()?;
    }

    if !stats.words_by_initial.is_empty() {
        writeln!(stdout, "Top initials:")?;
        for (initial, count) in stats.words_by_initial.iter().take(10) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(stdout, "  {}", initial)?;
            stdout.reset()?;
            writeln!(stdout, "  {}", count)?;
        }
    }
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)
}
