pub mod forms;
pub mod prompt;

use std::io::{BufRead, Write};

use crate::app::Tone;
use crate::app::menu::{EntityAction, MainChoice};
use crate::error::Result;
use crate::model::Kind;

pub use prompt::Console;

pub const CHOICE_PROMPT: &str = "Choice: ";

fn render_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    entries: &[(&str, &str)],
) -> Result<()> {
    console.blank_line()?;
    console.say(Tone::Title, &format!("==== {title} ===="))?;
    for (digit, label) in entries {
        console.say(Tone::Text, &format!("{digit}. {label}"))?;
    }
    Ok(())
}

pub fn render_main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    render_menu(console, "MAIN MENU", &MainChoice::ENTRIES)
}

pub fn render_entity_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let title = format!("{} MENU", kind.label().to_uppercase());
    render_menu(console, &title, &EntityAction::ENTRIES)
}

/// Heading followed by one line per record, or `No items.` for an empty roster.
pub fn render_list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: Kind,
    lines: &[String],
) -> Result<()> {
    console.blank_line()?;
    console.say(Tone::Title, &format!("--- {} LIST ---", kind.label().to_uppercase()))?;
    if lines.is_empty() {
        return console.say(Tone::Muted, "No items.");
    }
    for line in lines {
        console.say(Tone::Text, line)?;
    }
    Ok(())
}
