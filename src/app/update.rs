use std::io::{BufRead, Write};

use crate::app::menu::{EntityAction, MainChoice};
use crate::app::{AppState, Screen, Tone};
use crate::error::{RegistryError, Result};
use crate::model::Kind;
use crate::ui::{self, CHOICE_PROMPT, Console, forms};

pub const FAREWELL: &str = "Exiting program...";

/// Drive the menu state machine until Exit is chosen or input runs out.
pub fn run_app<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<()> {
    while app.screen != Screen::Exit {
        let step = match app.screen {
            Screen::Main => main_menu(console),
            Screen::Entity(kind) => entity_menu(app, console, kind),
            Screen::Exit => Ok(Screen::Exit),
        };
        match step {
            Ok(next) => {
                if next != app.screen {
                    tracing::debug!(from = ?app.screen, to = ?next, "screen change");
                }
                app.screen = next;
            }
            Err(RegistryError::InputClosed) => {
                tracing::debug!("input closed");
                console.blank_line()?;
                console.say(Tone::Muted, FAREWELL)?;
                app.screen = Screen::Exit;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Screen> {
    ui::render_main_menu(console)?;
    let raw = console.read_choice(CHOICE_PROMPT)?;
    match raw.parse::<MainChoice>() {
        Ok(MainChoice::Manage(kind)) => Ok(Screen::Entity(kind)),
        Ok(MainChoice::Exit) => {
            console.say(Tone::Muted, FAREWELL)?;
            Ok(Screen::Exit)
        }
        Err(e) => {
            tracing::debug!(error = %e, "main menu");
            console.say(Tone::Error, "Invalid choice!")?;
            Ok(Screen::Main)
        }
    }
}

fn entity_menu<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<Screen> {
    ui::render_entity_menu(console, kind)?;
    let raw = console.read_choice(CHOICE_PROMPT)?;
    let action = match raw.parse::<EntityAction>() {
        Ok(action) => action,
        Err(e) => {
            tracing::debug!(error = %e, %kind, "entity menu");
            console.say(Tone::Error, "Invalid option!")?;
            return Ok(Screen::Entity(kind));
        }
    };

    match action {
        EntityAction::ShowList => show_list(app, console, kind)?,
        EntityAction::Add => add_record(app, console, kind)?,
        EntityAction::Delete => delete_records(app, console, kind)?,
        EntityAction::Edit => edit_record(app, console, kind)?,
        EntityAction::Back => return Ok(Screen::Main),
    }
    Ok(Screen::Entity(kind))
}

fn show_list<R: BufRead, W: Write>(
    app: &AppState,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let lines = app.registry.render_list(kind);
    ui::render_list(console, kind, &lines)
}

fn add_record<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let draft = forms::add_form(console, kind)?;
    match app.registry.add(draft) {
        Ok(id) => console.say(Tone::Success, &format!("{kind} added successfully! (ID {id})")),
        Err(e @ RegistryError::Validation { .. }) => console.say(Tone::Error, &e.to_string()),
        Err(e) => Err(e),
    }
}

fn delete_records<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let name = forms::name_form(console, "Delete")?;
    match app.registry.remove_by_name(kind, &name) {
        0 => console.say(Tone::Error, &format!("{kind} not found!")),
        n => console.say(Tone::Success, &format!("{kind} deleted! ({n} removed)")),
    }
}

fn edit_record<R: BufRead, W: Write>(
    app: &mut AppState,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let name = forms::name_form(console, "Edit")?;
    let position = match app.registry.locate(kind, &name) {
        Ok(p) => p,
        Err(RegistryError::NotFound { .. }) => {
            return console.say(Tone::Error, &format!("{kind} not found!"));
        }
        Err(e) => return Err(e),
    };
    let patch = forms::edit_form(console, kind)?;
    app.registry.apply_patch(kind, position, patch)?;
    console.say(Tone::Success, &format!("{kind} updated successfully!"))
}
