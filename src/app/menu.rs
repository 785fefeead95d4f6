//! Menu choices: map the text typed at a menu prompt to a semantic action.
//!
//! Input is trimmed before matching; anything outside the listed digits is an
//! [`RegistryError::InvalidMenuChoice`].

use std::str::FromStr;

use crate::error::RegistryError;
use crate::model::Kind;

/// Selection made on the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    /// Open the submenu for one record kind.
    Manage(Kind),
    /// Leave the program.
    Exit,
}

impl MainChoice {
    /// Menu entries in display order, paired with the digit that selects them.
    pub const ENTRIES: [(&'static str, &'static str); 4] = [
        ("1", "Manage Teacher"),
        ("2", "Manage Student"),
        ("3", "Manage Admin"),
        ("4", "Exit"),
    ];
}

impl FromStr for MainChoice {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MainChoice::Manage(Kind::Teacher)),
            "2" => Ok(MainChoice::Manage(Kind::Student)),
            "3" => Ok(MainChoice::Manage(Kind::Admin)),
            "4" => Ok(MainChoice::Exit),
            other => Err(RegistryError::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Selection made on a per-kind submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityAction {
    ShowList,
    Add,
    Delete,
    Edit,
    /// Return to the main menu.
    Back,
}

impl EntityAction {
    pub const ENTRIES: [(&'static str, &'static str); 5] = [
        ("1", "Show List"),
        ("2", "Add"),
        ("3", "Delete"),
        ("4", "Edit"),
        ("5", "Back"),
    ];
}

impl FromStr for EntityAction {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(EntityAction::ShowList),
            "2" => Ok(EntityAction::Add),
            "3" => Ok(EntityAction::Delete),
            "4" => Ok(EntityAction::Edit),
            "5" => Ok(EntityAction::Back),
            other => Err(RegistryError::InvalidMenuChoice(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_digits() {
        assert_eq!("1".parse::<MainChoice>().unwrap(), MainChoice::Manage(Kind::Teacher));
        assert_eq!(" 2 ".parse::<MainChoice>().unwrap(), MainChoice::Manage(Kind::Student));
        assert_eq!("3".parse::<MainChoice>().unwrap(), MainChoice::Manage(Kind::Admin));
        assert_eq!("4".parse::<MainChoice>().unwrap(), MainChoice::Exit);
    }

    #[test]
    fn main_menu_rejects_unknown() {
        for bad in ["", "0", "5", "one", "1 2"] {
            assert!(
                matches!(bad.parse::<MainChoice>(), Err(RegistryError::InvalidMenuChoice(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn entity_menu_digits() {
        let parsed: Vec<EntityAction> = EntityAction::ENTRIES
            .iter()
            .map(|(digit, _)| digit.parse().unwrap())
            .collect();
        assert_eq!(
            parsed,
            vec![
                EntityAction::ShowList,
                EntityAction::Add,
                EntityAction::Delete,
                EntityAction::Edit,
                EntityAction::Back,
            ]
        );
        assert!("6".parse::<EntityAction>().is_err());
    }
}
