//! Input forms for the Add, Delete and Edit operations.
//!
//! Forms only collect and validate input; the store applies the result.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::model::{Contact, ContactPatch, Draft, DetailsPatch, Kind, Patch, Salary};
use crate::ui::Console;

const KEEP: &str = "(leave blank to keep)";

fn read_salary<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Salary> {
    let amount = console.read_int("Enter Salary: ", 0, Salary::MAX)?;
    Salary::new(amount)
}

fn read_optional_salary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Salary>> {
    let prompt = format!("Enter new Salary {KEEP}: ");
    console
        .read_optional_int(&prompt, 0, Salary::MAX)?
        .map(Salary::new)
        .transpose()
}

fn keep<R: BufRead, W: Write>(console: &mut Console<R, W>, field: &str) -> Result<Option<String>> {
    console.read_optional(&format!("Enter new {field} {KEEP}: "))
}

/// Prompt for every field of a new record of `kind`.
pub fn add_form<R: BufRead, W: Write>(console: &mut Console<R, W>, kind: Kind) -> Result<Draft> {
    let name = console.read_string("Enter Name: ")?;
    let phone = console.read_string("Enter Phone: ")?;
    let email = console.read_string("Enter Email: ")?;
    let address = console
        .read_optional("Enter Address (leave blank for Unknown): ")?
        .unwrap_or_default();
    let contact = Contact { name, phone, email, address };

    let draft = match kind {
        Kind::Teacher => Draft::Teacher {
            contact,
            salary: read_salary(console)?,
            subject1: console.read_string("Enter Subject 1: ")?,
            subject2: console.read_string("Enter Subject 2: ")?,
        },
        Kind::Admin => Draft::Admin {
            contact,
            salary: read_salary(console)?,
            work_type: console.read_string("Enter Work Type: ")?,
            time_range: console.read_string("Enter Time: ")?,
        },
        Kind::Student => Draft::Student {
            contact,
            subject1: console.read_string("Enter Subject 1: ")?,
            subject2: console.read_string("Enter Subject 2: ")?,
            subject3: console.read_string("Enter Subject 3: ")?,
        },
    };
    Ok(draft)
}

/// Name typed for a Delete or Edit lookup.
pub fn name_form<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    purpose: &str,
) -> Result<String> {
    console.read_string(&format!("Enter Name to {purpose}: "))
}

/// Prompt for each mutable field; blank answers keep the current value.
pub fn edit_form<R: BufRead, W: Write>(console: &mut Console<R, W>, kind: Kind) -> Result<Patch> {
    let contact = ContactPatch {
        phone: keep(console, "Phone")?,
        email: keep(console, "Email")?,
        address: keep(console, "Address")?,
    };

    let details = match kind {
        Kind::Teacher => DetailsPatch::Teacher {
            subject1: keep(console, "Subject 1")?,
            subject2: keep(console, "Subject 2")?,
            salary: read_optional_salary(console)?,
        },
        Kind::Admin => DetailsPatch::Admin {
            work_type: keep(console, "Work Type")?,
            time_range: keep(console, "Time")?,
            salary: read_optional_salary(console)?,
        },
        Kind::Student => DetailsPatch::Student {
            subject1: keep(console, "Subject 1")?,
            subject2: keep(console, "Subject 2")?,
            subject3: keep(console, "Subject 3")?,
        },
    };
    Ok(Patch { contact, details })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Theme::plain())
    }

    #[test]
    fn add_teacher_collects_fields_in_order() {
        let mut c = console("Carl\n0100\ncarl@example.com\n\n-1\n1300\nBiology\nArt\n");
        let draft = add_form(&mut c, Kind::Teacher).unwrap();
        assert_eq!(
            draft,
            Draft::Teacher {
                contact: Contact::new("Carl", "0100", "carl@example.com", ""),
                salary: Salary::new(1300).unwrap(),
                subject1: "Biology".to_string(),
                subject2: "Art".to_string(),
            }
        );
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Please enter a number between 0 and 2147483647."));
    }

    #[test]
    fn add_student_has_no_salary_prompt() {
        let mut c = console("Dana\n1\nd@example.com\nHill St\nMath\nArt\nPE\n");
        let draft = add_form(&mut c, Kind::Student).unwrap();
        assert_eq!(draft.kind(), Kind::Student);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(!out.contains("Salary"));
    }

    #[test]
    fn edit_student_keeps_blank_answers() {
        let mut c = console("\n\n\n\nArt\n\n");
        let patch = edit_form(&mut c, Kind::Student).unwrap();
        assert_eq!(patch.contact, ContactPatch::default());
        assert_eq!(
            patch.details,
            DetailsPatch::Student {
                subject1: None,
                subject2: Some("Art".to_string()),
                subject3: None,
            }
        );
    }

    #[test]
    fn edit_admin_reprompts_bad_salary() {
        let mut c = console("\n\n\nRemote\n\nlots\n-20\n2100\n");
        let patch = edit_form(&mut c, Kind::Admin).unwrap();
        assert_eq!(
            patch.details,
            DetailsPatch::Admin {
                salary: Some(Salary::new(2100).unwrap()),
                work_type: Some("Remote".to_string()),
                time_range: None,
            }
        );
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Enter new Salary (leave blank to keep): ").count(), 3);
    }
}
