//! Record model: identifiers, salaries, the shared person shape and the
//! three record kinds.
//!
//! Records are a closed enum rather than a trait hierarchy; [`Record::render`]
//! dispatches on the variant to produce the one-line summary shown in lists.

use std::fmt::{Display, Formatter};

use crate::error::{RegistryError, Result};

const NO_NAME: &str = "No Name";
const NO_PHONE: &str = "No Phone";
const NO_EMAIL: &str = "No Email";
const UNKNOWN: &str = "Unknown";
const NO_SUBJECT: &str = "None";

/// The three record kinds kept by the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Teacher,
    Admin,
    Student,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Teacher, Kind::Admin, Kind::Student];

    /// Role label stored on every person of this kind.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Teacher => "Teacher",
            Kind::Admin => "Admin",
            Kind::Student => "Student",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Positive, process-wide unique record identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u32);

impl RecordId {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(RegistryError::validation("ID", "ID must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative salary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Salary(u32);

impl Salary {
    /// Largest accepted salary; matches the range the console prompts with.
    pub const MAX: i64 = i32::MAX as i64;

    pub fn new(amount: i64) -> Result<Self> {
        if amount < 0 {
            return Err(RegistryError::validation("salary", "Salary must be >= 0"));
        }
        if amount > Self::MAX {
            return Err(RegistryError::validation(
                "salary",
                format!("Salary must be <= {}", Self::MAX),
            ));
        }
        // range checked above
        Ok(Self(amount as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for Salary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the trimmed value, or `fallback` when it is blank.
pub fn or_default(value: &str, fallback: &str) -> String {
    let t = value.trim();
    if t.is_empty() { fallback.to_string() } else { t.to_string() }
}

/// Contact fields collected when a record is created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }
    }
}

/// Shared shape of every record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub role: String,
}

impl Person {
    fn from_contact(id: RecordId, kind: Kind, contact: Contact) -> Self {
        Self {
            id,
            name: or_default(&contact.name, NO_NAME),
            phone: or_default(&contact.phone, NO_PHONE),
            email: or_default(&contact.email, NO_EMAIL),
            address: or_default(&contact.address, UNKNOWN),
            role: kind.label().to_string(),
        }
    }

    fn render_head(&self) -> String {
        format!(
            "[{}] {}: {} | {} | {} | {}",
            self.id, self.role, self.name, self.phone, self.email, self.address
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teacher {
    pub person: Person,
    pub salary: Salary,
    pub subject1: String,
    pub subject2: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admin {
    pub person: Person,
    pub salary: Salary,
    pub work_type: String,
    pub time_range: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub person: Person,
    pub subject1: String,
    pub subject2: String,
    pub subject3: String,
}

/// Validated input of an Add operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Draft {
    Teacher {
        contact: Contact,
        salary: Salary,
        subject1: String,
        subject2: String,
    },
    Admin {
        contact: Contact,
        salary: Salary,
        work_type: String,
        time_range: String,
    },
    Student {
        contact: Contact,
        subject1: String,
        subject2: String,
        subject3: String,
    },
}

impl Draft {
    pub fn kind(&self) -> Kind {
        match self {
            Draft::Teacher { .. } => Kind::Teacher,
            Draft::Admin { .. } => Kind::Admin,
            Draft::Student { .. } => Kind::Student,
        }
    }
}

/// Contact changes of an Edit operation; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Kind-specific changes of an Edit operation; `None` keeps the current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsPatch {
    Teacher {
        salary: Option<Salary>,
        subject1: Option<String>,
        subject2: Option<String>,
    },
    Admin {
        salary: Option<Salary>,
        work_type: Option<String>,
        time_range: Option<String>,
    },
    Student {
        subject1: Option<String>,
        subject2: Option<String>,
        subject3: Option<String>,
    },
}

impl DetailsPatch {
    /// A patch of `kind` that changes nothing.
    pub fn keep_all(kind: Kind) -> Self {
        match kind {
            Kind::Teacher => DetailsPatch::Teacher {
                salary: None,
                subject1: None,
                subject2: None,
            },
            Kind::Admin => DetailsPatch::Admin {
                salary: None,
                work_type: None,
                time_range: None,
            },
            Kind::Student => DetailsPatch::Student {
                subject1: None,
                subject2: None,
                subject3: None,
            },
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            DetailsPatch::Teacher { .. } => Kind::Teacher,
            DetailsPatch::Admin { .. } => Kind::Admin,
            DetailsPatch::Student { .. } => Kind::Student,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patch {
    pub contact: ContactPatch,
    pub details: DetailsPatch,
}

impl Patch {
    pub fn keep_all(kind: Kind) -> Self {
        Self {
            contact: ContactPatch::default(),
            details: DetailsPatch::keep_all(kind),
        }
    }

    pub fn kind(&self) -> Kind {
        self.details.kind()
    }
}

/// Overwrite `slot` when `value` carries non-blank text.
fn overwrite(slot: &mut String, value: Option<String>) {
    if let Some(v) = value {
        let t = v.trim();
        if !t.is_empty() {
            *slot = t.to_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Teacher(Teacher),
    Admin(Admin),
    Student(Student),
}

impl Record {
    /// Build a record from a draft, applying the per-field fallbacks.
    pub fn from_draft(id: RecordId, draft: Draft) -> Self {
        match draft {
            Draft::Teacher { contact, salary, subject1, subject2 } => Record::Teacher(Teacher {
                person: Person::from_contact(id, Kind::Teacher, contact),
                salary,
                subject1: or_default(&subject1, UNKNOWN),
                subject2: or_default(&subject2, UNKNOWN),
            }),
            Draft::Admin { contact, salary, work_type, time_range } => Record::Admin(Admin {
                person: Person::from_contact(id, Kind::Admin, contact),
                salary,
                work_type: or_default(&work_type, UNKNOWN),
                time_range: or_default(&time_range, UNKNOWN),
            }),
            Draft::Student { contact, subject1, subject2, subject3 } => Record::Student(Student {
                person: Person::from_contact(id, Kind::Student, contact),
                subject1: or_default(&subject1, NO_SUBJECT),
                subject2: or_default(&subject2, NO_SUBJECT),
                subject3: or_default(&subject3, NO_SUBJECT),
            }),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Record::Teacher(_) => Kind::Teacher,
            Record::Admin(_) => Kind::Admin,
            Record::Student(_) => Kind::Student,
        }
    }

    pub fn person(&self) -> &Person {
        match self {
            Record::Teacher(t) => &t.person,
            Record::Admin(a) => &a.person,
            Record::Student(s) => &s.person,
        }
    }

    fn person_mut(&mut self) -> &mut Person {
        match self {
            Record::Teacher(t) => &mut t.person,
            Record::Admin(a) => &mut a.person,
            Record::Student(s) => &mut s.person,
        }
    }

    pub fn id(&self) -> RecordId {
        self.person().id
    }

    pub fn name(&self) -> &str {
        &self.person().name
    }

    /// One-line human readable summary.
    pub fn render(&self) -> String {
        let head = self.person().render_head();
        match self {
            Record::Teacher(t) => format!(
                "{head} | Salary: {} | Subjects: {} | {}",
                t.salary, t.subject1, t.subject2
            ),
            Record::Admin(a) => format!(
                "{head} | Salary: {} | Work: {} | Time: {}",
                a.salary, a.work_type, a.time_range
            ),
            Record::Student(s) => format!(
                "{head} | Subjects: {} | {} | {}",
                s.subject1, s.subject2, s.subject3
            ),
        }
    }

    /// Apply an edit in place. A patch for another kind is rejected before
    /// any field is touched.
    pub fn apply(&mut self, patch: Patch) -> Result<()> {
        if patch.kind() != self.kind() {
            return Err(RegistryError::KindMismatch {
                expected: self.kind(),
                found: patch.kind(),
            });
        }
        let Patch { contact, details } = patch;
        let person = self.person_mut();
        overwrite(&mut person.phone, contact.phone);
        overwrite(&mut person.email, contact.email);
        overwrite(&mut person.address, contact.address);

        match (self, details) {
            (Record::Teacher(t), DetailsPatch::Teacher { salary, subject1, subject2 }) => {
                if let Some(s) = salary {
                    t.salary = s;
                }
                overwrite(&mut t.subject1, subject1);
                overwrite(&mut t.subject2, subject2);
            }
            (Record::Admin(a), DetailsPatch::Admin { salary, work_type, time_range }) => {
                if let Some(s) = salary {
                    a.salary = s;
                }
                overwrite(&mut a.work_type, work_type);
                overwrite(&mut a.time_range, time_range);
            }
            (Record::Student(s), DetailsPatch::Student { subject1, subject2, subject3 }) => {
                overwrite(&mut s.subject1, subject1);
                overwrite(&mut s.subject2, subject2);
                overwrite(&mut s.subject3, subject3);
            }
            // kinds were compared above
            _ => {}
        }
        Ok(())
    }
}
