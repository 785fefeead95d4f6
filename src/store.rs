//! In-memory collection store.
//!
//! Three rosters share one [`IdSequence`], so identifiers are unique across
//! teachers, admins and students together.

use crate::error::{RegistryError, Result};
use crate::model::{Contact, Draft, Kind, Patch, Record, RecordId, Salary};
use crate::search;

/// Issues identifiers in strictly increasing order, starting at 1.
#[derive(Clone, Debug, Default)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Result<RecordId> {
        let n = self
            .last
            .checked_add(1)
            .ok_or_else(|| RegistryError::validation("ID", "identifier space exhausted"))?;
        let id = RecordId::new(n)?;
        self.last = n;
        Ok(id)
    }

    /// Most recently issued identifier, if any.
    pub fn last(&self) -> Option<RecordId> {
        RecordId::new(self.last).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    teachers: Vec<Record>,
    admins: Vec<Record>,
    students: Vec<Record>,
    ids: IdSequence,
}

impl Registry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Empty registry whose sequence has already issued `last`.
    #[cfg(test)]
    pub(crate) fn with_last_id(last: u32) -> Self {
        Self {
            ids: IdSequence { last },
            ..Self::default()
        }
    }

    /// Registry with two sample records per kind. Identifiers go to all
    /// teachers first, then admins, then students.
    pub fn seeded() -> Result<Self> {
        let mut reg = Self::empty();
        for draft in seed_drafts()? {
            reg.add(draft)?;
        }
        Ok(reg)
    }

    pub fn records(&self, kind: Kind) -> &[Record] {
        match kind {
            Kind::Teacher => &self.teachers,
            Kind::Admin => &self.admins,
            Kind::Student => &self.students,
        }
    }

    fn roster_mut(&mut self, kind: Kind) -> &mut Vec<Record> {
        match kind {
            Kind::Teacher => &mut self.teachers,
            Kind::Admin => &mut self.admins,
            Kind::Student => &mut self.students,
        }
    }

    pub fn len(&self, kind: Kind) -> usize {
        self.records(kind).len()
    }

    pub fn is_empty(&self, kind: Kind) -> bool {
        self.records(kind).is_empty()
    }

    pub fn get(&self, kind: Kind, position: usize) -> Option<&Record> {
        self.records(kind).get(position)
    }

    pub fn last_id(&self) -> Option<RecordId> {
        self.ids.last()
    }

    /// Rendered line for every record of `kind`, in insertion order.
    pub fn render_list(&self, kind: Kind) -> Vec<String> {
        self.records(kind).iter().map(Record::render).collect()
    }

    /// Assign the next identifier to `draft` and append it to its roster.
    pub fn add(&mut self, draft: Draft) -> Result<RecordId> {
        let kind = draft.kind();
        let id = self.ids.issue()?;
        self.roster_mut(kind).push(Record::from_draft(id, draft));
        tracing::info!(%kind, id = id.get(), "record added");
        Ok(id)
    }

    /// Remove every record of `kind` whose name matches; returns how many went.
    pub fn remove_by_name(&mut self, kind: Kind, name: &str) -> usize {
        let removed = search::count_matches(self.records(kind), name);
        if removed > 0 {
            self.roster_mut(kind).retain(|r| !search::name_matches(r.name(), name));
        }
        tracing::info!(%kind, name, removed, "delete by name");
        removed
    }

    /// Position of the first record of `kind` whose name matches.
    pub fn locate(&self, kind: Kind, name: &str) -> Result<usize> {
        let found = search::find_first(self.records(kind), name);
        tracing::debug!(%kind, name, ?found, "locate by name");
        found.ok_or_else(|| RegistryError::NotFound {
            kind,
            name: name.trim().to_string(),
        })
    }

    /// Apply `patch` to the record at `position` in the `kind` roster.
    pub fn apply_patch(
        &mut self,
        kind: Kind,
        position: usize,
        patch: Patch,
    ) -> Result<RecordId> {
        if patch.kind() != kind {
            return Err(RegistryError::KindMismatch {
                expected: kind,
                found: patch.kind(),
            });
        }
        let record = self
            .roster_mut(kind)
            .get_mut(position)
            .ok_or_else(|| RegistryError::NotFound {
                kind,
                name: format!("#{position}"),
            })?;
        record.apply(patch)?;
        let id = record.id();
        tracing::info!(%kind, id = id.get(), "record updated");
        Ok(id)
    }
}

fn seed_drafts() -> Result<Vec<Draft>> {
    let teacher =
        |name: &str, phone: &str, email: &str, pay: i64, s1: &str, s2: &str| -> Result<Draft> {
            Ok(Draft::Teacher {
                contact: Contact::new(name, phone, email, ""),
                salary: Salary::new(pay)?,
                subject1: s1.to_string(),
                subject2: s2.to_string(),
            })
        };
    let admin =
        |name: &str, phone: &str, email: &str, pay: i64, work: &str, time: &str| -> Result<Draft> {
            Ok(Draft::Admin {
                contact: Contact::new(name, phone, email, ""),
                salary: Salary::new(pay)?,
                work_type: work.to_string(),
                time_range: time.to_string(),
            })
        };
    let student =
        |name: &str, phone: &str, email: &str, s1: &str, s2: &str, s3: &str| Draft::Student {
            contact: Contact::new(name, phone, email, ""),
            subject1: s1.to_string(),
            subject2: s2.to_string(),
            subject3: s3.to_string(),
        };

    Ok(vec![
        teacher("Anna", "0123456789", "anna@example.com", 1500, "Math", "History")?,
        teacher("Brian", "0987654321", "brian@example.com", 1400, "Physics", "Music")?,
        admin("John", "0111222333", "john@example.com", 2000, "Full-time", "8:00 - 17:00")?,
        admin("Sarah", "0445566778", "sarah@example.com", 1800, "Part-time", "9:00 - 13:00")?,
        student("Alice", "0909123456", "alice@example.com", "Math", "English", "History"),
        student("Ben", "0909765432", "ben@example.com", "Physics", "Chemistry", "Biology"),
    ])
}
