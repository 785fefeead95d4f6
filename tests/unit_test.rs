// Unit tests for school-registry
// These tests work with the public API only

#[cfg(test)]
mod model_tests {
    use school_registry::RegistryError;
    use school_registry::model::{Contact, Draft, Kind, Record, RecordId, Salary};

    #[test]
    fn test_record_kind_and_role() {
        let rec = Record::from_draft(
            RecordId::new(4).unwrap(),
            Draft::Admin {
                contact: Contact::new("Sarah", "0445566778", "sarah@example.com", ""),
                salary: Salary::new(1800).unwrap(),
                work_type: "Part-time".to_string(),
                time_range: "9:00 - 13:00".to_string(),
            },
        );
        assert_eq!(rec.kind(), Kind::Admin);
        assert_eq!(rec.person().role, "Admin");
        assert_eq!(rec.id().get(), 4);
        assert_eq!(rec.name(), "Sarah");
    }

    #[test]
    fn test_teacher_subject_defaults() {
        let rec = Record::from_draft(
            RecordId::new(1).unwrap(),
            Draft::Teacher {
                contact: Contact::new("Zed", "1", "z@example.com", ""),
                salary: Salary::new(0).unwrap(),
                subject1: String::new(),
                subject2: " ".to_string(),
            },
        );
        assert!(rec.render().ends_with("Salary: 0 | Subjects: Unknown | Unknown"));
    }

    #[test]
    fn test_validation_errors_are_reported_not_raised() {
        let err = Salary::new(-100).unwrap_err();
        assert!(matches!(err, RegistryError::Validation { field: "salary", .. }));
        assert_eq!(err.to_string(), "invalid salary: Salary must be >= 0");
        let err = RecordId::new(0).unwrap_err();
        assert_eq!(err.to_string(), "invalid ID: ID must be positive");
    }
}

#[cfg(test)]
mod store_tests {
    use school_registry::RegistryError;
    use school_registry::model::{Contact, ContactPatch, DetailsPatch, Draft, Kind, Patch, Salary};
    use school_registry::store::Registry;

    fn student(name: &str) -> Draft {
        Draft::Student {
            contact: Contact::new(name, "1", "s@example.com", ""),
            subject1: "Math".to_string(),
            subject2: "English".to_string(),
            subject3: "History".to_string(),
        }
    }

    fn admin(name: &str) -> Draft {
        Draft::Admin {
            contact: Contact::new(name, "2", "a@example.com", ""),
            salary: Salary::new(100).unwrap(),
            work_type: "Shift".to_string(),
            time_range: "Night".to_string(),
        }
    }

    #[test]
    fn test_ids_increase_across_all_kinds() {
        let mut reg = Registry::seeded().unwrap();
        let mut highest = reg.last_id().unwrap();
        for draft in [student("Ann"), admin("Bo"), student("Cy"), admin("Di")] {
            let id = reg.add(draft).unwrap();
            assert!(id > highest, "{id} should exceed {highest}");
            for kind in Kind::ALL {
                assert!(reg.records(kind).iter().all(|r| r.id() <= id));
            }
            highest = id;
        }
        assert_eq!(highest.get(), 10);
    }

    #[test]
    fn test_delete_counts_every_match() {
        let mut reg = Registry::empty();
        for name in ["Kim", "kim", "Lee", "KIM"] {
            reg.add(student(name)).unwrap();
        }
        assert_eq!(reg.remove_by_name(Kind::Student, "kIm"), 3);
        assert_eq!(reg.len(Kind::Student), 1);
        assert_eq!(reg.get(Kind::Student, 0).unwrap().name(), "Lee");
    }

    #[test]
    fn test_delete_absent_admin_leaves_roster_alone() {
        let mut reg = Registry::seeded().unwrap();
        let before = reg.render_list(Kind::Admin);
        assert_eq!(reg.remove_by_name(Kind::Admin, "Nonexistent"), 0);
        assert_eq!(reg.render_list(Kind::Admin), before);
    }

    #[test]
    fn test_delete_is_scoped_to_one_roster() {
        let mut reg = Registry::seeded().unwrap();
        reg.add(admin("Alice")).unwrap();
        assert_eq!(reg.remove_by_name(Kind::Admin, "alice"), 1);
        assert_eq!(reg.locate(Kind::Student, "Alice").unwrap(), 0);
    }

    #[test]
    fn test_edit_student_alice_subject2() {
        let mut reg = Registry::seeded().unwrap();
        let pos = reg.locate(Kind::Student, "alice").unwrap();
        let patch = Patch {
            contact: ContactPatch::default(),
            details: DetailsPatch::Student {
                subject1: None,
                subject2: Some("Art".to_string()),
                subject3: None,
            },
        };
        reg.apply_patch(Kind::Student, pos, patch).unwrap();
        assert_eq!(
            reg.get(Kind::Student, pos).unwrap().render(),
            "[5] Student: Alice | 0909123456 | alice@example.com | Unknown | \
             Subjects: Math | Art | History"
        );
    }

    #[test]
    fn test_edit_touches_first_match_only() {
        let mut reg = Registry::empty();
        reg.add(admin("Max")).unwrap();
        reg.add(admin("max")).unwrap();
        let pos = reg.locate(Kind::Admin, "MAX").unwrap();
        let mut patch = Patch::keep_all(Kind::Admin);
        patch.contact.email = Some("max@example.com".to_string());
        reg.apply_patch(Kind::Admin, pos, patch).unwrap();
        assert_eq!(reg.get(Kind::Admin, 0).unwrap().person().email, "max@example.com");
        assert_eq!(reg.get(Kind::Admin, 1).unwrap().person().email, "a@example.com");
    }

    #[test]
    fn test_locate_absent_is_not_found() {
        let reg = Registry::seeded().unwrap();
        let err = reg.locate(Kind::Teacher, "Nobody").unwrap_err();
        assert_eq!(err.to_string(), "Teacher not found: Nobody");
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }
}
