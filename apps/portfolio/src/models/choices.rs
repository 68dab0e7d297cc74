//! Fixed value sets for text columns guarded by `CHECK` constraints.
//!
//! Each enum round-trips through its snake_case wire/database value and
//! carries the human-readable label the pages display.

use serde::{Deserialize, Serialize};

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        // Every set gets the full accessor surface; not each one reads all of it.
        #[allow(dead_code)]
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|c| c.as_str() == value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

choice_enum! {
    pub enum SkillCategory {
        Programming => ("programming", "Programming Languages"),
        Frontend => ("frontend", "Frontend"),
        Backend => ("backend", "Backend"),
        Database => ("database", "Database"),
        Devops => ("devops", "DevOps & Tools"),
        Cloud => ("cloud", "Cloud Platforms"),
        Other => ("other", "Other"),
    }
    default = Other;
}

choice_enum! {
    pub enum Proficiency {
        Beginner => ("beginner", "Beginner"),
        Intermediate => ("intermediate", "Intermediate"),
        Advanced => ("advanced", "Advanced"),
        Expert => ("expert", "Expert"),
    }
    default = Intermediate;
}

choice_enum! {
    pub enum ProjectStatus {
        Completed => ("completed", "Completed"),
        InProgress => ("in_progress", "In Progress"),
        Planned => ("planned", "Planned"),
    }
    default = Completed;
}

choice_enum! {
    pub enum EmploymentType {
        FullTime => ("full_time", "Full-time"),
        PartTime => ("part_time", "Part-time"),
        Contract => ("contract", "Contract"),
        Freelance => ("freelance", "Freelance"),
        Internship => ("internship", "Internship"),
    }
    default = FullTime;
}

choice_enum! {
    pub enum Degree {
        Phd => ("phd", "Ph.D."),
        Masters => ("masters", "Master's Degree"),
        Bachelors => ("bachelors", "Bachelor's Degree"),
        Associate => ("associate", "Associate Degree"),
        Diploma => ("diploma", "Diploma"),
        Certificate => ("certificate", "Certificate"),
        Other => ("other", "Other"),
    }
    default = Other;
}

choice_enum! {
    pub enum ContactStatus {
        New => ("new", "New"),
        Read => ("read", "Read"),
        Replied => ("replied", "Replied"),
        Archived => ("archived", "Archived"),
    }
    default = New;
}

choice_enum! {
    pub enum DownloadSource {
        Modal => ("modal", "Resume Modal"),
        Direct => ("direct", "Direct Link"),
        Navbar => ("navbar", "Navbar"),
    }
    default = Modal;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_column_values() {
        for c in SkillCategory::ALL {
            let json = serde_json::to_string(c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
        for s in ProjectStatus::ALL {
            let json = serde_json::to_string(s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
        }
        for e in EmploymentType::ALL {
            let json = serde_json::to_string(e).unwrap();
            assert_eq!(json, format!("\"{}\"", e.as_str()));
        }
    }

    #[test]
    fn test_parse_and_labels() {
        assert_eq!(SkillCategory::parse("devops"), Some(SkillCategory::Devops));
        assert_eq!(SkillCategory::Devops.label(), "DevOps & Tools");
        assert_eq!(Degree::parse("masters").map(Degree::label), Some("Master's Degree"));
        assert_eq!(DownloadSource::parse("email"), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SkillCategory::default(), SkillCategory::Other);
        assert_eq!(Proficiency::default(), Proficiency::Intermediate);
        assert_eq!(ContactStatus::default(), ContactStatus::New);
        assert_eq!(DownloadSource::default(), DownloadSource::Modal);
    }
}
