use serde::{Deserialize, Serialize};

/// How the taxpayer earns their income.
///
/// Only decides whether business expenses may be offset against
/// freelance income; it has no other effect on the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    Employee,
    SelfEmployed,
    Freelancer,
    Both,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::SelfEmployed => "self-employed",
            Self::Freelancer => "freelancer",
            Self::Both => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Self::Employee),
            "self-employed" => Some(Self::SelfEmployed),
            "freelancer" => Some(Self::Freelancer),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Display label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::SelfEmployed => "Self-Employed",
            Self::Freelancer => "Freelancer",
            Self::Both => "Employee + Self-Employed",
        }
    }

    /// Whether business expenses reduce freelance income.
    pub fn deducts_business_expenses(&self) -> bool {
        !matches!(self, Self::Employee)
    }
}
