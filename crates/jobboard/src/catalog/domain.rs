use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier for the applicant behind an application. The stub session
/// carries no dedicated user id, so the e-mail address serves as the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentKind {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl EmploymentKind {
    pub const fn ordered() -> [Self; 4] {
        [Self::FullTime, Self::PartTime, Self::Contract, Self::Remote]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
            Self::Remote => "remote",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }

    /// Contract listings are priced hourly; everything else annually.
    pub const fn is_hourly(self) -> bool {
        matches!(self, Self::Contract)
    }
}

/// Compensation range attached to a listing. Units depend on the employment
/// kind: per-hour for contract work, per-year otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

impl SalaryRange {
    pub fn new(min: u32, max: u32, currency: impl Into<String>) -> Self {
        Self {
            min,
            max,
            currency: currency.into(),
        }
    }

    /// Human-readable summary matching the detail screen: `$60-80/hour` for
    /// contract listings, `$80k - $120k per year` for the rest.
    pub fn summary(&self, kind: EmploymentKind) -> String {
        if kind.is_hourly() {
            format!("${}-{}/hour", self.min, self.max)
        } else {
            format!("${}k - ${}k per year", self.min / 1000, self.max / 1000)
        }
    }
}

/// One entry in the in-memory job catalog. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: EmploymentKind,
    pub salary: SalaryRange,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub category: String,
    pub posted_date: NaiveDate,
    pub deadline: NaiveDate,
    pub experience: String,
    pub remote: bool,
    pub featured: bool,
    pub applicants: u32,
}

/// Organization profile shown next to a listing detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    pub website: String,
    pub description: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub founded: String,
}

/// Category label with its advertised volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub job_count: u32,
}

/// Status of a submitted application. The enumeration defines no transition
/// authority; records simply carry one of the four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::Reviewed, Self::Accepted, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// An application tying an applicant to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub job_id: ListingId,
    pub applicant_id: ApplicantId,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}
