use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ParseChoiceError;

/// A closed set of values picked from a select box.
///
/// `code` is the stored/serialized value, `label` is what the screens show.
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];
    const KIND: &'static str;

    fn code(self) -> &'static str;

    fn label(self) -> &'static str {
        self.code()
    }
}

/// Matches either the code or the label, ignoring case.
pub fn parse_choice<T: Choice>(input: &str) -> Result<T, ParseChoiceError> {
    let needle = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|c| c.code().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
        .ok_or_else(|| ParseChoiceError {
            kind: T::KIND,
            value: input.to_string(),
        })
}

/// Step through `T::ALL`; `None` sits before the first entry so optional
/// selects can return to the empty option.
pub fn cycle_choice<T: Choice>(current: Option<T>, forward: bool, allow_empty: bool) -> Option<T> {
    let all = T::ALL;
    let pos = current.and_then(|c| all.iter().position(|x| *x == c));
    match (pos, forward) {
        (None, true) => all.first().copied(),
        (None, false) => all.last().copied(),
        (Some(i), true) if i + 1 < all.len() => Some(all[i + 1]),
        (Some(_), true) => {
            if allow_empty {
                None
            } else {
                all.first().copied()
            }
        }
        (Some(0), false) => {
            if allow_empty {
                None
            } else {
                all.last().copied()
            }
        }
        (Some(i), false) => Some(all[i - 1]),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Freelance,
}

impl Choice for EmploymentType {
    const ALL: &'static [Self] = &[Self::FullTime, Self::PartTime, Self::Contract, Self::Freelance];
    const KIND: &'static str = "employment type";

    fn code(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Experience {
    #[serde(rename = "0-1")]
    UnderOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-7")]
    FiveToSeven,
    #[serde(rename = "7-10")]
    SevenToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl Choice for Experience {
    const ALL: &'static [Self] = &[
        Self::UnderOne,
        Self::OneToThree,
        Self::ThreeToFive,
        Self::FiveToSeven,
        Self::SevenToTen,
        Self::TenPlus,
    ];
    const KIND: &'static str = "experience level";

    fn code(self) -> &'static str {
        match self {
            Self::UnderOne => "0-1",
            Self::OneToThree => "1-3",
            Self::ThreeToFive => "3-5",
            Self::FiveToSeven => "5-7",
            Self::SevenToTen => "7-10",
            Self::TenPlus => "10+",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::UnderOne => "Less than 1 year",
            Self::OneToThree => "1-3 years",
            Self::ThreeToFive => "3-5 years",
            Self::FiveToSeven => "5-7 years",
            Self::SevenToTen => "7-10 years",
            Self::TenPlus => "10+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferralSource {
    Linkedin,
    Github,
    Twitter,
    Referral,
    JobBoard,
    Conference,
    Search,
    Other,
}

impl Choice for ReferralSource {
    const ALL: &'static [Self] = &[
        Self::Linkedin,
        Self::Github,
        Self::Twitter,
        Self::Referral,
        Self::JobBoard,
        Self::Conference,
        Self::Search,
        Self::Other,
    ];
    const KIND: &'static str = "referral source";

    fn code(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Referral => "referral",
            Self::JobBoard => "job-board",
            Self::Conference => "conference",
            Self::Search => "search",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Referral => "Referral",
            Self::JobBoard => "Job Board",
            Self::Conference => "Conference/Event",
            Self::Search => "Search Engine",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Industry {
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Cloud Computing")]
    CloudComputing,
    Cybersecurity,
    Fintech,
    #[serde(rename = "Healthcare Tech")]
    HealthcareTech,
    Robotics,
    Other,
}

impl Choice for Industry {
    const ALL: &'static [Self] = &[
        Self::ArtificialIntelligence,
        Self::SoftwareDevelopment,
        Self::DataScience,
        Self::MachineLearning,
        Self::CloudComputing,
        Self::Cybersecurity,
        Self::Fintech,
        Self::HealthcareTech,
        Self::Robotics,
        Self::Other,
    ];
    const KIND: &'static str = "industry";

    fn code(self) -> &'static str {
        match self {
            Self::ArtificialIntelligence => "Artificial Intelligence",
            Self::SoftwareDevelopment => "Software Development",
            Self::DataScience => "Data Science",
            Self::MachineLearning => "Machine Learning",
            Self::CloudComputing => "Cloud Computing",
            Self::Cybersecurity => "Cybersecurity",
            Self::Fintech => "Fintech",
            Self::HealthcareTech => "Healthcare Tech",
            Self::Robotics => "Robotics",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Tiny,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "50-200")]
    Medium,
    #[serde(rename = "201-500")]
    Large,
    #[serde(rename = "501-1000")]
    VeryLarge,
    #[serde(rename = "1000+")]
    Enterprise,
}

impl Choice for CompanySize {
    const ALL: &'static [Self] = &[
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::VeryLarge,
        Self::Enterprise,
    ];
    const KIND: &'static str = "company size";

    fn code(self) -> &'static str {
        match self {
            Self::Tiny => "1-10",
            Self::Small => "11-50",
            Self::Medium => "50-200",
            Self::Large => "201-500",
            Self::VeryLarge => "501-1000",
            Self::Enterprise => "1000+",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Tiny => "1-10 employees",
            Self::Small => "11-50 employees",
            Self::Medium => "50-200 employees",
            Self::Large => "201-500 employees",
            Self::VeryLarge => "501-1000 employees",
            Self::Enterprise => "1000+ employees",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = ParseChoiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for Experience {
    type Err = ParseChoiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for ReferralSource {
    type Err = ParseChoiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for Industry {
    type Err = ParseChoiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl FromStr for CompanySize {
    type Err = ParseChoiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle to a user-selected file. The contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    path: PathBuf,
}

impl Attachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl Serialize for Attachment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub remote: bool,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub description: String,
    pub skills: Vec<String>,
    pub salary: String,
    pub posted_date: String, // display string, e.g. "2d ago"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicants: Option<u32>, // company view only
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyInfo {
    pub name: String,
    pub email: String,
    pub website: String,
    pub industry: Option<Industry>,
    pub size: Option<CompanySize>,
    pub description: String,
    pub logo: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicantStatus {
    New,
    UnderReview,
    InterviewScheduled,
    Other(String),
}

impl ApplicantStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::UnderReview => "Under Review",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ApplicantStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "New" => Self::New,
            "Under Review" => Self::UnderReview,
            "Interview Scheduled" => Self::InterviewScheduled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for ApplicantStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub experience: Experience,
    pub applied_date: String,
    pub status: ApplicantStatus,
}
