use serde::Serialize;

use crate::error::FormError;
use crate::models::{
    cycle_choice, Attachment, Choice, CompanyInfo, CompanySize, EmploymentType, Experience,
    Industry, JobListing, ReferralSource,
};
use crate::skills::SkillTags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Select,
    Toggle,
    File,
    Tags,
}

pub trait FormField: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn kind(self) -> FieldKind;
    /// Enforced on submit.
    fn required(self) -> bool;
    /// Shown with a `*` next to the label.
    fn marked(self) -> bool {
        self.required()
    }
}

/// A controlled form: every edit goes through `set_text` or `cycle`.
pub trait Form {
    type Field: FormField;

    /// Current value as shown in the input; empty when unset.
    fn value(&self, field: Self::Field) -> String;

    /// Replace the value of a text or file field. Other kinds ignore it.
    fn set_text(&mut self, field: Self::Field, value: String);

    /// Step a select through its options, or flip a toggle.
    fn cycle(&mut self, field: Self::Field, forward: bool);

    /// Presence check of required fields only; no format validation.
    fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = Self::Field::ALL
            .iter()
            .filter(|f| f.required() && self.value(**f).is_empty())
            .map(|f| f.label())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

fn attachment_from(value: String) -> Option<Attachment> {
    if value.is_empty() {
        None
    } else {
        Some(Attachment::new(value))
    }
}

fn attachment_text(a: &Option<Attachment>) -> String {
    a.as_ref().map(|a| a.path().display().to_string()).unwrap_or_default()
}

fn choice_text<T: Choice>(c: Option<T>) -> String {
    c.map(|c| c.label().to_string()).unwrap_or_default()
}

// --- Talent application ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub portfolio: String,
    pub resume: Option<Attachment>,
    pub cover_letter: String,
    pub years_of_experience: Option<Experience>,
    pub relevant_projects: String,
    pub availability: String,
    pub hear_about_us: Option<ReferralSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    FullName,
    Email,
    Phone,
    Portfolio,
    Resume,
    CoverLetter,
    YearsOfExperience,
    RelevantProjects,
    Availability,
    HearAboutUs,
}

impl FormField for ApplicationField {
    const ALL: &'static [Self] = &[
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Portfolio,
        Self::Resume,
        Self::CoverLetter,
        Self::YearsOfExperience,
        Self::RelevantProjects,
        Self::Availability,
        Self::HearAboutUs,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Portfolio => "Portfolio URL",
            Self::Resume => "Resume",
            Self::CoverLetter => "Cover Letter",
            Self::YearsOfExperience => "Years of Experience",
            Self::RelevantProjects => "Relevant Projects",
            Self::Availability => "Availability",
            Self::HearAboutUs => "How did you hear about us?",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Resume => FieldKind::File,
            Self::CoverLetter | Self::RelevantProjects => FieldKind::LongText,
            Self::YearsOfExperience | Self::HearAboutUs => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(
            self,
            Self::FullName
                | Self::Email
                | Self::Resume
                | Self::YearsOfExperience
                | Self::RelevantProjects
        )
    }
}

impl Form for ApplicationForm {
    type Field = ApplicationField;

    fn value(&self, field: ApplicationField) -> String {
        use ApplicationField::*;
        match field {
            FullName => self.full_name.clone(),
            Email => self.email.clone(),
            Phone => self.phone.clone(),
            Portfolio => self.portfolio.clone(),
            Resume => attachment_text(&self.resume),
            CoverLetter => self.cover_letter.clone(),
            YearsOfExperience => choice_text(self.years_of_experience),
            RelevantProjects => self.relevant_projects.clone(),
            Availability => self.availability.clone(),
            HearAboutUs => choice_text(self.hear_about_us),
        }
    }

    fn set_text(&mut self, field: ApplicationField, value: String) {
        use ApplicationField::*;
        match field {
            FullName => self.full_name = value,
            Email => self.email = value,
            Phone => self.phone = value,
            Portfolio => self.portfolio = value,
            Resume => self.resume = attachment_from(value),
            CoverLetter => self.cover_letter = value,
            RelevantProjects => self.relevant_projects = value,
            Availability => self.availability = value,
            YearsOfExperience | HearAboutUs => {}
        }
    }

    fn cycle(&mut self, field: ApplicationField, forward: bool) {
        match field {
            ApplicationField::YearsOfExperience => {
                self.years_of_experience = cycle_choice(self.years_of_experience, forward, true)
            }
            ApplicationField::HearAboutUs => {
                self.hear_about_us = cycle_choice(self.hear_about_us, forward, true)
            }
            _ => {}
        }
    }
}

// --- Job post / edit ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobPostForm {
    pub title: String,
    pub location: String,
    pub remote: bool,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub description: String,
    pub skills: SkillTags,
    pub salary: String,
}

impl JobPostForm {
    /// Pre-fill for editing. Skills are copied so the listing is untouched
    /// until submit.
    pub fn from_listing(job: &JobListing) -> Self {
        Self {
            title: job.title.clone(),
            location: job.location.clone(),
            remote: job.remote,
            employment_type: job.employment_type,
            description: job.description.clone(),
            skills: job.skills.iter().collect(),
            salary: job.salary.clone(),
        }
    }

    /// Submittable and has at least one skill.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok() && !self.skills.is_empty()
    }

    pub fn to_listing(
        &self,
        id: String,
        company: &str,
        posted_date: String,
        applicants: Option<u32>,
    ) -> JobListing {
        JobListing {
            id,
            title: self.title.clone(),
            company: company.to_string(),
            location: self.location.clone(),
            remote: self.remote,
            employment_type: self.employment_type,
            description: self.description.clone(),
            skills: self.skills.as_slice().to_vec(),
            salary: self.salary.clone(),
            posted_date,
            applicants,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPostField {
    Title,
    Location,
    Remote,
    EmploymentType,
    Description,
    Skills,
    Salary,
}

impl FormField for JobPostField {
    const ALL: &'static [Self] = &[
        Self::Title,
        Self::Location,
        Self::Remote,
        Self::EmploymentType,
        Self::Description,
        Self::Skills,
        Self::Salary,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Job Title",
            Self::Location => "Location",
            Self::Remote => "Remote",
            Self::EmploymentType => "Job Type",
            Self::Description => "Job Description",
            Self::Skills => "Required Skills",
            Self::Salary => "Salary Range",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Remote => FieldKind::Toggle,
            Self::EmploymentType => FieldKind::Select,
            Self::Description => FieldKind::LongText,
            Self::Skills => FieldKind::Tags,
            _ => FieldKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(
            self,
            Self::Title | Self::Location | Self::EmploymentType | Self::Description | Self::Salary
        )
    }

    // Skills carry the marker but an empty list does not block submit.
    fn marked(self) -> bool {
        self.required() || self == Self::Skills
    }
}

impl Form for JobPostForm {
    type Field = JobPostField;

    fn value(&self, field: JobPostField) -> String {
        match field {
            JobPostField::Title => self.title.clone(),
            JobPostField::Location => self.location.clone(),
            JobPostField::Remote => (if self.remote { "yes" } else { "no" }).to_string(),
            JobPostField::EmploymentType => self.employment_type.label().to_string(),
            JobPostField::Description => self.description.clone(),
            JobPostField::Skills => self.skills.as_slice().join(", "),
            JobPostField::Salary => self.salary.clone(),
        }
    }

    fn set_text(&mut self, field: JobPostField, value: String) {
        match field {
            JobPostField::Title => self.title = value,
            JobPostField::Location => self.location = value,
            JobPostField::Description => self.description = value,
            JobPostField::Salary => self.salary = value,
            JobPostField::Remote | JobPostField::EmploymentType | JobPostField::Skills => {}
        }
    }

    fn cycle(&mut self, field: JobPostField, forward: bool) {
        match field {
            JobPostField::Remote => self.remote = !self.remote,
            JobPostField::EmploymentType => {
                if let Some(next) = cycle_choice(Some(self.employment_type), forward, false) {
                    self.employment_type = next;
                }
            }
            _ => {}
        }
    }
}

// --- Company profile ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Logo,
    Name,
    Email,
    Website,
    Industry,
    Size,
    Description,
}

impl FormField for ProfileField {
    const ALL: &'static [Self] = &[
        Self::Logo,
        Self::Name,
        Self::Email,
        Self::Website,
        Self::Industry,
        Self::Size,
        Self::Description,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Logo => "Company Logo",
            Self::Name => "Company Name",
            Self::Email => "Contact Email",
            Self::Website => "Website",
            Self::Industry => "Industry",
            Self::Size => "Company Size",
            Self::Description => "Company Description",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Logo => FieldKind::File,
            Self::Industry | Self::Size => FieldKind::Select,
            Self::Description => FieldKind::LongText,
            _ => FieldKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Industry | Self::Description)
    }
}

impl Form for CompanyInfo {
    type Field = ProfileField;

    fn value(&self, field: ProfileField) -> String {
        match field {
            ProfileField::Logo => attachment_text(&self.logo),
            ProfileField::Name => self.name.clone(),
            ProfileField::Email => self.email.clone(),
            ProfileField::Website => self.website.clone(),
            ProfileField::Industry => choice_text::<Industry>(self.industry),
            ProfileField::Size => choice_text::<CompanySize>(self.size),
            ProfileField::Description => self.description.clone(),
        }
    }

    fn set_text(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Logo => self.logo = attachment_from(value),
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Website => self.website = value,
            ProfileField::Description => self.description = value,
            ProfileField::Industry | ProfileField::Size => {}
        }
    }

    fn cycle(&mut self, field: ProfileField, forward: bool) {
        match field {
            ProfileField::Industry => self.industry = cycle_choice(self.industry, forward, true),
            ProfileField::Size => self.size = cycle_choice(self.size, forward, true),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{company_info, company_listings};

    fn filled_application() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.set_text(ApplicationField::FullName, "Ada Lovelace".into());
        form.set_text(ApplicationField::Email, "ada@example.com".into());
        form.set_text(ApplicationField::Resume, "/tmp/ada.pdf".into());
        form.cycle(ApplicationField::YearsOfExperience, true);
        form.set_text(ApplicationField::RelevantProjects, "Analytical Engine".into());
        form
    }

    #[test]
    fn test_empty_application_lists_required_fields() {
        let err = ApplicationForm::default().validate().unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(vec![
                "Full Name",
                "Email",
                "Resume",
                "Years of Experience",
                "Relevant Projects"
            ])
        );
        assert!(err.is_missing("Resume"));
        assert!(!err.is_missing("Phone"));
    }

    #[test]
    fn test_filled_application_validates() {
        let form = filled_application();
        assert_eq!(form.years_of_experience, Some(Experience::UnderOne));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_clearing_resume_path_drops_attachment() {
        let mut form = filled_application();
        form.set_text(ApplicationField::Resume, String::new());
        assert!(form.resume.is_none());
        assert!(form.validate().unwrap_err().is_missing("Resume"));
    }

    #[test]
    fn test_no_format_validation_on_email() {
        let mut form = filled_application();
        form.set_text(ApplicationField::Email, "not-an-email".into());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_job_post_form_prefill_copies_skills() {
        let jobs = company_listings();
        let mut form = JobPostForm::from_listing(&jobs[0]);
        assert_eq!(form.title, jobs[0].title);
        form.skills.add("Rust");
        form.skills.remove("PyTorch");
        assert!(jobs[0].skills.contains(&"PyTorch".to_string()));
        assert!(!jobs[0].skills.contains(&"Rust".to_string()));
    }

    #[test]
    fn test_job_post_form_required_fields() {
        let err = JobPostForm::default().validate().unwrap_err();
        // Job type always has a value.
        assert_eq!(
            err,
            FormError::MissingFields(vec!["Job Title", "Location", "Job Description", "Salary Range"])
        );
    }

    #[test]
    fn test_empty_skills_is_valid_but_incomplete() {
        let form = JobPostForm {
            title: "Data Engineer".into(),
            location: "Remote".into(),
            description: "Pipelines".into(),
            salary: "$100k".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        assert!(!form.is_complete());
        assert!(JobPostField::Skills.marked());
        assert!(!JobPostField::Skills.required());
    }

    #[test]
    fn test_job_post_cycle_type_and_remote() {
        let mut form = JobPostForm::default();
        form.cycle(JobPostField::EmploymentType, false);
        assert_eq!(form.employment_type, EmploymentType::Freelance);
        form.cycle(JobPostField::EmploymentType, true);
        assert_eq!(form.employment_type, EmploymentType::FullTime);
        form.cycle(JobPostField::Remote, true);
        assert!(form.remote);
    }

    #[test]
    fn test_profile_form_validation() {
        let mut info = company_info();
        assert!(info.validate().is_ok());
        info.set_text(ProfileField::Name, String::new());
        info.industry = None;
        assert_eq!(
            info.validate().unwrap_err(),
            FormError::MissingFields(vec!["Company Name", "Industry"])
        );
    }
}
