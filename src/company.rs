use tracing::{debug, info};

use crate::error::BoardError;
use crate::forms::{Form, JobPostForm};
use crate::ids::IdGenerator;
use crate::models::{Applicant, CompanyInfo, JobListing};
use crate::skills::SkillInput;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this job posting?";
pub const JUST_NOW: &str = "Just now";

/// Blocking yes/no gate in front of destructive actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Jobs,
    Post,
    Edit(JobListing),
    Applications(JobListing),
    Profile,
}

impl DashboardView {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardView::Jobs => "job listings",
            DashboardView::Post => "post job",
            DashboardView::Edit(_) => "edit job",
            DashboardView::Applications(_) => "applications",
            DashboardView::Profile => "company profile",
        }
    }
}

/// Sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Jobs,
    PostNew,
    Profile,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Jobs, Section::PostNew, Section::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Section::Jobs => "My Job Listings",
            Section::PostNew => "Post New Job",
            Section::Profile => "Company Profile",
        }
    }
}

// --- Collection edits ---

/// Newest first.
pub fn prepend_listing(jobs: &mut Vec<JobListing>, job: JobListing) {
    jobs.insert(0, job);
}

/// Swap in `job` where the id matches; order is unchanged.
pub fn replace_listing(jobs: &mut [JobListing], job: JobListing) -> bool {
    match jobs.iter_mut().find(|j| j.id == job.id) {
        Some(slot) => {
            *slot = job;
            true
        }
        None => false,
    }
}

pub fn remove_listing(jobs: &mut Vec<JobListing>, id: &str) -> Option<JobListing> {
    let idx = jobs.iter().position(|j| j.id == id)?;
    Some(jobs.remove(idx))
}

/// Company-side dashboard for one session.
pub struct CompanyDashboard {
    jobs: Vec<JobListing>,
    company: CompanyInfo,
    applicants: Vec<Applicant>,
    view: DashboardView,
    pub form: JobPostForm,
    pub skill_input: SkillInput,
    pub profile_draft: CompanyInfo,
    ids: IdGenerator,
}

impl CompanyDashboard {
    pub fn new(company: CompanyInfo, jobs: Vec<JobListing>, applicants: Vec<Applicant>) -> Self {
        Self {
            profile_draft: company.clone(),
            jobs,
            company,
            applicants,
            view: DashboardView::Jobs,
            form: JobPostForm::default(),
            skill_input: SkillInput::default(),
            ids: IdGenerator::new(),
        }
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    fn invalid(&self, action: &'static str) -> BoardError {
        BoardError::InvalidTransition {
            action,
            from: self.view.name(),
        }
    }

    fn find(&self, id: &str) -> Result<&JobListing, BoardError> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| BoardError::UnknownListing(id.to_string()))
    }

    fn reset_form(&mut self) {
        self.form = JobPostForm::default();
        self.skill_input.clear();
    }

    /// Sidebar navigation; always allowed.
    pub fn navigate(&mut self, section: Section) {
        match section {
            Section::Jobs => self.view = DashboardView::Jobs,
            Section::PostNew => {
                self.reset_form();
                self.view = DashboardView::Post;
            }
            Section::Profile => {
                self.profile_draft = self.company.clone();
                self.view = DashboardView::Profile;
            }
        }
        debug!(view = self.view.name(), "dashboard navigation");
    }

    pub fn edit(&mut self, id: &str) -> Result<(), BoardError> {
        if self.view != DashboardView::Jobs {
            return Err(self.invalid("edit a listing"));
        }
        let job = self.find(id)?.clone();
        self.form = JobPostForm::from_listing(&job);
        self.skill_input.clear();
        self.view = DashboardView::Edit(job);
        Ok(())
    }

    pub fn view_applications(&mut self, id: &str) -> Result<(), BoardError> {
        if self.view != DashboardView::Jobs {
            return Err(self.invalid("view applications"));
        }
        let job = self.find(id)?.clone();
        self.view = DashboardView::Applications(job);
        Ok(())
    }

    /// Applications view back to the list.
    pub fn back(&mut self) -> Result<(), BoardError> {
        match self.view {
            DashboardView::Applications(_) => {
                self.view = DashboardView::Jobs;
                Ok(())
            }
            _ => Err(self.invalid("go back")),
        }
    }

    /// Leaves the post/edit form without touching the collection.
    pub fn cancel_form(&mut self) -> Result<(), BoardError> {
        match self.view {
            DashboardView::Post | DashboardView::Edit(_) => {
                self.view = DashboardView::Jobs;
                Ok(())
            }
            _ => Err(self.invalid("cancel")),
        }
    }

    pub fn add_skill(&mut self) -> bool {
        self.skill_input.commit(&mut self.form.skills)
    }

    pub fn remove_skill(&mut self, tag: &str) -> bool {
        self.form.skills.remove(tag)
    }

    /// Create or update, depending on the view. Returns the listing id.
    ///
    /// A new listing goes to the front with a fresh id; an edit keeps id,
    /// posted date and applicant count of the original.
    pub fn submit_job(&mut self) -> Result<String, BoardError> {
        let editing = match &self.view {
            DashboardView::Post => None,
            DashboardView::Edit(job) => Some(job.id.clone()),
            _ => return Err(self.invalid("submit a listing")),
        };
        self.form.validate()?;

        let id = match editing {
            Some(id) => {
                let original = self.find(&id)?;
                let updated = self.form.to_listing(
                    original.id.clone(),
                    &self.company.name,
                    original.posted_date.clone(),
                    original.applicants,
                );
                replace_listing(&mut self.jobs, updated);
                info!(job = %id, "listing updated");
                id
            }
            None => {
                let jobs = &self.jobs;
                let id = self.ids.next_id(|candidate| jobs.iter().any(|j| j.id == candidate));
                let created =
                    self.form
                        .to_listing(id.clone(), &self.company.name, JUST_NOW.to_string(), Some(0));
                prepend_listing(&mut self.jobs, created);
                info!(job = %id, "listing posted");
                id
            }
        };

        self.reset_form();
        self.view = DashboardView::Jobs;
        Ok(id)
    }

    /// Removes a listing once `confirm` says yes. Declining is not an error.
    pub fn delete_job(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<bool, BoardError> {
        if self.view != DashboardView::Jobs {
            return Err(self.invalid("delete a listing"));
        }
        self.find(id)?;
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(job = %id, "delete declined");
            return Ok(false);
        }
        remove_listing(&mut self.jobs, id);
        info!(job = %id, "listing deleted");
        Ok(true)
    }

    pub fn applicants_for(&self, job_id: &str) -> Vec<&Applicant> {
        self.applicants.iter().filter(|a| a.job_id == job_id).collect()
    }

    pub fn save_profile(&mut self) -> Result<(), BoardError> {
        if self.view != DashboardView::Profile {
            return Err(self.invalid("save the profile"));
        }
        self.profile_draft.validate()?;
        self.company = self.profile_draft.clone();
        info!(company = %self.company.name, "company profile saved");
        Ok(())
    }

    pub fn discard_profile(&mut self) {
        self.profile_draft = self.company.clone();
    }
}
