use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::BoardError;
use crate::filter::ListingFilter;
use crate::forms::{ApplicationForm, Form};
use crate::models::JobListing;

pub const DEFAULT_RETURN_DELAY: Duration = Duration::from_secs(3);

/// Which panel the talent side shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TalentView {
    Browsing,
    Viewing(JobListing),
    Applying(JobListing),
    /// The deadline lives in the state, so leaving it drops the timer.
    Submitted { job: JobListing, returns_at: Instant },
}

impl TalentView {
    pub fn name(&self) -> &'static str {
        match self {
            TalentView::Browsing => "browsing",
            TalentView::Viewing(_) => "job detail",
            TalentView::Applying(_) => "application",
            TalentView::Submitted { .. } => "submitted",
        }
    }
}

/// Job board plus the apply flow for one session.
pub struct TalentFlow {
    listings: Vec<JobListing>,
    pub filter: ListingFilter,
    pub filters_expanded: bool,
    pub form: ApplicationForm,
    view: TalentView,
    return_delay: Duration,
}

impl TalentFlow {
    pub fn new(listings: Vec<JobListing>, return_delay: Duration) -> Self {
        Self {
            listings,
            filter: ListingFilter::new(),
            filters_expanded: false,
            form: ApplicationForm::default(),
            view: TalentView::Browsing,
            return_delay,
        }
    }

    pub fn view(&self) -> &TalentView {
        &self.view
    }

    pub fn visible(&self) -> Vec<&JobListing> {
        self.filter.apply(&self.listings)
    }

    fn invalid(&self, action: &'static str) -> BoardError {
        BoardError::InvalidTransition {
            action,
            from: self.view.name(),
        }
    }

    pub fn select(&mut self, id: &str) -> Result<(), BoardError> {
        if self.view != TalentView::Browsing {
            return Err(self.invalid("select a job"));
        }
        let job = self
            .listings
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| BoardError::UnknownListing(id.to_string()))?;
        debug!(job = %job.id, "viewing job");
        self.view = TalentView::Viewing(job);
        Ok(())
    }

    /// Detail goes to the list, the form goes to the detail.
    pub fn back(&mut self) -> Result<(), BoardError> {
        let next = match &self.view {
            TalentView::Viewing(_) => TalentView::Browsing,
            TalentView::Applying(job) => TalentView::Viewing(job.clone()),
            _ => return Err(self.invalid("go back")),
        };
        self.view = next;
        Ok(())
    }

    /// Opens a fresh application for the job being viewed.
    pub fn start_application(&mut self) -> Result<(), BoardError> {
        let TalentView::Viewing(job) = &self.view else {
            return Err(self.invalid("apply"));
        };
        self.form = ApplicationForm::default();
        self.view = TalentView::Applying(job.clone());
        Ok(())
    }

    /// Validates and "sends" the application. Nothing leaves the process;
    /// the form is logged and discarded.
    pub fn submit(&mut self, now: Instant) -> Result<(), BoardError> {
        let TalentView::Applying(job) = &self.view else {
            return Err(self.invalid("submit"));
        };
        self.form.validate()?;
        let payload = serde_json::to_string(&self.form).unwrap_or_default();
        info!(job = %job.id, title = %job.title, application = %payload, "application submitted");
        let job = job.clone();
        self.form = ApplicationForm::default();
        self.view = TalentView::Submitted {
            job,
            returns_at: now + self.return_delay,
        };
        Ok(())
    }

    /// Time left before the success panel closes itself.
    pub fn pending_return(&self, now: Instant) -> Option<Duration> {
        match &self.view {
            TalentView::Submitted { returns_at, .. } => Some(returns_at.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Fires the timed return. Returns true when the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = matches!(
            &self.view,
            TalentView::Submitted { returns_at, .. } if now >= *returns_at
        );
        if due {
            debug!("returning to job list");
            self.view = TalentView::Browsing;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ApplicationField;
    use crate::seed::talent_listings;

    fn flow() -> TalentFlow {
        TalentFlow::new(talent_listings(), DEFAULT_RETURN_DELAY)
    }

    fn fill(form: &mut ApplicationForm) {
        form.set_text(ApplicationField::FullName, "Grace Hopper".into());
        form.set_text(ApplicationField::Email, "grace@example.com".into());
        form.set_text(ApplicationField::Resume, "grace.pdf".into());
        form.cycle(ApplicationField::YearsOfExperience, false);
        form.set_text(ApplicationField::RelevantProjects, "COBOL".into());
    }

    #[test]
    fn test_select_back_and_apply_transitions() {
        let mut flow = flow();
        flow.select("job2").unwrap();
        assert!(matches!(flow.view(), TalentView::Viewing(j) if j.id == "job2"));
        flow.back().unwrap();
        assert_eq!(flow.view(), &TalentView::Browsing);

        flow.select("job2").unwrap();
        flow.start_application().unwrap();
        assert!(matches!(flow.view(), TalentView::Applying(j) if j.id == "job2"));
        flow.back().unwrap();
        assert!(matches!(flow.view(), TalentView::Viewing(j) if j.id == "job2"));
    }

    #[test]
    fn test_select_unknown_listing() {
        let mut flow = flow();
        assert_eq!(
            flow.select("job99").unwrap_err(),
            BoardError::UnknownListing("job99".into())
        );
        assert_eq!(flow.view(), &TalentView::Browsing);
    }

    #[test]
    fn test_invalid_transitions_leave_view_alone() {
        let mut flow = flow();
        assert!(flow.back().is_err());
        assert!(flow.start_application().is_err());
        assert!(flow.submit(Instant::now()).is_err());
        assert_eq!(flow.view(), &TalentView::Browsing);
    }

    #[test]
    fn test_submit_blocked_until_required_fields_present() {
        let mut flow = flow();
        flow.select("job1").unwrap();
        flow.start_application().unwrap();
        let err = flow.submit(Instant::now()).unwrap_err();
        assert!(matches!(err, BoardError::Form(_)));
        assert!(matches!(flow.view(), TalentView::Applying(_)));

        fill(&mut flow.form);
        flow.submit(Instant::now()).unwrap();
        assert!(matches!(flow.view(), TalentView::Submitted { job, .. } if job.id == "job1"));
        assert_eq!(flow.form, ApplicationForm::default());
    }

    #[test]
    fn test_new_application_starts_empty() {
        let mut flow = flow();
        flow.select("job1").unwrap();
        flow.start_application().unwrap();
        fill(&mut flow.form);
        flow.back().unwrap();
        flow.start_application().unwrap();
        assert_eq!(flow.form, ApplicationForm::default());
    }

    #[test]
    fn test_submitted_returns_to_browsing_after_delay() {
        let mut flow = flow();
        let t0 = Instant::now();
        flow.select("job4").unwrap();
        flow.start_application().unwrap();
        fill(&mut flow.form);
        flow.submit(t0).unwrap();

        assert_eq!(flow.pending_return(t0), Some(DEFAULT_RETURN_DELAY));
        assert!(!flow.tick(t0 + Duration::from_millis(2999)));
        assert!(matches!(flow.view(), TalentView::Submitted { .. }));
        assert!(flow.tick(t0 + Duration::from_secs(3)));
        assert_eq!(flow.view(), &TalentView::Browsing);
        assert_eq!(flow.pending_return(t0), None);
        assert!(!flow.tick(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_tick_outside_submitted_does_nothing() {
        let mut flow = flow();
        flow.select("job3").unwrap();
        assert!(!flow.tick(Instant::now() + Duration::from_secs(60)));
        assert!(matches!(flow.view(), TalentView::Viewing(_)));
    }

    #[test]
    fn test_visible_follows_filter() {
        let mut flow = flow();
        flow.filter.remote_only = true;
        assert_eq!(flow.visible().len(), 5);
        flow.filter.query = "ethics".into();
        let visible = flow.visible();
        let ids: Vec<_> = visible.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["job5"]);
    }
}
