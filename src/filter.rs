use std::collections::BTreeSet;

use crate::models::{EmploymentType, JobListing};

/// Search criteria for the talent job board.
///
/// Visibility is the AND of three predicates: free-text query, employment
/// type (OR over the selected set, empty means all) and remote-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    pub types: BTreeSet<EmploymentType>,
    pub remote_only: bool,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the type if absent, remove it if present.
    pub fn toggle_type(&mut self, employment_type: EmploymentType) {
        if !self.types.remove(&employment_type) {
            self.types.insert(employment_type);
        }
    }

    pub fn matches(&self, job: &JobListing) -> bool {
        self.matches_query(job) && self.matches_type(job) && self.matches_remote(job)
    }

    fn matches_query(&self, job: &JobListing) -> bool {
        let needle = self.query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&job.title, &job.company, &job.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
            || job.skills.iter().any(|skill| skill.to_lowercase().contains(&needle))
    }

    fn matches_type(&self, job: &JobListing) -> bool {
        self.types.is_empty() || self.types.contains(&job.employment_type)
    }

    fn matches_remote(&self, job: &JobListing) -> bool {
        !self.remote_only || job.remote
    }

    /// Single linear pass, original order kept.
    pub fn apply<'a>(&self, jobs: &'a [JobListing]) -> Vec<&'a JobListing> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

/// "1 position available" / "N positions available".
pub fn positions_label(count: usize) -> String {
    if count == 1 {
        "1 position available".to_string()
    } else {
        format!("{} positions available", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::talent_listings;

    fn ids(jobs: &[&JobListing]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let jobs = talent_listings();
        let visible = ListingFilter::new().apply(&jobs);
        assert_eq!(ids(&visible), vec!["job1", "job2", "job3", "job4", "job5", "job6"]);
    }

    #[test]
    fn test_query_mlops_matches_title_and_skill() {
        let jobs = talent_listings();
        let filter = ListingFilter {
            query: "MLOps".to_string(),
            ..Default::default()
        };
        // job1 lists MLOps as a skill, job6 has it in the title.
        assert_eq!(ids(&filter.apply(&jobs)), vec!["job1", "job6"]);
    }

    #[test]
    fn test_query_mlops_engineer_scenario() {
        let jobs = talent_listings();
        let filter = ListingFilter {
            query: "MLOps Engineer".to_string(),
            ..Default::default()
        };
        let visible = filter.apply(&jobs);
        assert_eq!(ids(&visible), vec!["job6"]);
        assert_eq!(visible[0].title, "MLOps Engineer");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let jobs = talent_listings();
        for query in ["computer vision", "COMPUTER VISION", "CoMpUtEr ViSiOn"] {
            let filter = ListingFilter {
                query: query.to_string(),
                ..Default::default()
            };
            assert_eq!(ids(&filter.apply(&jobs)), vec!["job2"], "query {query}");
        }
    }

    #[test]
    fn test_query_matches_skill_substring() {
        let jobs = talent_listings();
        let filter = ListingFilter {
            query: "rasa".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&jobs)), vec!["job4"]);
    }

    #[test]
    fn test_remote_only_excludes_london() {
        let jobs = talent_listings();
        let filter = ListingFilter {
            remote_only: true,
            ..Default::default()
        };
        let visible = filter.apply(&jobs);
        assert_eq!(visible.len(), 5);
        assert!(!ids(&visible).contains(&"job3".to_string()));
    }

    #[test]
    fn test_contract_type_selects_job2() {
        let jobs = talent_listings();
        let mut filter = ListingFilter::new();
        filter.toggle_type(EmploymentType::Contract);
        assert_eq!(ids(&filter.apply(&jobs)), vec!["job2"]);
    }

    #[test]
    fn test_type_selection_is_or() {
        let jobs = talent_listings();
        let mut filter = ListingFilter::new();
        filter.toggle_type(EmploymentType::Contract);
        filter.toggle_type(EmploymentType::Freelance);
        assert_eq!(ids(&filter.apply(&jobs)), vec!["job2", "job4"]);
    }

    #[test]
    fn test_no_types_equals_all_types() {
        let jobs = talent_listings();
        let none = ListingFilter::new();
        let mut all = ListingFilter::new();
        for t in [
            EmploymentType::FullTime,
            EmploymentType::PartTime,
            EmploymentType::Contract,
            EmploymentType::Freelance,
        ] {
            all.toggle_type(t);
        }
        assert_eq!(none.apply(&jobs), all.apply(&jobs));
    }

    #[test]
    fn test_toggle_type_twice_removes_it() {
        let mut filter = ListingFilter::new();
        filter.toggle_type(EmploymentType::PartTime);
        filter.toggle_type(EmploymentType::PartTime);
        assert!(filter.types.is_empty());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let jobs = talent_listings();
        let mut filter = ListingFilter {
            query: "pytorch".to_string(),
            remote_only: true,
            ..Default::default()
        };
        // job1 and job3 have PyTorch; job3 is on-site.
        assert_eq!(ids(&filter.apply(&jobs)), vec!["job1"]);
        filter.toggle_type(EmploymentType::Contract);
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent_and_borrows_originals() {
        let jobs = talent_listings();
        let filter = ListingFilter {
            query: "python".to_string(),
            ..Default::default()
        };
        let first = filter.apply(&jobs);
        let second = filter.apply(&jobs);
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn test_positions_label() {
        assert_eq!(positions_label(0), "0 positions available");
        assert_eq!(positions_label(1), "1 position available");
        assert_eq!(positions_label(5), "5 positions available");
    }
}
