// Sample data the screens start from. Nothing here is fetched or persisted.

use crate::models::{
    Applicant, ApplicantStatus, CompanyInfo, CompanySize, EmploymentType, Experience, Industry,
    JobListing,
};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    remote: bool,
    employment_type: EmploymentType,
    description: &str,
    skills: &[&str],
    salary: &str,
    posted_date: &str,
) -> JobListing {
    JobListing {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        remote,
        employment_type,
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        salary: salary.to_string(),
        posted_date: posted_date.to_string(),
        applicants: None,
    }
}

const LLM_DESCRIPTION: &str = "Seeking a specialist in large language models with experience in fine-tuning and deploying transformer-based architectures at scale. You will work on cutting-edge NLP applications, optimizing models for production environments and collaborating with cross-functional teams.";
const MLOPS_DESCRIPTION: &str = "Build and maintain infrastructure for machine learning operations at scale. Design CI/CD pipelines for ML models, monitoring systems, and automated deployment workflows.";

/// The six openings shown on the talent side.
pub fn talent_listings() -> Vec<JobListing> {
    vec![
        listing(
            "job1",
            "Senior ML Engineer - LLM Specialist",
            "Quantum AI Solutions",
            "San Francisco, CA",
            true,
            EmploymentType::FullTime,
            LLM_DESCRIPTION,
            &["PyTorch", "Transformers", "RLHF", "MLOps", "Python", "Docker"],
            "$150,000 - $210,000",
            "2d ago",
        ),
        listing(
            "job2",
            "Computer Vision Expert",
            "Visionary Tech",
            "Boston, MA",
            true,
            EmploymentType::Contract,
            "Join our team to develop next-generation computer vision solutions for retail analytics. You will design and implement algorithms for object detection, segmentation, and tracking in complex environments.",
            &["TensorFlow", "OpenCV", "YOLO", "Python", "C++"],
            "$120/hr",
            "1w ago",
        ),
        listing(
            "job3",
            "AI Research Scientist",
            "DeepMind Research Labs",
            "London, UK",
            false,
            EmploymentType::FullTime,
            "Conduct fundamental research in reinforcement learning and multi-agent systems. Publish cutting-edge papers and develop novel algorithms that push the boundaries of AI capabilities.",
            &["Reinforcement Learning", "Game Theory", "PyTorch", "TensorFlow", "PhD in AI/ML"],
            "£110,000 - £160,000",
            "3d ago",
        ),
        listing(
            "job4",
            "NLP Engineer - Conversational AI",
            "ChatWorks Inc.",
            "Remote",
            true,
            EmploymentType::Freelance,
            "Develop and optimize conversational AI systems for customer service applications. Improve intent recognition, context handling, and natural language generation for more human-like interactions.",
            &["BERT", "GPT", "Rasa", "Python", "FastAPI"],
            "$90-120/hr",
            "5d ago",
        ),
        listing(
            "job5",
            "AI Ethics Researcher",
            "Ethical AI Institute",
            "Berlin, Germany",
            true,
            EmploymentType::PartTime,
            "Join our multidisciplinary team working on frameworks for ethical AI deployment. Research fairness metrics, develop bias detection tools, and create guidelines for responsible AI use.",
            &["Fairness in ML", "Causal Inference", "Python", "Social Science", "Ethics"],
            "€60,000 - €80,000 (pro-rated)",
            "2w ago",
        ),
        listing(
            "job6",
            "MLOps Engineer",
            "ScaleAI Systems",
            "Toronto, Canada",
            true,
            EmploymentType::FullTime,
            MLOPS_DESCRIPTION,
            &["Kubernetes", "TensorFlow Serving", "MLflow", "Docker", "Python"],
            "CAD 130,000 - 170,000",
            "3d ago",
        ),
    ]
}

pub fn company_info() -> CompanyInfo {
    CompanyInfo {
        name: "Quantum AI Solutions".to_string(),
        email: "hr@quantumai.tech".to_string(),
        website: "https://quantumai.tech".to_string(),
        industry: Some(Industry::ArtificialIntelligence),
        size: Some(CompanySize::Medium),
        description: "Leading provider of AI solutions specializing in large language models and machine learning infrastructure.".to_string(),
        logo: None,
    }
}

/// The company's own postings, with applicant counts.
pub fn company_listings() -> Vec<JobListing> {
    let company = "Quantum AI Solutions";
    let with_applicants = |mut job: JobListing, n: u32| {
        job.applicants = Some(n);
        job
    };
    vec![
        with_applicants(
            listing(
                "job1",
                "Senior ML Engineer - LLM Specialist",
                company,
                "San Francisco, CA",
                true,
                EmploymentType::FullTime,
                LLM_DESCRIPTION,
                &["PyTorch", "Transformers", "RLHF", "MLOps", "Python", "Docker"],
                "$150,000 - $210,000",
                "2d ago",
            ),
            12,
        ),
        with_applicants(
            listing(
                "job6",
                "MLOps Engineer",
                company,
                "Toronto, Canada",
                true,
                EmploymentType::FullTime,
                MLOPS_DESCRIPTION,
                &["Kubernetes", "TensorFlow Serving", "MLflow", "Docker", "Python"],
                "CAD 130,000 - 170,000",
                "3d ago",
            ),
            8,
        ),
        with_applicants(
            listing(
                "job7",
                "AI Product Manager",
                company,
                "Remote",
                true,
                EmploymentType::FullTime,
                "Lead the development of AI-powered products from conception to launch. Work with cross-functional teams to define requirements, roadmaps, and go-to-market strategies for our machine learning solutions.",
                &["Product Management", "AI/ML", "Agile", "Technical Communication", "Market Research"],
                "$120,000 - $160,000",
                "1w ago",
            ),
            15,
        ),
    ]
}

pub fn sample_applicants() -> Vec<Applicant> {
    let applicant = |id: &str, job_id: &str, name: &str, email: &str, experience, applied: &str, status: &str| Applicant {
        id: id.to_string(),
        job_id: job_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        experience,
        applied_date: applied.to_string(),
        status: ApplicantStatus::from(status),
    };
    vec![
        applicant("app1", "job1", "Alex Johnson", "alex.johnson@example.com", Experience::FiveToSeven, "2025-04-20", "Under Review"),
        applicant("app2", "job1", "Maya Patel", "maya.patel@example.com", Experience::SevenToTen, "2025-04-21", "Interview Scheduled"),
        applicant("app3", "job1", "Jaime Rodriguez", "jaime.r@example.com", Experience::ThreeToFive, "2025-04-22", "New"),
        applicant("app4", "job6", "Sarah Kim", "skim@example.com", Experience::FiveToSeven, "2025-04-23", "New"),
        applicant("app5", "job6", "Daniel Lee", "d.lee@example.com", Experience::ThreeToFive, "2025-04-24", "Under Review"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        for jobs in [talent_listings(), company_listings()] {
            let ids: HashSet<_> = jobs.iter().map(|j| j.id.clone()).collect();
            assert_eq!(ids.len(), jobs.len());
        }
    }

    #[test]
    fn test_company_listings_carry_applicant_counts() {
        let counts: Vec<_> = company_listings().iter().map(|j| j.applicants).collect();
        assert_eq!(counts, vec![Some(12), Some(8), Some(15)]);
        assert!(talent_listings().iter().all(|j| j.applicants.is_none()));
    }
}
