//! Seeded demo catalog used when no CSV export is configured.

use chrono::NaiveDate;

use super::domain::{
    ApplicantId, ApplicationId, ApplicationStatus, Category, CompanyProfile, EmploymentKind,
    JobApplication, JobListing, ListingId, SalaryRange,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn listings() -> Vec<JobListing> {
    vec![
        JobListing {
            id: ListingId("1".to_string()),
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: "San Francisco, CA".to_string(),
            kind: EmploymentKind::FullTime,
            salary: SalaryRange::new(80_000, 120_000, "USD"),
            description: "We are looking for a skilled Frontend Developer to join our team and help build amazing user experiences.".to_string(),
            requirements: strings(&[
                "3+ years experience with React",
                "Strong TypeScript skills",
                "Experience with modern CSS frameworks",
                "Knowledge of state management (Redux/Zustand)",
                "Understanding of responsive design",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Remote work flexibility",
                "Professional development budget",
                "Stock options",
                "Unlimited PTO",
            ]),
            category: "Technology".to_string(),
            posted_date: date(2024, 1, 15),
            deadline: date(2024, 2, 15),
            experience: "3-5 years".to_string(),
            remote: true,
            featured: true,
            applicants: 24,
        },
        JobListing {
            id: ListingId("2".to_string()),
            title: "Product Manager".to_string(),
            company: "Innovation Labs".to_string(),
            location: "New York, NY".to_string(),
            kind: EmploymentKind::FullTime,
            salary: SalaryRange::new(90_000, 130_000, "USD"),
            description: "Join our product team to drive strategy and execution for our cutting-edge products.".to_string(),
            requirements: strings(&[
                "5+ years product management experience",
                "Strong analytical skills",
                "Experience with Agile methodologies",
                "Excellent communication skills",
                "Technical background preferred",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Equity package",
                "Health & dental insurance",
                "Flexible hours",
                "Learning stipend",
            ]),
            category: "Product".to_string(),
            posted_date: date(2024, 1, 20),
            deadline: date(2024, 2, 20),
            experience: "5+ years".to_string(),
            remote: false,
            featured: false,
            applicants: 18,
        },
        JobListing {
            id: ListingId("3".to_string()),
            title: "UX/UI Designer".to_string(),
            company: "Creative Studio".to_string(),
            location: "Remote".to_string(),
            kind: EmploymentKind::Contract,
            salary: SalaryRange::new(60, 80, "USD"),
            description: "Design beautiful and intuitive user interfaces for our clients.".to_string(),
            requirements: strings(&[
                "2+ years UI/UX design experience",
                "Proficiency in Figma/Sketch",
                "Strong portfolio",
                "Understanding of user research",
                "Prototyping skills",
            ]),
            benefits: strings(&[
                "Flexible schedule",
                "Remote work",
                "Project-based pay",
                "Portfolio building",
                "Creative freedom",
            ]),
            category: "Design".to_string(),
            posted_date: date(2024, 1, 18),
            deadline: date(2024, 2, 10),
            experience: "2-4 years".to_string(),
            remote: true,
            featured: true,
            applicants: 31,
        },
        JobListing {
            id: ListingId("4".to_string()),
            title: "Data Scientist".to_string(),
            company: "Analytics Pro".to_string(),
            location: "Austin, TX".to_string(),
            kind: EmploymentKind::FullTime,
            salary: SalaryRange::new(85_000, 115_000, "USD"),
            description: "Work with large datasets to derive insights and build predictive models.".to_string(),
            requirements: strings(&[
                "PhD or Masters in Data Science/Statistics",
                "Python/R programming",
                "Machine learning experience",
                "SQL proficiency",
                "Experience with cloud platforms",
            ]),
            benefits: strings(&[
                "Research budget",
                "Conference attendance",
                "Health insurance",
                "Retirement matching",
                "Flexible PTO",
            ]),
            category: "Data Science".to_string(),
            posted_date: date(2024, 1, 22),
            deadline: date(2024, 2, 25),
            experience: "3-6 years".to_string(),
            remote: false,
            featured: false,
            applicants: 12,
        },
        JobListing {
            id: ListingId("5".to_string()),
            title: "Marketing Specialist".to_string(),
            company: "Brand Masters".to_string(),
            location: "Los Angeles, CA".to_string(),
            kind: EmploymentKind::FullTime,
            salary: SalaryRange::new(55_000, 75_000, "USD"),
            description: "Drive marketing campaigns and build brand awareness across multiple channels.".to_string(),
            requirements: strings(&[
                "2+ years marketing experience",
                "Social media expertise",
                "Content creation skills",
                "Analytics experience",
                "Creative mindset",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Marketing conferences",
                "Creative tools budget",
                "Team lunches",
                "Growth opportunities",
            ]),
            category: "Marketing".to_string(),
            posted_date: date(2024, 1, 25),
            deadline: date(2024, 2, 28),
            experience: "2-4 years".to_string(),
            remote: false,
            featured: false,
            applicants: 27,
        },
    ]
}

pub fn companies() -> Vec<CompanyProfile> {
    vec![
        CompanyProfile {
            id: "1".to_string(),
            name: "TechCorp Solutions".to_string(),
            website: "https://techcorp.com".to_string(),
            description: "Leading technology solutions provider focused on innovation and customer success.".to_string(),
            industry: "Technology".to_string(),
            size: "100-500 employees".to_string(),
            location: "San Francisco, CA".to_string(),
            founded: "2015".to_string(),
        },
        CompanyProfile {
            id: "2".to_string(),
            name: "Innovation Labs".to_string(),
            website: "https://innovationlabs.com".to_string(),
            description: "Research and development company creating tomorrow's products today.".to_string(),
            industry: "Research & Development".to_string(),
            size: "50-100 employees".to_string(),
            location: "New York, NY".to_string(),
            founded: "2018".to_string(),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    let entries = [
        ("1", "Technology", "Software development, IT, and tech roles", 45),
        ("2", "Design", "UI/UX, graphic design, and creative roles", 23),
        ("3", "Marketing", "Digital marketing, content, and brand roles", 18),
        ("4", "Product", "Product management and strategy roles", 12),
        ("5", "Data Science", "Analytics, ML, and data engineering roles", 16),
        ("6", "Sales", "Business development and sales roles", 21),
    ];

    entries
        .into_iter()
        .map(|(id, name, description, job_count)| Category {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            job_count,
        })
        .collect()
}

pub fn applications() -> Vec<JobApplication> {
    vec![
        JobApplication {
            id: ApplicationId("1".to_string()),
            job_id: ListingId("1".to_string()),
            applicant_id: ApplicantId("student@example.edu".to_string()),
            status: ApplicationStatus::Pending,
            applied_date: date(2024, 1, 20),
            resume_url: None,
            cover_letter: Some("I am excited to apply for this position...".to_string()),
        },
        JobApplication {
            id: ApplicationId("2".to_string()),
            job_id: ListingId("2".to_string()),
            applicant_id: ApplicantId("student@example.edu".to_string()),
            status: ApplicationStatus::Reviewed,
            applied_date: date(2024, 1, 18),
            resume_url: None,
            cover_letter: Some("With my experience in product management...".to_string()),
        },
    ]
}
