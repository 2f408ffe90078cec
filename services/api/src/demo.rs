use crate::infra::{InMemoryApplicationStore, InMemoryCatalog};
use chrono::Local;
use clap::Args;
use jobboard::access::{authorize_path, navigation_for, portal_title, Identity, Role};
use jobboard::catalog::{
    ApplicantId, ApplicationDraft, CatalogService, FilterParams, ListingId, SalaryBucket, SortKey,
};
use jobboard::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct JobSearchArgs {
    /// Free-text term matched against title, company, and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Location substring filter
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact category filter
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Employment kinds to keep (repeatable): full-time, part-time, contract, remote
    #[arg(long = "job-type")]
    pub(crate) job_types: Vec<String>,
    /// Experience label substring filter
    #[arg(long)]
    pub(crate) experience: Option<String>,
    /// Keep remote listings only
    #[arg(long)]
    pub(crate) remote_only: bool,
    /// Salary bucket over the listing maximum: 0-50k, 50k-75k, 75k-100k, 100k+
    #[arg(long)]
    pub(crate) salary: Option<String>,
    /// Sort key: newest, salary-high, salary-low, applicants
    #[arg(long, default_value = "newest")]
    pub(crate) sort: String,
    /// Optional CSV listings export to hydrate the catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional CSV listings export to hydrate the catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Skip the application intake portion of the demo
    #[arg(long)]
    pub(crate) skip_application: bool,
}

fn load_catalog(csv_path: Option<PathBuf>) -> Result<(InMemoryCatalog, bool), AppError> {
    match csv_path {
        Some(path) => Ok((InMemoryCatalog::from_csv_path(&path)?, true)),
        None => Ok((InMemoryCatalog::seeded(), false)),
    }
}

impl JobSearchArgs {
    fn into_parts(self) -> (Option<PathBuf>, FilterParams) {
        let JobSearchArgs {
            search,
            location,
            category,
            job_types,
            experience,
            remote_only,
            salary,
            sort,
            catalog_csv,
        } = self;

        let kinds = job_types
            .iter()
            .filter_map(|raw| jobboard::catalog::EmploymentKind::parse(raw))
            .collect();
        let params = FilterParams {
            search: search.unwrap_or_default(),
            location: location.unwrap_or_default(),
            category: category.unwrap_or_default(),
            kinds,
            experience: experience.unwrap_or_default(),
            remote_only,
            salary: salary.as_deref().and_then(SalaryBucket::parse),
            sort: SortKey::parse(&sort).unwrap_or_default(),
        };
        (catalog_csv, params)
    }
}

pub(crate) fn run_job_search(args: JobSearchArgs) -> Result<(), AppError> {
    let (catalog_csv, params) = args.into_parts();
    let (catalog, imported) = load_catalog(catalog_csv)?;
    let applications = Arc::new(InMemoryApplicationStore::seeded());
    let service = CatalogService::new(Arc::new(catalog), applications);

    let outcome = service.search(&params)?;

    println!(
        "Showing {} of {} jobs ({} catalog, sorted by {})",
        outcome.matched.len(),
        outcome.total,
        if imported { "imported" } else { "seeded" },
        params.sort.label()
    );
    for listing in &outcome.matched {
        println!(
            "- [{}] {} @ {} | {} | {} | {} | posted {} | {} applicants",
            listing.id.0,
            listing.title,
            listing.company,
            listing.location,
            listing.kind.label(),
            listing.salary.summary(listing.kind),
            listing.posted_date,
            listing.applicants
        );
    }
    if outcome.matched.is_empty() {
        println!("No jobs found. Try adjusting your search criteria or filters.");
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        catalog_csv,
        skip_application,
    } = args;

    println!("Job board portal demo");
    let (catalog, imported) = load_catalog(catalog_csv)?;
    let applications = Arc::new(InMemoryApplicationStore::seeded());
    let service = CatalogService::new(Arc::new(catalog), applications);

    let featured = service.featured()?;
    println!(
        "\nFeatured listings ({} catalog):",
        if imported { "imported" } else { "seeded" }
    );
    for listing in &featured {
        println!(
            "- {} @ {} ({})",
            listing.title,
            listing.company,
            listing.salary.summary(listing.kind)
        );
    }

    let params = FilterParams {
        salary: Some(SalaryBucket::Above100k),
        sort: SortKey::SalaryHigh,
        ..FilterParams::default()
    };
    let outcome = service.search(&params)?;
    println!("\nSix-figure listings, highest first:");
    for listing in &outcome.matched {
        println!(
            "- {} @ {} ({})",
            listing.title,
            listing.company,
            listing.salary.summary(listing.kind)
        );
    }

    println!("\nAccess guard decisions:");
    let student = Identity::new(Role::Student, "Sam Doe", "sam@example.edu");
    for (who, identity) in [("visitor", None), ("student", Some(&student))] {
        for path in ["/jobs", "/student/dashboard", "/admin/users"] {
            let decision = authorize_path(identity, path);
            println!("- {} at {} -> {:?}", who, path, decision);
        }
    }

    println!("\n{} navigation:", portal_title(student.role));
    for item in navigation_for(student.role) {
        println!("- {} ({})", item.title, item.path);
    }

    if skip_application {
        return Ok(());
    }

    println!("\nApplication intake demo");
    let listing_id = ListingId("1".to_string());
    let draft = ApplicationDraft {
        cover_letter: Some("I am excited to apply for this position...".to_string()),
        resume_url: None,
    };
    let today = Local::now().date_naive();
    match service.apply(Some(&student), &listing_id, draft, today) {
        Ok(application) => {
            println!(
                "- Received application {} for listing {} -> status {}",
                application.id.0,
                application.job_id.0,
                application.status.label()
            );
        }
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    }

    let overview = service.applications_for(&ApplicantId(student.email.clone()))?;
    println!(
        "- {} total applications ({} pending, {} reviewed, {} accepted, {} rejected)",
        overview.records.len(),
        overview.pending,
        overview.reviewed,
        overview.accepted,
        overview.rejected
    );

    Ok(())
}
