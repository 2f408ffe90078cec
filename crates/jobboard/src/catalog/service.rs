use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::access::{Identity, Role};

use super::domain::{
    ApplicantId, ApplicationId, ApplicationStatus, CompanyProfile, JobApplication, JobListing,
    ListingId,
};
use super::query::{query, FilterParams};
use super::repository::{ApplicationStore, CatalogRepository, RepositoryError};

/// Service composing the catalog repository, query engine, and application
/// intake rules.
pub struct CatalogService<R, A> {
    catalog: Arc<R>,
    applications: Arc<A>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

/// Result of a catalog search, sized for the "showing X of Y" readout.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub total: usize,
    pub matched: Vec<JobListing>,
}

/// Listing detail joined with the advertising company, when known.
#[derive(Debug, Clone, Serialize)]
pub struct ListingDetailView {
    pub listing: JobListing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    pub salary_summary: String,
}

/// Category with its live listing count alongside the advertised one.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub description: String,
    pub advertised_count: u32,
    pub open_count: usize,
}

/// Applicant-facing view of submitted applications with per-status tallies.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationsOverview {
    pub records: Vec<JobApplication>,
    pub pending: usize,
    pub reviewed: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Applicant-supplied portion of an application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ApplicationDraft {
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl<R, A> CatalogService<R, A>
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
{
    pub fn new(catalog: Arc<R>, applications: Arc<A>) -> Self {
        Self {
            catalog,
            applications,
        }
    }

    /// Run the filter/sort engine over the whole catalog.
    pub fn search(&self, params: &FilterParams) -> Result<SearchOutcome, CatalogServiceError> {
        let catalog = self.catalog.listings()?;
        let total = catalog.len();
        let matched = query(&catalog, params);
        Ok(SearchOutcome { total, matched })
    }

    /// Listing detail joined with its company profile. An unknown id is a
    /// `None`, never an error.
    pub fn listing_detail(
        &self,
        id: &ListingId,
    ) -> Result<Option<ListingDetailView>, CatalogServiceError> {
        let Some(listing) = self.catalog.listing(id)? else {
            return Ok(None);
        };
        let company = self.catalog.company_by_name(&listing.company)?;
        let salary_summary = listing.salary.summary(listing.kind);
        Ok(Some(ListingDetailView {
            listing,
            company,
            salary_summary,
        }))
    }

    /// First three featured listings, for the home screen.
    pub fn featured(&self) -> Result<Vec<JobListing>, CatalogServiceError> {
        let mut featured: Vec<JobListing> = self
            .catalog
            .listings()?
            .into_iter()
            .filter(|listing| listing.featured)
            .collect();
        featured.truncate(3);
        Ok(featured)
    }

    /// First six listings in catalog order, for the home screen.
    pub fn recent(&self) -> Result<Vec<JobListing>, CatalogServiceError> {
        let mut recent = self.catalog.listings()?;
        recent.truncate(6);
        Ok(recent)
    }

    /// Categories with live counts computed from the current catalog.
    pub fn category_summaries(&self) -> Result<Vec<CategorySummary>, CatalogServiceError> {
        let listings = self.catalog.listings()?;
        let summaries = self
            .catalog
            .categories()?
            .into_iter()
            .map(|category| {
                let open_count = listings
                    .iter()
                    .filter(|listing| listing.category == category.name)
                    .count();
                CategorySummary {
                    name: category.name,
                    description: category.description,
                    advertised_count: category.job_count,
                    open_count,
                }
            })
            .collect();
        Ok(summaries)
    }

    /// Submit an application for a listing on behalf of the current session.
    ///
    /// Only students may apply; a missing session asks the caller to send the
    /// visitor to the sign-in screen rather than failing.
    pub fn apply(
        &self,
        identity: Option<&Identity>,
        listing_id: &ListingId,
        draft: ApplicationDraft,
        applied_date: NaiveDate,
    ) -> Result<JobApplication, CatalogServiceError> {
        let identity = identity.ok_or(CatalogServiceError::SignInRequired)?;
        if identity.role != Role::Student {
            return Err(CatalogServiceError::RoleNotAllowed(identity.role));
        }

        if self.catalog.listing(listing_id)?.is_none() {
            return Err(CatalogServiceError::UnknownListing(listing_id.clone()));
        }

        let applicant_id = ApplicantId(identity.email.clone());
        let already_applied = self
            .applications
            .for_applicant(&applicant_id)?
            .iter()
            .any(|application| &application.job_id == listing_id);
        if already_applied {
            return Err(CatalogServiceError::AlreadyApplied(listing_id.clone()));
        }

        let application = JobApplication {
            id: next_application_id(),
            job_id: listing_id.clone(),
            applicant_id,
            status: ApplicationStatus::Pending,
            applied_date,
            resume_url: draft.resume_url,
            cover_letter: draft.cover_letter,
        };

        let stored = self.applications.insert(application)?;
        Ok(stored)
    }

    /// All applications for one applicant with per-status tallies.
    pub fn applications_for(
        &self,
        applicant: &ApplicantId,
    ) -> Result<ApplicationsOverview, CatalogServiceError> {
        let records = self.applications.for_applicant(applicant)?;
        let count =
            |status: ApplicationStatus| records.iter().filter(|r| r.status == status).count();
        Ok(ApplicationsOverview {
            pending: count(ApplicationStatus::Pending),
            reviewed: count(ApplicationStatus::Reviewed),
            accepted: count(ApplicationStatus::Accepted),
            rejected: count(ApplicationStatus::Rejected),
            records,
        })
    }

    /// Applications received for one listing, for the company/admin screens.
    pub fn applications_for_listing(
        &self,
        listing: &ListingId,
    ) -> Result<Vec<JobApplication>, CatalogServiceError> {
        Ok(self.applications.for_listing(listing)?)
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("sign in to apply for jobs")]
    SignInRequired,
    #[error("only students can apply for jobs (signed in as {})", .0.label())]
    RoleNotAllowed(Role),
    #[error("listing {} not found", .0 .0)]
    UnknownListing(ListingId),
    #[error("an application for listing {} already exists", .0 .0)]
    AlreadyApplied(ListingId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
