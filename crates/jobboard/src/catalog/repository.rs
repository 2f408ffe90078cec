use super::domain::{
    ApplicantId, Category, CompanyProfile, JobApplication, JobListing, ListingId,
};

/// Read side of the catalog so the service module can be exercised in
/// isolation. Listings are immutable once created; `listings` returns the
/// catalog in its stable seeded order.
pub trait CatalogRepository: Send + Sync {
    fn listings(&self) -> Result<Vec<JobListing>, RepositoryError>;
    fn listing(&self, id: &ListingId) -> Result<Option<JobListing>, RepositoryError>;
    fn company_by_name(&self, name: &str) -> Result<Option<CompanyProfile>, RepositoryError>;
    fn categories(&self) -> Result<Vec<Category>, RepositoryError>;
}

/// Storage abstraction for submitted applications.
pub trait ApplicationStore: Send + Sync {
    fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError>;
    fn for_applicant(&self, applicant: &ApplicantId)
        -> Result<Vec<JobApplication>, RepositoryError>;
    fn for_listing(&self, listing: &ListingId) -> Result<Vec<JobApplication>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
