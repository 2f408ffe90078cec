//! In-memory job catalog: domain model, query engine, intake, and router.

pub mod domain;
pub mod import;
pub mod query;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

pub use domain::{
    ApplicantId, ApplicationId, ApplicationStatus, Category, CompanyProfile, EmploymentKind,
    JobApplication, JobListing, ListingId, SalaryRange,
};
pub use import::{CatalogImportError, CsvCatalogImporter};
pub use query::{query, FilterParams, SalaryBucket, SortKey};
pub use repository::{ApplicationStore, CatalogRepository, RepositoryError};
pub use router::{catalog_router, CatalogApi};
pub use service::{
    ApplicationDraft, ApplicationsOverview, CatalogService, CatalogServiceError, CategorySummary,
    ListingDetailView, SearchOutcome,
};
