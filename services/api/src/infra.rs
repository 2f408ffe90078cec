use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use jobboard::access::{Identity, SessionProvider};
use jobboard::catalog::{
    seed, ApplicantId, ApplicationStore, Category, CatalogRepository, CompanyProfile,
    CsvCatalogImporter, JobApplication, JobListing, ListingId, RepositoryError,
};
use jobboard::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog held in memory for the process lifetime. Listings never change
/// after construction; there is exactly one logical writer.
pub(crate) struct InMemoryCatalog {
    listings: Vec<JobListing>,
    companies: Vec<CompanyProfile>,
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    pub(crate) fn seeded() -> Self {
        Self {
            listings: seed::listings(),
            companies: seed::companies(),
            categories: seed::categories(),
        }
    }

    /// Hydrate listings from a CSV export; companies and categories keep the
    /// seeded values, matching the screens that render them.
    pub(crate) fn from_csv_path(path: &Path) -> Result<Self, AppError> {
        let listings = CsvCatalogImporter::from_path(path)?;
        Ok(Self {
            listings,
            companies: seed::companies(),
            categories: seed::categories(),
        })
    }

    pub(crate) fn from_config_path(csv_path: Option<&Path>) -> Result<Self, AppError> {
        match csv_path {
            Some(path) => Self::from_csv_path(path),
            None => Ok(Self::seeded()),
        }
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn listings(&self) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(self.listings.clone())
    }

    fn listing(&self, id: &ListingId) -> Result<Option<JobListing>, RepositoryError> {
        Ok(self.listings.iter().find(|entry| &entry.id == id).cloned())
    }

    fn company_by_name(&self, name: &str) -> Result<Option<CompanyProfile>, RepositoryError> {
        Ok(self
            .companies
            .iter()
            .find(|company| company.name == name)
            .cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.clone())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryApplicationStore {
    records: Mutex<HashMap<String, JobApplication>>,
}

impl InMemoryApplicationStore {
    pub(crate) fn seeded() -> Self {
        let records = seed::applications()
            .into_iter()
            .map(|application| (application.id.0.clone(), application))
            .collect();
        Self {
            records: Mutex::new(records),
        }
    }
}

impl ApplicationStore for InMemoryApplicationStore {
    fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        if guard.contains_key(&application.id.0) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.0.clone(), application.clone());
        Ok(application)
    }

    fn for_applicant(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        let mut records: Vec<JobApplication> = guard
            .values()
            .filter(|record| &record.applicant_id == applicant)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.applied_date.cmp(&b.applied_date).then(a.id.0.cmp(&b.id.0)));
        Ok(records)
    }

    fn for_listing(&self, listing: &ListingId) -> Result<Vec<JobApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.job_id == listing)
            .cloned()
            .collect())
    }
}

/// Single-slot stub session. Sign-in simply replaces the current identity.
#[derive(Default)]
pub(crate) struct InMemorySession {
    identity: Mutex<Option<Identity>>,
}

impl InMemorySession {
    pub(crate) fn sign_in(&self, identity: Identity) {
        *self.identity.lock().expect("session mutex poisoned") = Some(identity);
    }
}

impl SessionProvider for InMemorySession {
    fn current_identity(&self) -> Option<Identity> {
        self.identity
            .lock()
            .expect("session mutex poisoned")
            .clone()
    }

    fn sign_out(&self) {
        *self.identity.lock().expect("session mutex poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard::access::Role;

    #[test]
    fn session_round_trips_sign_in_and_out() {
        let session = InMemorySession::default();
        assert!(session.current_identity().is_none());

        session.sign_in(Identity::new(Role::Admin, "Alex Ree", "alex@portal.example"));
        let identity = session.current_identity().expect("signed in");
        assert_eq!(identity.role, Role::Admin);

        session.sign_out();
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn seeded_store_rejects_duplicate_ids() {
        let store = InMemoryApplicationStore::seeded();
        let existing = seed::applications().remove(0);
        let err = store.insert(existing).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict));
    }

    #[test]
    fn seeded_catalog_resolves_listings_and_companies() {
        let catalog = InMemoryCatalog::seeded();
        let listing = catalog
            .listing(&ListingId("2".to_string()))
            .expect("lookup works")
            .expect("listing 2 seeded");
        assert_eq!(listing.company, "Innovation Labs");
        assert!(catalog
            .company_by_name("Innovation Labs")
            .expect("lookup works")
            .is_some());
    }
}
