use serde::{Deserialize, Serialize};

use super::domain::{EmploymentKind, JobListing};

/// Named compensation bucket over a listing's maximum salary.
///
/// Boundaries reproduce the browse screen exactly, overlaps included: a
/// maximum of 75000 falls in both `50k-75k` and `75k-100k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBucket {
    #[serde(rename = "0-50k")]
    UpTo50k,
    #[serde(rename = "50k-75k")]
    From50kTo75k,
    #[serde(rename = "75k-100k")]
    From75kTo100k,
    #[serde(rename = "100k+")]
    Above100k,
}

impl SalaryBucket {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::UpTo50k,
            Self::From50kTo75k,
            Self::From75kTo100k,
            Self::Above100k,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo50k => "0-50k",
            Self::From50kTo75k => "50k-75k",
            Self::From75kTo100k => "75k-100k",
            Self::Above100k => "100k+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "0-50k" => Some(Self::UpTo50k),
            "50k-75k" => Some(Self::From50kTo75k),
            "75k-100k" => Some(Self::From75kTo100k),
            "100k+" => Some(Self::Above100k),
            _ => None,
        }
    }

    pub const fn contains(self, max_salary: u32) -> bool {
        match self {
            Self::UpTo50k => max_salary <= 50_000,
            Self::From50kTo75k => max_salary >= 50_000 && max_salary <= 75_000,
            Self::From75kTo100k => max_salary >= 75_000 && max_salary <= 100_000,
            Self::Above100k => max_salary >= 100_000,
        }
    }
}

/// Ordering applied after filtering. Exactly one key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    SalaryHigh,
    SalaryLow,
    Applicants,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::SalaryHigh => "salary-high",
            Self::SalaryLow => "salary-low",
            Self::Applicants => "applicants",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "newest" => Some(Self::Newest),
            "salary-high" => Some(Self::SalaryHigh),
            "salary-low" => Some(Self::SalaryLow),
            "applicants" => Some(Self::Applicants),
            _ => None,
        }
    }
}

/// Filter and sort parameters for a catalog query. Absent/empty fields match
/// everything; active predicates combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub kinds: Vec<EmploymentKind>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub remote_only: bool,
    #[serde(default)]
    pub salary: Option<SalaryBucket>,
    #[serde(default)]
    pub sort: SortKey,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(listing: &JobListing, params: &FilterParams) -> bool {
    let matches_search = params.search.is_empty()
        || contains_ignore_case(&listing.title, &params.search)
        || contains_ignore_case(&listing.company, &params.search)
        || contains_ignore_case(&listing.description, &params.search);

    let matches_location =
        params.location.is_empty() || contains_ignore_case(&listing.location, &params.location);

    let matches_category = params.category.is_empty() || listing.category == params.category;

    let matches_kind = params.kinds.is_empty() || params.kinds.contains(&listing.kind);

    let matches_experience = params.experience.is_empty()
        || contains_ignore_case(&listing.experience, &params.experience);

    let matches_remote = !params.remote_only || listing.remote;

    let matches_salary = params
        .salary
        .map_or(true, |bucket| bucket.contains(listing.salary.max));

    matches_search
        && matches_location
        && matches_category
        && matches_kind
        && matches_experience
        && matches_remote
        && matches_salary
}

/// Filter and order the catalog. Pure; an empty result is a valid outcome.
///
/// The sort is stable, so equal-key listings keep their catalog order.
pub fn query(catalog: &[JobListing], params: &FilterParams) -> Vec<JobListing> {
    let mut matched: Vec<JobListing> = catalog
        .iter()
        .filter(|listing| matches(listing, params))
        .cloned()
        .collect();

    match params.sort {
        SortKey::Newest => matched.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
        SortKey::SalaryHigh => matched.sort_by(|a, b| b.salary.max.cmp(&a.salary.max)),
        SortKey::SalaryLow => matched.sort_by(|a, b| a.salary.max.cmp(&b.salary.max)),
        SortKey::Applicants => matched.sort_by(|a, b| a.applicants.cmp(&b.applicants)),
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{ListingId, SalaryRange};
    use chrono::NaiveDate;

    fn listing(
        id: &str,
        title: &str,
        company: &str,
        max_salary: u32,
        posted: (i32, u32, u32),
        applicants: u32,
    ) -> JobListing {
        JobListing {
            id: ListingId(id.to_string()),
            title: title.to_string(),
            company: company.to_string(),
            location: "Des Moines, IA".to_string(),
            kind: EmploymentKind::FullTime,
            salary: SalaryRange::new(max_salary / 2, max_salary, "USD"),
            description: "A role.".to_string(),
            requirements: Vec::new(),
            benefits: Vec::new(),
            category: "Technology".to_string(),
            posted_date: NaiveDate::from_ymd_opt(posted.0, posted.1, posted.2)
                .expect("valid posted date"),
            deadline: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid deadline"),
            experience: "2-4 years".to_string(),
            remote: false,
            featured: false,
            applicants,
        }
    }

    fn bucket_fixture() -> Vec<JobListing> {
        // Fixed posted dates give a deterministic newest-first order:
        // e, d, c, b, a from newest to oldest.
        vec![
            listing("a", "Backend Engineer", "Acme", 120_000, (2024, 1, 25), 9),
            listing("b", "Platform Engineer", "Acme", 130_000, (2024, 1, 24), 4),
            listing("c", "Support Analyst", "Globex", 80_000, (2024, 1, 23), 7),
            listing("d", "Data Engineer", "Globex", 115_000, (2024, 1, 22), 2),
            listing("e", "Office Manager", "Initech", 75_000, (2024, 1, 21), 6),
        ]
    }

    #[test]
    fn default_params_match_the_whole_catalog_in_posted_order() {
        let catalog = bucket_fixture();
        let result = query(&catalog, &FilterParams::default());
        let ids: Vec<&str> = result.iter().map(|l| l.id.0.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn search_matches_title_company_or_description_case_insensitively() {
        let catalog = bucket_fixture();
        let params = FilterParams {
            search: "engineer".to_string(),
            ..FilterParams::default()
        };
        let result = query(&catalog, &params);
        assert_eq!(result.len(), 3);

        let params = FilterParams {
            search: "GLOBEX".to_string(),
            ..FilterParams::default()
        };
        assert_eq!(query(&catalog, &params).len(), 2);
    }

    #[test]
    fn hundred_k_bucket_keeps_only_six_figure_maxima_in_catalog_order() {
        let catalog = bucket_fixture();
        let params = FilterParams {
            salary: Some(SalaryBucket::Above100k),
            ..FilterParams::default()
        };
        let result = query(&catalog, &params);
        let maxima: Vec<u32> = result.iter().map(|l| l.salary.max).collect();
        assert_eq!(maxima, [120_000, 130_000, 115_000]);
    }

    #[test]
    fn bucket_boundaries_overlap_like_the_browse_screen() {
        assert!(SalaryBucket::From50kTo75k.contains(75_000));
        assert!(SalaryBucket::From75kTo100k.contains(75_000));
        assert!(SalaryBucket::UpTo50k.contains(50_000));
        assert!(!SalaryBucket::Above100k.contains(99_999));
    }

    #[test]
    fn remote_only_drops_on_site_listings_regardless_of_other_filters() {
        let mut catalog = bucket_fixture();
        catalog[1].remote = true;
        catalog[3].remote = true;
        let params = FilterParams {
            remote_only: true,
            ..FilterParams::default()
        };
        let result = query(&catalog, &params);
        assert!(result.iter().all(|l| l.remote));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn predicates_combine_with_and() {
        let mut catalog = bucket_fixture();
        catalog[0].remote = true;
        let params = FilterParams {
            search: "engineer".to_string(),
            remote_only: true,
            salary: Some(SalaryBucket::Above100k),
            ..FilterParams::default()
        };
        let result = query(&catalog, &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.0, "a");
    }

    #[test]
    fn salary_sorts_order_by_maximum() {
        let catalog = bucket_fixture();
        let high = query(
            &catalog,
            &FilterParams {
                sort: SortKey::SalaryHigh,
                ..FilterParams::default()
            },
        );
        let maxima: Vec<u32> = high.iter().map(|l| l.salary.max).collect();
        assert_eq!(maxima, [130_000, 120_000, 115_000, 80_000, 75_000]);

        let low = query(
            &catalog,
            &FilterParams {
                sort: SortKey::SalaryLow,
                ..FilterParams::default()
            },
        );
        let maxima: Vec<u32> = low.iter().map(|l| l.salary.max).collect();
        assert_eq!(maxima, [75_000, 80_000, 115_000, 120_000, 130_000]);
    }

    #[test]
    fn applicant_sort_is_ascending() {
        let catalog = bucket_fixture();
        let result = query(
            &catalog,
            &FilterParams {
                sort: SortKey::Applicants,
                ..FilterParams::default()
            },
        );
        let counts: Vec<u32> = result.iter().map(|l| l.applicants).collect();
        assert_eq!(counts, [2, 4, 6, 7, 9]);
    }

    #[test]
    fn equal_sort_keys_preserve_catalog_order() {
        let mut catalog = bucket_fixture();
        let shared = NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date");
        for entry in &mut catalog {
            entry.posted_date = shared;
        }
        let result = query(&catalog, &FilterParams::default());
        let ids: Vec<&str> = result.iter().map(|l| l.id.0.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn query_never_fabricates_entries_and_is_idempotent() {
        let catalog = bucket_fixture();
        let params = FilterParams {
            search: "engineer".to_string(),
            sort: SortKey::SalaryHigh,
            ..FilterParams::default()
        };
        let once = query(&catalog, &params);
        assert!(once.iter().all(|entry| catalog.contains(entry)));
        let twice = query(&once, &params);
        assert_eq!(once, twice);
    }

    #[test]
    fn unmatched_filters_return_an_empty_catalog_not_an_error() {
        let catalog = bucket_fixture();
        let params = FilterParams {
            category: "Culinary".to_string(),
            ..FilterParams::default()
        };
        assert!(query(&catalog, &params).is_empty());
    }
}
