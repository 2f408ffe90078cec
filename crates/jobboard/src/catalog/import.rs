//! Hydrate the catalog from a CSV listings export instead of the seed data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::domain::{EmploymentKind, JobListing, ListingId, SalaryRange};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read listings export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listings CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("listing '{listing}': unknown employment type '{value}'")]
    UnknownKind { listing: String, value: String },
    #[error("listing '{listing}': '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { listing: String, value: String },
    #[error("listing '{listing}': salary minimum {min} exceeds maximum {max}")]
    InvertedSalary { listing: String, min: u32, max: u32 },
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    title: String,
    company: String,
    location: String,
    #[serde(rename = "type")]
    kind: String,
    salary_min: u32,
    salary_max: u32,
    #[serde(default = "default_currency")]
    currency: String,
    description: String,
    #[serde(default)]
    requirements: String,
    #[serde(default)]
    benefits: String,
    category: String,
    posted_date: String,
    deadline: String,
    experience: String,
    #[serde(default)]
    remote: bool,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    applicants: u32,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_date(listing: &str, raw: &str) -> Result<NaiveDate, CatalogImportError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CatalogImportError::InvalidDate {
        listing: listing.to_string(),
        value: raw.to_string(),
    })
}

impl ListingRow {
    fn into_listing(self) -> Result<JobListing, CatalogImportError> {
        let kind =
            EmploymentKind::parse(&self.kind).ok_or_else(|| CatalogImportError::UnknownKind {
                listing: self.id.clone(),
                value: self.kind.clone(),
            })?;

        if self.salary_min > self.salary_max {
            return Err(CatalogImportError::InvertedSalary {
                listing: self.id,
                min: self.salary_min,
                max: self.salary_max,
            });
        }

        let posted_date = parse_date(&self.id, &self.posted_date)?;
        let deadline = parse_date(&self.id, &self.deadline)?;

        Ok(JobListing {
            id: ListingId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            kind,
            salary: SalaryRange::new(self.salary_min, self.salary_max, self.currency),
            description: self.description,
            requirements: split_list(&self.requirements),
            benefits: split_list(&self.benefits),
            category: self.category,
            posted_date,
            deadline,
            experience: self.experience,
            remote: self.remote,
            featured: self.featured,
            applicants: self.applicants,
        })
    }
}

pub struct CsvCatalogImporter;

impl CsvCatalogImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobListing>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut listings = Vec::new();
        for record in csv_reader.deserialize::<ListingRow>() {
            listings.push(record?.into_listing()?);
        }

        Ok(listings)
    }

    pub fn from_path(path: &Path) -> Result<Vec<JobListing>, CatalogImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}
