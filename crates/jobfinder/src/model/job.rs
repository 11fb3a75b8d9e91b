//! Job postings as delivered by the remote source and as held locally.

use serde::{Deserialize, Deserializer, Serialize};

/// A job posting exactly as the remote source returns it.
///
/// The source makes no promise about stable or unique identifiers, so the
/// record carries none; identity is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub work_model: String,
    #[serde(default)]
    pub seniority_level: String,
    /// Absent means "not disclosed", not an error.
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl JobRecord {
    /// Attaches a locally assigned identity.
    pub fn into_job(self, id: String) -> Job {
        Job {
            id,
            title: self.title,
            company_name: self.company_name,
            company_logo: self.company_logo,
            job_type: self.job_type,
            work_model: self.work_model,
            seniority_level: self.seniority_level,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            locations: self.locations,
            main_category: self.main_category,
            tags: self.tags,
            pub_date: self.pub_date,
            application_link: self.application_link,
            description: self.description,
        }
    }
}

/// A job posting with its local identity. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub work_model: String,
    #[serde(default)]
    pub seniority_level: String,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Job {
    /// Locations joined for display, e.g. "Remote, Berlin".
    pub fn location_label(&self) -> String {
        self.locations.join(", ")
    }

    /// Human-readable salary range, or `None` when the employer disclosed neither bound.
    pub fn salary_range(&self) -> Option<String> {
        match (self.min_salary, self.max_salary) {
            (Some(min), Some(max)) if min == max => Some(format_amount(min)),
            (Some(min), Some(max)) => Some(format!(
                "{} - {}",
                format_amount(min),
                format_amount(max)
            )),
            (Some(min), None) => Some(format!("From {}", format_amount(min))),
            (None, Some(max)) => Some(format!("Up to {}", format_amount(max))),
            (None, None) => None,
        }
    }
}

/// Formats a salary amount as whole dollars with thousands separators.
fn format_amount(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// The source sends `locations` either as a single string or as a list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(Option<()>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(location) => vec![location],
        OneOrMany::Many(locations) => locations,
        OneOrMany::Null(_) => Vec::new(),
    })
}
