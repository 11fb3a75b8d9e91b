//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use jobfinder::{ApplicationForm, JobRecord};

/// Builder for creating `JobRecord` instances.
pub struct JobRecordBuilder {
    record: JobRecord,
}

impl JobRecordBuilder {
    /// Create a new builder with sensible defaults for testing.
    pub fn new(title: &str) -> Self {
        Self {
            record: JobRecord {
                title: title.to_string(),
                company_name: "Acme".to_string(),
                company_logo: None,
                job_type: "Full-time".to_string(),
                work_model: "Remote".to_string(),
                seniority_level: "Mid".to_string(),
                min_salary: None,
                max_salary: None,
                locations: vec!["Remote".to_string()],
                main_category: None,
                tags: Vec::new(),
                pub_date: Some("2026-10-01".to_string()),
                application_link: None,
                description: None,
            },
        }
    }

    pub fn company(mut self, company: &str) -> Self {
        self.record.company_name = company.to_string();
        self
    }

    pub fn locations(mut self, locations: &[&str]) -> Self {
        self.record.locations = locations.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn salary(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.record.min_salary = min;
        self.record.max_salary = max;
        self
    }

    pub fn pub_date(mut self, date: &str) -> Self {
        self.record.pub_date = Some(date.to_string());
        self
    }

    pub fn build(self) -> JobRecord {
        self.record
    }
}

/// Builder for creating `ApplicationForm` instances that pass validation.
pub struct FormBuilder {
    form: ApplicationForm,
}

impl FormBuilder {
    pub fn new(job_id: &str) -> Self {
        Self {
            form: ApplicationForm {
                name: "Jane Cruz".to_string(),
                email: "jane@example.com".to_string(),
                contact_number: "09171234567".to_string(),
                why_hire_you: "I have shipped three hiring platforms.".to_string(),
                job_id: job_id.to_string(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.form.name = name.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.form.email = email.to_string();
        self
    }

    pub fn contact_number(mut self, number: &str) -> Self {
        self.form.contact_number = number.to_string();
        self
    }

    pub fn why_hire_you(mut self, text: &str) -> Self {
        self.form.why_hire_you = text.to_string();
        self
    }

    pub fn build(self) -> ApplicationForm {
        self.form
    }
}

/// The three-job collection most tests start from.
pub fn sample_records() -> Vec<JobRecord> {
    vec![
        JobRecordBuilder::new("Backend Engineer")
            .company("Acme")
            .locations(&["Remote"])
            .salary(Some(80000.0), Some(120000.0))
            .build(),
        JobRecordBuilder::new("Frontend Developer")
            .company("Globex")
            .locations(&["Berlin", "Munich"])
            .build(),
        JobRecordBuilder::new("Data Analyst")
            .company("Initech")
            .locations(&["Manila"])
            .salary(None, Some(60000.0))
            .build(),
    ]
}
