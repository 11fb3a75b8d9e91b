pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod session;
pub mod telemetry;
pub mod validation;
pub mod views;

pub use api::{FetchError, HttpJobSource, JobSource};
pub use config::{load_config, load_config_or_default, ClientConfig};
pub use error::{ConfigError, JobFinderError, Result};
pub use model::{ApplicationForm, Job, JobRecord};
pub use repository::{IdStrategy, JobRepository, JobSnapshot, RefreshError, RefreshOutcome};
pub use session::{JobSession, SessionSnapshot};
pub use telemetry::{init_logging, TelemetryError};
pub use validation::{validate_application, FormErrors};
pub use views::{filter_jobs, ApplyOutcome, JobViewManager, SaveOutcome};
