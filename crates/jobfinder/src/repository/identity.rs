//! Local identity assignment for fetched job records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Job, JobRecord};

/// Namespace for content-derived job ids.
const JOB_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6a0b_5c1e_93f4_4d2a_b8e1_52f7_c0d9_a313);

/// How the repository assigns ids on refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Fresh random id per job per refresh. Ids are refresh-scoped: a saved
    /// job or application recorded before a refresh no longer matches the
    /// new collection.
    #[default]
    Random,
    /// Id derived from stable remote fields, so the same posting keeps its
    /// id across refreshes.
    Content,
}

/// Tags every record with an id unique within the returned collection.
pub fn assign_ids(records: Vec<JobRecord>, strategy: IdStrategy) -> Vec<Job> {
    let mut seen = HashSet::with_capacity(records.len());

    records
        .into_iter()
        .map(|record| {
            let id = match strategy {
                IdStrategy::Random => random_id(&seen),
                IdStrategy::Content => content_id(&record, &seen),
            };
            seen.insert(id.clone());
            record.into_job(id)
        })
        .collect()
}

fn random_id(seen: &HashSet<String>) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !seen.contains(&id) {
            return id;
        }
    }
}

/// Identical postings in one collection get an ordinal folded into the key.
fn content_id(record: &JobRecord, seen: &HashSet<String>) -> String {
    let key = content_key(record);
    let mut ordinal = 0usize;
    loop {
        let name = if ordinal == 0 {
            key.clone()
        } else {
            format!("{}#{}", key, ordinal)
        };
        let id = Uuid::new_v5(&JOB_ID_NAMESPACE, name.as_bytes()).to_string();
        if !seen.contains(&id) {
            return id;
        }
        ordinal += 1;
    }
}

fn content_key(record: &JobRecord) -> String {
    format!(
        "{}|{}|{}|{}",
        record.title.trim().to_lowercase(),
        record.company_name.trim().to_lowercase(),
        record.pub_date.as_deref().unwrap_or_default().trim(),
        record.locations.join(",").to_lowercase(),
    )
}
