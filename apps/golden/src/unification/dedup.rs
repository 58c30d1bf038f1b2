use std::collections::HashMap;

use crate::models::UnifiedWorkExperience;

/// Collapses entries sharing the same (company, title) key.
///
/// The surviving entry sits where the key first appeared and carries the
/// content of the key's last occurrence. Keys compare exactly.
pub fn dedup_work_experience(entries: Vec<UnifiedWorkExperience>) -> Vec<UnifiedWorkExperience> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut unique: Vec<UnifiedWorkExperience> = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = (entry.company_name.clone(), entry.job_title.clone());
        match index.get(&key) {
            Some(&slot) => unique[slot] = entry,
            None => {
                index.insert(key, unique.len());
                unique.push(entry);
            }
        }
    }

    unique
}
