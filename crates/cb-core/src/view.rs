use std::collections::HashMap;

use crate::country::CountryRecord;

/// Label of the single bucket used when no group-by field is set.
pub const ALL_BUCKET: &str = "All";

/// Label of the bucket for records lacking a value for the group-by field.
pub const OTHER_BUCKET: &str = "Other";

/// A named group of records sharing one group-by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    /// Group label shown above the table.
    pub label: String,
    /// Records in original order.
    pub records: Vec<&'a CountryRecord>,
}

/// Filtered and grouped records, buckets in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedView<'a> {
    buckets: Vec<Bucket<'a>>,
}

impl<'a> GroupedView<'a> {
    /// Buckets in display order.
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if there are no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Find a bucket by label.
    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&Bucket<'a>> {
        self.buckets.iter().find(|b| b.label == label)
    }

    /// Total number of records across all buckets.
    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|b| b.records.len()).sum()
    }

    /// Iterate every record in display order.
    pub fn records(&self) -> impl Iterator<Item = &'a CountryRecord> + '_ {
        self.buckets.iter().flat_map(|b| b.records.iter().copied())
    }

    /// Compact one-line form: `EUR: France, Germany | Other: Antarctica`.
    pub fn outline(&self) -> String {
        self.buckets
            .iter()
            .map(|b| {
                let names: Vec<&str> = b.records.iter().map(|r| r.name.as_str()).collect();
                format!("{}: {}", b.label, names.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Returns true if a record passes the search filter.
///
/// The record name is lower-cased; the term is compared as typed.
pub fn matches_search(record: &CountryRecord, search_term: &str) -> bool {
    search_term.is_empty() || record.name.to_lowercase().contains(search_term)
}

/// Filter `records` by `search_term`, then group them by `group_by`.
///
/// With an empty `group_by` the result is exactly one `All` bucket, even when
/// nothing matched. Otherwise buckets appear in first-seen order and records
/// without a value for the field land in `Other`.
pub fn derive_view<'a>(
    records: &'a [CountryRecord],
    search_term: &str,
    group_by: &str,
) -> GroupedView<'a> {
    let retained = records.iter().filter(|r| matches_search(r, search_term));

    if group_by.is_empty() {
        return GroupedView {
            buckets: vec![Bucket {
                label: ALL_BUCKET.to_string(),
                records: retained.collect(),
            }],
        };
    }

    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in retained {
        let key = record
            .field(group_by)
            .unwrap_or_else(|| OTHER_BUCKET.to_string());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push(Bucket {
                label: key,
                records: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].records.push(record);
    }

    GroupedView { buckets }
}
