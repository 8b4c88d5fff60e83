use ferrous_pdns_domain::{RdataQuery, RdataSummary, RrsetSummary, StoredRow, ValueSet};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// One maximal run of adjacent observations sharing a value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRun<K> {
    pub first_seen: K,
    pub last_seen: K,
    pub count: u64,
    pub values: ValueSet,
}

impl<K: Ord> SummaryRun<K> {
    fn start(key: K, values: ValueSet) -> Self
    where
        K: Clone,
    {
        Self {
            first_seen: key.clone(),
            last_seen: key,
            count: 1,
            values,
        }
    }

    fn extend(&mut self, key: K)
    where
        K: Clone,
    {
        if key < self.first_seen {
            self.first_seen = key.clone();
        }
        if key > self.last_seen {
            self.last_seen = key;
        }
        self.count += 1;
    }
}

/// Collapses `(key, value set)` pairs, already sorted by value set, into
/// runs. The last run is always closed, so any non-empty input yields at
/// least one run.
pub fn merge_runs<K, I>(sorted: I) -> Vec<SummaryRun<K>>
where
    K: Ord + Clone,
    I: IntoIterator<Item = (K, ValueSet)>,
{
    let mut runs = Vec::new();
    let mut current: Option<SummaryRun<K>> = None;

    for (key, values) in sorted {
        if let Some(run) = current
            .as_mut()
            .filter(|run| run.values.cmp(&values) == Ordering::Equal)
        {
            run.extend(key);
            continue;
        }
        if let Some(closed) = current.replace(SummaryRun::start(key, values)) {
            runs.push(closed);
        }
    }

    runs.extend(current);
    runs
}

/// Builds first-seen / last-seen / count summaries from projected rows.
/// Holds no state; every call allocates its own working set.
pub struct TemporalAggregator;

impl TemporalAggregator {
    /// Groups rows by owner name and summarizes the timestamps of each name.
    /// Names are reported in ascending order and never merged with each
    /// other.
    pub fn summarize_by_name(rows: &[StoredRow], query: &RdataQuery) -> Vec<RdataSummary> {
        let mut partitions: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for row in rows {
            partitions
                .entry(row.rrname.as_str())
                .or_default()
                .push(row.timestamp.as_str());
        }

        partitions
            .into_iter()
            .filter_map(|(rrname, mut timestamps)| {
                timestamps.sort_unstable();
                let first_seen = timestamps.first()?;
                let last_seen = timestamps.last()?;
                Some(RdataSummary {
                    rdata: query.rdata.clone(),
                    rrname: rrname.to_string(),
                    rrtype: query.rrtype.clone(),
                    first_seen: first_seen.to_string(),
                    last_seen: last_seen.to_string(),
                    count: timestamps.len() as u64,
                })
            })
            .collect()
    }

    /// Groups rows by timestamp into value sets, sorts the sets and merges
    /// adjacent equal sets. Equal sets are ordered by timestamp.
    pub fn summarize_by_timestamp(
        rows: &[StoredRow],
        rrname: &str,
        rrtype: &str,
    ) -> Vec<RrsetSummary> {
        let mut partitions: HashMap<&str, Vec<String>> = HashMap::new();
        for row in rows {
            partitions
                .entry(row.timestamp.as_str())
                .or_default()
                .push(row.rdata.clone());
        }

        let mut observations: Vec<(&str, ValueSet)> = partitions
            .into_iter()
            .map(|(timestamp, values)| (timestamp, ValueSet::from_unsorted(values)))
            .collect();
        observations.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        merge_runs(observations)
            .into_iter()
            .map(|run| RrsetSummary {
                rrname: rrname.to_string(),
                rrtype: rrtype.to_string(),
                first_seen: run.first_seen.to_string(),
                last_seen: run.last_seen.to_string(),
                count: run.count,
                rdata: run.values,
            })
            .collect()
    }
}
