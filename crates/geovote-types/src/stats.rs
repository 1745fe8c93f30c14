use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::chart::ChartSeries;
use crate::error::Result;
use crate::vote::VoteType;

/// Party vote shares inside one bill cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPartyStats {
    pub cluster_num: i64,
    #[serde(default)]
    pub cluster_keywords: String,
    /// party -> vote type -> percentage
    #[serde(default)]
    pub party_stats: BTreeMap<String, BTreeMap<VoteType, f64>>,
}

/// Party concentration indices per legislative term.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConcentrationSeries {
    #[serde(default)]
    pub age: Vec<String>,
    /// Herfindahl-Hirschman index, in [0, 1]
    #[serde(default)]
    pub hhi: Vec<f64>,
    /// Effective number of parties
    #[serde(default)]
    pub enp: Vec<f64>,
    /// Seat share of the two largest parties, in [0, 100]
    #[serde(default)]
    pub top2_ratio: Vec<f64>,
    #[serde(default)]
    pub total_parties: Vec<u32>,
}

impl ConcentrationSeries {
    /// Number of terms for which every column has a value.
    pub fn len(&self) -> usize {
        [
            self.age.len(),
            self.hhi.len(),
            self.enp.len(),
            self.top2_ratio.len(),
            self.total_parties.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Precomputed statistics backing the dashboard page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub congress_num: Option<u32>,
    /// Overall vote composition, one series per party.
    #[serde(default)]
    pub series: Vec<ChartSeries>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub party_colors: Vec<String>,
    #[serde(default)]
    pub party_names: Vec<String>,
    /// Keyed by an opaque identifier; `cluster_num` inside is authoritative.
    #[serde(default)]
    pub cluster_vote_data: BTreeMap<String, ClusterPartyStats>,
    #[serde(default)]
    pub timeseries: ConcentrationSeries,
}

impl DashboardStats {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn cluster(&self, cluster_num: i64) -> Option<&ClusterPartyStats> {
        self.cluster_vote_data
            .values()
            .find(|c| c.cluster_num == cluster_num)
    }

    /// Cluster numbers in ascending order.
    pub fn cluster_nums(&self) -> Vec<i64> {
        let mut nums: Vec<i64> = self
            .cluster_vote_data
            .values()
            .map(|c| c.cluster_num)
            .collect();
        nums.sort_unstable();
        nums.dedup();
        nums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "congress_num": 22,
        "series": [{"name": "당A", "data": [70, 20, 5, 5]}],
        "categories": ["당A"],
        "party_colors": ["#1f77b4"],
        "party_names": ["당A"],
        "cluster_vote_data": {
            "0": {"cluster_num": 30, "cluster_keywords": "세금, 주택",
                  "party_stats": {"당A": {"찬성": 60, "반대": 30, "기권": 5, "불참": 5}}},
            "1": {"cluster_num": 29, "cluster_keywords": "교육"}
        },
        "timeseries": {"age": ["20대", "21대"], "hhi": [0.41, 0.45],
                       "enp": [2.9, 2.1], "top2_ratio": [80.0, 93.0],
                       "total_parties": [8]}
    }"##;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let stats = DashboardStats::from_path(file.path()).unwrap();
        assert_eq!(stats.congress_num, Some(22));
        assert_eq!(stats.party_colors, vec!["#1f77b4"]);
        assert_eq!(stats.cluster_nums(), vec![29, 30]);
        let cluster = stats.cluster(30).unwrap();
        assert_eq!(cluster.party_stats["당A"][&VoteType::Oppose], 30.0);
        assert!(stats.cluster(1).is_none());
    }

    #[test]
    fn test_ragged_timeseries_is_truncated() {
        let stats = DashboardStats::from_json(SAMPLE).unwrap();
        assert_eq!(stats.timeseries.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(DashboardStats::from_json("{not json").is_err());
    }
}
