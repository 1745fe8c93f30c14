use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Roll-call outcome of a single member on a single bill.
///
/// Declaration order is the display order used everywhere (찬성, 반대, 기권, 불참).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VoteType {
    #[serde(rename = "찬성")]
    Agree,
    #[serde(rename = "반대")]
    Oppose,
    #[serde(rename = "기권")]
    Abstain,
    #[serde(rename = "불참")]
    Absent,
}

impl VoteType {
    pub const ALL: [VoteType; 4] = [
        VoteType::Agree,
        VoteType::Oppose,
        VoteType::Abstain,
        VoteType::Absent,
    ];

    /// Korean label as used on the wire and in chart categories.
    pub fn label(&self) -> &'static str {
        match self {
            VoteType::Agree => "찬성",
            VoteType::Oppose => "반대",
            VoteType::Abstain => "기권",
            VoteType::Absent => "불참",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }
}

pub type VoteRatios = BTreeMap<VoteType, f64>;

/// One entry of the `member-vote-summary` response as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireClusterEntry {
    #[serde(default, alias = "cluster_id")]
    pub cluster: Option<i64>,
    #[serde(default)]
    pub cluster_keyword: String,
    #[serde(default)]
    pub counts: BTreeMap<VoteType, u64>,
    #[serde(default)]
    pub ratios: VoteRatios,
    #[serde(default)]
    pub bill_count: u64,
}

/// Raw `member-vote-summary` payload: vote type -> the cluster where that
/// vote type was most frequent.
pub type WireVoteSummary = BTreeMap<VoteType, WireClusterEntry>;

/// `member-alignment` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberAlignment {
    pub party: String,
    pub alignment_rate: f64,
    pub deviation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteTypeCluster {
    pub cluster_id: Option<i64>,
    /// Keyword text exactly as received; used to skip repeated clusters.
    pub raw_keyword: String,
    pub cluster_keywords: Vec<String>,
    pub ratios: VoteRatios,
    pub counts: BTreeMap<VoteType, u64>,
    pub bill_count: u64,
}

impl VoteTypeCluster {
    pub fn ratio(&self, vote_type: VoteType) -> f64 {
        self.ratios.get(&vote_type).copied().unwrap_or(0.0)
    }
}

impl From<WireClusterEntry> for VoteTypeCluster {
    fn from(entry: WireClusterEntry) -> Self {
        Self {
            cluster_id: entry.cluster,
            cluster_keywords: parse_cluster_keywords(&entry.cluster_keyword),
            raw_keyword: entry.cluster_keyword,
            ratios: entry.ratios,
            counts: entry.counts,
            bill_count: entry.bill_count,
        }
    }
}

/// Per-member voting summary shown in the member popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberVoteSummary {
    pub member_name: String,
    pub party: Option<String>,
    pub alignment_rate: Option<f64>,
    pub deviation_rate: Option<f64>,
    pub per_vote_type: BTreeMap<VoteType, VoteTypeCluster>,
}

impl MemberVoteSummary {
    pub fn from_wire(member_name: impl Into<String>, wire: WireVoteSummary) -> Self {
        Self {
            member_name: member_name.into(),
            party: None,
            alignment_rate: None,
            deviation_rate: None,
            per_vote_type: wire
                .into_iter()
                .map(|(vote_type, entry)| (vote_type, entry.into()))
                .collect(),
        }
    }

    pub fn merge_alignment(&mut self, alignment: MemberAlignment) {
        self.party = Some(alignment.party);
        self.alignment_rate = Some(alignment.alignment_rate);
        self.deviation_rate = Some(alignment.deviation_rate);
    }

    pub fn has_alignment(&self) -> bool {
        self.party.is_some() && self.alignment_rate.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.per_vote_type.is_empty() && !self.has_alignment()
    }
}

/// Parse the keyword text stored alongside a bill cluster.
///
/// Older rows hold a Python-style list literal (`['세금', '주택']`); newer
/// rows hold plain comma-separated text. A list literal that fails to
/// parse yields an empty list rather than an error.
pub fn parse_cluster_keywords(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(&trimmed.replace('\'', "\"")).unwrap_or_default();
    }
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
