pub mod chart;
pub mod error;
pub mod region;
pub mod stats;
pub mod vote;

pub use chart::{ChartSeries, ClusterChartData};
pub use error::{Error, Result};
pub use region::{RegionKind, RegionNode};
pub use stats::{ClusterPartyStats, ConcentrationSeries, DashboardStats};
pub use vote::{
    MemberAlignment, MemberVoteSummary, VoteRatios, VoteType, VoteTypeCluster, WireVoteSummary,
    parse_cluster_keywords,
};
