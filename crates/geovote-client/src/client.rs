//! Async client for the read-only geovote JSON API.

use std::time::Duration;

use geovote_types::{
    ClusterChartData, MemberAlignment, MemberVoteSummary, RegionNode, WireVoteSummary,
};
use serde::de::DeserializeOwned;

use crate::config::{Config, TreeSource};
use crate::{ClientError, Result};

const MEMBER_VOTE_SUMMARY_PATH: &str = "/geovote/api/member-vote-summary/";
const MEMBER_ALIGNMENT_PATH: &str = "/geovote/api/member-alignment/";
const CLUSTER_CHART_PATH: &str = "/api/cluster_chart";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tree_source: TreeSource,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tree_source: TreeSource::default(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut client = Self::new(&config.base_url, config.request_timeout())?;
        client.tree_source = config.tree_source;
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })
    }

    pub async fn fetch_treemap_data(&self, age: u32) -> Result<RegionNode> {
        self.fetch_tree_from(TreeSource::TreemapData, age).await
    }

    /// Legacy tree endpoint; same payload as `treemap-data`.
    pub async fn fetch_region_tree(&self, age: u32) -> Result<RegionNode> {
        self.fetch_tree_from(TreeSource::RegionTree, age).await
    }

    /// Tree from whichever endpoint the configuration selects.
    pub async fn fetch_tree(&self, age: u32) -> Result<RegionNode> {
        self.fetch_tree_from(self.tree_source, age).await
    }

    async fn fetch_tree_from(&self, source: TreeSource, age: u32) -> Result<RegionNode> {
        self.get_json(source.path(), &[("age", age.to_string())])
            .await
    }

    pub async fn fetch_member_vote_summary(&self, member_name: &str) -> Result<MemberVoteSummary> {
        let wire: WireVoteSummary = self
            .get_json(
                MEMBER_VOTE_SUMMARY_PATH,
                &[("member_name", member_name.to_string())],
            )
            .await?;
        Ok(MemberVoteSummary::from_wire(member_name, wire))
    }

    pub async fn fetch_member_alignment(&self, member_name: &str, age: u32) -> Result<MemberAlignment> {
        self.get_json(
            MEMBER_ALIGNMENT_PATH,
            &[
                ("member_name", member_name.to_string()),
                ("congress_num", age.to_string()),
            ],
        )
        .await
    }

    /// Vote summary with party alignment merged in.
    ///
    /// Only the summary request can fail the call; a failed alignment
    /// request is logged and the summary is returned without it.
    pub async fn fetch_member_summary(&self, member_name: &str, age: u32) -> Result<MemberVoteSummary> {
        let (summary, alignment) = tokio::join!(
            self.fetch_member_vote_summary(member_name),
            self.fetch_member_alignment(member_name, age),
        );

        let mut summary = summary?;
        match alignment {
            Ok(alignment) => summary.merge_alignment(alignment),
            Err(err) => {
                tracing::warn!(member = member_name, error = %err, "alignment unavailable");
            }
        }
        Ok(summary)
    }

    pub async fn fetch_cluster_chart(
        &self,
        age: u32,
        cluster: i64,
        party: &str,
        stance: &str,
    ) -> Result<ClusterChartData> {
        self.get_json(
            CLUSTER_CHART_PATH,
            &[
                ("age_num", age.to_string()),
                ("cluster_num", cluster.to_string()),
                ("party", party.to_string()),
                ("stance", stance.to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url(TreeSource::TreemapData.path()),
            "http://localhost:8000/geovote/api/treemap-data/"
        );
    }

    #[test]
    fn test_from_config_keeps_tree_source() {
        let config = Config {
            tree_source: TreeSource::RegionTree,
            ..Config::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.tree_source, TreeSource::RegionTree);
    }
}
