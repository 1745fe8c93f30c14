//! Member vote summary presentation.

use geovote_types::{MemberVoteSummary, VoteType};
use serde::Serialize;
use std::collections::HashSet;

pub const EMPTY_SUMMARY: &str = "데이터가 없습니다.";
pub const KEYWORD_PROMPT: &str = "📢 이 키워드의 법안이 궁금하다면? ☝️ Click!";

/// Icon and caption for the card of each vote type.
pub fn vote_type_caption(vote_type: VoteType) -> (&'static str, &'static str) {
    match vote_type {
        VoteType::Agree => ("⭕️", "이런 법안을 지지해요!"),
        VoteType::Oppose => ("❌", "이런 법안은 지지하지 않아요"),
        VoteType::Abstain => ("🚫", "이런 법안에는 기권이 많아요"),
        VoteType::Absent => ("😭", "이런 법안에는 불참이 많아요"),
    }
}

pub fn card_news_link(cluster_id: Option<i64>) -> Option<String> {
    cluster_id.map(|id| format!("/cardnews/cluster/{}/", id))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentHeader {
    pub party: String,
    pub alignment_rate: String,
    pub deviation_rate: String,
}

impl AlignmentHeader {
    pub fn title(&self) -> String {
        format!("{}과의 표결 일치율 💡", self.party)
    }

    pub fn deviation_text(&self) -> String {
        format!("이탈 지수: {}", self.deviation_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub vote_type: VoteType,
    pub icon: &'static str,
    pub caption: &'static str,
    pub keywords: Vec<String>,
    pub cluster_id: Option<i64>,
    pub link: Option<String>,
    /// `(label, "{:.1}%")` in 찬성/반대/기권/불참 order.
    pub ratios: Vec<(&'static str, String)>,
    pub bill_count: u64,
}

impl SummaryCard {
    pub fn bill_count_text(&self) -> String {
        format!("법안 수: {}", self.bill_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub header: Option<AlignmentHeader>,
    pub cards: Vec<SummaryCard>,
}

impl SummaryView {
    /// Build the popup body. A cluster that is the top cluster for more
    /// than one vote type is shown once, under the first vote type.
    pub fn build(summary: &MemberVoteSummary) -> Self {
        let header = match (&summary.party, summary.alignment_rate) {
            (Some(party), Some(alignment)) => Some(AlignmentHeader {
                party: party.clone(),
                alignment_rate: format!("{:.1}%", alignment),
                deviation_rate: format!("{:.1}%", summary.deviation_rate.unwrap_or(0.0)),
            }),
            _ => None,
        };

        let mut seen = HashSet::new();
        let mut cards = Vec::new();
        for vote_type in VoteType::ALL {
            let Some(cluster) = summary.per_vote_type.get(&vote_type) else {
                continue;
            };
            if !seen.insert(cluster.raw_keyword.as_str()) {
                continue;
            }

            let (icon, caption) = vote_type_caption(vote_type);
            cards.push(SummaryCard {
                vote_type,
                icon,
                caption,
                keywords: cluster.cluster_keywords.clone(),
                cluster_id: cluster.cluster_id,
                link: card_news_link(cluster.cluster_id),
                ratios: VoteType::ALL
                    .iter()
                    .map(|t| (t.label(), format!("{:.1}%", cluster.ratio(*t))))
                    .collect(),
                bill_count: cluster.bill_count,
            });
        }

        Self { header, cards }
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.cards.is_empty()
    }

    /// Plain-text rendering used by the console and the popup body.
    pub fn to_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![EMPTY_SUMMARY.to_string()];
        }

        let mut lines = Vec::new();
        if let Some(header) = &self.header {
            lines.push(header.title());
            lines.push(format!("  {}", header.alignment_rate));
            lines.push(format!("  {}", header.deviation_text()));
            lines.push(String::new());
        }
        for card in &self.cards {
            lines.push(format!("{} {}", card.icon, card.caption));
            if !card.keywords.is_empty() {
                let tags: Vec<String> = card.keywords.iter().map(|k| format!("#{}", k)).collect();
                lines.push(format!("  {}", tags.join(" ")));
            }
            if let Some(link) = &card.link {
                lines.push(format!("  {} {}", KEYWORD_PROMPT, link));
            }
            let ratios: Vec<String> = card
                .ratios
                .iter()
                .map(|(label, value)| format!("{} {}", label, value))
                .collect();
            lines.push(format!("  {}", ratios.join(" | ")));
            lines.push(format!("  {}", card.bill_count_text()));
            lines.push(String::new());
        }
        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }
}
