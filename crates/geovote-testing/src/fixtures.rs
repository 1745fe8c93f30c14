//! Sample data shared by engine, client and CLI tests.

use anyhow::Result;
use geovote_types::{MemberAlignment, MemberVoteSummary, RegionKind, RegionNode, WireVoteSummary};
use std::path::{Path, PathBuf};

/// `{서울 → [강남구 (지역1 - 당A)]}`: one province holding a single district.
pub fn seoul_tree() -> RegionNode {
    RegionNode::region(
        "root",
        RegionKind::Root,
        vec![RegionNode::region(
            "서울",
            RegionKind::Sido,
            vec![RegionNode::district(
                "강남구 (지역1 - 당A)",
                Some("지역1"),
                Some("#1f77b4"),
            )],
        )],
    )
}

/// Three-tier tree with a vacant seat, an empty city and a district
/// hanging directly off a province.
pub fn national_tree() -> RegionNode {
    RegionNode::region(
        "대한민국",
        RegionKind::Root,
        vec![
            RegionNode::region(
                "서울특별시",
                RegionKind::Sido,
                vec![
                    RegionNode::region(
                        "강남구",
                        RegionKind::Sigungu,
                        vec![
                            RegionNode::district("강남구갑\n(홍길동 - 당A)", Some("홍길동"), Some("#1f77b4")),
                            RegionNode::district("강남구을\n(김철수 - 당B)", Some("김철수"), Some("#d62728")),
                            RegionNode::district("강남구병 (의원 없음)", None, None),
                        ],
                    ),
                    RegionNode::region(
                        "종로구",
                        RegionKind::Sigungu,
                        vec![RegionNode::district("종로구\n(이영희 - 당B)", Some("이영희"), Some("#d62728"))],
                    ),
                    RegionNode::region("빈구", RegionKind::Sigungu, vec![]),
                    RegionNode::district("중구성동구갑\n(박민수 - 당A)", Some("박민수"), Some("#1f77b4")),
                ],
            ),
            RegionNode::region(
                "세종특별자치시",
                RegionKind::Sido,
                vec![RegionNode::district("세종시갑\n(최지우 - 당A)", Some("최지우"), Some("#1f77b4"))],
            ),
        ],
    )
}

pub const TREE_JSON: &str = r##"{
  "name": "대한민국",
  "type": "ROOT",
  "children": [
    {"name": "서울특별시", "type": "SIDO", "children": [
      {"name": "강남구", "type": "SIGUNGU", "children": [
        {"id": 1, "name": "강남구갑\n(홍길동 - 당A)", "type": "District", "value": 1,
         "member_name": "홍길동", "color": "#1f77b4", "image_url": null},
        {"id": 2, "name": "강남구을\n(김철수 - 당B)", "type": "District", "value": 1,
         "member_name": "김철수", "color": "#d62728", "image_url": null}
      ]}
    ]}
  ]
}"##;

pub const SUMMARY_JSON: &str = r#"{
  "찬성": {"cluster": 3, "cluster_keyword": "['세금', '주택']",
           "counts": {"찬성": 10, "반대": 0, "기권": 1, "불참": 1},
           "ratios": {"찬성": 83.33, "반대": 0.0, "기권": 8.33, "불참": 8.33},
           "bill_count": 12},
  "반대": {"cluster": 7, "cluster_keyword": "국방, 병역",
           "counts": {"찬성": 1, "반대": 3, "기권": 0, "불참": 0},
           "ratios": {"찬성": 25.0, "반대": 75.0, "기권": 0.0, "불참": 0.0},
           "bill_count": 4},
  "기권": {"cluster": 3, "cluster_keyword": "['세금', '주택']",
           "counts": {"찬성": 10, "반대": 0, "기권": 1, "불참": 1},
           "ratios": {"찬성": 83.33, "반대": 0.0, "기권": 8.33, "불참": 8.33},
           "bill_count": 12}
}"#;

pub const ALIGNMENT_JSON: &str = r#"{"party": "당A", "alignment_rate": 92.45, "deviation_rate": 7.55}"#;

pub const CLUSTER_CHART_JSON: &str = r#"{
  "categories": ["찬성", "반대", "기권", "불참"],
  "series": [
    {"name": "당A", "data": [60.0, 20.0, 10.0, 10.0]},
    {"name": "당B", "data": [30.0, 50.0, 5.0, 15.0]}
  ]
}"#;

pub const DASHBOARD_JSON: &str = r##"{
  "congress_num": 22,
  "series": [
    {"name": "당A", "data": [70, 20, 5, 5]},
    {"name": "당B", "data": [40, 30, 20, 10]}
  ],
  "categories": ["당A", "당B"],
  "party_colors": ["#1f77b4", "#d62728"],
  "party_names": ["당A", "당B"],
  "cluster_vote_data": {
    "0": {"cluster_num": 3, "cluster_keywords": "세금, 주택",
          "party_stats": {"당A": {"찬성": 60, "반대": 30, "기권": 5, "불참": 5},
                          "당B": {"찬성": 10, "반대": 80, "기권": 0, "불참": 10}}},
    "1": {"cluster_num": 7, "cluster_keywords": "국방, 병역",
          "party_stats": {"당A": {"찬성": 90, "반대": 0, "기권": 0, "불참": 10}}}
  },
  "timeseries": {
    "age": ["제20대", "제21대", "제22대"],
    "hhi": [0.31, 0.42, 0.45],
    "enp": [3.2, 2.4, 2.2],
    "top2_ratio": [74.3, 86.0, 89.6],
    "total_parties": [8, 10, 0]
  }
}"##;

pub fn sample_summary() -> MemberVoteSummary {
    let wire: WireVoteSummary =
        serde_json::from_str(SUMMARY_JSON).expect("sample summary must parse");
    MemberVoteSummary::from_wire("홍길동", wire)
}

pub fn sample_alignment() -> MemberAlignment {
    serde_json::from_str(ALIGNMENT_JSON).expect("sample alignment must parse")
}

/// Write the sample dashboard statistics into `dir`.
pub fn write_dashboard(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("stats.json");
    std::fs::write(&path, DASHBOARD_JSON)?;
    Ok(path)
}
