//! Region label helpers.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Names that read fine on one line even though they end in 시/군/구.
static LINE_BREAK_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "종로구", "중구", "용산구", "성동구", "광진구", "동대문구", "중랑구", "성북구", "강북구",
        "도봉구", "노원구", "은평구", "서대문구", "마포구", "양천구", "강서구", "구로구", "금천구",
        "영등포구", "동작구", "관악구", "서초구", "강남구", "송파구", "강동구", "부산진구",
        "동래구", "남구", "북구", "해운대구", "사하구", "금정구", "연제구", "수영구", "사상구",
        "기장군", "달서구", "달성군", "군위군", "미추홀구", "연수구", "남동구", "부평구",
        "계양구", "서구", "강화군", "옹진군", "광산구", "유성구", "대덕구", "울주군", "세종시",
        "수원시", "용인시", "고양시", "화성시", "성남시", "부천시", "남양주시", "안산시", "평택시",
        "안양시", "시흥시", "파주시", "김포시", "의정부시", "광주시", "하남시", "광명시", "군포시",
        "양주시", "오산시", "이천시", "안성시", "구리시", "포천시", "양평군", "여주시",
        "동두천시", "양구군", "가평군", "연천군", "춘천시", "원주시", "강릉시", "동해시",
        "태백시", "속초시", "삼척시", "구례군", "홍천군", "횡성군", "영월군", "평창군", "정선군",
        "철원군", "화천군", "인제군", "고성군", "양양군", "청주시", "충주시", "제천시", "보은군",
        "옥천군", "영동군", "증평군", "진천군", "괴산군", "음성군", "단양군", "천안시", "공주시",
        "보령시", "아산시", "서산시", "논산시", "계룡시", "당진시", "금산군", "부여군", "서천군",
        "청양군", "홍성군", "예산군", "태안군", "전주시", "군산시", "익산시", "정읍시", "남원시",
        "김제시", "완주군", "진안군", "무주군", "장수군", "임실군", "순창군", "고창군", "부안군",
        "목포시", "여수시", "순천시", "나주시", "광양시", "담양군", "곡성군", "고흥군", "보성군",
        "화순군", "장흥군", "강진군", "해남군", "영암군", "무안군", "함평군", "영광군", "장성군",
        "완도군", "진도군", "신안군", "포항시", "경주시", "김천시", "안동시", "구미시", "영주시",
        "영천시", "상주시", "문경시", "경산시", "의성군", "청송군", "영양군", "영덕군", "청도군",
        "고령군", "성주군", "칠곡군", "예천군", "봉화군", "울진군", "울릉군", "창원시", "진주시",
        "통영시", "사천시", "김해시", "밀양시", "거제시", "양산시", "의령군", "함안군", "창녕군",
        "남해군", "하동군", "산청군", "함양군", "거창군", "합천군", "제주시", "서귀포시", "동구",
        "군위",
    ]
    .into_iter()
    .collect()
});

static ADMIN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\S)(시|군|구)$").unwrap());

static PAREN_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Short form of a region name: the first whitespace-delimited token.
///
/// Compound labels such as `"강남구 (지역1 - 당A)"` collapse to `"강남구"`.
pub fn display_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Break a long name after its administrative suffix so it wraps inside
/// small treemap cells. Well-known short names are left untouched.
pub fn format_name_with_line_break(name: &str) -> String {
    if LINE_BREAK_EXCEPTIONS.contains(name) {
        return name.to_string();
    }
    ADMIN_SUFFIX.replace(name, "$1$2\n").into_owned()
}

/// Parsed form of a district label such as `"강남구갑\n(홍길동 - 당A)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictLabel {
    pub district_name: String,
    pub party: Option<String>,
}

impl DistrictLabel {
    pub fn parse(raw: &str) -> Self {
        let district_name = raw.split('(').next().unwrap_or(raw).trim().to_string();

        let party = PAREN_GROUP.captures(raw).and_then(|caps| {
            let inside = caps.get(1)?.as_str();
            let parts: Vec<&str> = inside.split(" - ").collect();
            match parts.as_slice() {
                [_, party] => Some(party.trim().to_string()),
                _ => None,
            }
        });

        Self {
            district_name,
            party,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_takes_first_token() {
        assert_eq!(display_name("강남구 (지역1 - 당A)"), "강남구");
        assert_eq!(display_name("강남구갑\n(홍길동 - 당A)"), "강남구갑");
        assert_eq!(display_name("서울"), "서울");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_line_break_after_suffix() {
        assert_eq!(format_name_with_line_break("청원구"), "청원구\n");
        assert_eq!(format_name_with_line_break("서울특별시"), "서울특별시\n");
        assert_eq!(format_name_with_line_break("강남구"), "강남구");
        assert_eq!(format_name_with_line_break("제주특별자치도"), "제주특별자치도");
    }

    #[test]
    fn test_single_character_name_is_not_split() {
        assert_eq!(format_name_with_line_break("구"), "구");
    }

    #[test]
    fn test_parse_district_label() {
        let label = DistrictLabel::parse("강남구갑\n(홍길동 - 당A)");
        assert_eq!(label.district_name, "강남구갑");
        assert_eq!(label.party.as_deref(), Some("당A"));
    }

    #[test]
    fn test_parse_vacant_district_label() {
        let label = DistrictLabel::parse("강남구을 (의원 없음)");
        assert_eq!(label.district_name, "강남구을");
        assert_eq!(label.party, None);
    }
}
