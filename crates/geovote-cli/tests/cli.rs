use assert_cmd::Command;
use geovote_testing::TestWorld;
use predicates::prelude::*;

/// Nothing listens on the discard port, so every request fails fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[allow(deprecated)]
fn geovote() -> Command {
    Command::cargo_bin("geovote").unwrap()
}

#[test]
fn test_help_lists_commands() {
    geovote()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("member"))
        .stdout(predicate::str::contains("cluster-chart"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_member_help_shows_formats() {
    geovote()
        .args(["member", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plain"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_dashboard_prints_every_section() {
    let world = TestWorld::new();
    let file = world.dashboard_file().unwrap();
    let result = world
        .run(&["dashboard", "--file", file.to_str().unwrap()])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    let order = [
        "제22대 국회 표결 통계",
        "정당별 표결 구성",
        "클러스터 3: 세금, 주택",
        "정당 집중도",
        "유효 정당 수",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| {
            stdout
                .find(needle)
                .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, stdout))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", stdout);

    assert!(stdout.contains("총 8개 정당 중 3.2개 (40.0%)"), "{}", stdout);
    assert!(stdout.contains("총 0개 정당 중 2.2개 (0.0%)"), "{}", stdout);
}

#[test]
fn test_dashboard_unknown_cluster() {
    let world = TestWorld::new();
    let file = world.dashboard_file().unwrap();
    let result = world
        .run(&["dashboard", "--file", file.to_str().unwrap(), "--cluster", "99"])
        .unwrap();

    assert!(result.success());
    assert!(
        result
            .stdout()
            .contains("선택한 클러스터에 대한 데이터가 없습니다."),
        "{}",
        result.stdout()
    );
}

#[test]
fn test_dashboard_switches_through_clusters() {
    let world = TestWorld::new();
    let file = world.dashboard_file().unwrap();
    let result = world
        .run(&[
            "dashboard", "--file", file.to_str().unwrap(), "--cluster", "7", "--cluster", "99",
            "--cluster", "3",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    let seven = stdout.find("클러스터 7: 국방, 병역").unwrap();
    let missing = stdout.find("선택한 클러스터에 대한 데이터가 없습니다.").unwrap();
    let three = stdout.find("클러스터 3: 세금, 주택").unwrap();
    assert!(seven < missing && missing < three, "{}", stdout);
}

#[test]
fn test_dashboard_missing_file_fails() {
    let world = TestWorld::new();
    let result = world.run(&["dashboard", "--file", "nope.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error:"), "{}", result.stderr());
    assert!(result.stderr().contains("nope.json"), "{}", result.stderr());
}

#[test]
fn test_member_fetch_failure_is_a_notice() {
    let world = TestWorld::new().with_base_url(UNREACHABLE);
    let result = world.run(&["member", "홍길동"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout().trim(), "표결 정보를 가져오지 못했습니다.");
}

#[test]
fn test_cluster_chart_fetch_failure_is_a_notice() {
    let world = TestWorld::new().with_base_url(UNREACHABLE);
    let result = world
        .run(&[
            "cluster-chart", "--age", "22", "--cluster", "3", "--party", "당A", "--stance",
            "찬성",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("차트 데이터를 불러오지 못했습니다."));
}

#[test]
fn test_config_init_then_show() {
    let world = TestWorld::new();

    let init = world.run(&["config", "init"]).unwrap();
    assert!(init.success(), "stderr: {}", init.stderr());
    assert!(world.config_path().exists());

    let again = world.run(&["config", "init"]).unwrap();
    assert!(!again.success());
    assert!(again.stderr().contains("--force"), "{}", again.stderr());

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());

    let show = world.run(&["config", "show"]).unwrap();
    assert!(show.success());
    assert!(show.stdout().contains("base_url = \"http://127.0.0.1:8000\""), "{}", show.stdout());
    assert!(show.stdout().contains("tree_source = \"treemap-data\""), "{}", show.stdout());
}

#[test]
fn test_explicit_config_file() {
    let world = TestWorld::new();
    let path = world.temp_dir().join("custom.toml");
    std::fs::write(&path, "default_age = 21\n").unwrap();

    let result = world
        .run(&["--config", path.to_str().unwrap(), "config", "show"])
        .unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("default_age = 21"), "{}", result.stdout());
}

#[test]
fn test_invalid_config_fails() {
    let world = TestWorld::new();
    world.write_raw_config("base_url = \"ftp://example.com\"\n").unwrap();

    let result = world.run(&["config", "show"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Error:"), "{}", result.stderr());
    assert!(result.stderr().contains("base_url"), "{}", result.stderr());
}

#[test]
fn test_base_url_override_is_validated() {
    let world = TestWorld::new();
    let result = world
        .run(&["--base-url", "localhost:8000", "member", "홍길동"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("base_url"), "{}", result.stderr());
}

#[test]
fn test_browse_requires_a_terminal() {
    let world = TestWorld::new().with_base_url(UNREACHABLE);
    let result = world.run(&["browse"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"), "{}", result.stderr());
}
