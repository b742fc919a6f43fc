use assert_cmd::Command;
use holocron_testing::StubServer;
use holocron_testing::fixtures::film_records;
use predicates::prelude::*;
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// Catalog stub on its own runtime so the blocking CLI call can't starve it
struct Fixture {
    server: StubServer,
    temp_dir: TempDir,
    _runtime: Runtime,
}

impl Fixture {
    fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create runtime");
        let server = runtime
            .block_on(StubServer::catalog(&film_records()))
            .expect("Failed to start stub catalog");
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            server,
            temp_dir,
            _runtime: runtime,
        }
    }

    fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// `holocron` isolated from the user's config and environment
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("holocron").expect("Failed to find binary");
        cmd.arg("--config")
            .arg(self.config_path())
            .env_remove("HOLOCRON_API_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    fn command_with_api(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--api-url").arg(self.server.base_url());
        cmd
    }
}

#[test]
fn test_films_prints_catalog_in_order() {
    let fixture = Fixture::new();

    let output = fixture
        .command_with_api()
        .arg("films")
        .output()
        .expect("Failed to run films");

    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout).trim_end(), @r"
    1  A New Hope
    2  The Empire Strikes Back
    3  Return of the Jedi
    ");
    assert_eq!(fixture.server.requests(), vec!["/api/films"]);
}

#[test]
fn test_films_json() {
    let fixture = Fixture::new();

    let output = fixture
        .command_with_api()
        .args(["films", "--format", "json"])
        .output()
        .expect("Failed to run films");

    assert!(output.status.success());
    let films: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Parse failed");
    let films = films.as_array().expect("Expected array");
    assert_eq!(films.len(), 3);
    assert_eq!(films[0]["id"], "1");
    assert_eq!(films[2]["title"], "Return of the Jedi");
}

#[test]
fn test_film_prints_episode_and_crawl() {
    let fixture = Fixture::new();

    fixture
        .command_with_api()
        .args(["film", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Episode IV"))
        .stdout(predicate::str::contains("A New Hope"))
        .stdout(predicate::str::contains("It is a period of civil war."));

    assert_eq!(fixture.server.requests(), vec!["/api/films/1"]);
}

#[test]
fn test_film_json_has_numeral() {
    let fixture = Fixture::new();

    let output = fixture
        .command_with_api()
        .args(["film", "3", "--format", "json"])
        .output()
        .expect("Failed to run film");

    assert!(output.status.success());
    let film: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    assert_eq!(film["title"], "Return of the Jedi");
    assert_eq!(film["episode"], "VI");
}

#[test]
fn test_unknown_film_fails() {
    let fixture = Fixture::new();

    fixture
        .command_with_api()
        .args(["film", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Film not found: 99"));
}

#[test]
fn test_unreachable_catalog_fails() {
    let fixture = Fixture::new();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    fixture
        .command()
        .args(["--api-url", &format!("http://{}/api", addr), "films"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: HTTP error"));
}

#[test]
fn test_base_url_from_config_file() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.config_path(),
        format!("[api]\nbase_url = \"{}\"\n", fixture.server.base_url()),
    )
    .expect("Failed to write config");

    fixture
        .command()
        .arg("films")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Empire Strikes Back"));
}

#[test]
fn test_env_overrides_config_file() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.config_path(),
        "[api]\nbase_url = \"http://127.0.0.1:1/api\"\n",
    )
    .expect("Failed to write config");

    fixture
        .command()
        .env("HOLOCRON_API_URL", fixture.server.base_url())
        .arg("films")
        .assert()
        .success()
        .stdout(predicate::str::contains("A New Hope"));
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = Fixture::new();
    std::fs::write(fixture.config_path(), "[api\n").expect("Failed to write config");

    fixture
        .command_with_api()
        .arg("films")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("holocron").expect("Failed to find binary");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("films"))
        .stdout(predicate::str::contains("--api-url"));
}
