//! Integration tests for the NaradAI console
//!
//! These tests exercise the CLI end-to-end using assert_cmd. Each test
//! gets its own home directory so sessions never leak between tests, and
//! the API URL points at a closed local port so network calls fail fast -
//! which is exactly what the dashboard's demo fallback is for.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Closed port: every request is an immediate connection failure
const DEAD_API: &str = "http://127.0.0.1:9/api/v1";

/// Helper to get a naradai command isolated to `home`
fn naradai(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("naradai").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("NARADAI_API_URL", DEAD_API)
        .env("NARADAI_TIMEOUT_SECS", "1");
    cmd
}

/// Helper to log in as the given demo user
fn login(home: &TempDir, username: &str, password: &str) {
    naradai(home)
        .args(["login", "--username", username, "--password", password])
        .assert()
        .success();
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NaradAI Console"));
}

#[test]
fn test_version_displays() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("naradai"));
}

#[test]
fn test_unknown_command_fails() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_generate() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("naradai"));
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_whoami_requires_login() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_rejects_bad_credentials() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .args(["login", "--username", "admin", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_login_persists_session() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrator"))
        .stdout(predicate::str::contains("admin"));
}

#[test]
fn test_logout_clears_session() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    naradai(&home)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_corrupted_session_treated_as_logged_out() {
    let home = TempDir::new().unwrap();
    let session_path = home.path().join("data/naradai/session.json");
    std::fs::create_dir_all(session_path.parent().unwrap()).unwrap();
    std::fs::write(&session_path, "{definitely not json").unwrap();

    naradai(&home)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_whoami_json_output() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    naradai(&home)
        .args(["whoami", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"user\""))
        .stdout(predicate::str::contains("\"role\": \"user\""));
}

// ============================================================================
// Access Control Tests
// ============================================================================

#[test]
fn test_dashboard_requires_login() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_list_requires_login() {
    let home = TempDir::new().unwrap();
    naradai(&home)
        .args(["risk", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_mutation_requires_admin_role() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    naradai(&home)
        .args([
            "risk", "new",
            "--title", "Some new risk",
            "--description", "A description long enough to pass validation",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("administrator access"));

    naradai(&home)
        .args(["cluster", "rm", "abc123", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("administrator access"));
}

#[test]
fn test_non_admin_can_view_dashboard() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    naradai(&home)
        .args(["dashboard", "--section", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversations Analyzed"));
}

// ============================================================================
// Validation Tests (no request is sent when validation fails)
// ============================================================================

#[test]
fn test_short_title_blocks_submission() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .args([
            "risk", "new",
            "--title", "ab",
            "--description", "A description long enough to pass validation",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 characters"));
}

#[test]
fn test_short_description_blocks_submission() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .args([
            "action", "new",
            "--title", "Valid title",
            "--description", "too short",
            "--recommendation", "A recommendation long enough to pass",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 10 characters"));
}

#[test]
fn test_missing_required_flags_rejected_by_parser() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .args(["topic", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

// ============================================================================
// Backend-Failure Tests (API unreachable)
// ============================================================================

#[test]
fn test_list_shows_error_banner_when_backend_down() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .args(["risk", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch risks"));
}

#[test]
fn test_failed_create_surfaces_error() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .args([
            "cluster", "new",
            "--theme", "Checkout friction complaints",
            "--size", "120",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create conversation cluster"));
}

#[test]
fn test_failed_status_change_surfaces_error() {
    let home = TempDir::new().unwrap();
    login(&home, "admin", "admin123");

    naradai(&home)
        .args(["action", "status", "abc123", "in-progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to update status"));
}

// ============================================================================
// Dashboard Demo-Fallback Tests
// ============================================================================

#[test]
fn test_dashboard_renders_demo_data_offline() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    naradai(&home)
        .arg("dashboard")
        .assert()
        .success()
        // Stat cards
        .stdout(predicate::str::contains("Conversations Analyzed"))
        .stdout(predicate::str::contains("847.2K"))
        // Topics
        .stdout(predicate::str::contains("Packaging"))
        // Clusters
        .stdout(predicate::str::contains("Packaging Damage Issues"))
        // Risks and opportunities
        .stdout(predicate::str::contains("Declining Brand Sentiment"))
        .stdout(predicate::str::contains("Sustainability Movement Alignment"));
}

#[test]
fn test_sentiment_section_demo_split() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    let assert = naradai(&home)
        .args(["dashboard", "--section", "sentiment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("58%"))
        .stdout(predicate::str::contains("32%"))
        .stdout(predicate::str::contains("10%"))
        // 7-point series endpoints
        .stdout(predicate::str::contains("Nov 1"))
        .stdout(predicate::str::contains("Nov 25"));

    // Fetch failure is a warning, not a failure
    assert.stderr(predicate::str::contains("showing demo data"));
}

#[test]
fn test_competitor_section_demo_brand_cards() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    naradai(&home)
        .args(["dashboard", "--section", "competitors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Brand"))
        .stdout(predicate::str::contains("Competitor A"))
        .stdout(predicate::str::contains("#1 in Share of Voice"))
        .stdout(predicate::str::contains("Leading by 4%"));
}

#[test]
fn test_actions_section_has_no_demo_fallback() {
    let home = TempDir::new().unwrap();
    login(&home, "user", "user123");

    // The actions panel shows its error inline rather than demo cards
    naradai(&home)
        .args(["dashboard", "--section", "actions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));
}
