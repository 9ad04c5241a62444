use assert_cmd::Command;
use predicates::prelude::*;

fn roster() -> Command {
    Command::cargo_bin("roster").unwrap()
}

#[test]
fn list_shows_the_seeded_registry() {
    roster()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("prakash"))
        .stdout(predicate::str::contains("tamil"))
        .stdout(predicate::str::contains("Showing 1 to 2 of 2 students"));
}

#[test]
fn list_filters_across_all_fields() {
    // "spanish" only matches the second seed's language.
    roster()
        .args(["list", "spanish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tamil"))
        .stdout(predicate::str::contains("prakash").not())
        .stdout(predicate::str::contains("of 1 students"));
}

#[test]
fn list_with_no_match_prints_empty_state() {
    roster()
        .args(["list", "zzz-nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found"));
}

#[test]
fn list_json_emits_the_page_view() {
    roster()
        .args(["--json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_matched\": 2"))
        .stdout(predicate::str::contains("\"praksh@gmail.com\""));
}

#[test]
fn stats_reports_dashboard_aggregates() {
    roster()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total students:  2"))
        .stdout(predicate::str::contains("Male:            2"))
        .stdout(predicate::str::contains("Tamil"))
        .stdout(predicate::str::contains("Spanish"));
}

#[test]
fn add_reports_the_created_student() {
    roster()
        .args([
            "add",
            "--name",
            "Asha",
            "--email",
            "asha@example.com",
            "--phone",
            "1234567890",
            "--password",
            "secret99",
            "--confirm-password",
            "secret99",
            "--language",
            "Tamil",
            "--gender",
            "Female",
            "--dob",
            "2002-04-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student created"))
        .stdout(predicate::str::contains("Asha"));
}

#[test]
fn add_rejects_an_invalid_form() {
    roster()
        .args([
            "add",
            "--name",
            "Asha",
            "--email",
            "not-an-email",
            "--phone",
            "12345",
            "--password",
            "secret99",
            "--confirm-password",
            "secret99",
            "--language",
            "Tamil",
            "--gender",
            "Female",
            "--dob",
            "2002-04-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email is invalid"))
        .stderr(predicate::str::contains("Phone number must be 10 digits"));
}

#[test]
fn update_of_unknown_id_fails() {
    roster()
        .args([
            "update",
            "404",
            "--name",
            "Ghost",
            "--email",
            "ghost@example.com",
            "--phone",
            "1234567890",
            "--password",
            "secret99",
            "--confirm-password",
            "secret99",
            "--language",
            "Tamil",
            "--gender",
            "Others",
            "--dob",
            "2000-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: 404"));
}

#[test]
fn delete_prompts_and_cancels_without_a_yes() {
    roster()
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to delete 1 student(s)?"))
        .stdout(predicate::str::contains("Operation cancelled."));
}

#[test]
fn delete_with_yes_skips_the_prompt() {
    roster()
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted (1): prakash"));
}

#[test]
fn bulk_delete_reports_the_count() {
    roster()
        .args(["delete", "1", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 student(s)."));
}

#[test]
fn export_csv_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("students.csv");

    roster()
        .args(["export", "csv", "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 record(s)"));

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Name,Email,Phone,Language,Gender,Date of Birth");
    assert!(lines[1].starts_with("1,\"prakash\""));
}

#[test]
fn export_csv_can_target_specific_ids() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("one.csv");

    roster()
        .args(["export", "csv", "--ids", "2", "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("\"tamil\""));
    assert!(!content.contains("prakash"));
}

#[test]
fn export_report_carries_title_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");

    roster()
        .args([
            "export",
            "report",
            "--title",
            "Term Report",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Term Report\n"));
    assert!(content.contains("Total records: 2"));
    assert!(content.contains("Summary"));
}

#[test]
fn export_of_an_empty_filter_result_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.csv");

    roster()
        .args([
            "export",
            "csv",
            "--search",
            "matches-nothing",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records to export"));
}
