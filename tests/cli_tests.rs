use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookql_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bookql"));
    cmd.current_dir(dir.path())
        .env_remove("BOOKQL_BACKEND")
        .env_remove("BOOKQL_DATABASE")
        .env_remove("RUST_LOG");
    cmd
}

fn sqlite_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".bookql.toml"),
        "[catalog]\nbackend = \"sqlite\"\ndatabase = \"books.db\"\n",
    )
    .unwrap();
    bookql_cmd(&temp_dir).arg("init-db").assert().success();
    temp_dir
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("book catalog"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookql"));
}

// =============================================================================
// Demo
// =============================================================================

#[test]
fn test_default_runs_demo() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("My Books"))
        .stdout(predicate::str::contains(
            r#"{"data":{"createBook":{"title":"Another Go book!"}}}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"data":{"book":{"id":2,"title":"Let's Go Further!"}}}"#,
        ));
}

#[test]
fn test_demo_fails_on_missing_database() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["--backend", "sqlite", "--database", "missing.db", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open book catalog"));
}

#[test]
fn test_backend_from_env() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .env("BOOKQL_BACKEND", "sqlite")
        .env("BOOKQL_DATABASE", "missing.db")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.db"));
}

#[test]
fn test_unknown_backend_rejected() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["--backend", "postgres", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values: memory, sqlite"));
}

#[test]
fn test_unusable_log_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("blocker"), "file").unwrap();
    bookql_cmd(&temp_dir)
        .args(["--log-file", "blocker/bookql.log", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize logging"));
}

// =============================================================================
// Query and Mutate
// =============================================================================

#[test]
fn test_query_book() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["query", "{ book(id: 1) { title author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's Go!"))
        .stdout(predicate::str::contains("Alex Edwards"));
}

#[test]
fn test_query_missing_book_is_null() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["query", "{ book(id: 99) { title } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""book": null"#))
        .stdout(predicate::str::contains("errors").not());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args([
            "query",
            "query Get($id: Int) { book(id: $id) { title } }",
            "--variables",
            r#"{"id": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's Go Further2!"));
}

#[test]
fn test_query_reports_graphql_errors() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["query", "{ book(id: 1) { isbn } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"))
        .stdout(predicate::str::contains("isbn"));
}

#[test]
fn test_mutate_wraps_body() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["mutate", r#"createBook(title: "CLI book") { id title }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 4"#))
        .stdout(predicate::str::contains("CLI book"));
}

#[test]
fn test_mutate_full_operation_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args([
            "mutate",
            "mutation Add($t: String!) { createBook(title: $t) { id title } }",
            "--variables",
            r#"{"t":"Var book"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 4"#))
        .stdout(predicate::str::contains("Var book"))
        .stdout(predicate::str::contains("errors").not());
}

// =============================================================================
// List, Show, Schema
// =============================================================================

#[test]
fn test_list_seeded() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's Go!"))
        .stdout(predicate::str::contains("Let's Go Further2!"));
}

#[test]
fn test_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = bookql_cmd(&temp_dir)
        .args(["show", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let book: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(book["id"], 2);
    assert_eq!(book["title"], "Let's Go Further!");
    assert_eq!(book["descriptions"][0]["content"], "it's a good book too.");
}

#[test]
fn test_show_missing_fails() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found: 99"));
}

#[test]
fn test_schema_to_file() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .args(["schema", "--output", "schema.graphql"])
        .assert()
        .success();

    let sdl = std::fs::read_to_string(temp_dir.path().join("schema.graphql")).unwrap();
    assert!(sdl.contains("createBook(title: String!): Book!"));
}

// =============================================================================
// SQLite backend
// =============================================================================

#[test]
fn test_init_db_requires_sqlite_backend() {
    let temp_dir = TempDir::new().unwrap();
    bookql_cmd(&temp_dir)
        .arg("init-db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sqlite backend"));
}

#[test]
fn test_sqlite_mutation_persists_between_runs() {
    let temp_dir = sqlite_project();
    assert!(temp_dir.path().join("books.db").exists());

    bookql_cmd(&temp_dir)
        .args(["mutate", r#"createBook(title: "Stored book") { id }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 4"#));

    bookql_cmd(&temp_dir)
        .args(["query", "{ book(id: 4) { title } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored book"));
}

#[test]
fn test_sqlite_list_has_no_author() {
    let temp_dir = sqlite_project();
    bookql_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's Go Further!"))
        .stdout(predicate::str::contains("unknown author"));
}
