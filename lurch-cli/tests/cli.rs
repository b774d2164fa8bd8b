use assert_cmd::Command; // Run programs
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;
use test_log::test;

const BIN: &str = "latex2lurch";

#[cfg_attr(miri, ignore)]
#[test]
fn cli_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-vvv").arg("Non-existing-file.tex");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-h");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print help"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains(BIN));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("-q");
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--quiet'",
    ));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("--log").arg("error");
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--log <LOG_LEVEL>'",
    ));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--log").arg("cats");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'--log <LOG_LEVEL>'"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-e").arg("x").arg("proof.tex");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--in-place");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn rewrite_expression() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--expr").arg(r"A \Rightarrow B");
    cmd.assert().success().stdout("A implies B\n");

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-e").arg(r"\left(x\right)");
    cmd.assert().success().stdout("(x)\n");
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn rewrite_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.write_stdin("Since $5!$ is even, $2 \\mid 5!$.\n");
    cmd.assert()
        .success()
        .stdout("Since $5 factorial$ is even, $2 divides 5 factorial$.\n");
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn rewrite_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let changed = dir.child("changed.tex");
    changed.write_str("\\text{Assume} P \\Leftrightarrow Q\n")?;
    let plain = dir.child("plain.tex");
    plain.write_str("nothing to do\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-i").arg(changed.path()).arg(plain.path());
    cmd.assert().success().stdout("");

    changed.assert(" Assume  P iff Q\n");
    plain.assert("nothing to do\n");
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn custom_rule_table() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let rules = dir.child("rules.json");
    rules.write_str(
        r#"{ "rules": [ { "name": "forall", "pattern": "\\\\forall", "replacement": "for all" } ] }"#,
    )?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--rules")
        .arg(rules.path())
        .arg("-e")
        .arg(r"\forall x, x \sim x");
    cmd.assert().success().stdout("for all x, x ~ x\n");

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--rules").arg(rules.path()).arg("--list-rules");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("  1. forall:"))
        .stdout(predicate::str::contains(" 14. backslash:"));

    let broken = dir.child("broken.json");
    broken.write_str(r#"{ "rules": [ { "name": "broken", "pattern": "(" } ] }"#)?;
    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--rules").arg(broken.path()).arg("-e").arg("x");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("rule `broken` has an invalid pattern"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn acid_suites() -> Result<(), Box<dyn std::error::Error>> {
    let suite = concat!(env!("CARGO_MANIFEST_DIR"), "/../resources/acid/notation.json");

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--acid").arg(suite);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("FAIL").not())
        .stdout(predicate::str::contains("acid tests passed"));

    let dir = TempDir::new()?;
    let failing = dir.child("failing.json");
    failing.write_str(
        r#"{
            "name": "failing",
            "cases": [
                { "name": "ok", "input": "5!", "expected": "5 factorial" },
                { "name": "wrong", "input": "a \\mid b", "expected": "a | b" }
            ]
        }"#,
    )?;

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--acid").arg(failing.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains(r#"wrong: expected "a | b", got "a divides b""#))
        .stdout(predicate::str::contains("of 2 acid tests passed"))
        .stderr(predicate::str::contains("1 of 2 acid tests failed"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn report_logs_rules() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("--report").arg("-e").arg("n! = n (n-1)!");
    cmd.assert()
        .success()
        .stdout("n factorial = n (n-1) factorial\n")
        .stderr(predicate::str::contains("rule `factorial` matched 2 times"));
    Ok(())
}
