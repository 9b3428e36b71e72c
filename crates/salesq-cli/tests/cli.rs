//! Integration tests for the salesq binary.

use assert_cmd::Command;
use predicates::prelude::*;

const QUOTATION_PAGE: &str = r#"
    <html><body>
    <div>
        <h2 id="sale_info_title">Your Subscription</h2>
        <table>
            <tr><th>Plan:</th><td><span>Standard 1 year</span></td></tr>
            <tr><th>Reference:</th><td><span>REF-001</span></td></tr>
        </table>
    </div>
    <table id="sales_order_table"><tbody>
        <tr name="tr_product">
            <td name="td_product_name">Standard Suite</td>
            <td name="td_product_quantity"><span>5</span> <span>Users</span></td>
            <td name="td_product_subtotal"><span><span class="oe_currency_value">500,00</span> €</span></td>
        </tr>
    </tbody></table>
    </body></html>
"#;

fn write_page(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn parse_emits_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(&dir, "quote.html", QUOTATION_PAGE);

    Command::cargo_bin("salesq")
        .unwrap()
        .args([
            "parse",
            path.to_str().unwrap(),
            "--url",
            "https://portal.example.com/quote/1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Standard 1 year\""))
        .stdout(predicate::str::contains("https://portal.example.com/quote/1"));
}

#[test]
fn parse_text_format_shows_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(&dir, "quote.html", QUOTATION_PAGE);

    Command::cargo_bin("salesq")
        .unwrap()
        .args(["parse", path.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard Suite | 5 Users"));
}

#[test]
fn parse_fails_without_product_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_page(&dir, "empty.html", "<html><body></body></html>");

    Command::cargo_bin("salesq")
        .unwrap()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no product lines"));
}

#[test]
fn parse_rejects_missing_file() {
    Command::cargo_bin("salesq")
        .unwrap()
        .args(["parse", "does-not-exist.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_isolates_failures_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_page(&dir, "good.html", QUOTATION_PAGE);
    let bad = write_page(&dir, "bad.html", "<html><body></body></html>");

    Command::cargo_bin("salesq")
        .unwrap()
        .args(["batch", good.to_str().unwrap(), bad.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 succeeded, 1 failed"))
        .stdout(predicate::str::contains("no product lines"));
}

#[test]
fn batch_fail_fast_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_page(&dir, "bad.html", "<html><body></body></html>");
    let good = write_page(&dir, "good.html", QUOTATION_PAGE);

    Command::cargo_bin("salesq")
        .unwrap()
        .args([
            "batch",
            "--fail-fast",
            bad.to_str().unwrap(),
            good.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no product lines"));
}
