//! End-to-end harvest tests
//!
//! These tests run the full orchestrator against wiremock servers serving
//! directory-shaped HTML, then inspect the returned summary and the files
//! written under a temporary output root.

use sinta_harvest::config::HarvestConfig;
use sinta_harvest::crawler::run_harvest;
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn journal_item(name: &str, affiliation: &str, accreditation: &str) -> String {
    format!(
        r#"<div class="list-item">
            <div class="affil-name mb-3"><a href="https://example.com/journals/{name}">{name}</a></div>
            <div class="affil-loc mt-2">{affiliation}</div>
            <span class="num-stat accredited">{accreditation}</span>
        </div>"#
    )
}

fn result_page(total_pages: Option<u32>, items: &[String]) -> String {
    let pagination = match total_pages {
        Some(n) => format!(
            r#"<div class="text-center pagination-text">Page 1 of {} | Total Records : 42</div>"#,
            n
        ),
        None => String::new(),
    };
    format!(
        "<html><body>{}\n{}</body></html>",
        pagination,
        items.join("\n")
    )
}

fn test_config(base_url: &str, output_root: &Path) -> HarvestConfig {
    HarvestConfig {
        base_url: base_url.to_string(),
        keyword: "teknologi".to_string(),
        inter_page_delay_ms: 0, // no politeness delay in tests
        fetch_timeout_secs: 5,
        output_root: output_root.to_string_lossy().into_owned(),
    }
}

async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", page.to_string()))
        .and(query_param("q", "teknologi"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

fn read_log(log_path: &Path) -> String {
    std::fs::read_to_string(log_path).expect("Failed to read run log")
}

#[tokio::test]
async fn test_three_pages_with_failing_middle_page() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();

    let page1_items: Vec<String> = (1..=5)
        .map(|i| journal_item(&format!("Jurnal P1-{}", i), "Univ A", "S1"))
        .collect();
    let page3_items: Vec<String> = (1..=5)
        .map(|i| journal_item(&format!("Jurnal P3-{}", i), "Univ B", "S2"))
        .collect();

    mount_page(&server, 1, html_response(result_page(Some(3), &page1_items))).await;
    mount_page(&server, 2, ResponseTemplate::new(500)).await;
    mount_page(&server, 3, html_response(result_page(None, &page3_items))).await;

    let config = test_config(&server.uri(), root.path());
    let summary = run_harvest(&config).await.expect("Run failed");

    // One bad page does not abort the run or shrink the loop.
    assert_eq!(summary.pages_total, 3);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.records.len(), 10);

    // Page order, then in-page order.
    let names: Vec<&str> = summary.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names[0], "Jurnal P1-1");
    assert_eq!(names[4], "Jurnal P1-5");
    assert_eq!(names[5], "Jurnal P3-1");
    assert_eq!(names[9], "Jurnal P3-5");

    // CSV has a header plus one row per record.
    let csv = std::fs::read_to_string(&summary.csv_path).unwrap();
    assert_eq!(csv.lines().count(), 11);
    assert_eq!(
        csv.lines().next().unwrap(),
        "name,affiliation,accreditation,link"
    );

    // Exactly one ERROR entry, and it names page 2.
    let log = read_log(&summary.log_path);
    let errors: Vec<&str> = log.lines().filter(|l| l.contains(" - ERROR - ")).collect();
    assert_eq!(errors.len(), 1, "log was:\n{}", log);
    assert!(errors[0].contains("page 2"));
}

#[tokio::test]
async fn test_zero_matching_journals() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();

    mount_page(&server, 1, html_response(result_page(None, &[]))).await;

    let config = test_config(&server.uri(), root.path());
    let summary = run_harvest(&config).await.expect("Run failed");

    assert_eq!(summary.pages_total, 1);
    assert_eq!(summary.pages_failed, 0);
    assert!(summary.records.is_empty());

    // Header-only CSV is still well-formed output.
    let csv = std::fs::read_to_string(&summary.csv_path).unwrap();
    assert_eq!(csv.trim_end(), "name,affiliation,accreditation,link");

    // Both chart artifacts exist even with nothing to plot.
    let viz_dir = summary.output_dir.join("visualizations");
    assert!(viz_dir.join("affiliation_distribution.png").is_file());
    assert!(viz_dir.join("accreditation_distribution.png").is_file());

    let log = read_log(&summary.log_path);
    assert!(!log.lines().any(|l| l.contains(" - ERROR - ")));
}

#[tokio::test]
async fn test_first_page_failure_degrades_gracefully() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();

    mount_page(&server, 1, ResponseTemplate::new(503)).await;

    let config = test_config(&server.uri(), root.path());
    let summary = run_harvest(&config).await.expect("Run failed");

    assert!(summary.records.is_empty());
    assert_eq!(summary.pages_failed, 1);

    // Finalizing still produced well-formed, empty artifacts.
    let csv = std::fs::read_to_string(&summary.csv_path).unwrap();
    assert_eq!(csv.trim_end(), "name,affiliation,accreditation,link");

    let log = read_log(&summary.log_path);
    assert!(log
        .lines()
        .any(|l| l.contains(" - ERROR - ") && l.contains("page 1")));
}

#[tokio::test]
async fn test_nameless_entry_is_dropped_and_logged() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();

    let items = vec![
        journal_item("Jurnal Satu", "Univ A", "S1"),
        r#"<div class="list-item"><div class="affil-loc">No name here</div></div>"#.to_string(),
        journal_item("Jurnal Dua", "Univ B", "S2"),
    ];
    mount_page(&server, 1, html_response(result_page(None, &items))).await;

    let config = test_config(&server.uri(), root.path());
    let summary = run_harvest(&config).await.expect("Run failed");

    let names: Vec<&str> = summary.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Jurnal Satu", "Jurnal Dua"]);

    let log = read_log(&summary.log_path);
    assert!(log
        .lines()
        .any(|l| l.contains(" - WARNING - ") && l.contains("Dropped entry 1 on page 1")));
}

#[tokio::test]
async fn test_malformed_pagination_is_a_warning_not_an_error() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();

    let body = format!(
        r#"<html><body>
        <div class="text-center pagination-text">Page 1 of many | Total Records : ?</div>
        {}</body></html>"#,
        journal_item("Jurnal Satu", "Univ A", "S1")
    );
    mount_page(&server, 1, html_response(body)).await;

    let config = test_config(&server.uri(), root.path());
    let summary = run_harvest(&config).await.expect("Run failed");

    assert_eq!(summary.pages_total, 1);
    assert_eq!(summary.records.len(), 1);

    let log = read_log(&summary.log_path);
    assert!(log.lines().any(|l| l.contains(" - WARNING - ") && l.contains("Pagination fallback")));
    assert!(!log.lines().any(|l| l.contains(" - ERROR - ")));
}

#[tokio::test]
async fn test_repeated_runs_never_overwrite() {
    let server = MockServer::start().await;
    let root = tempfile::tempdir().unwrap();

    let items = vec![journal_item("Jurnal Satu", "Univ A", "S1")];
    mount_page(&server, 1, html_response(result_page(None, &items))).await;

    let config = test_config(&server.uri(), root.path());
    let first = run_harvest(&config).await.expect("First run failed");
    let second = run_harvest(&config).await.expect("Second run failed");

    assert_ne!(first.output_dir, second.output_dir);
    assert!(first.csv_path.is_file());
    assert!(second.csv_path.is_file());
}

#[tokio::test]
async fn test_setup_failure_is_fatal() {
    let config = HarvestConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        keyword: "teknologi".to_string(),
        inter_page_delay_ms: 0,
        fetch_timeout_secs: 1,
        output_root: "/proc/nonexistent".to_string(),
    };

    let result = run_harvest(&config).await;
    assert!(result.is_err());
}
