use super::*;

use crate::router::{RoutedIntent, RoutingResult};

fn sample_report(responses: &[&str], accuracy: f64, misclassified: Vec<usize>) -> EvalReport {
    EvalReport {
        results: responses
            .iter()
            .map(|r| RoutingResult {
                query: "q".to_string(),
                routed_intent: RoutedIntent::Faq,
                agent_response: r.to_string(),
            })
            .collect(),
        total_time_ms: 1234.5678,
        accuracy,
        misclassified,
    }
}

#[test]
fn test_create_truncates_and_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::create(dir.path()).unwrap();

    let responses = std::fs::read_to_string(writer.responses_path()).unwrap();
    assert!(responses.is_empty());

    let comparison = std::fs::read_to_string(writer.comparison_path()).unwrap();
    assert_eq!(
        comparison,
        "--- Model Comparison ---\n\
         Model Name | Execution Time (ms) | Accuracy (%) | Misclassified Query No\n"
    );
}

#[test]
fn test_create_nested_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let writer = ReportWriter::create(&nested).unwrap();
    assert!(writer.comparison_path().exists());
}

#[test]
fn test_responses_block_format() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::create(dir.path()).unwrap();

    let report = sample_report(&["first answer", "second answer"], 100.0, vec![]);
    writer.append_model("gpt4omini", &report).unwrap();

    let content = std::fs::read_to_string(writer.responses_path()).unwrap();
    assert_eq!(
        content,
        "--- Agent responses for model: gpt4omini ---\n\
         1. first answer\n\
         2. second answer\n"
    );
}

#[test]
fn test_comparison_row_format() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::create(dir.path()).unwrap();

    let report = sample_report(&["a", "b", "c"], 100.0 / 3.0, vec![1, 3]);
    writer.append_model("claudehaiku", &report).unwrap();

    let content = std::fs::read_to_string(writer.comparison_path()).unwrap();
    let row = content.lines().nth(2).expect("row after two header lines");
    assert_eq!(row, "claudehaiku | 1234.57 | 33.33 | [1, 3]");
}

#[test]
fn test_models_accumulate_in_evaluation_order() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::create(dir.path()).unwrap();

    writer
        .append_model("first", &sample_report(&["x"], 100.0, vec![]))
        .unwrap();
    writer
        .append_model("second", &sample_report(&["y"], 0.0, vec![1]))
        .unwrap();

    let responses = std::fs::read_to_string(writer.responses_path()).unwrap();
    let first_pos = responses.find("model: first").unwrap();
    let second_pos = responses.find("model: second").unwrap();
    assert!(first_pos < second_pos);

    let comparison = std::fs::read_to_string(writer.comparison_path()).unwrap();
    let rows: Vec<&str> = comparison.lines().skip(2).collect();
    assert!(rows[0].starts_with("first | "));
    assert!(rows[1].starts_with("second | "));
}
