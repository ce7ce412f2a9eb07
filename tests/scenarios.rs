//! End-to-end runs through the text and JSON surfaces.

use dominoes::{
    cascade, parse_line, run_text, CascadeEngine, CascadeError, CascadeRequest, EngineConfig,
    ValidationError,
};

fn run(input: &str) -> (Vec<u64>, Vec<u64>) {
    let line = parse_line(input).unwrap();
    let outcome = CascadeEngine::new(EngineConfig::default()).run(&line);
    (outcome.distances.right, outcome.distances.left)
}

#[test]
fn first_worked_example() {
    let (right, left) = run("11\n0 0 4 1 0 2 0 1 0 0 3\n");
    assert_eq!(right, vec![0, 0, 6, 1, 0, 3, 0, 1, 0, 0, 3]);
    assert_eq!(left, vec![0, 0, 4, 5, 0, 7, 0, 1, 0, 0, 4]);
}

#[test]
fn second_worked_example() {
    let (right, left) = run("12\n2 3 0 0 0 0 0 6 10 1 0 2\n");
    assert_eq!(right, vec![4, 3, 0, 0, 0, 0, 0, 11, 10, 1, 0, 2]);
    assert_eq!(left, vec![2, 3, 0, 0, 0, 0, 0, 9, 10, 11, 0, 13]);
}

#[test]
fn worked_examples_render_exactly() {
    let config = EngineConfig::sequential();
    assert_eq!(
        run_text("11\n0 0 4 1 0 2 0 1 0 0 3", &config).unwrap(),
        "0 0 6 1 0 3 0 1 0 0 3\n0 0 4 5 0 7 0 1 0 0 4\n"
    );
}

#[test]
fn empty_line_prints_two_empty_lines() {
    assert_eq!(run_text("0\n", &EngineConfig::default()).unwrap(), "\n\n");
}

#[test]
fn isolated_domino() {
    let mut heights = vec!["0"; 20];
    heights[5] = "2";
    let (right, left) = run(&format!("20\n{}\n", heights.join(" ")));
    assert_eq!(right[5], 2);
    assert_eq!(left[5], 2);
    assert!(right.iter().enumerate().all(|(i, &d)| i == 5 || d == 0));
    assert!(left.iter().enumerate().all(|(i, &d)| i == 5 || d == 0));
}

#[test]
fn huge_heights_are_not_capped_by_the_line() {
    let (right, left) = run("3\n0 2147483647 1\n");
    assert_eq!(right, vec![0, 2_147_483_647, 1]);
    assert_eq!(left, vec![0, 2_147_483_647, 2_147_483_648]);
}

#[test]
fn json_request_matches_text_run() {
    let request: CascadeRequest = serde_json::from_str(
        r#"{"length": 12,
            "dominoes": [
              {"position": 0, "height": 2}, {"position": 1, "height": 3},
              {"position": 7, "height": 6}, {"position": 8, "height": 10},
              {"position": 9, "height": 1}, {"position": 11, "height": 2}],
            "config": {"parallel": false}}"#,
    )
    .unwrap();
    let response = cascade(request).unwrap();
    let (right, left) = run("12\n2 3 0 0 0 0 0 6 10 1 0 2\n");
    assert_eq!(response.right, right);
    assert_eq!(response.left, left);
}

#[test]
fn malformed_input_fails_before_the_engine_runs() {
    let config = EngineConfig::default();
    assert!(matches!(
        run_text("3\n1 x 0\n", &config),
        Err(CascadeError::MalformedInput(_))
    ));
    assert!(matches!(
        run_text("3\n1 1\n", &config),
        Err(CascadeError::Validation(ValidationError::CountMismatch { .. }))
    ));
    assert!(matches!(
        run_text("500001\n", &config),
        Err(CascadeError::Validation(ValidationError::LineTooLong { .. }))
    ));
}
