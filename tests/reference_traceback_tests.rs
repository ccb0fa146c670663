//! Cross-checks `align` against a direct rendition of the reversed-sentinel
//! dynamic program used by the trace viewer
//!
//! The viewer appends a `#` sentinel, reverses both sequences, fills the
//! table over the reversed sequences and walks from the far corner, so ties
//! settle at the front of the traces. Scripts must match it row for row.

use proptest::prelude::*;
use tracealign::alignment::align;
use tracealign::report::format_script;

type Row = (String, String, usize);

/// Edit distance and its display rows
type Script = (usize, Vec<Row>);

/// Reversed-sentinel table plus traceback, kept close to the viewer's steps
fn viewer_script(sequence1: &[String], sequence2: &[String]) -> Script {
    let mut s1: Vec<String> = sequence1.to_vec();
    let mut s2: Vec<String> = sequence2.to_vec();
    s1.push("#".to_string());
    s2.push("#".to_string());
    s1.reverse();
    s2.reverse();
    let m = s1.len();
    let n = s2.len();

    let mut dp = vec![vec![0usize; n]; m];
    for (idx, row) in dp.iter_mut().enumerate() {
        row[0] = idx;
    }
    for (idx, cell) in dp[0].iter_mut().enumerate() {
        *cell = idx;
    }
    for row in 1..m {
        for col in 1..n {
            let sub = if s1[row] == s2[col] {
                dp[row - 1][col - 1] as isize - 1
            } else {
                dp[row - 1][col - 1] as isize
            };
            let best = (dp[row - 1][col] as isize)
                .min(dp[row][col - 1] as isize)
                .min(sub);
            dp[row][col] = (1 + best) as usize;
        }
    }

    let infinity = usize::MAX;
    let mut operations = Vec::new();
    let mut row = m - 1;
    let mut col = n - 1;
    while !(row == 0 && col == 0) {
        let sub = if row == 0 || col == 0 {
            infinity
        } else {
            dp[row - 1][col - 1]
        };
        let insert = if col != 0 { dp[row][col - 1] } else { infinity };
        let remove = if row != 0 { dp[row - 1][col] } else { infinity };

        let op = sub.min(remove).min(insert);
        let is_same = op == dp[row][col];

        let operation = if op == sub {
            let operation = (
                "sub".to_string(),
                format!("{}<-->{}", s1[row], s2[col]),
                m - row - 1,
            );
            row -= 1;
            col -= 1;
            operation
        } else if op == remove {
            let operation = ("remove".to_string(), s1[row].clone(), m - row - 1);
            row -= 1;
            operation
        } else {
            let operation = ("insert".to_string(), s2[col].clone(), n - col - 1);
            col -= 1;
            operation
        };

        if !is_same {
            operations.push(operation);
        }
    }

    (dp[m - 1][n - 1], operations)
}

fn aligned_script(a: &[String], b: &[String]) -> Script {
    let alignment = align(a, b, None).unwrap();
    let rows = format_script(&alignment.script)
        .into_iter()
        .map(|record| (record.operation.to_string(), record.info, record.index))
        .collect();
    (alignment.value, rows)
}

/// Every sequence over `alphabet` with length up to `max_len`
fn all_sequences(alphabet: &[&str], max_len: usize) -> Vec<Vec<String>> {
    let mut out = vec![Vec::new()];
    let mut frontier: Vec<Vec<String>> = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for seq in &frontier {
            for symbol in alphabet {
                let mut grown = seq.clone();
                grown.push(symbol.to_string());
                next.push(grown);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_duplicate_insert_matches_viewer() {
    let a = strings(&["a"]);
    let b = strings(&["a", "a"]);

    assert_eq!(aligned_script(&a, &b), viewer_script(&a, &b));
    assert_eq!(
        aligned_script(&a, &b).1,
        vec![("insert".to_string(), "a".to_string(), 0)]
    );
}

#[test]
fn test_shrink_matches_viewer() {
    let a = strings(&["a", "b"]);
    let b = strings(&["c"]);

    assert_eq!(
        aligned_script(&a, &b).1,
        vec![
            ("sub".to_string(), "a<-->c".to_string(), 0),
            ("remove".to_string(), "b".to_string(), 1),
        ]
    );
    assert_eq!(aligned_script(&a, &b), viewer_script(&a, &b));
}

#[test]
fn test_exhaustive_two_symbol_alphabet_matches_viewer() {
    let sequences = all_sequences(&["a", "b"], 4);
    assert_eq!(sequences.len(), 31);

    let mut differing = Vec::new();
    for a in &sequences {
        for b in &sequences {
            if aligned_script(a, b) != viewer_script(a, b) {
                differing.push((a.clone(), b.clone()));
            }
        }
    }

    assert!(differing.is_empty(), "scripts differ for {:?}", differing);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_script_matches_viewer(
        a in prop::collection::vec("[a-c]", 0..10),
        b in prop::collection::vec("[a-c]", 0..10),
    ) {
        prop_assert_eq!(aligned_script(&a, &b), viewer_script(&a, &b));
    }
}
