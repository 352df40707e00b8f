//! Concurrency and thread safety tests for KMP trace

use std::sync::Arc;
use std::thread;

use kmp_trace::{search, TraceableMatcher};

#[test]
fn concurrent_searches_same_input() {
    let text: Arc<str> = Arc::from("ABABDABACDABABCABAB".repeat(8));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let text = Arc::clone(&text);
            thread::spawn(move || search(&text, "ABABCABAB"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let first = &results[0];
    assert_eq!(first.positions.len(), 8);
    for (i, result) in results.iter().enumerate().skip(1) {
        assert_eq!(first, result, "Thread {i} produced a different trace");
    }
}

#[test]
fn concurrent_searches_different_inputs() {
    let cases: Vec<(String, String, Vec<usize>)> = vec![
        ("aaaa".into(), "aa".into(), vec![0, 1, 2]),
        ("abc".into(), "xyz".into(), vec![]),
        ("abracadabra".into(), "abra".into(), vec![0, 7]),
        ("mississippi".into(), "issi".into(), vec![1, 4]),
    ];

    let handles: Vec<_> = cases
        .into_iter()
        .map(|(text, pattern, expected)| {
            thread::spawn(move || {
                for _ in 0..50 {
                    let result = search(&text, &pattern);
                    assert_eq!(result.positions, expected, "{pattern} in {text}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn shared_matcher_runs_from_many_threads() {
    let text = "xyzzyxyzzy".repeat(20);
    let pattern = "zzy".to_string();
    let expected = TraceableMatcher::for_str(&text, &pattern)
        .run()
        .expect("valid input");

    thread::scope(|scope| {
        let matcher = TraceableMatcher::for_str(&text, &pattern);
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || matcher.run().expect("valid input")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
