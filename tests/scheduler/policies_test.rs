/*!
 * Policy Scenario Tests
 * Exact timelines and metrics for each scheduling policy
 */

use pretty_assertions::assert_eq;
use sched_sim::{run, Policy, ProcessSpec, SchedulerError, SimulationResult};

fn demo() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 8),
        ProcessSpec::new("P2", 1, 4),
        ProcessSpec::new("P3", 2, 2),
    ]
}

fn gantt(result: &SimulationResult) -> Vec<(String, u64, u64)> {
    result
        .gantt()
        .iter()
        .map(|s| (s.pid.to_string(), s.start, s.end))
        .collect()
}

fn expect(segments: &[(&str, u64, u64)]) -> Vec<(String, u64, u64)> {
    segments
        .iter()
        .map(|&(pid, start, end)| (pid.to_string(), start, end))
        .collect()
}

fn waiting(result: &SimulationResult) -> Vec<u64> {
    result.processes().iter().map(|p| p.waiting_time).collect()
}

fn turnaround(result: &SimulationResult) -> Vec<u64> {
    result.processes().iter().map(|p| p.turnaround_time).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {:.4}, got {:.4}",
        expected,
        actual
    );
}

#[test]
fn test_fcfs_default_workload() {
    let result = run(Policy::Fcfs, &demo(), None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("P1", 0, 8), ("P2", 8, 12), ("P3", 12, 14)])
    );
    assert_eq!(waiting(&result), vec![0, 7, 10]);
    assert_eq!(turnaround(&result), vec![8, 11, 12]);
    assert_close(result.avg_waiting_time(), 5.67);
    assert_close(result.avg_turnaround_time(), 10.33);
    assert_eq!(result.cpu_utilization(), 100.0);
}

#[test]
fn test_fcfs_idle_gap() {
    let processes = [ProcessSpec::new("P1", 0, 2), ProcessSpec::new("P2", 5, 3)];
    let result = run(Policy::Fcfs, &processes, None).unwrap();

    assert_eq!(gantt(&result), expect(&[("P1", 0, 2), ("P2", 5, 8)]));
    assert_eq!(waiting(&result), vec![0, 0]);
    assert_eq!(result.cpu_utilization(), 62.5);
}

#[test]
fn test_fcfs_equal_arrivals_keep_input_order() {
    let processes = [
        ProcessSpec::new("B", 0, 1),
        ProcessSpec::new("A", 0, 1),
        ProcessSpec::new("C", 0, 1),
    ];
    let result = run(Policy::Fcfs, &processes, None).unwrap();
    assert_eq!(
        gantt(&result),
        expect(&[("B", 0, 1), ("A", 1, 2), ("C", 2, 3)])
    );
}

#[test]
fn test_sjf_default_workload() {
    let result = run(Policy::Sjf, &demo(), None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("P1", 0, 8), ("P3", 8, 10), ("P2", 10, 14)])
    );
    assert_eq!(waiting(&result), vec![0, 9, 6]);
    assert_eq!(turnaround(&result), vec![8, 13, 8]);
    assert_close(result.avg_waiting_time(), 5.0);
    assert_close(result.avg_turnaround_time(), 9.67);
}

#[test]
fn test_sjf_equal_bursts_prefer_earlier_arrival() {
    let processes = [
        ProcessSpec::new("A", 2, 3),
        ProcessSpec::new("B", 1, 3),
        ProcessSpec::new("C", 0, 4),
    ];
    let result = run(Policy::Sjf, &processes, None).unwrap();
    assert_eq!(
        gantt(&result),
        expect(&[("C", 0, 4), ("B", 4, 7), ("A", 7, 10)])
    );
}

#[test]
fn test_srtf_default_workload() {
    let result = run(Policy::Srtf, &demo(), None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[
            ("P1", 0, 1),
            ("P2", 1, 2),
            ("P3", 2, 4),
            ("P2", 4, 7),
            ("P1", 7, 14),
        ])
    );
    assert_eq!(waiting(&result), vec![6, 2, 0]);
    assert_eq!(turnaround(&result), vec![14, 6, 2]);
    assert_eq!(result.summary().context_switches, 4);

    // First dispatch is kept even though P1 resumed later
    assert_eq!(result.processes()[0].start_time, 0);
    assert_eq!(result.processes()[0].completion_time, 14);
}

#[test]
fn test_srtf_textbook_workload() {
    let processes = [
        ProcessSpec::new("P1", 0, 7),
        ProcessSpec::new("P2", 2, 4),
        ProcessSpec::new("P3", 4, 1),
        ProcessSpec::new("P4", 5, 4),
    ];
    let result = run(Policy::Srtf, &processes, None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[
            ("P1", 0, 2),
            ("P2", 2, 4),
            ("P3", 4, 5),
            ("P2", 5, 7),
            ("P4", 7, 11),
            ("P1", 11, 16),
        ])
    );
    assert_eq!(waiting(&result), vec![9, 1, 0, 2]);
    assert_close(result.avg_waiting_time(), 3.0);
}

#[test]
fn test_srtf_equal_remaining_keeps_running_process() {
    let processes = [ProcessSpec::new("P1", 0, 4), ProcessSpec::new("P2", 1, 3)];
    let result = run(Policy::Srtf, &processes, None).unwrap();

    // At t=1 both have 3 units left; the earlier arrival wins and no switch is recorded
    assert_eq!(gantt(&result), expect(&[("P1", 0, 4), ("P2", 4, 7)]));
    assert_eq!(result.summary().context_switches, 1);
}

#[test]
fn test_sjf_and_srtf_agree_without_preemption() {
    let processes = [
        ProcessSpec::new("P1", 0, 5),
        ProcessSpec::new("P2", 0, 3),
        ProcessSpec::new("P3", 0, 1),
    ];
    let sjf = run(Policy::Sjf, &processes, None).unwrap();
    let srtf = run(Policy::Srtf, &processes, None).unwrap();

    assert_eq!(
        gantt(&sjf),
        expect(&[("P3", 0, 1), ("P2", 1, 4), ("P1", 4, 9)])
    );
    assert_eq!(sjf.gantt(), srtf.gantt());
    assert_eq!(sjf.processes(), srtf.processes());
}

#[test]
fn test_priority_workload() {
    let processes = [
        ProcessSpec::new("P1", 0, 5).with_priority(2),
        ProcessSpec::new("P2", 1, 3).with_priority(1),
        ProcessSpec::new("P3", 2, 4).with_priority(3),
        ProcessSpec::new("P4", 3, 2).with_priority(2),
    ];
    let result = run(Policy::Priority, &processes, None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("P1", 0, 5), ("P2", 5, 8), ("P4", 8, 10), ("P3", 10, 14)])
    );
    assert_eq!(waiting(&result), vec![0, 4, 8, 5]);
    assert_close(result.avg_waiting_time(), 4.25);
    assert_close(result.avg_turnaround_time(), 7.75);
    assert_eq!(result.processes()[1].priority, Some(1));
}

#[test]
fn test_priority_ties_break_on_arrival_not_position() {
    let processes = [
        ProcessSpec::new("late", 2, 3).with_priority(1),
        ProcessSpec::new("early", 1, 3).with_priority(1),
        ProcessSpec::new("first", 0, 5).with_priority(0),
    ];
    let result = run(Policy::Priority, &processes, None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("first", 0, 5), ("early", 5, 8), ("late", 8, 11)])
    );
}

#[test]
fn test_priority_missing_value_ranks_as_zero() {
    let processes = [
        ProcessSpec::new("one", 0, 2).with_priority(1),
        ProcessSpec::new("unset", 0, 2),
        ProcessSpec::new("urgent", 0, 2).with_priority(-1),
    ];
    let result = run(Policy::Priority, &processes, None).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("urgent", 0, 2), ("unset", 2, 4), ("one", 4, 6)])
    );
    assert_eq!(result.processes()[1].priority, None);
}

#[test]
fn test_round_robin_default_workload() {
    let result = run(Policy::RoundRobin, &demo(), Some(3)).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[
            ("P1", 0, 3),
            ("P2", 3, 6),
            ("P3", 6, 8),
            ("P1", 8, 11),
            ("P2", 11, 12),
            ("P1", 12, 14),
        ])
    );
    assert_eq!(waiting(&result), vec![6, 7, 4]);
    assert_eq!(turnaround(&result), vec![14, 11, 6]);
    assert_close(result.avg_waiting_time(), 5.67);
    assert_close(result.avg_turnaround_time(), 10.33);
}

#[test]
fn test_round_robin_arrival_enqueued_before_returning_process() {
    let processes = [ProcessSpec::new("P1", 0, 4), ProcessSpec::new("P2", 2, 2)];
    let result = run(Policy::RoundRobin, &processes, Some(2)).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6)])
    );
}

#[test]
fn test_round_robin_emits_one_segment_per_slice() {
    let processes = [ProcessSpec::new("P1", 0, 2), ProcessSpec::new("P2", 6, 2)];
    let result = run(Policy::RoundRobin, &processes, Some(1)).unwrap();

    assert_eq!(
        gantt(&result),
        expect(&[("P1", 0, 1), ("P1", 1, 2), ("P2", 6, 7), ("P2", 7, 8)])
    );
    assert_eq!(result.cpu_utilization(), 50.0);
}

#[test]
fn test_round_robin_large_quantum_matches_fcfs() {
    let rr = run(Policy::RoundRobin, &demo(), Some(8)).unwrap();
    let fcfs = run(Policy::Fcfs, &demo(), None).unwrap();
    assert_eq!(rr.gantt(), fcfs.gantt());
    assert_eq!(rr.processes(), fcfs.processes());
}

#[test]
fn test_duplicate_pids_addressed_by_position() {
    let processes = [ProcessSpec::new("P1", 0, 2), ProcessSpec::new("P1", 0, 1)];
    let result = run(Policy::Sjf, &processes, None).unwrap();

    let owners: Vec<usize> = result.gantt().iter().map(|s| s.process).collect();
    assert_eq!(owners, vec![1, 0]);

    let completions: Vec<u64> = result.processes().iter().map(|p| p.completion_time).collect();
    assert_eq!(completions, vec![3, 1]);
}

#[test]
fn test_invalid_process_rejected_before_run() {
    let processes = [ProcessSpec::new("P1", 0, 3), ProcessSpec::new("P2", 1, 0)];
    for policy in [Policy::Fcfs, Policy::Sjf, Policy::Srtf, Policy::Priority] {
        let err = run(policy, &processes, None).unwrap_err();
        assert_eq!(
            err,
            SchedulerError::invalid_process(1, "burst_time must be > 0, got 0")
        );
    }

    let err = run(Policy::RoundRobin, &[ProcessSpec::new("P1", -2, 3)], Some(2)).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidProcess { index: 0, .. }));
}

#[test]
fn test_result_serialization() {
    let result = run(Policy::RoundRobin, &demo(), Some(3)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["policy"], "round_robin");
    assert_eq!(json["quantum"], 3);
    assert_eq!(json["gantt"][0]["pid"], "P1");
    assert_eq!(json["processes"][2]["completion_time"], 8);
    assert!(json["processes"][0].get("priority").is_none());

    let back: SimulationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_huge_bursts_complete_without_overflow() {
    let processes = [
        ProcessSpec::new("P1", 0, i64::MAX),
        ProcessSpec::new("P2", 0, i64::MAX),
    ];
    let max = i64::MAX as u64;

    for policy in Policy::ALL {
        let quantum = policy.requires_quantum().then_some(i64::MAX);
        let result = run(policy, &processes, quantum).unwrap();

        assert_eq!(result.processes()[1].completion_time, 2 * max);
        assert_eq!(result.summary().makespan, 2 * max);
        assert_eq!(result.cpu_utilization(), 100.0);
        assert_eq!(result.avg_turnaround_time(), 1.5 * max as f64);
    }
}

#[test]
fn test_schedule_beyond_clock_range_rejected() {
    let processes = [
        ProcessSpec::new("P1", 0, i64::MAX),
        ProcessSpec::new("P2", 0, i64::MAX),
        ProcessSpec::new("P3", 0, i64::MAX),
    ];

    for policy in Policy::ALL {
        let quantum = policy.requires_quantum().then_some(4);
        let err = run(policy, &processes, quantum).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidProcess { index: 2, .. }));
    }
}
