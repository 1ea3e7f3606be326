use blockflow_core::dinic;
use blockflow_core::{FlowNetwork, IdMapping, MaxFlowOptions, Termination};

fn network_with_arcs(n: usize, arcs: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut network = FlowNetwork::new(n).expect("vertex count");
    for &(tail, head, capacity) in arcs {
        network.add_arc(tail, head, capacity).expect("arc");
    }
    network
}

// Bounds, antisymmetry and conservation over the final assignment, plus the
// source balance matching the reported value.
fn assert_valid_flow(network: &FlowNetwork<i64>, source: usize, sink: usize, value: i64) {
    let n = network.vertex_count();
    for tail in 0..n {
        for head in 0..n {
            assert!(network.flow(tail, head) <= network.capacity(tail, head));
            assert_eq!(network.flow(tail, head), -network.flow(head, tail));
        }
    }
    for vertex in 0..n {
        let balance: i64 = (0..n).map(|head| network.flow(vertex, head)).sum();
        if vertex == source {
            assert_eq!(balance, value);
        } else if vertex == sink {
            assert_eq!(balance, -value);
        } else {
            assert_eq!(balance, 0);
        }
    }
}

#[test]
fn single_arc_takes_one_phase_and_one_search() {
    let mut network = network_with_arcs(2, &[(0, 1, 5)]);
    let outcome = dinic::max_flow(&mut network, 0, 1, &MaxFlowOptions::default()).unwrap();
    assert_eq!(outcome.value, 5);
    assert_eq!(outcome.stats.phases, 1);
    assert_eq!(outcome.stats.augmentations, 1);
    assert_eq!(outcome.termination, Termination::Exhausted);
    assert_valid_flow(&network, 0, 1, 5);
}

#[test]
fn diamond_with_cross_arc_reaches_two_thousand() {
    // The classic four-vertex instance, stated with 1-based labels.
    let ids = IdMapping::one_based(4);
    let arcs_1_based = [(1, 2, 1000), (1, 3, 1000), (2, 3, 1), (2, 4, 1000), (3, 4, 1000)];
    let mut network = FlowNetwork::new(ids.len()).unwrap();
    for &(tail, head, capacity) in &arcs_1_based {
        network
            .add_arc(
                ids.internal_id(tail).expect("tail label"),
                ids.internal_id(head).expect("head label"),
                capacity,
            )
            .unwrap();
    }

    let source = ids.internal_id(1).unwrap();
    let sink = ids.internal_id(4).unwrap();
    let outcome = dinic::max_flow(&mut network, source, sink, &MaxFlowOptions::default()).unwrap();
    assert_eq!(outcome.value, 2000);
    // The cross arc is never part of a shortest layering, so one phase does it.
    assert_eq!(outcome.stats.phases, 1);
    assert_eq!(network.flow(ids.internal_id(2).unwrap(), ids.internal_id(3).unwrap()), 0);
    assert_valid_flow(&network, source, sink, 2000);
}

#[test]
fn disconnected_sink_reports_zero_before_any_phase() {
    let mut network = network_with_arcs(4, &[(0, 1, 10), (2, 3, 10)]);
    let outcome = dinic::max_flow(&mut network, 0, 3, &MaxFlowOptions::default()).unwrap();
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.stats.phases, 0);
    assert_eq!(outcome.stats.augmentations, 0);
    assert_eq!(outcome.termination, Termination::Exhausted);
}

#[test]
fn rerunning_on_the_finished_network_adds_nothing() {
    let mut network = network_with_arcs(
        4,
        &[(0, 1, 1000), (0, 2, 1000), (1, 2, 1), (1, 3, 1000), (2, 3, 1000)],
    );
    let first = dinic::max_flow(&mut network, 0, 3, &MaxFlowOptions::default()).unwrap();
    assert_eq!(first.value, 2000);

    let second = dinic::max_flow(&mut network, 0, 3, &MaxFlowOptions::default()).unwrap();
    assert_eq!(second.value, 0);
    assert_eq!(second.stats.phases, 0);
    assert_eq!(second.termination, Termination::Exhausted);
    assert_valid_flow(&network, 0, 3, 2000);
}

#[test]
fn multi_phase_network_settles_at_nineteen() {
    let mut network = network_with_arcs(
        6,
        &[
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 4, 9),
            (3, 5, 10),
            (4, 3, 6),
            (4, 5, 10),
        ],
    );
    let outcome = dinic::max_flow(&mut network, 0, 5, &MaxFlowOptions::default()).unwrap();
    assert_eq!(outcome.value, 19);
    assert_eq!(outcome.stats.phases, 2);
    assert_valid_flow(&network, 0, 5, 19);

    // The residual cut certifies the value.
    let side = network.residual_reachable(0);
    assert!(side[0]);
    assert!(!side[5]);
    assert_eq!(network.cut_capacity(&side), 19);
}

#[test]
fn phase_limit_stops_between_phases_with_partial_flow() {
    let arcs = [
        (0, 1, 10),
        (0, 2, 10),
        (1, 3, 4),
        (1, 4, 8),
        (2, 4, 9),
        (3, 5, 10),
        (4, 3, 6),
        (4, 5, 10),
    ];
    let opts = MaxFlowOptions {
        phase_limit: Some(1),
        ..MaxFlowOptions::default()
    };
    let mut network = network_with_arcs(6, &arcs);
    let outcome = dinic::max_flow(&mut network, 0, 5, &opts).unwrap();
    assert_eq!(outcome.termination, Termination::PhaseLimit);
    assert_eq!(outcome.stats.phases, 1);
    // One blocking flow over the three-arc layering.
    assert_eq!(outcome.value, 14);
    assert_valid_flow(&network, 0, 5, 14);

    let opts = MaxFlowOptions {
        phase_limit: Some(0),
        ..MaxFlowOptions::default()
    };
    let mut network = network_with_arcs(6, &arcs);
    let outcome = dinic::max_flow(&mut network, 0, 5, &opts).unwrap();
    assert_eq!(outcome.termination, Termination::PhaseLimit);
    assert_eq!(outcome.value, 0);
}

#[test]
fn exhausted_time_budget_reports_time_limit() {
    let mut network = network_with_arcs(2, &[(0, 1, 5)]);
    let opts = MaxFlowOptions {
        time_limit_ms: Some(0),
        ..MaxFlowOptions::default()
    };
    let outcome = dinic::max_flow(&mut network, 0, 1, &opts).unwrap();
    assert_eq!(outcome.termination, Termination::TimeLimit);
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.stats.phases, 0);
}

#[test]
fn narrow_flow_widths_work_unchanged() {
    let mut network: FlowNetwork<i32> = FlowNetwork::new(3).unwrap();
    network.add_arc(0, 1, 3_i32).unwrap();
    network.add_arc(1, 2, 2).unwrap();
    let outcome = dinic::max_flow(&mut network, 0, 2, &MaxFlowOptions::default()).unwrap();
    assert_eq!(outcome.value, 2);
}
