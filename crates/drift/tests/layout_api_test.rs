//! Integration tests for the public layout API
//!
//! These tests drive generation, stepping, and cooling the way an external
//! render loop would.

use float_cmp::assert_approx_eq;

use drift::{
    DriftError,
    config::{CoolingConfig, LayoutConfig},
    cooling::{Convergence, CoolingSchedule},
    engine::{Engine, ideal_edge_length},
    generator::GraphGenerator,
    geometry::{Canvas, Point},
    graph::Graph,
    simulation::Simulation,
};

fn canvas() -> Canvas {
    Canvas::new(800.0, 600.0).expect("valid canvas")
}

#[test]
fn test_external_driver_loop_terminates() {
    let mut graph = GraphGenerator::seeded(2024)
        .generate(40, 60, canvas())
        .expect("feasible request");
    let k = ideal_edge_length(canvas(), graph.vertex_count());
    let mut engine = Engine::default();
    let mut schedule = CoolingSchedule::new(&CoolingConfig::default()).unwrap();

    let mut iterations = 0;
    loop {
        let max_displacement = engine.step(&mut graph, canvas(), k, schedule.temperature());
        schedule.cool();
        iterations += 1;
        if schedule.convergence(max_displacement).is_done() {
            break;
        }
    }

    assert!(iterations <= schedule.steps_to_floor());
    assert!(graph.positions().all(|p| canvas().contains(p)));
}

#[test]
fn test_edgeless_graph_uses_repulsion_only() {
    let mut graph = GraphGenerator::seeded(10)
        .generate(10, 0, canvas())
        .expect("feasible request");
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 0);

    let k = ideal_edge_length(canvas(), 10);
    let mut engine = Engine::default();
    let forces = engine.accumulate_forces(&graph, k).to_vec();

    // With no springs the net force is the plain sum of pairwise repulsions.
    let positions: Vec<Point> = graph.positions().collect();
    for (i, force) in forces.iter().enumerate() {
        let expected = positions
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(Point::ZERO, |acc, (_, other)| {
                acc.add_point(drift::engine::repulsion(
                    positions[i].sub_point(*other),
                    k,
                    engine.epsilon(),
                ))
            });
        assert_approx_eq!(f64, force.x(), expected.x());
        assert_approx_eq!(f64, force.y(), expected.y());
    }

    let max_displacement = engine.step(&mut graph, canvas(), k, 100.0);
    assert!(max_displacement > 0.0);
    assert!(max_displacement <= 100.0 + 1e-9);
}

#[test]
fn test_two_vertex_scenario() {
    let canvas = Canvas::new(200.0, 200.0).unwrap();
    let mut graph = Graph::new(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        [(0, 1)],
    )
    .unwrap();

    let mut engine = Engine::default();
    let max_displacement = engine.step(&mut graph, canvas, 50.0, 10.0);

    assert_approx_eq!(f64, max_displacement, 10.0, epsilon = 1e-9);
    let separation = graph.vertices()[1]
        .position()
        .sub_point(graph.vertices()[0].position())
        .hypot();
    assert_approx_eq!(f64, separation, 80.0, epsilon = 1e-9);
}

#[test]
fn test_seeded_simulations_match() {
    let mut config = LayoutConfig::default();
    config.generator_mut().set_seed(Some(5)).set_vertices(25).set_edges(35);

    let mut a = Simulation::random(&config).unwrap();
    let mut b = Simulation::random(&config).unwrap();
    let summary_a = a.run();
    let summary_b = b.run();

    assert_eq!(summary_a, summary_b);
    assert_eq!(a.graph().vertices(), b.graph().vertices());
}

#[test]
fn test_infeasible_generation_is_reported() {
    let mut config = LayoutConfig::default();
    config.generator_mut().set_vertices(4).set_edges(7);

    let err = Simulation::random(&config).unwrap_err();
    assert!(matches!(err, DriftError::InvalidParameter(_)));
    assert!(err.to_string().contains("at most 6"));
}

#[test]
fn test_loader_errors_convert() {
    let result: Result<Graph, DriftError> =
        Graph::new(vec![Point::ZERO, Point::ZERO], [(0, 0)]).map_err(DriftError::from);
    assert!(matches!(result, Err(DriftError::Graph(_))));
}

#[test]
fn test_simulation_ticks_until_done() {
    let mut simulation = Simulation::random(&LayoutConfig::default()).unwrap();
    let mut ticks = Vec::new();
    loop {
        let tick = simulation.tick();
        ticks.push(tick);
        if tick.convergence != Convergence::Running {
            break;
        }
    }

    assert!(ticks.len() <= 90);
    assert!(ticks.windows(2).all(|w| w[1].temperature < w[0].temperature));
    assert!(ticks.iter().all(|t| t.max_displacement <= t.temperature + 1e-9));
}
