//! Interactive console front-end for the route planner.
//!
//! Collects a start location, an end location, an optimization criterion and
//! a transport mode, then renders the least-cost path found by the library.
//! All fixture data lives here; the engine itself knows nothing about it.

use std::error::Error;
use std::io::{self, BufRead, Write};

use ordered_float::OrderedFloat;
use route_planner::{find_shortest_path, Criterion, RouteGraph};

type Weight = OrderedFloat<f64>;

const LOCATIONS: [(usize, &str); 6] = [
    (0, "Hanoi"),
    (1, "Hai Phong"),
    (2, "Da Nang"),
    (3, "Ho Chi Minh City"),
    (4, "Hue"),
    (5, "Nha Trang"),
];

const TRANSPORT_MODES: [&str; 4] = ["car", "motorbike", "train", "plane"];

/// One row per connection: (from, to, distance km, time hours, cost USD).
/// Every connection is traversable both ways, so each row is mirrored when
/// the graph is built.
const CAR_ROUTES: &[(usize, usize, f64, f64, f64)] = &[
    (0, 1, 120.0, 2.0, 15.0),
    (0, 2, 770.0, 14.0, 70.0),
    (0, 4, 670.0, 12.0, 60.0),
    (0, 3, 1680.0, 30.0, 110.0),
    (1, 2, 890.0, 16.0, 85.0),
    (4, 2, 100.0, 2.0, 12.0),
    (4, 3, 950.0, 18.0, 90.0),
    (2, 5, 530.0, 9.0, 50.0),
    (2, 3, 850.0, 16.0, 80.0),
    (5, 3, 430.0, 7.5, 40.0),
];

const MOTORBIKE_ROUTES: &[(usize, usize, f64, f64, f64)] = &[
    (0, 1, 125.0, 2.5, 7.0),
    (0, 2, 800.0, 18.0, 45.0),
    (0, 4, 690.0, 15.0, 40.0),
    (0, 3, 1730.0, 43.25, 85.0),
    (1, 2, 920.0, 20.0, 55.0),
    (4, 2, 120.0, 3.5, 8.0),
    (4, 3, 980.0, 22.0, 60.0),
    (2, 5, 550.0, 11.0, 30.0),
    (2, 3, 900.0, 20.0, 50.0),
    (5, 3, 450.0, 9.0, 25.0),
];

// Rail does not serve Hai Phong - Da Nang directly; that leg connects
// through Hanoi instead.
const TRAIN_ROUTES: &[(usize, usize, f64, f64, f64)] = &[
    (0, 1, 105.0, 2.2, 10.0),
    (0, 2, 790.0, 16.0, 50.0),
    (0, 4, 688.0, 13.5, 45.0),
    (0, 3, 1710.0, 38.25, 95.0),
    (4, 2, 103.0, 2.5, 7.0),
    (4, 3, 1040.0, 20.0, 70.0),
    (2, 5, 524.0, 10.0, 40.0),
    (2, 3, 935.0, 17.0, 60.0),
    (5, 3, 411.0, 8.0, 30.0),
];

const PLANE_ROUTES: &[(usize, usize, f64, f64, f64)] = &[
    (0, 2, 630.0, 1.25, 65.0),
    (0, 4, 540.0, 1.15, 60.0),
    (0, 3, 1160.0, 2.15, 125.0),
    (4, 3, 615.0, 1.4, 75.0),
    (2, 5, 400.0, 1.0, 55.0),
    (2, 3, 610.0, 1.3, 70.0),
    (5, 3, 305.0, 1.0, 50.0),
];

fn routes_for_mode(mode: &str) -> Option<&'static [(usize, usize, f64, f64, f64)]> {
    match mode {
        "car" => Some(CAR_ROUTES),
        "motorbike" => Some(MOTORBIKE_ROUTES),
        "train" => Some(TRAIN_ROUTES),
        "plane" => Some(PLANE_ROUTES),
        _ => None,
    }
}

fn build_graph_for_mode(mode: &str) -> route_planner::Result<RouteGraph<Weight>> {
    let mut graph = RouteGraph::new(LOCATIONS.len())?;
    for (id, name) in LOCATIONS {
        graph.add_vertex(id, name)?;
    }
    if let Some(routes) = routes_for_mode(mode) {
        for &(from, to, distance, time, cost) in routes {
            let (d, t, c) = (OrderedFloat(distance), OrderedFloat(time), OrderedFloat(cost));
            graph.add_edge(from, to, d, t, c)?;
            graph.add_edge(to, from, d, t, c)?;
        }
    }
    Ok(graph)
}

fn unit_for(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Distance => "km",
        Criterion::Time => "hours",
        Criterion::Cost => "USD",
    }
}

fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_lowercase())
}

fn run() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        println!("\n--- Available Locations ---");
        for (id, name) in LOCATIONS {
            println!("- {} (ID: {})", name, id);
        }
        println!("-------------------------");

        let start = match prompt(&mut stdin, "Enter Start Location ID: ")?.parse::<usize>() {
            Ok(id) => id,
            Err(_) => {
                println!("Invalid input. Please enter a numeric ID.");
                continue;
            }
        };
        let end = match prompt(&mut stdin, "Enter End Location ID: ")?.parse::<usize>() {
            Ok(id) => id,
            Err(_) => {
                println!("Invalid input. Please enter a numeric ID.");
                continue;
            }
        };

        let criterion_input =
            prompt(&mut stdin, "Enter Optimization Criteria (distance, time, cost): ")?;
        let criterion = match criterion_input.parse::<Criterion>() {
            Ok(c) => c,
            Err(_) => {
                println!("Invalid criteria. Please enter 'distance', 'time', or 'cost'.");
                continue;
            }
        };

        let mode = prompt(
            &mut stdin,
            "Enter Transport Mode (car, motorbike, train, plane): ",
        )?;
        if !TRANSPORT_MODES.contains(&mode.as_str()) {
            println!("Invalid transport mode.");
            continue;
        }

        let graph = build_graph_for_mode(&mode)?;
        let result = find_shortest_path(&graph, start, end, criterion);

        println!("\n--- Result ---");
        if result.is_found() {
            println!(
                "Optimal path using '{}' based on '{}':",
                mode, criterion
            );
            let names: Vec<&str> = result.path().iter().map(|v| v.name.as_str()).collect();
            println!("{}", names.join(" -> "));
            println!(
                "Total {}: {:.2} {}",
                criterion,
                result.total().into_inner(),
                unit_for(criterion)
            );
        } else {
            println!("No path found between the specified locations.");
        }
        println!("--------------");

        let again = prompt(&mut stdin, "Find another route? (yes/no): ")?;
        if again != "yes" {
            break;
        }
    }

    println!("\nExiting Travel Planner. Goodbye!");
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
