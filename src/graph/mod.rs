pub mod route;
pub mod route_graph;
pub mod vertex;

pub use route::{Criterion, Route};
pub use route_graph::RouteGraph;
pub use vertex::Vertex;
