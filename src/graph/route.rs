use std::fmt::{self, Debug};
use std::str::FromStr;

use num_traits::Float;

use crate::Error;

/// The weight attribute a search optimizes for.
///
/// A closed enumeration of exactly the attributes a [`Route`] carries, so an
/// invalid criterion cannot reach the search engine. Textual input from
/// external collaborators goes through the case-insensitive [`FromStr`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Distance,
    Time,
    Cost,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Distance, Criterion::Time, Criterion::Cost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Distance => "distance",
            Criterion::Time => "time",
            Criterion::Cost => "cost",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        Criterion::ALL
            .into_iter()
            .find(|c| s.eq_ignore_ascii_case(c.as_str()))
            .ok_or_else(|| Error::UnknownCriterion(s.to_string()))
    }
}

/// A directed edge carrying three independent non-negative weights.
///
/// Routes are owned by the source vertex's adjacency list and hold no
/// back-reference to it. Non-negativity is not validated here; negative
/// weights silently void the optimality guarantee of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route<W>
where
    W: Float + Debug + Copy,
{
    pub destination: usize,
    pub distance: W,
    pub time: W,
    pub cost: W,
}

impl<W> Route<W>
where
    W: Float + Debug + Copy,
{
    pub fn new(destination: usize, distance: W, time: W, cost: W) -> Self {
        Route {
            destination,
            distance,
            time,
            cost,
        }
    }

    /// Selects the weight for the given criterion
    pub fn weight(&self, criterion: Criterion) -> W {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Time => self.time,
            Criterion::Cost => self.cost,
        }
    }
}

impl<W> fmt::Display for Route<W>
where
    W: Float + Debug + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-> ID {} (Dist: {}, Time: {}, Cost: {})",
            self.destination, self.distance, self.time, self.cost
        )
    }
}
