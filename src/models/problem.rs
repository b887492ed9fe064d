//! Delivery problem instance and its solution history.

use std::sync::Arc;

use super::{Client, Depot, Solution};

/// A depot, its clients, and the solutions built against them so far.
///
/// # Examples
///
/// ```
/// use u_drone_routing::models::{Client, Depot, Problem};
///
/// let problem = Problem::new(
///     Depot::origin(),
///     vec![
///         Client::new("C1", 10.0, 0.0, 4),
///         Client::new("C2", 0.0, 10.0, 6),
///     ],
/// );
/// assert_eq!(problem.number_of_clients(), 2);
/// assert_eq!(problem.total_demand(), 10);
/// assert!(problem.solutions().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    depot: Arc<Depot>,
    clients: Vec<Arc<Client>>,
    solutions: Vec<Solution>,
}

impl Problem {
    /// Creates a problem with an empty solution history.
    pub fn new(depot: Depot, clients: Vec<Client>) -> Self {
        Self {
            depot: Arc::new(depot),
            clients: clients.into_iter().map(Arc::new).collect(),
            solutions: Vec::new(),
        }
    }

    /// The depot.
    pub fn depot(&self) -> &Arc<Depot> {
        &self.depot
    }

    /// Clients in problem order.
    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    /// Number of clients (excluding depot).
    pub fn number_of_clients(&self) -> usize {
        self.clients.len()
    }

    /// Sum of all client demands.
    pub fn total_demand(&self) -> u64 {
        self.clients.iter().map(|c| u64::from(c.demand())).sum()
    }

    /// Solutions in the order they were recorded.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// First recorded solution with the given name.
    pub fn solution_named(&self, name: &str) -> Option<&Solution> {
        self.solutions.iter().find(|s| s.name() == name)
    }

    /// Appends a solution to the history and returns it.
    pub fn push_solution(&mut self, solution: Solution) -> &Solution {
        let index = self.solutions.len();
        self.solutions.push(solution);
        &self.solutions[index]
    }

    /// Removes and returns the solution at `index`.
    pub fn remove_solution(&mut self, index: usize) -> Option<Solution> {
        (index < self.solutions.len()).then(|| self.solutions.remove(index))
    }

    /// Removes and returns the first solution with the given name.
    pub fn remove_solution_named(&mut self, name: &str) -> Option<Solution> {
        let index = self.solutions.iter().position(|s| s.name() == name)?;
        Some(self.solutions.remove(index))
    }

    /// Forgets every recorded solution.
    pub fn clear_solutions(&mut self) {
        self.solutions.clear();
    }
}
