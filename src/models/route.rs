//! Route type.

use std::collections::HashSet;
use std::sync::Arc;

use super::{Client, Depot};

/// An ordered sequence of clients served from a depot.
///
/// A route starts and ends at its depot (not stored in `clients`). It is
/// legal when no client appears twice.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_drone_routing::models::{Client, Depot, Route};
///
/// let depot = Arc::new(Depot::origin());
/// let c1 = Arc::new(Client::new("C1", 1.0, 0.0, 10));
/// let c2 = Arc::new(Client::new("C2", 2.0, 0.0, 15));
///
/// let route = Route::new(vec![c1.clone(), c2], depot.clone());
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.total_demand(), 25);
/// assert!(route.is_legal());
///
/// let looped = Route::new(vec![c1.clone(), c1], depot);
/// assert!(!looped.is_legal());
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    clients: Vec<Arc<Client>>,
    depot: Arc<Depot>,
}

impl Route {
    /// Creates a route visiting `clients` in order.
    pub fn new(clients: Vec<Arc<Client>>, depot: Arc<Depot>) -> Self {
        Self { clients, depot }
    }

    /// Creates a route with no clients.
    pub fn empty(depot: Arc<Depot>) -> Self {
        Self::new(Vec::new(), depot)
    }

    /// Clients in visit order.
    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    /// The depot this route starts and ends at.
    pub fn depot(&self) -> &Arc<Depot> {
        &self.depot
    }

    /// Number of clients (excluding depot).
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` if this route visits no client.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// First client, if any.
    pub fn first(&self) -> Option<&Arc<Client>> {
        self.clients.first()
    }

    /// Last client, if any.
    pub fn last(&self) -> Option<&Arc<Client>> {
        self.clients.last()
    }

    /// Client identifiers in visit order.
    pub fn client_ids(&self) -> Vec<&str> {
        self.clients.iter().map(|c| c.id()).collect()
    }

    /// Position of `client` in this route.
    pub fn position(&self, client: &Client) -> Option<usize> {
        self.clients.iter().position(|c| c.is_same(client))
    }

    /// Returns `true` if `client` is visited by this route.
    pub fn contains(&self, client: &Client) -> bool {
        self.position(client).is_some()
    }

    /// Sum of client demands.
    pub fn total_demand(&self) -> u64 {
        self.clients.iter().map(|c| u64::from(c.demand())).sum()
    }

    /// Returns `true` if no client is visited twice.
    pub fn is_legal(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.clients.len());
        self.clients.iter().all(|c| seen.insert(c.id()))
    }

    /// Returns `true` if both routes use the same depot.
    pub fn same_depot(&self, other: &Route) -> bool {
        self.depot.id() == other.depot.id()
    }
}
