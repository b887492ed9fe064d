//! Parallel savings construction: many fragments grown and spliced at once.

use std::sync::Arc;

use log::trace;

use crate::merge::{is_assigned, search_deliveries_for_client, sequential_merge_if_possible, Zones};
use crate::models::{Delivery, DeliveryParameters, Problem};

use super::{add_single_client_deliveries, pair_delivery, Saving};

/// Builds deliveries in a single pass over the non-negative savings.
///
/// For a pair `(a, b)`, `a` is looked up at the tail of an existing fragment
/// and `b` at the head of one:
///
/// - both found: tail fragment, pair and head fragment are spliced into one
/// - only the tail: `b` is appended to the tail fragment
/// - only the head: `a` is prepended to the head fragment
/// - neither: the pair starts a new fragment if both clients are still free
///
/// A result is accepted only if it is legal and serves no client already
/// served by a fragment it does not replace. Remaining clients get singleton
/// deliveries. Pairs whose indices fall outside [`Problem::clients`] are
/// ignored.
pub fn parallel_build_deliveries(
    problem: &Problem,
    parameters: &Arc<DeliveryParameters>,
    savings: &[Saving],
) -> Vec<Delivery> {
    let clients = problem.clients();
    let depot = problem.depot();
    let mut deliveries: Vec<Delivery> = Vec::new();

    let pairs = savings
        .iter()
        .filter(|s| s.value >= 0.0)
        .filter_map(|s| s.clients(clients));
    for (a, b) in pairs {
        let candidate = pair_delivery(a, b, depot, parameters);

        if deliveries.is_empty() {
            if candidate.is_legal() {
                deliveries.push(candidate);
            }
            continue;
        }

        let tail = search_deliveries_for_client(a, &deliveries, Zones::LAST);
        let head = search_deliveries_for_client(b, &deliveries, Zones::FIRST);

        match (tail, head) {
            (Some(t), Some(h)) => {
                if t == h {
                    continue;
                }
                let spliced = sequential_merge_if_possible(&candidate, &deliveries[t])
                    .and_then(|m| sequential_merge_if_possible(&m, &deliveries[h]));
                if let Some(d) = spliced {
                    replace(&mut deliveries, &[t, h], d);
                }
            }
            (Some(t), None) => {
                let merged = sequential_merge_if_possible(&candidate, &deliveries[t]);
                if let Some(d) = merged {
                    replace(&mut deliveries, &[t], d);
                }
            }
            (None, Some(h)) => {
                let fresh = pair_delivery(a, b, depot, parameters);
                let merged = sequential_merge_if_possible(&deliveries[h], &fresh);
                if let Some(d) = merged {
                    replace(&mut deliveries, &[h], d);
                }
            }
            (None, None) => {
                if !is_assigned(a, &deliveries)
                    && !is_assigned(b, &deliveries)
                    && candidate.is_legal()
                {
                    deliveries.push(candidate);
                }
            }
        }
    }

    add_single_client_deliveries(problem, parameters, &mut deliveries);
    deliveries
}

/// Swaps the fragments at `consumed` for `merged`, unless `merged` would
/// serve a client held by another fragment.
fn replace(deliveries: &mut Vec<Delivery>, consumed: &[usize], merged: Delivery) {
    let collides = deliveries
        .iter()
        .enumerate()
        .filter(|(idx, _)| !consumed.contains(idx))
        .any(|(_, d)| merged.clients().iter().any(|c| d.route().contains(c)));
    if collides {
        return;
    }

    trace!("spliced fragment {:?}", merged.route().client_ids());
    let mut consumed = consumed.to_vec();
    consumed.sort_unstable_by(|x, y| y.cmp(x));
    for idx in consumed {
        deliveries.remove(idx);
    }
    deliveries.push(merged);
}
