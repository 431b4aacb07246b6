/*!
# Route Networks

The code-keyed layer on top of the dense graph core. A [`RouteNetwork`] pairs
an [`AdjArrayWeighted`] with per-airport attributes and a hash index from
string code to [`Node`], and re-exposes every algorithm keyed by code.

Networks are assembled through [`RouteNetworkBuilder`], which enforces the
structural invariants the algorithms rely on:

- codes are unique (the first record for a code wins),
- route weights are non-negative and finite,
- self-loops are ignored,
- parallel routes between the same pair collapse to the minimum weight.

After [`RouteNetworkBuilder::build`] the network is read-only; all queries and
algorithm invocations only take `&self` and never mutate the graph, so a built
network can be shared freely across concurrent readers.
*/

use fxhash::FxHashMap;

use crate::{algo::*, edge::*, error::*, node::*, ops::*, repr::*};

/// Attributes of a single airport vertex. Everything besides `code` is
/// informational payload carried along for the caller; the algorithms never
/// interpret it.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Incremental builder for [`RouteNetwork`]s. Airports must be registered
/// before routes referencing them are added.
#[derive(Default)]
pub struct RouteNetworkBuilder {
    airports: Vec<Airport>,
    index: FxHashMap<String, Node>,
    routes: FxHashMap<Edge, Weight>,
}

impl RouteNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport and returns its node id. If the code is already
    /// known the first record wins and its id is returned unchanged.
    pub fn add_airport(&mut self, airport: Airport) -> Node {
        if let Some(&u) = self.index.get(&airport.code) {
            return u;
        }

        let u = self.airports.len() as Node;
        self.index.insert(airport.code.clone(), u);
        self.airports.push(airport);
        u
    }

    /// Adds an undirected route between two registered airports.
    ///
    /// Returns `Ok(true)` if the route was inserted or lowered an existing
    /// weight, `Ok(false)` if it was ignored (self-loop, or a parallel route
    /// that does not improve on the stored weight).
    ///
    /// # Errors
    /// [`GraphError::UnknownAirport`] if either code is unregistered,
    /// [`GraphError::InvalidWeight`] if `weight` is negative, NaN or infinite.
    pub fn add_route(&mut self, from: &str, to: &str, weight: Weight) -> Result<bool> {
        let u = self.lookup(from)?;
        let v = self.lookup(to)?;

        if !(weight >= 0.0) || !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        if u == v {
            return Ok(false);
        }

        let slot = self
            .routes
            .entry(Edge(u, v).normalized())
            .or_insert(INFINITE_WEIGHT);
        if weight < *slot {
            *slot = weight;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Finalizes the builder into an immutable network.
    pub fn build(self) -> RouteNetwork {
        let n = self.airports.len() as NumNodes;
        let graph = AdjArrayWeighted::from_edges(
            n,
            self.routes.iter().map(|(&Edge(u, v), &w)| (u, v, w)),
        );

        RouteNetwork {
            graph,
            airports: self.airports,
            index: self.index,
        }
    }

    fn lookup(&self, code: &str) -> Result<Node> {
        self.index
            .get(code)
            .copied()
            .ok_or_else(|| GraphError::UnknownAirport(code.to_string()))
    }
}

/// An immutable weighted route network with code-keyed queries.
pub struct RouteNetwork {
    graph: AdjArrayWeighted,
    airports: Vec<Airport>,
    index: FxHashMap<String, Node>,
}

impl RouteNetwork {
    pub fn builder() -> RouteNetworkBuilder {
        RouteNetworkBuilder::new()
    }

    /// Number of airports in the network
    pub fn node_count(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Number of (collapsed, undirected) routes in the network
    pub fn route_count(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    /// Returns *true* if an airport with the given code exists
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Resolves a code to its dense node id
    pub fn node_of(&self, code: &str) -> Result<Node> {
        self.index
            .get(code)
            .copied()
            .ok_or_else(|| GraphError::UnknownAirport(code.to_string()))
    }

    /// Returns the code of a node id
    /// ** Panics if `u >= n` **
    pub fn code_of(&self, u: Node) -> &str {
        &self.airports[u as usize].code
    }

    /// Returns the attribute record of an airport
    pub fn airport(&self, code: &str) -> Result<&Airport> {
        Ok(&self.airports[self.node_of(code)? as usize])
    }

    /// Iterates over all airports in node-id order
    pub fn airports(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.airports.iter()
    }

    /// Enumerates the direct routes of an airport as `(destination, weight)`
    pub fn routes_from(&self, code: &str) -> Result<impl Iterator<Item = (&Airport, Weight)> + '_> {
        let u = self.node_of(code)?;
        Ok(self
            .graph
            .neighbors_of(u)
            .map(|(v, w)| (&self.airports[v as usize], w)))
    }

    /// Read access to the underlying dense graph
    pub fn graph(&self) -> &AdjArrayWeighted {
        &self.graph
    }

    /// Returns the connected components of the network as lists of airport
    /// codes, each component in BFS visitation order, components in discovery
    /// order. Together they partition the airports; an empty network yields
    /// an empty list.
    pub fn components(&self) -> Vec<Vec<&str>> {
        self.graph
            .connected_components()
            .map(|cc| cc.into_iter().map(|u| self.code_of(u)).collect())
            .collect()
    }

    /// Computes a minimum spanning tree of the component containing `start`
    pub fn minimum_spanning_tree(&self, start: &str) -> Result<SpanningTree> {
        let u = self.node_of(start)?;
        Ok(self.graph.minimum_spanning_tree(u))
    }

    /// Computes one minimum spanning tree per connected component, rooted at
    /// the first discovered vertex of each component.
    pub fn component_spanning_trees(&self) -> impl Iterator<Item = SpanningTree> + '_ {
        self.graph
            .connected_components()
            .map(|cc| self.graph.minimum_spanning_tree(cc[0]))
    }

    /// Computes shortest-path distances and predecessors from `source` to
    /// every airport of the network.
    pub fn shortest_paths(&self, source: &str) -> Result<ShortestPathTree> {
        let u = self.node_of(source)?;
        Ok(self.graph.shortest_paths(u))
    }

    /// Looks up the distance to `to` in a previously computed tree,
    /// [`INFINITE_WEIGHT`] if unreachable.
    pub fn distance(&self, tree: &ShortestPathTree, to: &str) -> Result<Weight> {
        Ok(tree.distance(self.node_of(to)?))
    }

    /// Reconstructs the shortest path to `to` as a list of airport codes,
    /// empty if `to` cannot be reached from the tree's source.
    pub fn path<'a>(&'a self, tree: &ShortestPathTree, to: &str) -> Result<Vec<&'a str>> {
        let v = self.node_of(to)?;
        Ok(tree
            .path_to(v)
            .into_iter()
            .map(|u| self.code_of(u))
            .collect())
    }
}
