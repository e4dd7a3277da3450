use std::collections::HashMap;
use std::sync::Arc;

use crate::error::GraphError;

/// Dense node index assigned to each country code when the graph is built.
pub type NodeId = u32;

/// Country code exactly as it appears in the source data (e.g. `"CZE"`).
///
/// Shared so routes and cache entries can hand codes out without copying.
pub type CountryCode = Arc<str>;

/// Immutable land-border graph: interned country codes + ordered border lists.
///
/// Borders are stored exactly as supplied. If the source says `A` borders `B`
/// but not the other way round, only `A -> B` exists here. Codes that only
/// ever appear inside a border list are interned too and have no borders of
/// their own.
#[derive(Debug)]
pub struct BorderGraph {
    codes: Vec<CountryCode>,
    index: HashMap<CountryCode, NodeId>,
    borders: Vec<Vec<NodeId>>,
    /// Whether the code was listed as a key (vs. only referenced as a border).
    listed: Vec<bool>,
}

impl BorderGraph {
    fn with_capacity(country_count: usize) -> Self {
        Self {
            codes: Vec::with_capacity(country_count),
            index: HashMap::with_capacity(country_count),
            borders: Vec::with_capacity(country_count),
            listed: Vec::with_capacity(country_count),
        }
    }

    /// Build the graph from `(country, borders)` records.
    ///
    /// Record order and border order are preserved. A country listed twice
    /// is rejected rather than silently merged.
    pub fn from_borders<I, C, B, N>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (C, B)>,
        C: AsRef<str>,
        B: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let records = records.into_iter();
        let mut graph = Self::with_capacity(records.size_hint().0);

        for (code, borders) in records {
            let id = graph.intern(code.as_ref())? as usize;
            if graph.listed[id] {
                return Err(GraphError::DuplicateCountry(code.as_ref().to_string()));
            }
            graph.listed[id] = true;

            let neighbors = borders
                .into_iter()
                .map(|n| graph.intern(n.as_ref()))
                .collect::<Result<Vec<NodeId>, _>>()?;
            graph.borders[id] = neighbors;
        }

        Ok(graph)
    }

    fn intern(&mut self, code: &str) -> Result<NodeId, GraphError> {
        if let Some(&id) = self.index.get(code) {
            return Ok(id);
        }
        let id = next_id(self.codes.len())?;
        let code: CountryCode = Arc::from(code);
        self.codes.push(Arc::clone(&code));
        self.index.insert(code, id);
        self.borders.push(Vec::new());
        self.listed.push(false);
        Ok(id)
    }

    /// Look up the node for a country code. Case-sensitive, exact match.
    pub fn id_of(&self, code: &str) -> Option<NodeId> {
        self.index.get(code).copied()
    }

    /// Resolve a node back to its country code.
    pub fn code(&self, id: NodeId) -> &CountryCode {
        &self.codes[id as usize]
    }

    /// Bordering countries of `id`, in source order.
    pub fn borders(&self, id: NodeId) -> &[NodeId] {
        self.borders
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// True if the country was a key in the source data.
    pub fn is_listed(&self, id: NodeId) -> bool {
        self.listed.get(id as usize).copied().unwrap_or(false)
    }

    /// All node ids, in the order they were interned.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.codes.len() as NodeId
    }

    pub fn node_count(&self) -> usize {
        self.codes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.borders.iter().map(|b| b.len()).sum()
    }

    /// Border edges `a -> b` for which the source does not list `b -> a`.
    pub fn asymmetric_borders(&self) -> Vec<(NodeId, NodeId)> {
        self.node_ids()
            .flat_map(|a| self.borders(a).iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| !self.borders(b).contains(&a))
            .collect()
    }

    /// Codes that were referenced in a border list but never listed.
    pub fn unlisted_codes(&self) -> Vec<&CountryCode> {
        self.node_ids()
            .filter(|&id| !self.is_listed(id))
            .map(|id| self.code(id))
            .collect()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let codes: usize = self.codes.iter().map(|c| c.len() + 16).sum();
        let index = self.index.len() * (size_of::<CountryCode>() + size_of::<NodeId>() + 8);
        let borders: usize = self
            .borders
            .iter()
            .map(|b| b.len() * size_of::<NodeId>() + size_of::<Vec<NodeId>>())
            .sum();

        codes + index + borders + self.listed.len()
    }
}

/// Id for the country interned after `interned` others.
fn next_id(interned: usize) -> Result<NodeId, GraphError> {
    NodeId::try_from(interned).map_err(|_| GraphError::TooManyCountries(interned))
}
