pub mod edge;
pub mod face_loop;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face_loop::{FaceLoop, FaceTree, LoopSegment};
pub use vertex::{VertexData, VertexId};

use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;
use tracing::warn;

use crate::error::TopologyError;
use crate::geometry::Curve;
use crate::math::polygon_2d::classify_against_segments;
use crate::math::{BoundingBox, Coordinate, PointClassification};
use crate::tessellation::{flatten, FlattenParams};

/// Parameters shared by every operation on a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphParams {
    /// How edges are flattened for intersection and face tracing.
    pub flatten: FlattenParams,
    /// Maximum number of cutting rounds; pieces still crossing after the last round are left as is.
    pub max_cut_rounds: u32,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            flatten: FlattenParams::default(),
            max_cut_rounds: 8,
        }
    }
}

impl GraphParams {
    #[must_use]
    pub fn with_flatten(mut self, flatten: FlattenParams) -> Self {
        self.flatten = flatten;
        self
    }

    #[must_use]
    pub fn with_max_cut_rounds(mut self, max_cut_rounds: u32) -> Self {
        self.max_cut_rounds = max_cut_rounds;
        self
    }
}

/// Arena that owns the vertices and edges of a curve graph.
///
/// Vertices are keyed by exact coordinate: adding an edge whose end lands on an
/// existing coordinate reuses that vertex. Edges and vertices reference each
/// other through typed IDs (generational indices), so removing and re-inserting
/// edges while cutting cannot leave dangling references.
#[derive(Debug, Clone)]
pub struct CutGraph<P> {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData<P>>,
    index: HashMap<Coordinate, VertexId>,
    params: GraphParams,
}

impl<P> Default for CutGraph<P> {
    fn default() -> Self {
        Self::with_params(GraphParams::default())
    }
}

impl<P> CutGraph<P> {
    /// Creates a new, empty graph with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty graph.
    #[must_use]
    pub fn with_params(params: GraphParams) -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            index: HashMap::new(),
            params,
        }
    }

    #[must_use]
    pub fn params(&self) -> &GraphParams {
        &self.params
    }

    // --- Vertex operations ---

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// The vertex at exactly `at`, if any edge ends there.
    #[must_use]
    pub fn vertex_at(&self, at: Coordinate) -> Option<VertexId> {
        self.index.get(&at).copied()
    }

    /// Edges whose curve starts at `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn edges_leaving(&self, id: VertexId) -> Result<&[EdgeId], TopologyError> {
        Ok(&self.vertex(id)?.leaving)
    }

    /// Edges whose curve ends at `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn edges_entering(&self, id: VertexId) -> Result<&[EdgeId], TopologyError> {
        Ok(&self.vertex(id)?.entering)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData<P>, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData<P>)> {
        self.edges.iter()
    }

    /// A snapshot of the current edge IDs, safe to hold while mutating the graph.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().collect()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Adds a curve as an edge without cutting it against the rest of the graph.
    ///
    /// Degenerate curves (every control point identical) are not geometry and
    /// are dropped; `None` is returned for them.
    pub fn add_edge(&mut self, curve: Curve, payload: P) -> Option<EdgeId> {
        if curve.is_degenerate() {
            warn!(?curve, "dropping zero-length curve");
            return None;
        }

        let segments = flatten(&curve, self.params.flatten);
        let start = self.ensure_vertex(curve.start());
        let end = self.ensure_vertex(curve.end());
        let id = self.edges.insert(EdgeData {
            start,
            end,
            curve,
            payload,
            segments,
            bounds: curve.bounding_box(),
        });

        if let Some(v) = self.vertices.get_mut(start) {
            v.leaving.push(id);
        }
        if let Some(v) = self.vertices.get_mut(end) {
            v.entering.push(id);
        }
        Some(id)
    }

    /// Removes an edge, detaching it from its vertices and dropping any vertex left orphaned.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the graph.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<EdgeData<P>, TopologyError> {
        let data = self
            .edges
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))?;

        if let Some(v) = self.vertices.get_mut(data.start) {
            v.leaving.retain(|e| *e != id);
        }
        if let Some(v) = self.vertices.get_mut(data.end) {
            v.entering.retain(|e| *e != id);
        }
        for vid in [data.start, data.end] {
            let orphan = self.vertices.get(vid).is_some_and(VertexData::is_orphan);
            if orphan {
                if let Some(v) = self.vertices.remove(vid) {
                    self.index.remove(&v.at);
                }
            }
        }
        Ok(data)
    }

    fn ensure_vertex(&mut self, at: Coordinate) -> VertexId {
        if let Some(&id) = self.index.get(&at) {
            return id;
        }
        let id = self.vertices.insert(VertexData::new(at));
        self.index.insert(at, id);
        id
    }

    // --- Queries ---

    /// Bounding box of every edge, or `None` for an empty graph.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.edges.values().map(|e| e.bounds).reduce(BoundingBox::union)
    }

    /// Classifies a point against the graph treated as a set of closed boundaries.
    ///
    /// Uses the even-odd rule over the flattened edges; coincident duplicate
    /// segments count once.
    #[must_use]
    pub fn classify_point(&self, p: Coordinate) -> PointClassification {
        self.classify_doubled(p.doubled())
    }

    /// Classifies a point given in doubled coordinates, so segment midpoints are exact.
    pub(crate) fn classify_doubled(&self, p: (i64, i64)) -> PointClassification {
        classify_against_segments(self.boundary_doubled(), p)
    }

    /// Every distinct flattened segment, in doubled coordinates.
    pub(crate) fn boundary_doubled(&self) -> Vec<((i64, i64), (i64, i64))> {
        let unique: HashSet<(Coordinate, Coordinate)> = self
            .edges
            .values()
            .flat_map(|e| e.solid_segments().map(|(_, s)| ordered(s.start, s.end)))
            .collect();
        unique
            .into_iter()
            .map(|(a, b)| (a.doubled(), b.doubled()))
            .collect()
    }
}

impl<P: Clone> CutGraph<P> {
    /// Every edge's curve with its payload.
    #[must_use]
    pub fn curves(&self) -> Vec<(Curve, P)> {
        self.edges
            .values()
            .map(|e| (e.curve, e.payload.clone()))
            .collect()
    }
}

/// Orders a coordinate pair lexicographically; the key under which coincident segments collapse.
#[must_use]
pub fn ordered(a: Coordinate, b: Coordinate) -> (Coordinate, Coordinate) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
