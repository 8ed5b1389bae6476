//! Face tracing over the half-edges of a cut graph.
//!
//! Every distinct flattened segment contributes two half-edges. Outgoing
//! half-edges are sorted counter-clockwise around each vertex, and a walk that
//! always leaves through the clockwise neighbour of the arriving half-edge's
//! twin keeps the face on its left. Bounded faces therefore come out
//! counter-clockwise and the outside of each connected piece clockwise.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::math::{Coordinate, Direction};
use crate::topology::{ordered, CutGraph, EdgeId, FaceLoop, LoopSegment};

#[derive(Debug, Clone, Copy)]
struct HalfEdge {
    from: Coordinate,
    to: Coordinate,
    edge: EdgeId,
    segment: usize,
    forward: bool,
}

#[derive(Debug, Clone, Copy)]
struct Owner {
    edge: EdgeId,
    segment: usize,
    low_to_high: bool,
}

struct HalfEdgeMesh {
    halves: Vec<HalfEdge>,
    outgoing: HashMap<Coordinate, Vec<usize>>,
    position: Vec<usize>,
}

impl HalfEdgeMesh {
    fn build<P>(graph: &CutGraph<P>) -> Result<Self> {
        // Coincident segments collapse onto the first edge that contributed one.
        let mut unique: BTreeMap<(Coordinate, Coordinate), Owner> = BTreeMap::new();
        for (edge, data) in graph.edges() {
            for (segment, s) in data.solid_segments() {
                unique.entry(ordered(s.start, s.end)).or_insert(Owner {
                    edge,
                    segment,
                    low_to_high: s.start < s.end,
                });
            }
        }

        let mut halves = Vec::with_capacity(unique.len() * 2);
        for ((low, high), owner) in unique {
            halves.push(HalfEdge {
                from: low,
                to: high,
                edge: owner.edge,
                segment: owner.segment,
                forward: owner.low_to_high,
            });
            halves.push(HalfEdge {
                from: high,
                to: low,
                edge: owner.edge,
                segment: owner.segment,
                forward: !owner.low_to_high,
            });
        }

        let mut around: HashMap<Coordinate, Vec<(Direction, usize)>> = HashMap::new();
        for (h, half) in halves.iter().enumerate() {
            let (dx, dy) = half.from.delta(half.to);
            around
                .entry(half.from)
                .or_default()
                .push((Direction::new(dx, dy)?, h));
        }

        let mut position = vec![0; halves.len()];
        let mut outgoing = HashMap::with_capacity(around.len());
        for (at, mut fan) in around {
            fan.sort_unstable();
            for (i, (_, h)) in fan.iter().enumerate() {
                position[*h] = i;
            }
            outgoing.insert(at, fan.into_iter().map(|(_, h)| h).collect::<Vec<_>>());
        }

        Ok(Self {
            halves,
            outgoing,
            position,
        })
    }

    fn next(&self, h: usize) -> Result<usize> {
        let twin = h ^ 1;
        let fan = self
            .outgoing
            .get(&self.halves[h].to)
            .ok_or_else(|| TopologyError::InvalidTopology("half-edge ends at no vertex".into()))?;
        let n = fan.len();
        Ok(fan[(self.position[twin] + n - 1) % n])
    }

    fn cycles(&self) -> Result<Vec<Vec<usize>>> {
        let mut visited = vec![false; self.halves.len()];
        let mut cycles = Vec::new();
        for first in 0..self.halves.len() {
            if visited[first] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut h = first;
            loop {
                if visited[h] {
                    return Err(TopologyError::LoopNotClosed.into());
                }
                visited[h] = true;
                cycle.push(h);
                h = self.next(h)?;
                if h == first {
                    break;
                }
            }
            cycles.push(cycle);
        }
        Ok(cycles)
    }

    fn face_loop(&self, cycle: &[usize]) -> Result<FaceLoop> {
        let segments = cycle
            .iter()
            .map(|&h| {
                let half = &self.halves[h];
                LoopSegment {
                    edge: half.edge,
                    segment: half.segment,
                    forward: half.forward,
                    start: half.from,
                    end: half.to,
                }
            })
            .collect();
        Ok(FaceLoop::new(segments)?)
    }
}

struct Traced {
    boundary: Vec<usize>,
    face: FaceLoop,
    forward: usize,
}

/// Traces every closed loop of a cut graph.
///
/// Loops enclosing no area (dangling edges, trees) are dropped. When a loop's
/// boundary runs along exactly the twins of another loop's boundary, the pair
/// describes a single face seen from both sides and only one is kept: the one
/// running along more of its source edges' own directions, or the
/// counter-clockwise one on a tie. Dangling edges walked on both sides within
/// one loop are not part of its boundary.
pub(crate) fn trace_loops<P>(graph: &CutGraph<P>) -> Result<Vec<FaceLoop>> {
    let mesh = HalfEdgeMesh::build(graph)?;

    let mut traced = Vec::new();
    for cycle in mesh.cycles()? {
        let face = mesh.face_loop(&cycle)?;
        if face.signed_area_doubled() == 0 {
            trace!(segments = cycle.len(), "dropping loop without area");
            continue;
        }
        let walked: HashSet<usize> = cycle.iter().copied().collect();
        let boundary = sorted(cycle.into_iter().filter(|h| !walked.contains(&(h ^ 1))));
        let forward = boundary.iter().filter(|&&h| mesh.halves[h].forward).count();
        traced.push(Traced {
            boundary,
            face,
            forward,
        });
    }

    let index: HashMap<&[usize], usize> = traced
        .iter()
        .enumerate()
        .map(|(i, t)| (t.boundary.as_slice(), i))
        .collect();

    let mut dropped = vec![false; traced.len()];
    for i in 0..traced.len() {
        if dropped[i] {
            continue;
        }
        let twins = sorted(traced[i].boundary.iter().map(|h| h ^ 1));
        let Some(&j) = index.get(twins.as_slice()) else {
            continue;
        };
        if j == i || dropped[j] {
            continue;
        }
        let (a, b) = (&traced[i], &traced[j]);
        let keep_a = if a.forward == b.forward {
            a.face.is_counter_clockwise()
        } else {
            a.forward > b.forward
        };
        dropped[if keep_a { j } else { i }] = true;
    }

    Ok(traced
        .into_iter()
        .zip(dropped)
        .filter(|(_, dropped)| !dropped)
        .map(|(t, _)| t.face)
        .collect())
}

fn sorted(halves: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut v: Vec<usize> = halves.collect();
    v.sort_unstable();
    v
}
