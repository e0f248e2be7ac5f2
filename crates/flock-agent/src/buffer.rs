//! Double-buffered flock storage.
//!
//! # Why two `Vec`s?
//!
//! Every agent update reads the whole flock as it was at the end of the
//! previous tick and writes only its own slot.  Updating in place would let
//! agent `j` observe agent `i`'s new position mid-tick.  `BoidBuffer` keeps
//! the previous tick in `front` and collects writes in `back`; the borrow
//! split in [`BoidBuffer::split`] makes the read-all/write-own partition a
//! compile-time fact:
//!
//! ```ignore
//! let (snapshot, out) = buffer.split();
//! out.par_iter_mut()
//!     .enumerate()
//!     .for_each(|(i, slot)| *slot = update_boid(AgentId(i as u32), snapshot, ..));
//! buffer.swap();
//! ```

use flock_core::{AgentId, FlockError, FlockResult};

use crate::Boid;

pub struct BoidBuffer {
    front: Vec<Boid>,
    back:  Vec<Boid>,
}

impl BoidBuffer {
    /// Wrap an initialized flock.  Both halves start identical.
    pub fn new(boids: Vec<Boid>) -> Self {
        let back = boids.clone();
        Self { front: boids, back }
    }

    /// Number of agents.  Fixed for the lifetime of the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.front.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.front.len() as u32).map(AgentId)
    }

    /// The committed state (end of the last tick).
    #[inline]
    pub fn current(&self) -> &[Boid] {
        &self.front
    }

    pub fn get(&self, agent: AgentId) -> Option<&Boid> {
        self.front.get(agent.index())
    }

    /// Overwrite one committed record between ticks.
    pub fn set(&mut self, agent: AgentId, boid: Boid) -> FlockResult<()> {
        let slot = self
            .front
            .get_mut(agent.index())
            .ok_or(FlockError::AgentNotFound(agent))?;
        *slot = boid;
        Ok(())
    }

    /// Borrow the committed snapshot immutably and the write half mutably.
    #[inline]
    pub fn split(&mut self) -> (&[Boid], &mut [Boid]) {
        (&self.front, &mut self.back)
    }

    /// Commit the write half: it becomes the new snapshot.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Raw bytes of the committed state, laid out for a GPU structured
    /// buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.front)
    }

    /// Consume the buffer, returning the committed state.
    pub fn into_vec(self) -> Vec<Boid> {
        self.front
    }
}
