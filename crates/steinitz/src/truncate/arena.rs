//! Vertex arena with stable handles and tombstones.
//!
//! Handles never move while a rewrite is in progress; removed vertices leave a
//! tombstone behind. `compact` renumbers survivors in handle order.

/// Stable vertex handle; equals the original vertex index for seeded entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Handle(pub(crate) usize);

#[derive(Clone, Debug)]
enum Slot {
    Live(Vec<Handle>),
    Tombstone,
}

#[derive(Clone, Debug)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
}

/// Dense rotations plus the handle → index table (`None` for tombstones).
pub(crate) struct Compacted {
    pub(crate) rotations: Vec<Vec<usize>>,
    pub(crate) relabel: Vec<Option<usize>>,
}

impl Arena {
    pub(crate) fn from_rotations(rotations: &[Vec<usize>]) -> Self {
        let slots = rotations
            .iter()
            .map(|rot| Slot::Live(rot.iter().copied().map(Handle).collect()))
            .collect();
        Self { slots }
    }

    pub(crate) fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Live(_)))
            .count()
    }

    /// Append a live vertex.
    pub(crate) fn insert(&mut self, rotation: Vec<Handle>) -> Handle {
        self.slots.push(Slot::Live(rotation));
        Handle(self.slots.len() - 1)
    }

    /// Remove `h`, returning its rotation; `None` if already dead or unknown.
    pub(crate) fn tombstone(&mut self, h: Handle) -> Option<Vec<Handle>> {
        let slot = self.slots.get_mut(h.0)?;
        match std::mem::replace(slot, Slot::Tombstone) {
            Slot::Live(rot) => Some(rot),
            Slot::Tombstone => None,
        }
    }

    pub(crate) fn set_rotation(&mut self, h: Handle, rotation: Vec<Handle>) -> bool {
        match self.slots.get_mut(h.0) {
            Some(Slot::Live(rot)) => {
                *rot = rotation;
                true
            }
            _ => false,
        }
    }

    /// Replace `from` by `to` in the rotation of `at`, keeping its slot.
    pub(crate) fn redirect(&mut self, at: Handle, from: Handle, to: Handle) -> bool {
        let Some(Slot::Live(rot)) = self.slots.get_mut(at.0) else {
            return false;
        };
        match rot.iter_mut().find(|x| **x == from) {
            Some(x) => {
                *x = to;
                true
            }
            None => false,
        }
    }

    /// Renumber live slots densely in handle order.
    ///
    /// Fails with the offending handle if a live rotation still points at a
    /// tombstone.
    pub(crate) fn compact(&self) -> Result<Compacted, Handle> {
        let mut relabel = vec![None; self.slots.len()];
        let mut next = 0;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Slot::Live(_) = slot {
                relabel[i] = Some(next);
                next += 1;
            }
        }
        let mut rotations = Vec::with_capacity(next);
        for slot in &self.slots {
            let Slot::Live(rot) = slot else { continue };
            let mapped = rot
                .iter()
                .map(|h| relabel.get(h.0).copied().flatten().ok_or(*h))
                .collect::<Result<Vec<_>, _>>()?;
            rotations.push(mapped);
        }
        Ok(Compacted { rotations, relabel })
    }
}
