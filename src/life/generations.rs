use crate::life::grid::{Grid, GridError};

/// Which of the two buffers currently holds the displayed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Front,
    Back,
}

impl Slot {
    fn other(self) -> Self {
        match self {
            Slot::Front => Slot::Back,
            Slot::Back => Slot::Front,
        }
    }
}

/// Double buffer of generations.
///
/// The active slot is the current truth; the inactive slot is the output of
/// the next step and only becomes active through [`Generations::swap`].
#[derive(Debug, Clone)]
pub struct Generations {
    front: Grid,
    back: Grid,
    active: Slot,
}

impl Generations {
    /// Allocates both buffers dead, with `Front` active.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            front: Grid::new(width, height)?,
            back: Grid::new(width, height)?,
            active: Slot::Front,
        })
    }

    /// Wraps an already seeded grid as the active generation.
    pub fn from_grid(grid: Grid) -> Self {
        let mut back = grid.clone();
        back.clear();
        Self {
            front: grid,
            back,
            active: Slot::Front,
        }
    }

    pub fn active_slot(&self) -> Slot {
        self.active
    }

    pub fn active(&self) -> &Grid {
        self.slot(self.active)
    }

    pub fn active_mut(&mut self) -> &mut Grid {
        match self.active {
            Slot::Front => &mut self.front,
            Slot::Back => &mut self.back,
        }
    }

    pub fn inactive(&self) -> &Grid {
        self.slot(self.active.other())
    }

    /// Borrows the active generation for reading and the inactive one for
    /// writing at the same time.
    pub fn split_mut(&mut self) -> (&Grid, &mut Grid) {
        match self.active {
            Slot::Front => (&self.front, &mut self.back),
            Slot::Back => (&self.back, &mut self.front),
        }
    }

    /// Flips the active tag. No cells are copied.
    pub fn swap(&mut self) {
        self.active = self.active.other();
    }

    fn slot(&self, slot: Slot) -> &Grid {
        match slot {
            Slot::Front => &self.front,
            Slot::Back => &self.back,
        }
    }
}
