//! The one entity type every sprite is made of, and the fixed-capacity pools holding them.

/// A sprite on the playfield: ship, star, asteroid or laser.
///
/// Positions and velocities are whole pixels and pixels per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MovingObject {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    pub active: bool,
}

impl MovingObject {
    /// An unused pool slot.
    pub const INACTIVE: Self = Self {
        x: 0,
        y: 0,
        vx: 0,
        vy: 0,
        active: false,
    };

    pub const fn new(x: i32, y: i32, vx: i32, vy: i32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            active: true,
        }
    }

    /// Move by one tick of velocity.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Axis-aligned proximity test: both `|dx|` and `|dy|` strictly below `threshold`.
    pub fn overlaps(&self, other: &Self, threshold: i32) -> bool {
        (self.x - other.x).abs() < threshold && (self.y - other.y).abs() < threshold
    }
}

/// Fixed-capacity slot array. Slots never move; deactivation is the only removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pool<const N: usize> {
    slots: [MovingObject; N],
}

impl<const N: usize> Default for Pool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Pool<N> {
    /// A pool with every slot inactive.
    pub const fn new() -> Self {
        Self {
            slots: [MovingObject::INACTIVE; N],
        }
    }

    /// Build a pool by deriving every slot from its index.
    pub fn from_fn(f: impl FnMut(usize) -> MovingObject) -> Self {
        Self {
            slots: core::array::from_fn(f),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn get(&self, slot: usize) -> Option<&MovingObject> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut MovingObject> {
        self.slots.get_mut(slot)
    }

    pub fn slots(&self) -> &[MovingObject; N] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [MovingObject; N] {
        &mut self.slots
    }

    /// Active objects with their slot index, in ascending slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &MovingObject)> {
        self.slots.iter().enumerate().filter(|(_, o)| o.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut MovingObject)> {
        self.slots.iter_mut().enumerate().filter(|(_, o)| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    /// Lowest-index inactive slot, if any.
    pub fn first_free(&mut self) -> Option<&mut MovingObject> {
        self.slots.iter_mut().find(|o| !o.active)
    }
}
