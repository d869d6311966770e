use crate::constants::SIDES_PER_SOLID;
use crate::editor::Editor;
use crate::id::IdAllocator;
use crate::side::Side;
use crate::types::EntityId;

/// A closed brush volume: exactly six side slots plus editor metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub id: EntityId,
    sides: [Side; SIDES_PER_SOLID],
    pub editor: Editor,
}

impl Solid {
    /// Build a solid with six unbound slots, consuming one id.
    pub fn new(ids: &IdAllocator, editor: Editor) -> Self {
        Self {
            id: ids.next_id(),
            sides: Default::default(),
            editor,
        }
    }

    /// Build a solid whose slots hold placeholder sides. Consumes the
    /// solid's id first, then one id per slot in slot order.
    pub fn with_placeholder_sides(ids: &IdAllocator, editor: Editor) -> Self {
        let id = ids.next_id();
        let sides = std::array::from_fn(|_| Side::placeholder(ids));
        Self { id, sides, editor }
    }

    /// Store `side` in slot `slot` (1..=6), replacing what was there.
    /// Any other slot number leaves the solid untouched.
    pub fn bind_side(&mut self, side: Side, slot: usize) {
        if let Some(index) = slot_index(slot) {
            self.sides[index] = side;
        }
    }

    /// The side in slot `slot` (1..=6).
    pub fn side(&self, slot: usize) -> Option<&Side> {
        slot_index(slot).map(|index| &self.sides[index])
    }

    /// All six slots in slot order.
    pub fn sides(&self) -> &[Side; SIDES_PER_SOLID] {
        &self.sides
    }

    /// Number of slots holding a constructed side.
    pub fn bound_side_count(&self) -> usize {
        self.sides.iter().filter(|s| !s.is_unbound()).count()
    }
}

fn slot_index(slot: usize) -> Option<usize> {
    (1..=SIDES_PER_SOLID).contains(&slot).then(|| slot - 1)
}
