//! Final slot placement.

use teamforge_core::{ModuleItem, Unit, TEAM_CAPACITY};

/// Four ordered slots; `None` marks an empty slot.
pub type Lineup = [Option<Unit>; TEAM_CAPACITY];

/// Places units into slots.
///
/// Items with a slot preference claim their slot first; when two items want
/// the same slot the first keeps it and the other is placed automatically.
/// Automatic items fill the remaining slots left to right, taken from the
/// back of the pending list.
pub fn lineup<'a>(items: impl IntoIterator<Item = &'a ModuleItem>) -> Lineup {
    let mut slots: Lineup = Default::default();
    let mut pending: Vec<&ModuleItem> = Vec::new();

    for item in items {
        match item.slot.index() {
            Some(i) if slots[i].is_none() => slots[i] = Some(item.unit.clone()),
            _ => pending.push(item),
        }
    }

    for slot in slots.iter_mut().filter(|s| s.is_none()) {
        match pending.pop() {
            Some(item) => *slot = Some(item.unit.clone()),
            None => break,
        }
    }

    slots
}
