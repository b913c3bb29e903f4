//! Inventory operations on the element map.
//!
//! Entries are created lazily the first time an element is added and are
//! never deleted: removing the last unit leaves a zero-count entry whose
//! `discovered` flag stays set. All arithmetic is checked.

use std::collections::BTreeMap;

use alchemy_types::{ElementId, InventoryEntry};

use crate::error::GameError;

/// The element map carried by the game state.
pub type Inventory = BTreeMap<ElementId, InventoryEntry>;

/// Check whether the inventory holds at least `amount` of `id`.
pub fn has_element(inventory: &Inventory, id: &str, amount: u32) -> bool {
    inventory.get(id).map_or(0, |e| e.count) >= amount
}

/// Add `amount` units of `id`, marking it discovered.
///
/// Returns `true` when this call discovered the element.
pub fn add_element(inventory: &mut Inventory, id: &ElementId, amount: u32) -> Result<bool, GameError> {
    let entry = inventory.entry(id.clone()).or_default();
    entry.count = entry.count.checked_add(amount).ok_or_else(|| GameError::ArithmeticOverflow {
        context: format!("inventory count overflow for {id}"),
    })?;
    let first = !entry.discovered;
    entry.discovered = true;
    Ok(first)
}

/// Remove `amount` units of `id`.
///
/// Fails without mutating if fewer units are held. The entry is kept
/// even when its count drops to zero.
pub fn remove_element(inventory: &mut Inventory, id: &ElementId, amount: u32) -> Result<(), GameError> {
    let available = inventory.get(id).map_or(0, |e| e.count);
    let remaining = available
        .checked_sub(amount)
        .ok_or_else(|| GameError::IngredientUnavailable {
            element: id.clone(),
            requested: amount,
            available,
        })?;
    if let Some(entry) = inventory.get_mut(id) {
        entry.count = remaining;
    }
    Ok(())
}

/// Tally an ingredient list into per-element quantities.
pub fn tally(items: &[ElementId]) -> BTreeMap<&ElementId, u32> {
    let mut counts: BTreeMap<&ElementId, u32> = BTreeMap::new();
    for item in items {
        let slot = counts.entry(item).or_insert(0);
        *slot = slot.saturating_add(1);
    }
    counts
}

/// Find the first element in `need` the inventory cannot cover.
///
/// Returns `(element, needed, available)`.
pub fn first_shortfall<'a, I>(inventory: &Inventory, need: I) -> Option<(ElementId, u32, u32)>
where
    I: IntoIterator<Item = (&'a ElementId, u32)>,
{
    need.into_iter().find_map(|(id, needed)| {
        let available = inventory.get(id).map_or(0, |e| e.count);
        (available < needed).then(|| (id.clone(), needed, available))
    })
}

/// Reserve every ingredient of a craft, all or nothing.
///
/// Duplicates are counted, so `[fire, fire]` needs two fire. On failure
/// nothing is deducted.
pub fn reserve(inventory: &mut Inventory, items: &[ElementId]) -> Result<(), GameError> {
    let counts = tally(items);
    if let Some((element, requested, available)) =
        first_shortfall(inventory, counts.iter().map(|(id, n)| (*id, *n)))
    {
        return Err(GameError::IngredientUnavailable {
            element,
            requested,
            available,
        });
    }
    for (id, amount) in counts {
        remove_element(inventory, id, amount)?;
    }
    Ok(())
}

/// Return reserved ingredients to the inventory.
///
/// Refunds never change discovery flags of entries that already exist.
pub fn refund(inventory: &mut Inventory, items: &[ElementId]) -> Result<(), GameError> {
    for item in items {
        add_element(inventory, item, 1)?;
    }
    Ok(())
}
