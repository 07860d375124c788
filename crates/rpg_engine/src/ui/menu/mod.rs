//! Script-driven game menus
//!
//! Menus and their items are instantiated from script sections. A
//! [`GameMenu`] handles navigation and item actions, [`MenuRoot`] keeps the
//! stack of open menus.

pub mod bindings;
pub mod controller;
pub mod descriptor;
pub mod item;
pub mod layout;
pub mod root;
pub mod save_slot;

#[cfg(test)]
pub(crate) mod test_support;

pub use bindings::{BindingValue, PlayerStats, TalentStats};
pub use controller::{GameMenu, MenuError, MenuRequest};
pub use descriptor::{MenuDescriptor, MenuFlags, MAX_ITEMS};
pub use item::{ItemFlags, ItemKind, MenuItem, MenuItemData, SelectAction};
pub use root::MenuRoot;
pub use save_slot::save_slot_id;
