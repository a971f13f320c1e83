//! Read-only syntax helpers shared by the parser's consumers.

use crate::parser::{NodeArena, NodeIndex};

/// Text that identifies a class member name: the identifier, the raw
/// literal text, or the computed `[expr]` text.
#[must_use]
pub fn member_name_text(arena: &NodeArena, name: NodeIndex) -> Option<&str> {
    arena.get_node_text(name)
}

/// Name text of an accessor, property or parameter node.
#[must_use]
pub fn declaration_name_text(arena: &NodeArena, decl: NodeIndex) -> Option<&str> {
    let node = arena.get(decl)?;
    let name = if let Some(accessor) = arena.get_accessor(node) {
        accessor.name
    } else if let Some(prop) = arena.get_property_decl(node) {
        prop.name
    } else if let Some(param) = arena.get_parameter(node) {
        param.name
    } else if let Some(class) = arena.get_class(node) {
        class.name
    } else {
        return None;
    };
    member_name_text(arena, name)
}

/// `this` parameters describe the receiver, not a value.
#[must_use]
pub fn is_this_parameter(arena: &NodeArena, param: NodeIndex) -> bool {
    arena
        .get(param)
        .and_then(|node| arena.get_parameter(node))
        .and_then(|data| arena.get_node_text(data.name))
        .is_some_and(|text| text == "this")
}
