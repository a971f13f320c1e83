//! Accessor declarations to property declarations.
//!
//! ```text
//! get x(): number;            ->  readonly x: number;
//! get y(): string;            ->  y: string;
//! set y(value: string);       ->  (removed)
//! set z(value: boolean);      ->  z: boolean;
//! ```

use super::errors::TransformError;
use dts_parser::parser::node::{Node, PropertyDeclData};
use dts_parser::parser::{
    ModifierFlags, NO_POS, NodeArena, NodeData, NodeIndex, NodeList, syntax_kind_ext,
};
use dts_parser::syntax::{is_this_parameter, member_name_text};
use dts_scanner::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    #[must_use]
    pub fn of(node: &Node) -> Option<AccessorKind> {
        if node.is_get_accessor() {
            Some(AccessorKind::Get)
        } else if node.is_set_accessor() {
            Some(AccessorKind::Set)
        } else {
            None
        }
    }

    #[must_use]
    pub fn opposite(self) -> AccessorKind {
        match self {
            AccessorKind::Get => AccessorKind::Set,
            AccessorKind::Set => AccessorKind::Get,
        }
    }

    #[must_use]
    pub fn node_kind(self) -> u16 {
        match self {
            AccessorKind::Get => syntax_kind_ext::GET_ACCESSOR,
            AccessorKind::Set => syntax_kind_ext::SET_ACCESSOR,
        }
    }
}

/// The declared type, or a new `any` keyword type when there is none.
pub fn default_any(arena: &mut NodeArena, type_annotation: NodeIndex) -> NodeIndex {
    if type_annotation.is_some() {
        type_annotation
    } else {
        arena.add_token(SyntaxKind::AnyKeyword as u16, NO_POS, NO_POS)
    }
}

fn accessor_name(arena: &NodeArena, accessor: NodeIndex) -> String {
    arena
        .get(accessor)
        .and_then(|node| arena.get_accessor(node))
        .and_then(|data| member_name_text(arena, data.name))
        .unwrap_or_default()
        .to_string()
}

/// Whether the class containing `accessor` (of kind `kind`) also declares
/// the opposite accessor under the same name.
///
/// Names match by source text, so `get "a"` and `set a` do not pair.
pub fn has_matching_accessor(
    arena: &NodeArena,
    accessor: NodeIndex,
    kind: AccessorKind,
) -> Result<bool, TransformError> {
    let name = accessor_name(arena, accessor);
    let pos = arena.get(accessor).map_or(NO_POS, |node| node.pos);
    let parent = arena.get_parent(accessor);
    let class = arena
        .get(parent)
        .filter(|node| node.is_class_declaration())
        .and_then(|node| arena.get_class(node))
        .ok_or_else(|| TransformError::MalformedTree {
            name: name.clone(),
            pos,
            parent_kind: arena
                .get(parent)
                .map_or("none", |node| syntax_kind_ext::kind_name(node.kind)),
        })?;

    let wanted = kind.opposite().node_kind();
    Ok(class.members.nodes.iter().any(|&member| {
        member != accessor
            && arena.get(member).is_some_and(|node| node.kind == wanted)
            && accessor_name(arena, member) == name
    }))
}

/// New property declaration standing in for `accessor`.
fn property_from_accessor(
    arena: &mut NodeArena,
    accessor: NodeIndex,
    decorators: Option<NodeList>,
    modifiers: Option<NodeList>,
    name: NodeIndex,
    type_annotation: NodeIndex,
) -> NodeIndex {
    let property = arena.add_node(
        syntax_kind_ext::PROPERTY_DECLARATION,
        NO_POS,
        NO_POS,
        NodeData::PropertyDecl(PropertyDeclData {
            decorators,
            modifiers,
            name,
            question_token: false,
            exclamation_token: false,
            type_annotation,
            initializer: NodeIndex::NONE,
        }),
    );
    arena.set_original(property, accessor);
    property
}

/// `get x(): T` to `[readonly] x: T`.
pub fn rewrite_get_accessor(
    arena: &mut NodeArena,
    accessor: NodeIndex,
) -> Result<NodeIndex, TransformError> {
    let Some(data) = arena.get(accessor).and_then(|node| arena.get_accessor(node)) else {
        return Ok(accessor);
    };
    let (decorators, name, return_type) = (data.decorators.clone(), data.name, data.type_annotation);

    let mut flags = arena.get_combined_modifier_flags(accessor);
    if !has_matching_accessor(arena, accessor, AccessorKind::Get)? {
        flags |= ModifierFlags::READONLY;
    }
    let modifiers = arena.create_modifiers_from_flags(flags);
    let type_annotation = default_any(arena, return_type);

    Ok(property_from_accessor(
        arena,
        accessor,
        decorators,
        modifiers,
        name,
        type_annotation,
    ))
}

/// `set x(value: T)` to `x: T`, or `None` when a matching getter already
/// describes the property.
pub fn rewrite_set_accessor(
    arena: &mut NodeArena,
    accessor: NodeIndex,
) -> Result<Option<NodeIndex>, TransformError> {
    let Some(data) = arena.get(accessor).and_then(|node| arena.get_accessor(node)) else {
        return Ok(Some(accessor));
    };
    let (decorators, modifiers, name) = (data.decorators.clone(), data.modifiers.clone(), data.name);
    let value_parameter = data
        .parameters
        .nodes
        .iter()
        .copied()
        .find(|&param| !is_this_parameter(arena, param));

    let Some(value_parameter) = value_parameter else {
        return Err(TransformError::InvariantViolation {
            name: accessor_name(arena, accessor),
            pos: arena.get(accessor).map_or(NO_POS, |node| node.pos),
        });
    };

    if has_matching_accessor(arena, accessor, AccessorKind::Set)? {
        return Ok(None);
    }

    let parameter_type = arena
        .get(value_parameter)
        .and_then(|node| arena.get_parameter(node))
        .map_or(NodeIndex::NONE, |param| param.type_annotation);
    let type_annotation = default_any(arena, parameter_type);

    Ok(Some(property_from_accessor(
        arena,
        accessor,
        decorators,
        modifiers,
        name,
        type_annotation,
    )))
}

#[cfg(test)]
#[path = "tests/accessors_tests.rs"]
mod accessors_tests;
