//! Define the fixed catalogue of dynamic array operations.
//!
//! [`OPERATIONS`] is the single source of truth for what the generator emits: each entry pairs a signature
//! descriptor (return type, C name, parameter list) with the C body template that implements it. The table order is
//! the emission order for both declarations and definitions.
//!
//! ## Notes
//! - Return types, parameter types and bodies are templates (see [`crate::tokens`]).
//! - The narrow single-element operations assert their index contracts. The bulk variants clamp `count` to what
//!   is available and return the number of elements actually processed.
//! - `find`/`find_multi` compare through the `$(IDENT)_compare` macro; see [`crate::scaffold::DEFAULT_COMPARE`].
//!
//! ## Examples
//! ```rust
//! use dag_core::operations::{self, OperationId};
//!
//! assert_eq!(operations::info_for(OperationId::PushMulti).name, "push_multi");
//! assert_eq!(operations::from_str("split"), Some(OperationId::Split));
//! ```

use crate::params::SigParam;

/// Stable identifier for every catalogued operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    Reserve,
    Free,
    Push,
    Insert,
    Pop,
    PushMulti,
    InsertMulti,
    PopMulti,
    Delete,
    Replace,
    DeleteMulti,
    ReplaceMulti,
    Find,
    FindMulti,
    Split,
}

/// Logical group of an operation. Declaration groups are separated by a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationGroup {
    /// Growth and teardown. The default comparator is emitted after this group's definitions.
    Lifecycle,
    Single,
    Bulk,
    DeleteReplace,
    BulkDeleteReplace,
    Find,
    Split,
}

/// Visibility of the emitted C function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linkage {
    /// Declared in the header and defined with external linkage.
    Public,
    /// Defined `static` inside the implementation block only; never declared.
    Internal,
}

/// Catalogue entry for one operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub id: OperationId,
    /// Operation suffix; the emitted function is `<ident>_<name>`.
    pub name: &'static str,
    /// Return type template.
    pub returns: &'static str,
    /// Parameters after the implicit `Array *ident` receiver.
    pub params: &'static [SigParam],
    /// Body template, emitted between the braces of the definition.
    pub body: &'static str,
    pub group: OperationGroup,
    pub linkage: Linkage,
    /// Template emitted right after the declaration, if any.
    pub after_decl: Option<&'static str>,
}

impl OperationInfo {
    pub fn is_public(&self) -> bool {
        self.linkage == Linkage::Public
    }
}

const VALUE: &str = "$(VALUE)";
const SIZE: &str = "size_t";

/// Ensure room for `count` more elements.
pub const RESERVE_BODY: &str = concat!(
    "    assert(count <= SIZE_MAX - $(IDENT)->count);\n",
    "    count += $(IDENT)->count;\n",
    "    if (count > $(IDENT)->capacity) {\n",
    "        $(IDENT)->capacity += DA_MINIMUM_CAPACITY;\n",
    "        if ($(IDENT)->capacity < count) $(IDENT)->capacity = count;\n",
    "        assert($(IDENT)->capacity <= SIZE_MAX / sizeof($(VALUE)));\n",
    "        $(IDENT)->data = realloc($(IDENT)->data, $(IDENT)->capacity * sizeof($(VALUE)));\n",
    "        assert($(IDENT)->data);\n",
    "    }\n",
);

pub const FREE_BODY: &str = concat!(
    "#ifdef $(VALUE)_free\n",
    "    for (size_t i = 0; i < $(IDENT)->count; ++i) $(VALUE)_free($(IDENT)->data + i);\n",
    "#endif\n",
    "\n",
    "    free($(IDENT)->data);\n",
    "    memset($(IDENT), 0, sizeof(*$(IDENT)));\n",
);

pub const PUSH_BODY: &str = concat!(
    "    $(IDENT)_reserve($(IDENT), 1);\n",
    "    $(IDENT)->data[$(IDENT)->count++] = value;\n",
);

pub const INSERT_BODY: &str = concat!(
    "    assert(index <= $(IDENT)->count);\n",
    "    $(IDENT)_reserve($(IDENT), 1);\n",
    "    memmove($(IDENT)->data + index + 1, $(IDENT)->data + index, ($(IDENT)->count - index) * sizeof($(VALUE)));\n",
    "    $(IDENT)->data[index] = value;\n",
    "    $(IDENT)->count++;\n",
);

pub const POP_BODY: &str = concat!(
    "    assert($(IDENT)->count);\n",
    "    return $(IDENT)->data[--$(IDENT)->count];\n",
);

pub const PUSH_MULTI_BODY: &str = concat!(
    "    $(IDENT)_reserve($(IDENT), count);\n",
    "    memcpy($(IDENT)->data + $(IDENT)->count, src, count * sizeof($(VALUE)));\n",
    "    $(IDENT)->count += count;\n",
);

pub const INSERT_MULTI_BODY: &str = concat!(
    "    assert(index <= $(IDENT)->count);\n",
    "    $(IDENT)_reserve($(IDENT), count);\n",
    "    memmove($(IDENT)->data + index + count, $(IDENT)->data + index, ($(IDENT)->count - index) * sizeof($(VALUE)));\n",
    "    memcpy($(IDENT)->data + index, src, count * sizeof($(VALUE)));\n",
    "    $(IDENT)->count += count;\n",
);

pub const POP_MULTI_BODY: &str = concat!(
    "    if (count > $(IDENT)->count) count = $(IDENT)->count;\n",
    "    if (dst) memcpy(dst, $(IDENT)->data + $(IDENT)->count - count, count * sizeof($(VALUE)));\n",
    "    $(IDENT)->count -= count;\n",
    "    return count;\n",
);

pub const DELETE_BODY: &str = concat!(
    "    assert($(IDENT)->count > index);\n",
    "    const $(VALUE) value = $(IDENT)->data[index];\n",
    "    memmove($(IDENT)->data + index, $(IDENT)->data + index + 1, ($(IDENT)->count - index - 1) * sizeof($(VALUE)));\n",
    "    $(IDENT)->count--;\n",
    "    return value;\n",
);

pub const REPLACE_BODY: &str = concat!(
    "    assert($(IDENT)->count > index);\n",
    "    $(IDENT)->data[index] = value;\n",
);

pub const DELETE_MULTI_BODY: &str = concat!(
    "    if (index >= $(IDENT)->count) return 0;\n",
    "    if (count > $(IDENT)->count - index) count = $(IDENT)->count - index;\n",
    "    if (dst) memcpy(dst, $(IDENT)->data + index, count * sizeof($(VALUE)));\n",
    "    memmove($(IDENT)->data + index, $(IDENT)->data + index + count, ($(IDENT)->count - index - count) * sizeof($(VALUE)));\n",
    "    $(IDENT)->count -= count;\n",
    "    return count;\n",
);

pub const REPLACE_MULTI_BODY: &str = concat!(
    "    if (index >= $(IDENT)->count) return 0;\n",
    "    if (count > $(IDENT)->count - index) count = $(IDENT)->count - index;\n",
    "    if (dst) memcpy(dst, $(IDENT)->data + index, count * sizeof($(VALUE)));\n",
    "    memcpy($(IDENT)->data + index, src, count * sizeof($(VALUE)));\n",
    "    return count;\n",
);

pub const FIND_BODY: &str = concat!(
    "    for (size_t i = index; i < $(IDENT)->count; ++i) {\n",
    "        if (!$(IDENT)_compare($(IDENT)->data + i, &pred, 1)) {\n",
    "            return i;\n",
    "        }\n",
    "    }\n",
    "    return -1;\n",
);

pub const FIND_MULTI_BODY: &str = concat!(
    "    if (count > $(IDENT)->count) return -1;\n",
    "    for (size_t i = index; i <= $(IDENT)->count - count; ++i) {\n",
    "        if (!$(IDENT)_compare($(IDENT)->data + i, pred, count)) {\n",
    "            return i;\n",
    "        }\n",
    "    }\n",
    "    return -1;\n",
);

/// Moves the tail into a fresh array; the original keeps `[0, index)`.
pub const SPLIT_BODY: &str = concat!(
    "    assert(index <= $(IDENT)->count);\n",
    "    $(ARRAY) rhs = {0};\n",
    "    if (index < $(IDENT)->count) $(IDENT)_push_multi(&rhs, $(IDENT)->data + index, $(IDENT)->count - index);\n",
    "    $(IDENT)->count = index;\n",
    "    return rhs;\n",
);

/// The operation catalogue, in emission order.
pub const OPERATIONS: &[OperationInfo] = &[
    OperationInfo {
        id: OperationId::Reserve,
        name: "reserve",
        returns: "void",
        params: &[SigParam::typed(SIZE, "count")],
        body: RESERVE_BODY,
        group: OperationGroup::Lifecycle,
        linkage: Linkage::Internal,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Free,
        name: "free",
        returns: "void",
        params: &[],
        body: FREE_BODY,
        group: OperationGroup::Lifecycle,
        linkage: Linkage::Public,
        after_decl: Some("#define $(IDENT)_free $(IDENT)_free\n"),
    },
    OperationInfo {
        id: OperationId::Push,
        name: "push",
        returns: "void",
        params: &[SigParam::typed(VALUE, "value")],
        body: PUSH_BODY,
        group: OperationGroup::Single,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Insert,
        name: "insert",
        returns: "void",
        params: &[SigParam::typed(VALUE, "value"), SigParam::typed(SIZE, "index")],
        body: INSERT_BODY,
        group: OperationGroup::Single,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Pop,
        name: "pop",
        returns: VALUE,
        params: &[],
        body: POP_BODY,
        group: OperationGroup::Single,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::PushMulti,
        name: "push_multi",
        returns: "void",
        params: &[SigParam::Const, SigParam::typed(VALUE, "*src"), SigParam::typed(SIZE, "count")],
        body: PUSH_MULTI_BODY,
        group: OperationGroup::Bulk,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::InsertMulti,
        name: "insert_multi",
        returns: "void",
        params: &[
            SigParam::Const,
            SigParam::typed(VALUE, "*src"),
            SigParam::typed(SIZE, "count"),
            SigParam::typed(SIZE, "index"),
        ],
        body: INSERT_MULTI_BODY,
        group: OperationGroup::Bulk,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::PopMulti,
        name: "pop_multi",
        returns: SIZE,
        params: &[SigParam::typed(VALUE, "*dst"), SigParam::typed(SIZE, "count")],
        body: POP_MULTI_BODY,
        group: OperationGroup::Bulk,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Delete,
        name: "delete",
        returns: VALUE,
        params: &[SigParam::typed(SIZE, "index")],
        body: DELETE_BODY,
        group: OperationGroup::DeleteReplace,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Replace,
        name: "replace",
        returns: "void",
        params: &[SigParam::typed(SIZE, "index"), SigParam::typed(VALUE, "value")],
        body: REPLACE_BODY,
        group: OperationGroup::DeleteReplace,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::DeleteMulti,
        name: "delete_multi",
        returns: SIZE,
        params: &[
            SigParam::typed(SIZE, "index"),
            SigParam::typed(SIZE, "count"),
            SigParam::typed(VALUE, "*dst"),
        ],
        body: DELETE_MULTI_BODY,
        group: OperationGroup::BulkDeleteReplace,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::ReplaceMulti,
        name: "replace_multi",
        returns: SIZE,
        params: &[
            SigParam::typed(SIZE, "index"),
            SigParam::typed(SIZE, "count"),
            SigParam::typed(VALUE, "*dst"),
            SigParam::Const,
            SigParam::typed(VALUE, "*src"),
        ],
        body: REPLACE_MULTI_BODY,
        group: OperationGroup::BulkDeleteReplace,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Find,
        name: "find",
        returns: "long",
        params: &[SigParam::typed(SIZE, "index"), SigParam::typed(VALUE, "pred")],
        body: FIND_BODY,
        group: OperationGroup::Find,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::FindMulti,
        name: "find_multi",
        returns: "long",
        params: &[
            SigParam::typed(SIZE, "index"),
            SigParam::Const,
            SigParam::typed(VALUE, "*pred"),
            SigParam::typed(SIZE, "count"),
        ],
        body: FIND_MULTI_BODY,
        group: OperationGroup::Find,
        linkage: Linkage::Public,
        after_decl: None,
    },
    OperationInfo {
        id: OperationId::Split,
        name: "split",
        returns: "$(ARRAY)",
        params: &[SigParam::typed(SIZE, "index")],
        body: SPLIT_BODY,
        group: OperationGroup::Split,
        linkage: Linkage::Public,
        after_decl: None,
    },
];

/// Return the catalogue entry of an operation.
///
/// ## Notes
/// - [`OPERATIONS`] is laid out in [`OperationId`] declaration order, so the discriminant is the table index.
pub fn info_for(id: OperationId) -> &'static OperationInfo {
    &OPERATIONS[id as usize]
}

/// Resolve an operation from its C name suffix.
pub fn from_str(name: &str) -> Option<OperationId> {
    OPERATIONS.iter().find(|op| op.name == name).map(|op| op.id)
}

/// Iterate over the operations that are declared in the header.
pub fn public() -> impl Iterator<Item = &'static OperationInfo> {
    OPERATIONS.iter().filter(|op| op.is_public())
}
