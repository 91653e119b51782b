//! Fixed header scaffolding surrounding the operation catalogue.
//!
//! These templates frame the generated header: the re-inclusion guard, the foundational includes, the tunable
//! growth constant, the struct layout, the implementation guard and the default comparator.

/// Opens the re-inclusion guard.
pub const HEADER_GUARD_OPEN: &str = "#ifndef $(GUARD)_H\n#define $(GUARD)_H\n\n";

/// Closes the re-inclusion guard after the last declaration.
pub const HEADER_GUARD_CLOSE: &str = "\n#endif // $(GUARD)_H\n\n";

/// Headers every generated array needs: assertions, `SIZE_MAX`, allocation, memory copy.
pub const FOUNDATION_INCLUDES: &[&str] = &["assert.h", "stdint.h", "stdlib.h", "string.h"];

/// Name of the growth-chunk macro; callers may define it before including the header.
pub const MINIMUM_CAPACITY_MACRO: &str = "DA_MINIMUM_CAPACITY";

/// Growth chunk emitted when the caller does not pick one.
pub const DEFAULT_MINIMUM_CAPACITY: usize = 128;

/// Struct fields as `(type template, name)`; rendered one per line inside `typedef struct { ... }`.
pub const STRUCT_FIELDS: &[(&str, &str)] = &[("$(VALUE)", "*data"), ("size_t", "count"), ("size_t", "capacity")];

/// Opens the optionally-compiled implementation block.
pub const IMPL_GUARD_OPEN: &str = "#ifdef $(GUARD)_IMPLEMENTATION\n#undef $(GUARD)_IMPLEMENTATION\n\n";

/// Closes the implementation block.
pub const IMPL_GUARD_CLOSE: &str = "#endif // $(GUARD)_IMPLEMENTATION\n";

/// Byte-wise equality, used unless the caller defines `<ident>_compare` first.
/// Returns zero when the `len` elements at `a` and `b` are equal.
pub const DEFAULT_COMPARE: &str = concat!(
    "#ifndef $(IDENT)_compare\n",
    "#define $(IDENT)_compare(a, b, len) (memcmp(a, b, (len) * sizeof($(VALUE))))\n",
    "#endif\n",
    "\n",
);
