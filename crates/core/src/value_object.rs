//! Value object trait: equality by value, not identity.
//!
//! Everything the allocator exchanges (names, orders, inventories, shipments)
//! is a value object: two orders with the same lines are the same order.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. The allocator relies on this: it never mutates a caller's
/// order or warehouse, it clones working copies instead.
///
/// The trait requires:
/// - **Clone**: working copies are taken per allocation call
/// - **PartialEq**: values are compared by their attributes (tests, dedupe)
/// - **Debug**: values should be debuggable (helpful for logging, testing)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct OrderLine {
///     item: ItemName,
///     quantity: u64,
/// }
///
/// impl ValueObject for OrderLine {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
