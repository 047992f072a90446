use chrono::NaiveDate;

/// Trait for a record kept in a [`RecordStore`](super::RecordStore)
///
/// Defines the identity every list/detail/edit view relies on and how a
/// validated edit is applied.
pub trait Record: Clone {
    /// Validated set of changes produced by an edit form
    type Patch;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record identifier, unique within its store and never changed
    fn id(&self) -> &str;

    /// Date the record was created; the date filter applies to it
    fn created_at(&self) -> NaiveDate;

    /// Apply a validated patch. Implementations keep derived fields
    /// consistent and must not touch the identifier.
    fn apply(&mut self, patch: &Self::Patch);

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Singular UI name (e.g. "Prepedido")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Prepedidos")
    fn list_name() -> &'static str;
}
