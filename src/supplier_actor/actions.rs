use crate::model::Supplier;

/// Custom actions for Supplier entities.
///
/// Status changes always carry the version the caller read; there is no "latest" form.
#[derive(Debug, Clone)]
pub enum SupplierAction {
    Enable { version: i64 },
    Disable { version: i64 },
    GetVersion,
}

#[derive(Debug, Clone)]
pub enum SupplierActionResult {
    Supplier(Supplier),
    Version(i64),
}
