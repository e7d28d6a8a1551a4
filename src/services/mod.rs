//! The application services that sit between the HTTP routes and the
//! [stores](crate::stores).
//!
//! All of the catalogue's validation and orchestration rules live here: ID
//! and input validation happens before any store access, entities are
//! projected to [DTOs](crate::dto) on the way out, and a result page with no
//! items is reported as [Error::NotFound](crate::Error::NotFound) rather
//! than returned as an empty list.

mod category;
mod product;

pub use category::CategoryService;
pub use product::ProductService;

use crate::{Error, models::DatabaseID};

/// Reject IDs that can never refer to a record.
///
/// Database IDs are assigned starting from one.
fn validate_id(id: DatabaseID) -> Result<(), Error> {
    if id <= 0 {
        return Err(Error::InvalidId);
    }

    Ok(())
}
