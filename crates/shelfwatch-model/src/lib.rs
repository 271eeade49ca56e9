pub mod error;
pub mod fields;
pub mod record;
pub mod severity;

pub use error::{Result, ShelfwatchError};
pub use fields::{FieldId, FieldMap, ResolvedFields};
pub use record::{CellValue, Dataset, ReagentRecord};
pub use severity::{AlertPolicy, FillStyle, Severity};
