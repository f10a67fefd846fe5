mod table;
mod record;
mod aggregate;

pub use table::{Cell, DataTable};
pub use record::CountyRecord;
pub use aggregate::StateAggregate;
