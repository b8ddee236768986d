mod columns;
mod county;
mod housing;
mod ocean;

pub use county::{CountyRecord, CountyStats, CountyTable};
pub use housing::HousingData;
pub use ocean::OceanProximity;
