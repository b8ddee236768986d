mod load;
mod source;

pub use load::{Artifacts, ModelArtifacts};
pub use source::{ArtifactSource, DiskArtifacts, MemArtifacts};
