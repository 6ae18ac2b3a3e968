pub mod dag;
pub mod invariants;
pub mod references;
pub mod schema;
pub mod weak_format;

pub use dag::DagStage;
pub use invariants::InvariantPresenceStage;
pub use references::ReferenceIntegrityStage;
pub use schema::SchemaConformanceStage;
pub use weak_format::WeakFormatStage;
