/// Server services
pub mod enrichment;

pub use enrichment::{Enrichment, EnrichmentOutcome, EnrichmentService};
