// mod.rs - Data structures and ingestion module

pub mod alleles;
pub mod ingress;
pub mod loaders;
pub mod markers;
pub mod profile;

// Re-export main types for convenience
pub use alleles::clean_allele_string;
pub use ingress::{detect_shape, str_ingress, IngressOptions, SampleMap, TableShape};
pub use markers::{harmonize_markers, incompatible_markers};
pub use profile::{ProfileTable, StrProfile};
