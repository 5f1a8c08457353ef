pub use crate::config::DedupScope;
pub use crate::config::GeneratorConfig;
pub use crate::config::InstanceSize;

pub use crate::edge_set::EdgeSet;

pub use crate::format::InstanceWriter;

pub use crate::generator::GraphInstanceGenerator;
pub use crate::generator::InstanceSummary;

pub use crate::sampler::EdgeSampler;

pub use crate::Error;
pub use crate::WeightedEdge;
