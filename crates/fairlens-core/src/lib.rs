//! FairLens analysis engine.
//!
//! Pure, deterministic functions over an in-memory [`fairlens_model::Table`]:
//! column profiling, distribution analysis, Pearson correlation, proxy bias
//! detection, fairness metrics, scoring, recommendations and mitigation
//! simulation, composed into a single pipeline by [`pipeline::run_full_analysis`].

pub mod correlation;
pub mod distribution;
pub mod fairness;
pub mod pipeline;
pub mod profiler;
pub mod proxy;
pub mod recommend;
pub mod scoring;
pub mod simulate;

pub use correlation::{MAX_CORRELATION_COLUMNS, correlation_matrix, find_entry};
pub use distribution::{UNDERREPRESENTATION_THRESHOLD, analyze_distribution};
pub use fairness::{CLASS_IMBALANCE, DEMOGRAPHIC_PARITY, REPRESENTATION_RATIO, fairness_metrics};
pub use pipeline::{AnalysisConfig, Evaluation, evaluate, run_full_analysis};
pub use profiler::{SENSITIVE_PATTERNS, SensitivePattern, profile_columns, sensitive_reason};
pub use proxy::{PROXY_CORRELATION_THRESHOLD, detect_proxy_bias};
pub use recommend::generate_recommendations;
pub use scoring::overall_score;
pub use simulate::{SimulationOutcome, simulate_mitigation};
