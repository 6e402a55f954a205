//! Proxy bias detection: non-sensitive columns that track sensitive ones.

use fairlens_model::{ColumnProfile, CorrelationEntry, ProxyBias};

use crate::correlation::find_entry;

/// Absolute correlation strictly above this flags a proxy.
///
/// Fixed threshold; no multiple-comparison correction.
pub const PROXY_CORRELATION_THRESHOLD: f64 = 0.40;

/// Flag every (non-sensitive, sensitive) pair whose correlation magnitude
/// exceeds the threshold.
pub fn detect_proxy_bias(
    correlations: &[CorrelationEntry],
    sensitive_columns: &[String],
    profiles: &[ColumnProfile],
) -> Vec<ProxyBias> {
    let mut proxies = Vec::new();
    for profile in profiles {
        if sensitive_columns.contains(&profile.name) {
            continue;
        }
        for sensitive in sensitive_columns {
            let Some(entry) = find_entry(correlations, &profile.name, sensitive) else {
                continue;
            };
            if entry.value.abs() > PROXY_CORRELATION_THRESHOLD {
                proxies.push(ProxyBias {
                    column: profile.name.clone(),
                    sensitive_column: sensitive.clone(),
                    correlation: entry.value,
                    explanation: format!(
                        "\"{}\" has a correlation of {:.2} with sensitive attribute \"{}\". \
                         This column may act as a proxy, introducing indirect bias even if \
                         \"{}\" is excluded from the model.",
                        profile.name, entry.value, sensitive, sensitive
                    ),
                });
            }
        }
    }
    proxies
}
