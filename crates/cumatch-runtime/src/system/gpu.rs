//! NVIDIA GPU status via `nvidia-smi --query-gpu`.

use std::fmt;
use std::time::Duration;

use cumatch_core::DetectionError;

use crate::detect::NVIDIA_SMI;
use crate::process::run_tool;

const QUERY_ARGS: &[&str] = &[
    "--query-gpu=name,memory.total,memory.used,utilization.gpu",
    "--format=csv,noheader,nounits",
];

/// One GPU as reported by `nvidia-smi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuStatus {
    /// A fully parsed row.
    Parsed {
        index: usize,
        name: String,
        memory_total_mib: String,
        memory_used_mib: String,
        utilization_pct: String,
    },
    /// A row that did not have the expected four columns.
    Raw { index: usize, line: String },
}

impl fmt::Display for GpuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed {
                index,
                name,
                memory_total_mib,
                memory_used_mib,
                utilization_pct,
            } => write!(
                f,
                "GPU{index}: {name}, mem {memory_total_mib} MiB used {memory_used_mib} MiB, util {utilization_pct} %"
            ),
            Self::Raw { index, line } => write!(f, "GPU{index}: {line}"),
        }
    }
}

/// Parse CSV rows from the GPU query.
pub fn parse_gpu_query(output: &str) -> Vec<GpuStatus> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(index, line)| {
            let cols: Vec<&str> = line.split(',').map(str::trim).collect();
            match cols.as_slice() {
                [name, total, used, util, ..] => GpuStatus::Parsed {
                    index,
                    name: (*name).to_string(),
                    memory_total_mib: (*total).to_string(),
                    memory_used_mib: (*used).to_string(),
                    utilization_pct: (*util).to_string(),
                },
                _ => GpuStatus::Raw {
                    index,
                    line: line.to_string(),
                },
            }
        })
        .collect()
}

/// Query every NVIDIA GPU. An empty list means the tool ran but reported none.
pub async fn gpu_status(timeout: Duration) -> Result<Vec<GpuStatus>, DetectionError> {
    let output = run_tool(NVIDIA_SMI, QUERY_ARGS, timeout).await?;
    Ok(parse_gpu_query(&output.stdout))
}

/// Multi-line status text, or `None` when no GPU information is available.
pub async fn gpu_status_text(timeout: Duration) -> Option<String> {
    match gpu_status(timeout).await {
        Ok(gpus) if !gpus.is_empty() => Some(
            gpus.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "GPU status unavailable");
            None
        }
    }
}
