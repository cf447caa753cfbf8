//! Process runtime and OS-level concerns for cumatch.
//!
//! Implements the detection and clipboard ports from `cumatch-core` by
//! running external tools (`python`, `nvcc`, `nvidia-smi`, copy utilities).
#![deny(unused_crate_dependencies)]

pub mod detect;
pub mod process;
pub mod system;

pub use detect::{
    NvccProbe, NvidiaSmiProbe, TorchProbe, default_detector, default_strategies,
    parse_nvcc_output, parse_nvidia_smi_output, parse_torch_output,
};
pub use process::{ToolOutput, run_tool};
pub use system::{
    ClipboardBackend, GpuStatus, SystemClipboard, gpu_status, gpu_status_text, parse_gpu_query,
    platform_backends,
};
