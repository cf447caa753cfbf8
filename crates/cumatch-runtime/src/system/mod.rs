//! OS-level helpers: GPU status and clipboard access.

mod clipboard;
mod gpu;

pub use clipboard::{ClipboardBackend, SystemClipboard, platform_backends};
pub use gpu::{GpuStatus, gpu_status, gpu_status_text, parse_gpu_query};
