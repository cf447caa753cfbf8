//! CUDA detection strategies.
//!
//! Priority: installed `torch` > `nvcc` > `nvidia-smi`. Each strategy runs
//! its tool with the configured timeout; the chain stops at the first
//! version found.

mod nvcc;
mod nvidia_smi;
mod torch;

use cumatch_core::{ChainDetector, DetectionStrategy, Settings};

pub use nvcc::{NvccProbe, parse_nvcc_output};
pub use nvidia_smi::{NvidiaSmiProbe, parse_nvidia_smi_output};
pub use torch::{TorchProbe, parse_torch_output};

pub(crate) use nvidia_smi::PROGRAM as NVIDIA_SMI;

/// Strategies in priority order for the given settings.
pub fn default_strategies(settings: &Settings) -> Vec<Box<dyn DetectionStrategy>> {
    let timeout = settings.detect_timeout();
    vec![
        Box::new(TorchProbe::new(settings.python.clone(), timeout)),
        Box::new(NvccProbe::new(timeout)),
        Box::new(NvidiaSmiProbe::new(timeout)),
    ]
}

/// The detector used by the CLI.
///
/// # Example
///
/// ```ignore
/// use cumatch_core::{CudaDetector, Settings};
/// use cumatch_runtime::detect::default_detector;
///
/// let detector = default_detector(&Settings::default());
/// let result = detector.detect().await;
/// ```
pub fn default_detector(settings: &Settings) -> ChainDetector {
    ChainDetector::new(default_strategies(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumatch_core::DetectionSource;

    #[test]
    fn test_default_order() {
        let detector = default_detector(&Settings::default());
        assert_eq!(
            detector.sources(),
            [
                DetectionSource::Framework,
                DetectionSource::CompilerTool,
                DetectionSource::DriverTool,
            ]
        );
    }
}
