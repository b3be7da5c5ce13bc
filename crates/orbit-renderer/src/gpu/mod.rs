mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_runtime_display() {
        let err = RendererError::RuntimeError("no threads".to_string());
        assert_eq!(err.to_string(), "async runtime error: no threads");
    }

    #[test]
    fn physical_size_clamps_zero() {
        let size = PhysicalSize::clamped(0, 600);
        assert_eq!(size, PhysicalSize { width: 1, height: 600 });
    }
}
