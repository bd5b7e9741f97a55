use std::path::Path;

/// Answers whether a local path can be attached to an assembly.
///
/// A path qualifies when it exists, is a regular file and is readable by the
/// current process. Implementations must not keep handles open.
pub trait FileProbe: Send + Sync {
    fn is_openable(&self, path: &Path) -> bool;
}

pub type FileProbeBox = Box<dyn FileProbe>;
