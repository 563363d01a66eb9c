//! Mount presence checks
//!
//! Only existence is checked. Writability and free space are left to the
//! copy itself.

use std::path::Path;

use crate::error::{Result, SyncError};

/// Confirm the network share and the device are both reachable.
///
/// The source is checked first so a missing share is reported even when the
/// device is also absent.
pub fn check_mounts(source_root: &Path, device_root: &Path) -> Result<()> {
    log::debug!(
        "Checking mounts: source={:?} device={:?}",
        source_root,
        device_root
    );

    if !source_root.exists() {
        return Err(SyncError::SourceNotFound(source_root.to_path_buf()));
    }

    if !device_root.exists() {
        return Err(SyncError::DeviceNotMounted(device_root.to_path_buf()));
    }

    Ok(())
}
