//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to
//! the operating system entropy sources used to seed key generation.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same
//! `sys_random(&mut [u8]) -> Result<()>` surface, allowing higher-level
//! code to remain fully portable.
//!
//! Failures are reported as [`Error::EntropyUnavailable`] and are never
//! replaced by a weaker generator.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use crate::error::{Error, Result};

/// Targets without a known entropy backend always fail.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) fn sys_random(_buf: &mut [u8]) -> Result<()> {
    log::error!("no operating system entropy backend for this target");

    Err(Error::EntropyUnavailable {
        backend: "unsupported target",
        code: 0,
    })
}
