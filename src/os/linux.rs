//! Operating system entropy (Linux)
//!
//! Random bytes are read from the kernel entropy pool through the
//! `getrandom` system call, which blocks until the pool is initialized
//! and is suitable for seeding cryptographic key material.

use libc::{c_void, getrandom};

use crate::error::{Error, Result};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads are retried until the buffer is full. A call interrupted
/// by a signal (`EINTR`) is restarted; any other failure is reported as
/// [`Error::EntropyUnavailable`] carrying the `errno` value.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            if errno == libc::EINTR {
                continue;
            }

            log::error!("getrandom() failed with errno {errno}");
            return Err(Error::EntropyUnavailable {
                backend: "getrandom",
                code: i64::from(errno),
            });
        }

        filled += ret as usize;
    }

    Ok(())
}
