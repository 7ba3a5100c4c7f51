//! macOS provider: `sysctlbyname(3)` for attributes, CoreGraphics for
//! displays.

use crate::display::DisplayInfo;
use crate::traits::{AttributeSource, DisplaySource, PlatformProvider};
use std::ffi::{c_void, CString};
use std::io;
use std::ptr;
use tracing::debug;

const MAX_DISPLAYS: usize = 32;

type CGDirectDisplayID = u32;
type CGError = i32;
type CGDisplayModeRef = *mut c_void;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGGetActiveDisplayList(
        max_displays: u32,
        active_displays: *mut CGDirectDisplayID,
        display_count: *mut u32,
    ) -> CGError;
    fn CGDisplayPixelsWide(display: CGDirectDisplayID) -> usize;
    fn CGDisplayPixelsHigh(display: CGDirectDisplayID) -> usize;
    fn CGDisplayVendorNumber(display: CGDirectDisplayID) -> u32;
    fn CGDisplayModelNumber(display: CGDirectDisplayID) -> u32;
    fn CGDisplaySerialNumber(display: CGDirectDisplayID) -> u32;
    fn CGDisplayIsMain(display: CGDirectDisplayID) -> libc::c_int;
    fn CGDisplayIsBuiltin(display: CGDirectDisplayID) -> libc::c_int;
    fn CGDisplayCopyDisplayMode(display: CGDirectDisplayID) -> CGDisplayModeRef;
    fn CGDisplayModeGetRefreshRate(mode: CGDisplayModeRef) -> f64;
    fn CGDisplayModeRelease(mode: CGDisplayModeRef);
}

/// macOS platform provider
pub struct MacOSPlatform;

impl PlatformProvider for MacOSPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }
}

impl AttributeSource for MacOSPlatform {
    fn query(&self, key: &str, out: &mut [u8]) -> io::Result<usize> {
        let name = CString::new(key)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "key contains NUL"))?;

        let mut len: libc::size_t = out.len();
        // SAFETY: `out` is valid for `len` bytes and sysctl never writes more.
        let rc = unsafe {
            libc::sysctlbyname(
                name.as_ptr(),
                out.as_mut_ptr().cast(),
                &mut len,
                ptr::null_mut(),
                0,
            )
        };
        if rc == 0 {
            return Ok(len);
        }

        let err = io::Error::last_os_error();
        if err.raw_os_error() != Some(libc::ENOMEM) {
            return Err(err);
        }

        // Value is longer than `out`: read it whole and keep the prefix.
        let full = read_full(&name)?;
        let n = full.len().min(out.len());
        out[..n].copy_from_slice(&full[..n]);
        debug!(key, stored = full.len(), kept = n, "truncated sysctl value");
        Ok(full.len())
    }
}

fn read_full(name: &CString) -> io::Result<Vec<u8>> {
    let mut len: libc::size_t = 0;
    // SAFETY: a null `oldp` only asks for the value length.
    let rc = unsafe {
        libc::sysctlbyname(name.as_ptr(), ptr::null_mut(), &mut len, ptr::null_mut(), 0)
    };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let mut buf = vec![0u8; len];
    // SAFETY: `buf` is valid for `len` bytes.
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            buf.as_mut_ptr().cast(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    buf.truncate(len);
    Ok(buf)
}

impl DisplaySource for MacOSPlatform {
    fn active_displays(&self) -> Option<Vec<DisplayInfo>> {
        let mut ids = [0 as CGDirectDisplayID; MAX_DISPLAYS];
        let mut count: u32 = 0;
        // SAFETY: `ids` holds MAX_DISPLAYS entries.
        let err = unsafe { CGGetActiveDisplayList(MAX_DISPLAYS as u32, ids.as_mut_ptr(), &mut count) };
        if err != 0 {
            debug!(error = err, "CGGetActiveDisplayList failed");
            return None;
        }

        let count = (count as usize).min(MAX_DISPLAYS);
        Some(ids[..count].iter().map(|&id| describe_display(id)).collect())
    }
}

fn describe_display(id: CGDirectDisplayID) -> DisplayInfo {
    // SAFETY: plain getters on an id returned by CGGetActiveDisplayList; the
    // copied mode is released before returning.
    unsafe {
        let mode = CGDisplayCopyDisplayMode(id);
        let refresh_hz = if mode.is_null() {
            None
        } else {
            let hz = CGDisplayModeGetRefreshRate(mode);
            CGDisplayModeRelease(mode);
            (hz > 0.0).then_some(hz)
        };

        DisplayInfo {
            id,
            width: CGDisplayPixelsWide(id) as u64,
            height: CGDisplayPixelsHigh(id) as u64,
            refresh_hz,
            vendor: CGDisplayVendorNumber(id),
            model: CGDisplayModelNumber(id),
            serial: CGDisplaySerialNumber(id),
            is_main: CGDisplayIsMain(id) != 0,
            is_builtin: CGDisplayIsBuiltin(id) != 0,
        }
    }
}
