//! Descriptions of error and signal numbers, as the C library knows them

use std::ffi::CStr;

use libc::c_char;

/// Message for an `errno` value, e.g. "No such file or directory" for 2
///
/// ```
/// use toolshed::describe::describe_errno;
///
/// assert_eq!(describe_errno(libc::ENOENT), "No such file or directory");
/// ```
pub fn describe_errno(errno: i32) -> String {
    let mut buf = [0 as c_char; 256];
    // Safety: buf is writable for buf.len() bytes; strerror_r nul-terminates
    // within that length
    let rc = unsafe { libc::strerror_r(errno, buf.as_mut_ptr(), buf.len()) };

    // Safety: reinterpreting c_char as u8 does not change size or alignment
    let bytes = unsafe { std::slice::from_raw_parts(buf.as_ptr().cast::<u8>(), buf.len()) };
    match CStr::from_bytes_until_nul(bytes) {
        Ok(msg) if rc == 0 || !msg.is_empty() => msg.to_string_lossy().into_owned(),
        _ => format!("Unknown error {errno}"),
    }
}

/// Description of a signal number, e.g. "Killed" for 9
///
/// ```
/// use toolshed::describe::describe_signal;
///
/// assert_eq!(describe_signal(libc::SIGKILL), "Killed");
/// ```
pub fn describe_signal(signo: i32) -> String {
    // Safety: strsignal returns null or a nul-terminated string which stays
    // valid until the next call; it is copied right away
    let msg = unsafe {
        let ptr = libc::strsignal(signo);
        match ptr.is_null() {
            true => None,
            false => Some(CStr::from_ptr(ptr).to_string_lossy().into_owned()),
        }
    };
    msg.unwrap_or_else(|| format!("Unknown signal {signo}"))
}
