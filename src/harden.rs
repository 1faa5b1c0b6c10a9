//! Process hardening: keep password material out of core dumps.

/// Mark the process non-dumpable and drop the core size limit to zero.
/// Failures are ignored; generation still works without them.
#[cfg(unix)]
pub fn disable_core_dumps() {
    set_non_dumpable();

    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    unsafe {
        libc::setrlimit(libc::RLIMIT_CORE, &limit);
    }
}

#[cfg(not(unix))]
pub fn disable_core_dumps() {}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn set_non_dumpable() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
fn set_non_dumpable() {}
