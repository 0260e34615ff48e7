//! Hardware entropy sources.

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "/dev/urandom"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn entropy() -> u64 {
    use std::io::Read;

    let mut buf = [0u8; 8];
    if let Ok(mut f) = std::fs::File::open("/dev/urandom")
        && f.read_exact(&mut buf).is_ok()
    {
        return u64::from_le_bytes(buf);
    }
    log::warn!("/dev/urandom unavailable, falling back to clock entropy");
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
