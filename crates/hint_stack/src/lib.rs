//! Stack safety for deeply nested hints and piths.
//!
//! Every recursive walk over a hint or a pith runs inside
//! [`ensure_sufficient_stack`], so input nested thousands of levels deep
//! grows the stack instead of overflowing it.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call (WASM manages its own stack).

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
