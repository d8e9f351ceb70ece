//! Terminal fault state for unrecoverable bring-up failures.

/// Parks the core forever with interrupts disabled.
///
/// Reached only when initialization fails before the tasks run (for example
/// a task spawn error); nothing in the steady-state loops calls this.
pub fn halt() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::wfi();
    }
}
