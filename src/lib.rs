//! Button sampler with LED/buzzer feedback for the STM32F103 "Blue Pill".
//!
//! A producer task samples the button into a shared 10-slot sample ring and
//! flashes the LED on a press; a consumer task drains the ring and pulses the
//! buzzer whenever it reads a pressed sample. Both tasks serialize on a
//! single mutex around the ring.
//!
//! The modules here are the portable core: they compile for the host so the
//! unit tests run off-target. Everything that touches the MCU (GPIO drivers,
//! the fault halt, the firmware binary) is gated on `target_os = "none"`.

#![cfg_attr(not(test), no_std)]

pub mod buffer;
pub mod hardware;
pub mod tasks;

#[cfg(target_os = "none")]
pub mod fault;
