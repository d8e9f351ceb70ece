//! Hardware seams and their Blue Pill GPIO implementations.
//!
//! The traits are the boundary the task bodies are written against; the
//! `embassy-stm32` pin drivers only exist on the MCU build.

pub mod traits;

#[cfg(target_os = "none")]
pub mod gpio_button;
#[cfg(target_os = "none")]
pub mod gpio_buzzer;
#[cfg(target_os = "none")]
pub mod gpio_led;
