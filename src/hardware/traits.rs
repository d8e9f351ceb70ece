//! Pin-level seams consumed by the task bodies.
//!
//! Polarity (active-low LED, pull-up button) is an implementation detail of
//! each driver; callers only see logical on/off and pressed state.

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
}

pub trait Buzzer {
    fn on(&mut self);
    fn off(&mut self);
}

pub trait Button {
    fn is_pressed(&self) -> bool;
}
