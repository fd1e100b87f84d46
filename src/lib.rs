#![crate_name = "dateconv"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]

//! Library for converting dates between the Gregorian, Persian (Solar
//! Hijri), and Islamic (Lunar Hijri) calendars.
//!
//! The Gregorian calendar is the interchange representation: a Gregorian
//! [`LocalDateTime`](local/struct.LocalDateTime.html) goes in and a string
//! in the target calendar's numbering comes out, or the other way around.
//! How much of the time of day tags along is governed by a
//! [`TimePrecision`](convert/enum.TimePrecision.html) value.
//!
//! # Examples
//!
//! ```
//! use dateconv::{gregorian_to_persian, persian_to_gregorian, LocalDateTime, TimePrecision};
//!
//! let date = LocalDateTime::new(2021, 3, 21, 9, 30, 0).unwrap();
//! assert_eq!(gregorian_to_persian(date, TimePrecision::HourAndMinute).unwrap(),
//!            "1400/1/1 - 09:30");
//!
//! let back = persian_to_gregorian("1400/1/1 - 9:30", TimePrecision::HourAndMinute).unwrap();
//! assert_eq!(back, date);
//! ```
//!
//! A word of warning about the reverse direction: when the requested
//! precision wants time fields that the input string does not carry, the
//! missing fields are filled in from the current wall-clock time before the
//! precision mask is applied. This mirrors the behaviour of the systems this
//! library is meant to talk to. `TimePrecision::None` is always
//! deterministic and always means midnight.

extern crate libc;
extern crate pad;

#[cfg(windows)]
extern crate winapi;

pub mod convert;
pub mod hijri;
pub mod local;
pub mod persian;
mod system;
mod util;

pub use convert::{Error, TimePrecision};
pub use convert::{gregorian_to_persian, gregorian_to_hijri, gregorian_to_hijri_with};
pub use convert::{persian_to_gregorian, hijri_to_gregorian, hijri_to_gregorian_with};
pub use hijri::Hijri;
pub use local::LocalDateTime;
