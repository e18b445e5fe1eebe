//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`calendar`, `bookings`, `earnings`, `reviews`)
//! plus header/session chrome (`ui`, `auth`). Every struct is plain data with
//! synchronous methods; components wrap them in `RwSignal`s and mutate only
//! through `update`.

pub mod auth;
pub mod bookings;
pub mod calendar;
pub mod earnings;
pub mod reviews;
pub mod ui;
