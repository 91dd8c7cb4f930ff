//! Folio
//!
//! Terminal portfolio page: a hero banner whose tagline is typed out one
//! character per tick, followed by About, Skills, Projects, Experience and
//! Education sections.
//!
//! The library is split the way the binary runs it: pure data and timer
//! logic (`model`, `typing`, `state`), profile loading (`source`),
//! configuration (`config`, `logging`), and the terminal shell (`view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod typing;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
