//! Presentation-layer core for The Admins unit console.
//!
//! This crate is the plumbing a UI shell embeds: configuration, logging,
//! the REST client for the unit backend, the session provider, and one
//! controller per destination. The pure access and progression rules live
//! in [`admins_core`].
//!
//! All backend interaction is request/response; there is no push channel.
//! Views that need live data poll on fixed periods, and every poller is
//! bound to a [`lifetime::ViewLifetime`] so that tearing a view down stops
//! its requests.

pub mod api;
pub mod config;
pub mod lifetime;
pub mod logging;
pub mod models;
pub mod session;
pub mod views;
