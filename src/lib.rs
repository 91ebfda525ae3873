// SPDX-License-Identifier: MPL-2.0
//! `fasal_mitra` is a multi-language farming companion built with the Iced
//! GUI framework.
//!
//! It offers soil and fertilizer guidance, pest identification through a
//! vision model, weather data, mandi prices and an advisor chat, in English,
//! Hindi, Punjabi and Marathi. Remote services sit behind the port traits in
//! [`application::port`]; their HTTP implementations live in
//! [`infrastructure`].

#![doc(html_root_url = "https://docs.rs/fasal_mitra/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
