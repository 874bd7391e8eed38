//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Parsing of the XML weather feed and lookup of its sections
//! - Conversion of feed sections into normalized condition records
//! - The provider abstraction and the callback-driven fetch
//! - Text rendering, location menu and stored preferences
//! - Configuration handling
//!
//! It is used by `weather-feed-cli`, but can also be reused by other binaries or services.

pub mod assemble;
pub mod condition;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod icon;
pub mod menu;
pub mod model;
pub mod prefs;
pub mod provider;
pub mod render;
pub mod schema;
pub mod session;

pub use assemble::WeatherAssembler;
pub use config::Config;
pub use document::{Document, Fragment};
pub use error::WeatherError;
pub use icon::IconResolver;
pub use menu::LocationMenu;
pub use model::{AttributeMap, ConditionRecord, ForecastInfo, WeatherRequest, WeatherSnapshot};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use provider::{WeatherProvider, feed::FeedProvider, fetch_weather, provider_from_config};
pub use render::{PresentationSink, TextSink};
pub use schema::{FeedSchema, FieldSet};
pub use session::StartupAction;
