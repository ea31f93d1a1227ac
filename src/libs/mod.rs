//! Core library modules for the ttrack application.

/// Application configuration (JSON file in the platform data directory).
pub mod config;

/// Per-OS application data paths.
pub mod data_storage;

/// CSV/JSON task export.
pub mod export;

/// User-facing message catalog and display macros.
pub mod messages;

/// Analytics arithmetic for the dashboard.
pub mod stats;

/// Task entity, priority/status enums and query filters.
pub mod task;

/// Terminal table rendering.
pub mod view;
