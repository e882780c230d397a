// Adapters layer: concrete implementations for external systems (platform toolchains).

pub mod esp32;
