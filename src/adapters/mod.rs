// Adapters layer: mappings to external surfaces. The http adapter produces
// status/body pairs only; socket handling belongs to the embedding server.

pub mod api;
