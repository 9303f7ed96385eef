//! TypeScript declaration generation.

pub mod emitter;
pub mod mapper;

pub use emitter::{describe_record, emit, write_to};
pub use mapper::{ANY, TsType, map_field, map_key, map_type};
