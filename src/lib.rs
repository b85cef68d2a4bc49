//! Sundry - small self-contained helpers
//!
//! A flat collection of independent utilities: content digests, coarse
//! cached timestamps, throttling, once/after call gates, deep JSON access
//! and merging, safe JSON wrappers, manifest discovery, and a
//! future-to-callback bridge. Each helper stands alone; import what you
//! need.

pub mod after;
pub mod chunk;
pub mod clock;
pub mod digest;
pub mod error;
pub mod json;
pub mod jsonpath;
pub mod logging;
pub mod manifest;
pub mod merge;
pub mod nodify;
pub mod once_call;
pub mod predicate;
pub mod throttle;
pub mod token;

pub use after::After;
pub use chunk::chunked;
pub use clock::{coarse_now_millis, CoarseClock};
pub use digest::content_digest;
pub use error::{FixSuggestion, SundryError};
pub use json::{try_parse, try_stringify};
pub use jsonpath::{deep_get, deep_get_or_null};
pub use logging::{console_logger, init_logging, LogOptions};
pub use manifest::{load_manifest, Manifest, PackageMeta};
pub use merge::deep_merge;
pub use nodify::nodify;
pub use once_call::OnceCall;
pub use predicate::{is_absent, is_plain_object, noop};
pub use throttle::Throttle;
pub use token::random_token;
