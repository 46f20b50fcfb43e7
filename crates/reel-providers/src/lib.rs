//! External generation-provider contracts for ReelForge.
//!
//! The campaign engine never performs media processing itself; audio
//! analysis, style derivation, keyframe synthesis, and clip rendering are
//! delegated to opaque providers behind the async traits defined here.
//! Every call carries a caller-supplied timeout and may be retried with
//! exponential backoff.

pub mod contracts;
pub mod error;
pub mod retry;
pub mod timeout;

pub use contracts::{
    AudioAnalyzer, AudioSource, ClipRenderer, ImageSource, KeyframeRequest, KeyframeSynthesizer,
    RenderRequest, RenderUpdate, StyleDeriver,
};
pub use error::{ProviderError, ProviderResult};
pub use retry::{retry_async, RetryError, RetryPolicy};
pub use timeout::call_with_timeout;
