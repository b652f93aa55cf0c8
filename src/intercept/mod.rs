//! Edge path interception module
//!
//! Pure decision layer: given a viewer request event, either intercept it
//! with a generated terminal response or forward the original request for
//! normal downstream handling. No I/O, no logging, no state.

pub mod event;
pub mod response;
pub mod rule;

pub use event::{ViewerEvent, ViewerRequest};
pub use response::{GeneratedResponse, HeaderValue};
pub use rule::{handle, InterceptRule, Outcome};
