pub mod conf;
pub mod ctx;
pub mod event;
pub mod logging;
pub mod rewrite;

pub use ctx::{RedirectResponse, ViewerRequest};
pub use event::{EventError, ViewerEvent, handle_event_json, handler};
pub use rewrite::{RewriteOutcome, UriRewriter};
