pub mod links;
pub mod session;
pub mod worker;

pub use links::{EXTERNAL_LINK_REL, LinkRenderer, RenderSpan, SpanKind};
pub use session::{ChatBackend, ChatSession, SendOutcome};
pub use worker::ChatWorker;
