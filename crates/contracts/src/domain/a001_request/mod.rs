pub mod aggregate;
pub mod draft;
pub mod seed;

pub use aggregate::{
    request_type_label, Request, RequestAttachment, RequestComment, RequestPatch,
    RequestPriority, RequestStats, RequestStatus, DEPARTMENTS, REQUEST_TYPES,
};
pub use draft::RequestDraft;
pub use seed::mock_requests;
