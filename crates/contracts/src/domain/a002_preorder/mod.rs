pub mod aggregate;
pub mod draft;
pub mod seed;

pub use aggregate::{
    PaymentMethod, PaymentStatus, Preorder, PreorderPatch, PreorderStats, PreorderStatus,
    ShippingAddress,
};
pub use draft::PreorderDraft;
pub use seed::mock_preorders;
