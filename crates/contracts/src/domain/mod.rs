pub mod a001_request;
pub mod a002_preorder;
pub mod common;
