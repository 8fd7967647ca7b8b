//! 外部协作者抽象 Trait
//!
//! 控制器只依赖这些 Trait，不直接依赖 HTTP 客户端或具体界面。

mod confirmer;
mod list_resource;
mod log_source;

pub use confirmer::{ConfirmPrompt, Confirmer};
pub use list_resource::ListResource;
pub use log_source::LogSource;
