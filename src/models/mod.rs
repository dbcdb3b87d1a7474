pub mod gemini;
pub mod request;
pub mod response;
pub mod scene;

pub use gemini::*;
pub use request::*;
pub use response::*;
pub use scene::*;
