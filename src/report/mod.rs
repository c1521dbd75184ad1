pub mod backend;
pub mod markup;
pub mod options;
pub mod renderer;
pub mod template;

pub use backend::*;
pub use markup::{translate, MarkupNode};
pub use options::*;
pub use renderer::*;
pub use template::ReportTemplate;
