pub mod analysis_result;
pub mod model_outputs;
pub mod product_overlay;

pub use analysis_result::*;
pub use model_outputs::*;
pub use product_overlay::*;
