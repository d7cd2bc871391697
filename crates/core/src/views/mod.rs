pub mod axis;
pub mod labels;
pub mod legend;
pub mod scatter;
