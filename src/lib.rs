pub mod rect;
pub mod matrix;
pub mod table;
pub mod solve;

pub mod exhaustive_method;
pub mod cut_path_method;
