pub use util::*;

mod util;

solutions![d1, d3, d6];
