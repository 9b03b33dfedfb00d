pub mod parser;
pub mod report;

pub use parser::GraphInput;
pub use report::{
    format_adjacency, format_chain, format_pairs, AllPairsListing, AllPairsReport, MatrixDump,
    ResultsTable, SingleSourceReport,
};
