// SERP similarity: compare the top Google results for two keywords.
//
// This is the library root. Each module is one step of the comparison:
// fetch (serpapi), score (similarity), tabulate (comparison), present and
// export (output), with pipeline tying them together.

pub mod comparison;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod serpapi;
pub mod similarity;
