// Core modules implementing token input, decoding, the verdict gates, and error modeling.
pub mod decode;
pub mod error;
pub mod key;
pub mod token;
pub mod variant;
pub mod verdict;
