mod scanner;
mod word_tokenizer;
mod cfg_tokenizer;

pub use scanner::Scanner;
pub use word_tokenizer::{WordTokenizer, words};
pub use cfg_tokenizer::{CfgTokenizer, CfgToken};
