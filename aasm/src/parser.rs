use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "aasm.pest"]
pub struct AsmParser;
