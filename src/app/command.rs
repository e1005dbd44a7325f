#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask the matcher for results. `seq` identifies the submit so a late
    /// response can be recognized as superseded.
    Search { seq: u64, query: String },
}
