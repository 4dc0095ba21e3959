pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A list operation was given parallel slices of different lengths
    #[error("Parallel lists differ in length: {conditions} conditions for {names} names")]
    LengthMismatch { conditions: usize, names: usize },
}
